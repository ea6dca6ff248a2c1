use super::*;

#[test]
fn project_tab_defaults_to_overview() {
    assert_eq!(ProjectTab::from_query(None), ProjectTab::Overview);
    assert_eq!(ProjectTab::from_query(Some("")), ProjectTab::Overview);
    assert_eq!(ProjectTab::from_query(Some("billing")), ProjectTab::Overview);
}

#[test]
fn project_tab_parses_features() {
    assert_eq!(ProjectTab::from_query(Some("features")), ProjectTab::Features);
}

#[test]
fn feature_tab_parses_known_values() {
    assert_eq!(FeatureTab::from_query(Some("tasks")), FeatureTab::Tasks);
    assert_eq!(FeatureTab::from_query(Some("discussion")), FeatureTab::Discussion);
    assert_eq!(FeatureTab::from_query(Some("overview")), FeatureTab::Overview);
    assert_eq!(FeatureTab::from_query(None), FeatureTab::Overview);
}

#[test]
fn default_tab_string_is_overview() {
    assert_eq!(ProjectTab::default().as_str(), "overview");
    assert_eq!(FeatureTab::default().as_str(), "overview");
}

#[test]
fn tab_href_omits_default_tab() {
    assert_eq!(tab_href("/projects/p1", "overview"), "/projects/p1");
    assert_eq!(tab_href("/projects/p1", "features"), "/projects/p1?tab=features");
}

#[test]
fn new_feature_href_preselects_project() {
    assert_eq!(new_feature_href(Some("p1")), "/features/create?projectId=p1");
    assert_eq!(new_feature_href(Some("")), "/features/create");
    assert_eq!(new_feature_href(None), "/features/create");
}

#[test]
fn detail_hrefs() {
    assert_eq!(project_href("p1"), "/projects/p1");
    assert_eq!(feature_href("f1"), "/features/f1");
}

#[test]
fn non_empty_filters_blank_segments() {
    assert_eq!(non_empty(Some("p1".to_owned())).as_deref(), Some("p1"));
    assert_eq!(non_empty(Some("  ".to_owned())), None);
    assert_eq!(non_empty(None), None);
}
