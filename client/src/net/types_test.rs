use super::*;

fn session(display_name: Option<&str>) -> Session {
    Session {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        display_name: display_name.map(str::to_owned),
        avatar_url: None,
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_label_prefers_display_name() {
    assert_eq!(session(Some("Ada")).label(), "Ada");
}

#[test]
fn session_label_falls_back_to_email() {
    assert_eq!(session(None).label(), "ada@example.com");
    assert_eq!(session(Some("   ")).label(), "ada@example.com");
}

#[test]
fn session_decodes_without_optional_fields() {
    let s: Session = serde_json::from_str(r#"{"id":"u1","email":"ada@example.com"}"#).unwrap();
    assert_eq!(s, session(None));
}

// =============================================================
// ProfileUpdate
// =============================================================

#[test]
fn profile_update_skips_unset_fields() {
    let update = ProfileUpdate { display_name: Some("Ada".to_owned()), avatar_url: None };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({ "display_name": "Ada" }));
}

#[test]
fn profile_update_default_is_empty() {
    assert!(ProfileUpdate::default().is_empty());
}

// =============================================================
// Feature / enums
// =============================================================

#[test]
fn feature_decodes_snake_case_status_and_defaults() {
    let f: Feature = serde_json::from_str(
        r#"{"id":"f1","project_id":"p1","title":"Login","status":"in_progress"}"#,
    )
    .unwrap();
    assert_eq!(f.status, FeatureStatus::InProgress);
    assert_eq!(f.priority, Priority::Medium);
    assert!(f.description.is_empty());
    assert!(f.tasks.is_empty());
}

#[test]
fn priority_parse_falls_back_to_medium() {
    assert_eq!(Priority::parse("high"), Priority::High);
    assert_eq!(Priority::parse("low"), Priority::Low);
    assert_eq!(Priority::parse("urgent"), Priority::Medium);
}

#[test]
fn priority_as_str_matches_serde_name() {
    for p in Priority::ALL {
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json, serde_json::Value::String(p.as_str().to_owned()));
    }
}

#[test]
fn generation_status_defaults_optional_fields() {
    let s: GenerationStatus = serde_json::from_str(r#"{"progress":12.5}"#).unwrap();
    assert!((s.progress - 12.5).abs() < f64::EPSILON);
    assert!(s.message.is_empty());
    assert!(s.project_id.is_none());
    assert!(!s.done);
    assert!(s.error.is_none());
}
