use super::*;

fn status(progress: f64) -> GenerationStatus {
    GenerationStatus { progress, message: "Working".to_owned(), project_id: None, done: false, error: None }
}

// =============================================================
// Indicator rendering inputs
// =============================================================

#[test]
fn inactive_state_renders_nothing() {
    let state = GenerationState { progress: 42.0, ..GenerationState::default() };
    assert_eq!(state.progress_width(), None);
    assert!(!state.can_view_project());
}

#[test]
fn active_state_width_matches_progress() {
    let mut state = GenerationState::default();
    state.start("Generating");
    state.set_progress(42.0, "Drafting features");
    assert_eq!(state.progress_width().as_deref(), Some("42%"));
    assert_eq!(state.progress_message, "Drafting features");
}

#[test]
fn progress_is_clamped() {
    let mut state = GenerationState::default();
    state.start("Generating");
    state.set_progress(140.0, "");
    assert_eq!(state.progress_width().as_deref(), Some("100%"));
    state.set_progress(-3.0, "");
    assert_eq!(state.progress_width().as_deref(), Some("0%"));
    state.set_progress(f64::NAN, "");
    assert_eq!(state.progress_width().as_deref(), Some("0%"));
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn start_discards_previous_generation() {
    let mut state = GenerationState::default();
    state.start("first");
    state.apply_status(&GenerationStatus { project_id: Some("p1".to_owned()), ..status(80.0) });
    state.start("second");
    assert!(state.active);
    assert_eq!(state.progress, 0.0);
    assert!(state.project_id.is_none());
    assert_eq!(state.progress_message, "second");
}

#[test]
fn project_id_enables_view_button() {
    let mut state = GenerationState::default();
    state.start("Generating");
    state.apply_status(&GenerationStatus { project_id: Some("p7".to_owned()), ..status(30.0) });
    assert!(state.can_view_project());
    assert_eq!(state.project_href().as_deref(), Some("/projects/p7"));
}

#[test]
fn later_status_without_project_id_keeps_known_id() {
    let mut state = GenerationState::default();
    state.start("Generating");
    state.apply_status(&GenerationStatus { project_id: Some("p7".to_owned()), ..status(30.0) });
    state.apply_status(&status(60.0));
    assert_eq!(state.project_id.as_deref(), Some("p7"));
}

#[test]
fn done_status_completes_at_hundred() {
    let mut state = GenerationState::default();
    state.start("Generating");
    state.apply_status(&GenerationStatus { done: true, ..status(97.0) });
    assert!(state.finished);
    assert_eq!(state.progress_width().as_deref(), Some("100%"));
}

#[test]
fn error_status_marks_failure() {
    let mut state = GenerationState::default();
    state.start("Generating");
    state.apply_status(&GenerationStatus { error: Some("model timeout".to_owned()), ..status(10.0) });
    assert!(state.finished);
    assert_eq!(state.error.as_deref(), Some("model timeout"));
}

#[test]
fn status_after_reset_is_ignored() {
    let mut state = GenerationState::default();
    state.start("Generating");
    state.reset();
    state.apply_status(&status(50.0));
    assert!(!state.active);
    assert_eq!(state.progress_width(), None);
}

#[test]
fn each_start_gets_a_new_run() {
    let mut state = GenerationState::default();
    state.start("first");
    let first = state.run;
    state.reset();
    state.start("second");
    assert!(!state.is_current(first));
    assert!(state.is_current(state.run));
}

#[test]
fn status_from_replaced_run_does_not_touch_new_run() {
    let mut state = GenerationState::default();
    state.start("first");
    let first = state.run;
    state.reset();
    state.start("second");

    let stale = GenerationStatus {
        progress: 100.0,
        message: "old done".to_owned(),
        project_id: Some("old".to_owned()),
        done: true,
        error: None,
    };
    assert!(!state.apply_status_for(first, &stale));
    assert!(state.active);
    assert!(!state.finished);
    assert_eq!(state.project_id, None);
    assert_eq!(state.progress_message, "second");
}

#[test]
fn status_for_current_run_is_applied() {
    let mut state = GenerationState::default();
    state.start("Generating");
    let run = state.run;
    assert!(state.apply_status_for(run, &status(30.0)));
    assert_eq!(state.progress_width().as_deref(), Some("30%"));
}

#[test]
fn failure_from_replaced_run_is_ignored() {
    let mut state = GenerationState::default();
    state.start("first");
    let first = state.run;
    state.start("second");
    assert!(!state.fail_for(first, "Lost contact with the generator."));
    assert_eq!(state.error, None);
    assert!(!state.finished);

    let current = state.run;
    assert!(state.fail_for(current, "Lost contact with the generator."));
    assert_eq!(state.error.as_deref(), Some("Lost contact with the generator."));
}
