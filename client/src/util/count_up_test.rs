use super::*;

fn run_to_end(counter: &mut CountUp) -> Vec<Vec<u64>> {
    let mut frames = Vec::new();
    while counter.is_running() {
        counter.tick();
        frames.push(counter.values().to_vec());
    }
    frames
}

// =============================================================
// Timing
// =============================================================

#[test]
fn two_seconds_at_sixty_fps_is_120_frames() {
    assert_eq!(total_frames(), 120);
    assert_eq!(frame_interval_ms(), 17);
}

#[test]
fn ease_out_expo_endpoints() {
    assert_eq!(ease_out_expo(0.0), 0.0);
    assert_eq!(ease_out_expo(1.0), 1.0);
    assert!(ease_out_expo(0.5) > 0.96);
}

#[test]
fn ease_out_expo_is_monotonic() {
    let mut prev = 0.0;
    for i in 0..=100 {
        let y = ease_out_expo(f64::from(i) / 100.0);
        assert!(y >= prev, "dropped at step {i}");
        prev = y;
    }
}

// =============================================================
// CountUp
// =============================================================

#[test]
fn counter_starts_at_zero_and_idle() {
    let counter = CountUp::new(vec![100, 5]);
    assert_eq!(counter.values(), &[0, 0]);
    assert!(!counter.is_running());
    assert!(!counter.has_animated());
}

#[test]
fn tick_before_trigger_does_nothing() {
    let mut counter = CountUp::new(vec![100]);
    assert!(!counter.tick());
    assert_eq!(counter.frame(), 0);
    assert_eq!(counter.value(0), 0);
}

#[test]
fn target_100_is_monotonic_and_ends_exactly() {
    let mut counter = CountUp::new(vec![100]);
    assert!(counter.trigger());
    let frames = run_to_end(&mut counter);

    assert_eq!(frames.len(), 120);
    let mut prev = 0;
    for values in &frames {
        assert!(values[0] >= prev);
        assert!(values[0] <= 100);
        prev = values[0];
    }
    assert_eq!(frames.last().map(|v| v[0]), Some(100));
    assert!(!counter.is_running());
}

#[test]
fn second_intersection_never_restarts() {
    let mut counter = CountUp::new(vec![100]);
    assert!(counter.trigger());
    run_to_end(&mut counter);

    assert!(!counter.trigger());
    assert!(!counter.is_running());
    assert_eq!(counter.frame(), 120);
    assert_eq!(counter.value(0), 100);
}

#[test]
fn trigger_during_run_does_not_reset_progress() {
    let mut counter = CountUp::new(vec![1_000]);
    counter.trigger();
    for _ in 0..10 {
        counter.tick();
    }
    let mid = counter.value(0);
    assert!(!counter.trigger());
    assert_eq!(counter.frame(), 10);
    assert_eq!(counter.value(0), mid);
}

#[test]
fn all_targets_reach_their_values() {
    let mut counter = CountUp::new(vec![12_500, 98, 0, 1]);
    counter.trigger();
    run_to_end(&mut counter);
    assert_eq!(counter.values(), &[12_500, 98, 0, 1]);
}

#[test]
fn value_out_of_range_is_zero() {
    assert_eq!(CountUp::new(vec![3]).value(9), 0);
}

// =============================================================
// format_stat
// =============================================================

#[test]
fn format_stat_groups_thousands() {
    assert_eq!(format_stat(0, ""), "0");
    assert_eq!(format_stat(999, "+"), "999+");
    assert_eq!(format_stat(1_000, ""), "1,000");
    assert_eq!(format_stat(12_500, "+"), "12,500+");
    assert_eq!(format_stat(1_234_567, "%"), "1,234,567%");
}
