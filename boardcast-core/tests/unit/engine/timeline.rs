use super::*;

#[test]
fn moment_starts_at_zero_and_accumulates() {
    let mut timeline = Timeline::new();
    assert_eq!(timeline.moment(), 0);
    timeline.advance(30).unwrap();
    timeline.advance(0).unwrap();
    timeline.advance(12).unwrap();
    assert_eq!(timeline.moment(), 42);
}

#[test]
fn negative_advance_is_rejected() {
    let mut timeline = Timeline::new();
    timeline.advance(10).unwrap();
    let err = timeline.advance(-1).unwrap_err();
    assert!(matches!(err, BoardcastError::InvalidAdvance(-1)));
    // The failed advance must not have moved the cursor.
    assert_eq!(timeline.moment(), 10);
}

#[test]
fn appended_events_land_at_the_current_moment() {
    let mut timeline = Timeline::new();
    timeline.advance(30).unwrap();
    timeline.append(Box::new(|_| Ok(())));
    timeline.advance(5).unwrap();
    timeline.append(Box::new(|_| Ok(())));

    let (manager, total) = timeline.finish();
    assert_eq!(total, 35);
    assert_eq!(manager.pending_moments(), 2);
}
