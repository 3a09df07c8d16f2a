use super::*;

#[test]
fn new_tracker_has_nothing_revealed() {
    let tracker = RevealTracker::new(3);
    assert!((0..3).all(|i| !tracker.is_revealed(i)));
}

#[test]
fn first_intersection_reveals_and_unobserves() {
    let mut tracker = RevealTracker::new(2);
    let effects = tracker.on_intersection(1, true);
    assert_eq!(
        effects,
        vec![
            Effect::ToggleClass { target: Target::Reveal(1), class: "is-revealed", on: true },
            Effect::StopObserving(Target::Reveal(1)),
        ]
    );
    assert!(tracker.is_revealed(1));
    assert!(!tracker.is_revealed(0));
}

#[test]
fn second_intersection_is_noop() {
    let mut tracker = RevealTracker::new(1);
    tracker.on_intersection(0, true);
    assert!(tracker.on_intersection(0, true).is_empty());
}

#[test]
fn non_intersecting_entry_is_noop() {
    let mut tracker = RevealTracker::new(1);
    assert!(tracker.on_intersection(0, false).is_empty());
    assert!(!tracker.is_revealed(0));
}

#[test]
fn unknown_index_is_noop() {
    let mut tracker = RevealTracker::new(1);
    assert!(tracker.on_intersection(5, true).is_empty());
    assert!(!tracker.is_revealed(5));
}

#[test]
fn reveal_all_skips_already_revealed() {
    let mut tracker = RevealTracker::new(3);
    tracker.on_intersection(1, true);
    let effects = tracker.reveal_all();
    assert_eq!(effects.len(), 2);
    assert!((0..3).all(|i| tracker.is_revealed(i)));
    assert!(tracker.reveal_all().is_empty());
}
