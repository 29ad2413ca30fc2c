use super::*;

#[test]
fn strategy_observes_only_when_supported_and_needed() {
    assert_eq!(Strategy::detect(true, 3), Strategy::Observe);
    assert_eq!(Strategy::detect(false, 3), Strategy::Immediate);
    assert_eq!(Strategy::detect(true, 0), Strategy::Immediate);
}

#[test]
fn registered_elements_start_hidden() {
    let mut tracker = RevealTracker::new();
    let a = tracker.register();
    let b = tracker.register();
    assert_eq!((a, b), (0, 1));
    assert!(!tracker.is_visible(a));
    assert_eq!(tracker.observing(), 2);
}

#[test]
fn non_intersecting_entry_keeps_element_hidden() {
    let mut tracker = RevealTracker::new();
    let a = tracker.register();
    assert!(!tracker.on_entry(a, false));
    assert!(!tracker.is_visible(a));
}

#[test]
fn element_reveals_exactly_once() {
    let mut tracker = RevealTracker::new();
    let a = tracker.register();
    assert!(tracker.on_entry(a, true));
    assert!(!tracker.on_entry(a, true));
    assert_eq!(tracker.observing(), 0);
}

#[test]
fn scrolling_away_never_hides() {
    let mut tracker = RevealTracker::new();
    let a = tracker.register();
    tracker.on_entry(a, true);
    assert!(!tracker.on_entry(a, false));
    assert!(tracker.is_visible(a));
}

#[test]
fn unknown_index_is_ignored() {
    let mut tracker = RevealTracker::new();
    tracker.register();
    assert!(!tracker.on_entry(7, true));
    assert_eq!(tracker.observing(), 1);
}

#[test]
fn fallback_reveals_only_hidden_elements() {
    let mut tracker = RevealTracker::new();
    let a = tracker.register();
    let b = tracker.register();
    let c = tracker.register();
    tracker.on_entry(b, true);
    assert_eq!(tracker.reveal_all(), vec![a, c]);
    assert!(tracker.reveal_all().is_empty());
    assert!((0..tracker.len()).all(|i| tracker.is_visible(i)));
    assert_eq!(tracker.observing(), 0);
}

#[test]
fn slots_follow_registration_order() {
    let mut tracker = RevealTracker::new();
    let slots: Vec<_> = (0..4).map(|_| tracker.register()).collect();
    assert_eq!(slots, vec![0, 1, 2, 3]);
    assert!(tracker.on_entry(2, true));
    assert!(tracker.is_visible(2));
    assert!(!tracker.is_visible(1) && !tracker.is_visible(3));
}
