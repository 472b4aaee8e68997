use super::*;

// --- RevealMode ---

#[test]
fn detect_observes_when_supported() {
    assert_eq!(RevealMode::detect(true, 0.18), RevealMode::Observe { threshold: 0.18 });
}

#[test]
fn detect_falls_back_to_immediate() {
    assert_eq!(RevealMode::detect(false, 0.18), RevealMode::Immediate);
}

// --- entry_action ---

#[test]
fn intersecting_element_is_animated_and_released() {
    assert_eq!(entry_action(true, false), EntryAction { mark_animated: true, unobserve: true });
}

#[test]
fn non_intersecting_entry_is_ignored() {
    assert_eq!(entry_action(false, false), EntryAction { mark_animated: false, unobserve: false });
}

#[test]
fn already_animated_element_is_only_released() {
    assert_eq!(entry_action(true, true), EntryAction { mark_animated: false, unobserve: true });
}

#[test]
fn leaving_viewport_never_removes_animation() {
    let action = entry_action(false, true);
    assert!(!action.mark_animated);
    assert!(!action.unobserve);
}
