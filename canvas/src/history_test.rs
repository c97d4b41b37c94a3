use super::*;

#[test]
fn empty_history_has_nothing_to_undo_or_redo() {
    let history = StrokeHistory::<u8>::empty();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(!history.has_mask());
    assert!(history.last_stroke().is_none());
}

#[test]
fn history_reports_stack_state() {
    let past = ["a", "b"];
    let future = ["c"];
    let history = StrokeHistory::new(&past, &future);
    assert!(history.can_undo());
    assert!(history.can_redo());
    assert_eq!(history.past().len(), 2);
    assert_eq!(history.future().len(), 1);
    assert_eq!(history.last_stroke(), Some(&"b"));
}

#[test]
fn history_view_is_copy() {
    let past = [1, 2, 3];
    let history = StrokeHistory::new(&past, &[]);
    let copy = history;
    assert_eq!(history.past(), copy.past());
}
