//! End-to-end interaction scenarios for the star widget.

use starscore::math::fills_for_score;
use starscore::widget::keys::action_for_key_name;
use starscore::{ReviewScore, Score, StarVisual, StarWidget, WidgetEvent, WidgetPhase};
use std::cell::RefCell;
use std::rc::Rc;

fn score(v: u16) -> Score {
    Some(ReviewScore::new(v).unwrap())
}

fn widget_with_log(initial: Score) -> (StarWidget, Rc<RefCell<Vec<Score>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let widget = StarWidget::new(initial).with_on_commit(move |s| sink.borrow_mut().push(s));
    (widget, log)
}

#[test]
fn test_click_arrow_reset_sequence() {
    let (mut widget, log) = widget_with_log(None);

    // Click halfway commits 200.
    let outcome = widget.handle(WidgetEvent::Click(0.5));
    assert_eq!(outcome.committed, Some(score(200)));
    assert_eq!(widget.committed(), score(200));

    // ArrowRight while focused commits 216 and suppresses scrolling.
    widget.handle(WidgetEvent::Focus);
    let outcome = widget.handle(WidgetEvent::Key(action_for_key_name("ArrowRight")));
    assert!(outcome.suppress_default);
    assert_eq!(widget.committed(), score(216));

    // Reset commits unset.
    widget.handle(WidgetEvent::Reset);
    assert_eq!(widget.committed(), None);
    assert_eq!(widget.aria().now(), None);

    assert_eq!(*log.borrow(), vec![score(200), score(216), None]);
}

#[test]
fn test_hover_then_leave_restores_pre_hover_display() {
    let (mut widget, log) = widget_with_log(score(120));
    let before = widget.visuals();

    widget.handle(WidgetEvent::PointerMove(0.9));
    assert_eq!(widget.phase(), WidgetPhase::Hovering);
    assert_ne!(widget.visuals(), before);
    assert_eq!(widget.aria().now(), Some(120));

    widget.handle(WidgetEvent::PointerLeave);
    assert_eq!(widget.committed(), score(120));
    assert_eq!(widget.visuals(), before);
    assert_eq!(
        widget.visuals(),
        fills_for_score(score(120)).map(StarVisual::from_fill)
    );
    assert!(log.borrow().is_empty());
}

#[test]
fn test_unrecognized_keys_leave_state_alone() {
    let (mut widget, log) = widget_with_log(score(64));
    widget.handle(WidgetEvent::Focus);
    for name in ["Enter", "Tab", "Escape", "PageDown"] {
        let outcome = widget.handle(WidgetEvent::Key(action_for_key_name(name)));
        assert!(!outcome.suppress_default, "{name} must pass through");
    }
    assert_eq!(widget.committed(), score(64));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_home_end_jump_to_bounds() {
    let mut widget = StarWidget::new(score(200));
    widget.handle(WidgetEvent::Focus);
    widget.handle(WidgetEvent::Key(action_for_key_name("End")));
    assert_eq!(widget.committed(), score(400));
    assert!(widget.visuals().iter().all(|v| *v == StarVisual::Full));

    widget.handle(WidgetEvent::Key(action_for_key_name("Home")));
    assert_eq!(widget.committed(), score(0));
    assert!(widget.visuals().iter().all(|v| *v == StarVisual::Empty));
}

#[test]
fn test_zero_and_unset_are_distinct() {
    let zero = StarWidget::new(score(0));
    let unset = StarWidget::new(None);
    assert_eq!(zero.visuals(), unset.visuals());
    assert_eq!(zero.aria().now(), Some(0));
    assert_eq!(unset.aria().now(), None);
    assert_eq!(zero.stored_value(), "0");
    assert_eq!(unset.stored_value(), "");
}
