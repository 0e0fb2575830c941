//! Interactive star widget.
//!
//! `StarWidget` owns one [`WidgetState`] and turns host input events into
//! state transitions. The host (a TUI, a DOM binding, a test) is the
//! imperative shell: it converts raw events into [`WidgetEvent`]s, calls
//! [`StarWidget::handle`], and acts on the returned [`EventOutcome`]
//! (re-draw the five stars, suppress the key's default behaviour).
//!
//! # Transitions
//!
//! | Event | Effect |
//! |---|---|
//! | `PointerMove(f)` | live = position score; re-render |
//! | `PointerLeave` | live = committed; re-render |
//! | `Click(f)` | commit position score; notify |
//! | `Key(action)` while focused | commit adjusted score; notify; suppress default |
//! | `Reset` with reset control | commit unset; notify |
//!
//! The ARIA current value only follows commits. Hovering never changes it.
//!
//! # Example
//!
//! ```rust
//! use starscore::widget::{StarWidget, WidgetEvent};
//!
//! let mut widget = StarWidget::new(None);
//! widget.handle(WidgetEvent::Click(0.5));
//! assert_eq!(widget.committed().map(|s| s.value()), Some(200));
//! ```

pub mod aria;
pub mod keys;

use crate::math::{adjust_score, fills_for_score, position_to_score, KeyAction, STAR_COUNT};
use crate::render::StarVisual;
use crate::score::{to_stored, Score};
use std::fmt;
use tracing::{debug, trace};

pub use aria::AriaSlider;

/// Callback invoked with every committed score, including unset on reset.
pub type CommitCallback = Box<dyn FnMut(Score)>;

/// Committed and displayed scores of one widget instance.
///
/// Invariant: `live == committed` whenever no hover is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetState {
    committed: Score,
    live: Score,
}

impl WidgetState {
    pub fn new(initial: Score) -> Self {
        Self {
            committed: initial,
            live: initial,
        }
    }

    pub fn committed(&self) -> Score {
        self.committed
    }

    pub fn live(&self) -> Score {
        self.live
    }

    fn preview(&mut self, score: Score) {
        self.live = score;
    }

    fn revert(&mut self) {
        self.live = self.committed;
    }

    fn commit(&mut self, score: Score) {
        self.committed = score;
        self.live = score;
    }
}

/// Interaction phase derived from hover and focus flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    /// live == committed, pointer not over the control.
    Idle,
    /// live follows the pointer, committed unchanged.
    Hovering,
    /// Keyboard-capable, pointer not over the control.
    Focused,
}

/// Host input, already normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    /// Pointer moved inside the row; fraction of the row width.
    PointerMove(f64),
    PointerLeave,
    /// Click inside the row; fraction of the row width.
    Click(f64),
    /// Key press already mapped to an action. `NoOp` means unrecognized.
    Key(KeyAction),
    Reset,
    Focus,
    Blur,
}

/// What the host must do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The five star visuals changed and must be redrawn.
    pub rerender: bool,
    /// The key's default scroll/navigation behaviour must be prevented.
    pub suppress_default: bool,
    /// Set when this event committed a value (`Some(None)` is a reset).
    pub committed: Option<Score>,
}

impl EventOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn redraw() -> Self {
        Self {
            rerender: true,
            ..Self::default()
        }
    }

    fn commit(score: Score) -> Self {
        Self {
            rerender: true,
            suppress_default: false,
            committed: Some(score),
        }
    }
}

/// Stateful five-star rating control.
pub struct StarWidget {
    state: WidgetState,
    hovering: bool,
    focused: bool,
    has_reset: bool,
    aria: AriaSlider,
    on_commit: Option<CommitCallback>,
}

impl fmt::Debug for StarWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarWidget")
            .field("state", &self.state)
            .field("hovering", &self.hovering)
            .field("focused", &self.focused)
            .field("has_reset", &self.has_reset)
            .field("aria", &self.aria)
            .field("on_commit", &self.on_commit.is_some())
            .finish()
    }
}

impl StarWidget {
    /// Create a widget seeded with the stored score, with a reset control.
    pub fn new(initial: Score) -> Self {
        Self {
            state: WidgetState::new(initial),
            hovering: false,
            focused: false,
            has_reset: true,
            aria: AriaSlider::new(initial),
            on_commit: None,
        }
    }

    /// Install the commit callback.
    #[must_use]
    pub fn with_on_commit(mut self, callback: impl FnMut(Score) + 'static) -> Self {
        self.on_commit = Some(Box::new(callback));
        self
    }

    /// Enable or disable the reset control.
    #[must_use]
    pub fn with_reset(mut self, has_reset: bool) -> Self {
        self.has_reset = has_reset;
        self
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// The value the host form submits.
    pub fn committed(&self) -> Score {
        self.state.committed
    }

    /// The committed value in its form/storage representation.
    pub fn stored_value(&self) -> String {
        to_stored(self.state.committed)
    }

    pub fn live(&self) -> Score {
        self.state.live
    }

    pub fn has_reset(&self) -> bool {
        self.has_reset
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn aria(&self) -> &AriaSlider {
        &self.aria
    }

    pub fn phase(&self) -> WidgetPhase {
        if self.hovering {
            WidgetPhase::Hovering
        } else if self.focused {
            WidgetPhase::Focused
        } else {
            WidgetPhase::Idle
        }
    }

    /// Star visuals for the live score.
    pub fn visuals(&self) -> [StarVisual; STAR_COUNT] {
        fills_for_score(self.state.live).map(StarVisual::from_fill)
    }

    /// Apply one event. Events run to completion in delivery order.
    pub fn handle(&mut self, event: WidgetEvent) -> EventOutcome {
        match event {
            WidgetEvent::PointerMove(fraction) => self.pointer_move(fraction),
            WidgetEvent::PointerLeave => self.pointer_leave(),
            WidgetEvent::Click(fraction) => self.click(fraction),
            WidgetEvent::Key(action) => self.key(action),
            WidgetEvent::Reset => self.reset(),
            WidgetEvent::Focus => {
                self.focused = true;
                EventOutcome::ignored()
            }
            WidgetEvent::Blur => {
                self.focused = false;
                EventOutcome::ignored()
            }
        }
    }

    fn pointer_move(&mut self, fraction: f64) -> EventOutcome {
        let score = position_to_score(fraction);
        trace!(fraction, score = score.value(), "hover preview");
        self.hovering = true;
        self.state.preview(Some(score));
        EventOutcome::redraw()
    }

    fn pointer_leave(&mut self) -> EventOutcome {
        self.hovering = false;
        self.state.revert();
        EventOutcome::redraw()
    }

    fn click(&mut self, fraction: f64) -> EventOutcome {
        let score = position_to_score(fraction);
        self.hovering = false;
        self.commit(Some(score));
        EventOutcome::commit(Some(score))
    }

    fn key(&mut self, action: KeyAction) -> EventOutcome {
        if !self.focused || action == KeyAction::NoOp {
            return EventOutcome::ignored();
        }
        let score = adjust_score(self.state.committed, action);
        self.hovering = false;
        self.commit(Some(score));
        EventOutcome {
            suppress_default: true,
            ..EventOutcome::commit(Some(score))
        }
    }

    fn reset(&mut self) -> EventOutcome {
        if !self.has_reset {
            return EventOutcome::ignored();
        }
        self.hovering = false;
        self.commit(None);
        EventOutcome {
            suppress_default: true,
            ..EventOutcome::commit(None)
        }
    }

    fn commit(&mut self, score: Score) {
        debug!(score = %to_stored(score), "committed review score");
        self.state.commit(score);
        self.aria.set_now(score);
        if let Some(callback) = self.on_commit.as_mut() {
            callback(score);
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::score::ReviewScore;
    use proptest::prelude::*;

    fn event_strategy() -> impl Strategy<Value = WidgetEvent> {
        prop_oneof![
            (-0.5f64..1.5).prop_map(WidgetEvent::PointerMove),
            Just(WidgetEvent::PointerLeave),
            (-0.5f64..1.5).prop_map(WidgetEvent::Click),
            prop_oneof![
                Just(KeyAction::Increment),
                Just(KeyAction::Decrement),
                Just(KeyAction::ToMin),
                Just(KeyAction::ToMax),
                Just(KeyAction::NoOp),
            ]
            .prop_map(WidgetEvent::Key),
            Just(WidgetEvent::Reset),
            Just(WidgetEvent::Focus),
            Just(WidgetEvent::Blur),
        ]
    }

    proptest! {
        /// Property: ARIA current value always equals the committed score.
        #[test]
        fn aria_tracks_committed(
            initial in proptest::option::of(any::<ReviewScore>()),
            events in prop::collection::vec(event_strategy(), 0..40)
        ) {
            let mut widget = StarWidget::new(initial);
            for event in events {
                widget.handle(event);
                prop_assert_eq!(widget.aria().now(), widget.committed().map(|s| s.value()));
            }
        }

        /// Property: outside a hover, live and committed agree.
        #[test]
        fn live_equals_committed_when_not_hovering(
            events in prop::collection::vec(event_strategy(), 0..40)
        ) {
            let mut widget = StarWidget::new(None);
            for event in events {
                widget.handle(event);
                if widget.phase() != WidgetPhase::Hovering {
                    prop_assert_eq!(widget.live(), widget.committed());
                }
            }
        }

        /// Property: hover-only interaction never commits.
        #[test]
        fn hover_never_commits(moves in prop::collection::vec(-1.0f64..2.0, 1..20)) {
            let mut widget = StarWidget::new(None);
            for fraction in moves {
                let outcome = widget.handle(WidgetEvent::PointerMove(fraction));
                prop_assert_eq!(outcome.committed, None);
            }
            widget.handle(WidgetEvent::PointerLeave);
            prop_assert_eq!(widget.committed(), None);
            prop_assert_eq!(widget.live(), None);
        }
    }
}
