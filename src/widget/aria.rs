//! Accessibility attributes for the interactive widget.

use crate::score::{Score, MAX_SCORE, MIN_SCORE};

/// Slider-equivalent accessibility description of the widget container.
///
/// `now` mirrors the committed score only; it is absent when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AriaSlider {
    now: Option<u16>,
}

impl AriaSlider {
    pub const ROLE: &'static str = "slider";
    pub const LABEL: &'static str = "Review score";
    pub const TABINDEX: i8 = 0;

    pub fn new(committed: Score) -> Self {
        Self {
            now: committed.map(|s| s.value()),
        }
    }

    pub fn min(&self) -> u16 {
        MIN_SCORE
    }

    pub fn max(&self) -> u16 {
        MAX_SCORE
    }

    pub fn now(&self) -> Option<u16> {
        self.now
    }

    pub(crate) fn set_now(&mut self, committed: Score) {
        self.now = committed.map(|s| s.value());
    }

    /// Attribute name/value pairs in render order. `aria-valuenow` is
    /// omitted when no score is committed.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("role", Self::ROLE.to_string()),
            ("tabindex", Self::TABINDEX.to_string()),
            ("aria-valuemin", self.min().to_string()),
            ("aria-valuemax", self.max().to_string()),
        ];
        if let Some(now) = self.now {
            attrs.push(("aria-valuenow", now.to_string()));
        }
        attrs.push(("aria-label", Self::LABEL.to_string()));
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ReviewScore;

    #[test]
    fn test_attributes_with_score() {
        let aria = AriaSlider::new(Some(ReviewScore::new(200).unwrap()));
        let attrs = aria.attributes();
        assert_eq!(attrs[0], ("role", "slider".to_string()));
        assert!(attrs.contains(&("aria-valuenow", "200".to_string())));
        assert!(attrs.contains(&("aria-valuemax", "400".to_string())));
        assert!(attrs.contains(&("tabindex", "0".to_string())));
    }

    #[test]
    fn test_unset_omits_valuenow() {
        let aria = AriaSlider::new(None);
        assert_eq!(aria.now(), None);
        assert!(aria.attributes().iter().all(|(name, _)| *name != "aria-valuenow"));
    }
}
