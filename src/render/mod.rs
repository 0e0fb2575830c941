//! Read-only projection of a score into star visuals, and the rendering
//! backends that turn visuals into UI nodes.
//!
//! The projection is backend-independent: [`project`] yields five
//! [`StarVisual`]s and an accessible label. A [`StarRenderer`] maps those
//! onto one concrete UI framework:
//!
//! - [`html::HtmlRenderer`]: markup strings for a web page
//! - [`terminal::TerminalRenderer`]: ratatui spans
//! - [`terminal::AnsiRenderer`]: coloured plain text for stdout

pub mod html;
pub mod terminal;

use crate::math::{fills_for_score, partial_percent, rating_label_value, STAR_COUNT};
use crate::score::{ReviewScore, Score};
use serde::Serialize;

/// How one star is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", content = "percent", rename_all = "lowercase")]
pub enum StarVisual {
    Full,
    Empty,
    /// Lit percentage, rounded to two decimals, strictly between 0 and 100.
    Partial(f64),
}

impl StarVisual {
    pub fn from_fill(fill: f64) -> Self {
        if fill >= 1.0 {
            Self::Full
        } else if fill <= 0.0 {
            Self::Empty
        } else {
            Self::Partial(partial_percent(fill))
        }
    }

    /// CSS modifier class for this state.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Full => "star--full",
            Self::Empty => "star--empty",
            Self::Partial(_) => "star--partial",
        }
    }
}

/// Everything needed to draw one read-only rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingProjection {
    pub score: ReviewScore,
    pub stars: [StarVisual; STAR_COUNT],
    /// Rating out of five, one decimal.
    pub rating: f64,
    /// Accessible label, e.g. "Rating: 2.5 out of 5 stars".
    pub label: String,
}

/// Accessible label for a rating value.
pub fn rating_label(rating: f64) -> String {
    format!("Rating: {} out of 5 stars", rating)
}

/// Project one defined score.
pub fn project(score: ReviewScore) -> RatingProjection {
    let rating = rating_label_value(score);
    RatingProjection {
        score,
        stars: fills_for_score(Some(score)).map(StarVisual::from_fill),
        rating,
        label: rating_label(rating),
    }
}

/// Project a list of stored values, skipping unset ones.
///
/// Each projection keeps the index of the value it came from.
pub fn project_items(items: &[Score]) -> Vec<(usize, RatingProjection)> {
    items
        .iter()
        .enumerate()
        .filter_map(|(delta, score)| score.map(|s| (delta, project(s))))
        .collect()
}

/// A rendering backend for star rows.
pub trait StarRenderer {
    /// The backend's UI node type.
    type Node;

    /// Render one star.
    fn star(&self, visual: &StarVisual) -> Self::Node;

    /// Render a complete read-only rating row.
    fn row(&self, projection: &RatingProjection) -> Self::Node;
}
