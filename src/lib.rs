// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod math;
pub mod observability;
pub mod render;
pub mod score;
pub mod tui;
pub mod widget;

// Re-export commonly used types
pub use crate::config::{DisplayConfig, StarscoreConfig};
pub use crate::errors::{ConfigError, ScoreError};
pub use crate::math::{
    adjust_score, clamp, fills_for_score, position_to_score, rating_label_value, KeyAction,
    STAR_COUNT, STEP,
};
pub use crate::render::{project, project_items, RatingProjection, StarRenderer, StarVisual};
pub use crate::score::{ReviewScore, Score};
pub use crate::widget::{EventOutcome, StarWidget, WidgetEvent, WidgetPhase, WidgetState};
