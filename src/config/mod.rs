//! Configuration for rendering.
//!
//! Asset paths and row width are read once (from `.starscore.toml` or
//! defaults) and then passed explicitly into the render functions. Nothing
//! in the library looks configuration up on its own.

mod core;
mod display;
mod loader;

pub use self::core::{StarscoreConfig, DEFAULT_CONFIG_TEMPLATE};
pub use display::{DisplayConfig, MAX_WIDTH_PX, MIN_WIDTH_PX};
pub use loader::{
    directory_ancestors, find_config_from, load_config, load_config_from,
    parse_and_validate_config, write_default_config, CONFIG_FILE_NAME,
};
