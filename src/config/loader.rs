use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{StarscoreConfig, DEFAULT_CONFIG_TEMPLATE};
use crate::errors::ConfigError;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".starscore.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from a TOML string
pub fn parse_and_validate_config(
    contents: &str,
    path: &Path,
) -> Result<StarscoreConfig, ConfigError> {
    let config = toml::from_str::<StarscoreConfig>(contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly named config file. Every failure is an error.
pub fn load_config_from(path: &Path) -> Result<StarscoreConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_and_validate_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try a candidate path found during the ancestor search
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<StarscoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents, config_path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn find_config_from(start: PathBuf) -> StarscoreConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            StarscoreConfig::default()
        })
}

/// Load config by searching upward from the current directory.
pub fn load_config() -> StarscoreConfig {
    match std::env::current_dir() {
        Ok(dir) => find_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            StarscoreConfig::default()
        }
    }
}

/// Write the default config template into `dir`.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        return Err(ConfigError::AlreadyExists(config_path));
    }
    fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE).map_err(|source| ConfigError::Io {
        path: config_path.clone(),
        source,
    })?;
    Ok(config_path)
}
