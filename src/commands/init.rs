use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::config::{load_config_from, write_default_config};

/// Write the default config and echo the display settings it carries.
pub fn init_config<W: Write>(out: &mut W, dir: &Path, force: bool) -> Result<()> {
    let path = write_default_config(dir, force)?;
    let config = load_config_from(&path)?;
    writeln!(out, "Created {} configuration file", path.display())?;
    writeln!(out, "  {}", config.display.summary())?;
    Ok(())
}
