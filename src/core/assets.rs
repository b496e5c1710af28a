//! Assets baked into the binary at compile time.

use crate::core::error::DocgateError;
use std::fs;
use std::path::{Path, PathBuf};

/// Default `docgate.toml`, written by `docgate init`.
pub const DEFAULT_CONFIG: &str = include_str!("../../templates/docgate.toml");

/// Write the default config into `dir`. Refuses to overwrite unless `force`.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf, DocgateError> {
    let path = dir.join(crate::core::config::CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(DocgateError::PathError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    fs::create_dir_all(dir).map_err(DocgateError::IoError)?;
    fs::write(&path, DEFAULT_CONFIG).map_err(DocgateError::IoError)?;
    Ok(path)
}
