//! `erc.toml` loading.

use crate::error::ConfigError;
use erc_model::Options;
use std::path::Path;

/// Loads engine [`Options`] from `<project_dir>/erc.toml`.
///
/// A missing file is not treated specially here; callers that want to
/// fall back to [`Options::default`] when no file exists should check
/// for it themselves before calling this.
pub fn load_options(project_dir: &Path) -> Result<Options, ConfigError> {
    let config_path = project_dir.join("erc.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_options_from_str(&content)
}

/// Parses engine [`Options`] from a TOML string.
///
/// Useful for testing without filesystem dependencies. The document is
/// a flat table of `Options`' own fields at the top level (no
/// `[options]` header); a missing or empty document fills in defaults
/// field-by-field, since `Options` derives `#[serde(default)]`.
pub fn load_options_from_str(content: &str) -> Result<Options, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}
