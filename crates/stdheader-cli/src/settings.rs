//! Settings loader for the stdheader binary.
//!
//! Resolution order for the settings file:
//! - explicit `--config <path>`
//! - `$STDHEADER_CONFIG`
//! - `$HOME/.config/stdheader/settings.yaml`
//!
//! A missing file yields the built-in defaults; a file that exists but does
//! not parse is an error surfaced at the binary edge.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use stdheader_core::HeaderConfig;

const CONFIG_ENV_VAR: &str = "STDHEADER_CONFIG";
const DEFAULT_SETTINGS_RELATIVE_PATH: &str = ".config/stdheader/settings.yaml";

/// Where the settings file would live when no explicit path is given.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_SETTINGS_RELATIVE_PATH))
}

/// Load header configuration, merging the settings file over defaults.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<HeaderConfig> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => default_settings_path(),
    };
    let Some(path) = path else {
        return Ok(HeaderConfig::default());
    };
    if !path.is_file() {
        // Only an explicitly named file is required to exist.
        if let Some(p) = explicit {
            anyhow::bail!("settings file not found: {}", p.display());
        }
        debug!("no settings file at {}, using defaults", path.display());
        return Ok(HeaderConfig::default());
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading settings file {}", path.display()))?;
    serde_yaml::from_str(&raw)
        .with_context(|| format!("parsing settings file {}", path.display()))
}
