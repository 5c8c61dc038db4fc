//! Site configuration
//!
//! An optional `postq.toml` at the site root adjusts where posts live and
//! whether drafts show up by default. The file is read-only input; postq
//! never writes it.

use crate::error::{PostqError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration loaded from `postq.toml`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the markdown posts, relative to the site root
    pub content_dir: String,

    /// Include drafts in listings without requiring --drafts
    pub include_drafts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_dir: ".".to_string(),
            include_drafts: false,
        }
    }
}

impl Config {
    /// Load config from `postq.toml` in the given directory.
    ///
    /// A missing file yields the defaults; a file that fails to parse is
    /// an error, not a silent fallback.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join("postq.toml");

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(e) => return Err(PostqError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| PostqError::Config(format!("Failed to parse postq.toml: {}", e)))
    }
}
