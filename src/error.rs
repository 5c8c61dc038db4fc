//! Error types for postq

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the postq application
#[derive(Debug, Error)]
pub enum PostqError {
    #[error("Content directory not found: {0}")]
    ContentDirNotFound(PathBuf),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl PostqError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PostqError::ContentDirNotFound(_) => 2,
            PostqError::InvalidTag(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PostqError::ContentDirNotFound(path) => {
                format!(
                    "Content directory not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the site root explicitly: postq --root <path> list\n\
                    • Run postq inside a directory containing postq.toml\n\
                    • Check the content_dir value in postq.toml",
                    path.display()
                )
            }
            PostqError::InvalidTag(tag) => {
                format!(
                    "Invalid tag: '{}'\n\n\
                    Suggestions:\n\
                    • Tags are matched case-insensitively after slugification\n\
                    • Use 'postq tags' to see the tags in use\n\
                    • A tag must contain at least one letter or digit",
                    tag
                )
            }
            PostqError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Check postq.toml. Valid keys: content_dir, include_drafts",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PostqError
pub type Result<T> = std::result::Result<T, PostqError>;
