//! Infrastructure layer - Filesystem scanning and configuration

pub mod config;
pub mod frontmatter;
pub mod repository;

pub use config::Config;
pub use frontmatter::{Document, FrontMatter};
pub use repository::ContentRepository;
