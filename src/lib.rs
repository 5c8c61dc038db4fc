//! postq - Blog post query tool
//!
//! A small library and CLI for querying a directory of markdown blog
//! posts: list them newest first, filter them by tag (matched after
//! slugification) and list the tags in use.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PostqError;
