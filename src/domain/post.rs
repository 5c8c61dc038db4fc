//! Post record

use chrono::NaiveDate;
use std::path::PathBuf;

/// A single blog post as seen by the query pipeline.
///
/// Records are built by the content repository (or directly by a library
/// caller) and are only read from here on; the sort and filter operations
/// return new sequences instead of mutating their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Post title as authored
    pub title: String,

    /// Canonical URL slug
    pub slug: String,

    /// Publication date; None when the source carries no usable date
    pub published: Option<NaiveDate>,

    /// Last revision date; overrides `published` as the recency key
    pub updated: Option<NaiveDate>,

    /// Drafts are hidden from listings unless explicitly requested
    pub draft: bool,

    /// Tags as authored; compared only after slugification
    pub tags: Vec<String>,

    /// First paragraph of the body, for long listings
    pub excerpt: Option<String>,

    /// Source file this post was read from
    pub source_file: PathBuf,
}

impl Post {
    /// The date this post is ordered by: `updated` when present,
    /// otherwise `published`.
    pub fn recency(&self) -> Option<NaiveDate> {
        self.updated.or(self.published)
    }
}
