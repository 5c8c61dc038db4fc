//! Posts-by-tag use case
//!
//! The core query of the crate: every visible post carrying a tag,
//! newest first.

use crate::application::list_posts::{collect_posts, ListOptions};
use crate::domain::archive::posts_by_tag;
use crate::domain::slug::slugify;
use crate::domain::Post;
use crate::error::{PostqError, Result};
use crate::infrastructure::ContentRepository;

/// Service for querying posts by tag
pub struct PostsByTagService {
    repository: ContentRepository,
}

impl PostsByTagService {
    /// Create a new posts-by-tag service.
    pub fn new(repository: ContentRepository) -> Self {
        Self { repository }
    }

    /// Execute the query.
    ///
    /// Returns the matching posts in sorted order; an unknown tag yields
    /// an empty vector. A tag that slugifies to the empty string is
    /// rejected up front so the user gets a diagnostic instead of a
    /// silently empty listing.
    pub fn execute(&self, tag: &str, options: &ListOptions) -> Result<Vec<Post>> {
        if slugify(tag).is_empty() {
            return Err(PostqError::InvalidTag(tag.to_string()));
        }

        let posts = collect_posts(&self.repository, options)?;

        let mut matched = posts_by_tag(&posts, tag);
        if let Some(n) = options.limit {
            matched.truncate(n);
        }

        Ok(matched)
    }
}
