//! List tags use case

use crate::application::list_posts::{collect_posts, ListOptions};
use crate::domain::archive::unique_tags;
use crate::error::Result;
use crate::infrastructure::ContentRepository;

/// Service for listing every tag in use.
pub struct ListTagsService {
    repository: ContentRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: ContentRepository) -> Self {
        Self { repository }
    }

    /// Execute tag listing: slugified, deduplicated, alphabetical.
    pub fn execute(&self, options: &ListOptions) -> Result<Vec<String>> {
        let posts = collect_posts(&self.repository, options)?;
        Ok(unique_tags(&posts))
    }
}
