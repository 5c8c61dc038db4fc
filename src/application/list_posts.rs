//! List posts use case

use crate::domain::archive::{sorted_posts, visible_posts};
use crate::domain::Post;
use crate::error::Result;
use crate::infrastructure::ContentRepository;
use chrono::Local;

/// Options shared by the listing use cases
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Maximum number of posts to return
    pub limit: Option<usize>,

    /// Include drafts and future-dated posts
    pub include_drafts: bool,
}

/// Scan the repository and apply the visibility policy.
///
/// Drafts and future-dated posts are dropped unless requested via the
/// options or the site config. The clock is consulted only here; the
/// domain functions take dates as inputs.
pub(crate) fn collect_posts(
    repository: &ContentRepository,
    options: &ListOptions,
) -> Result<Vec<Post>> {
    let posts = repository.scan_posts()?;

    if options.include_drafts || repository.config().include_drafts {
        return Ok(posts);
    }

    let today = Local::now().date_naive();
    Ok(visible_posts(&posts, today))
}

/// Service for listing posts newest first
pub struct ListPostsService {
    repository: ContentRepository,
}

impl ListPostsService {
    /// Create a new list posts service.
    pub fn new(repository: ContentRepository) -> Self {
        Self { repository }
    }

    /// Execute the listing: scan, filter visibility, sort, limit.
    pub fn execute(&self, options: &ListOptions) -> Result<Vec<Post>> {
        let posts = collect_posts(&self.repository, options)?;

        let mut sorted = sorted_posts(&posts);
        if let Some(n) = options.limit {
            sorted.truncate(n);
        }

        Ok(sorted)
    }
}
