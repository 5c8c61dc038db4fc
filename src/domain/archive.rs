//! Post archive operations: ordering, tag filtering, visibility
//!
//! Everything in this module is a pure function over in-memory post
//! records. No I/O, no clock access; callers that need "today" pass it in.

use crate::domain::post::Post;
use crate::domain::slug::{slugify, slugify_all};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Return the posts ordered by descending recency (newest first).
///
/// The sort is stable: posts with equal recency keep their relative input
/// order. Posts without a usable recency date sort after all dated posts,
/// also preserving input order among themselves.
///
/// # Examples
///
/// ```
/// use postq::domain::archive::sorted_posts;
///
/// let posts: Vec<postq::domain::Post> = vec![];
/// assert!(sorted_posts(&posts).is_empty());
/// ```
pub fn sorted_posts(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| match (a.recency(), b.recency()) {
        (Some(da), Some(db)) => db.cmp(&da), // Reverse order for descending
        (Some(_), None) => std::cmp::Ordering::Less, // Dated before undated
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    sorted
}

/// Return the posts carrying the given tag, newest first.
///
/// The query tag and each post's tags are slugified before comparison, so
/// "Web Dev", "web-dev" and "WEB_DEV" all name the same tag. A query that
/// slugifies to the empty string matches nothing. The result preserves
/// the order produced by [`sorted_posts`]; no match yields an empty
/// vector, never an error.
pub fn posts_by_tag(posts: &[Post], tag: &str) -> Vec<Post> {
    let needle = slugify(tag);
    if needle.is_empty() {
        return Vec::new();
    }

    sorted_posts(posts)
        .into_iter()
        .filter(|post| slugify_all(&post.tags).contains(&needle))
        .collect()
}

/// Collect every tag in use across the given posts, slugified,
/// deduplicated and sorted alphabetically.
pub fn unique_tags(posts: &[Post]) -> Vec<String> {
    let mut tags = BTreeSet::new();
    for post in posts {
        tags.extend(slugify_all(&post.tags));
    }
    tags.into_iter().collect()
}

/// Retain the posts that are publishable as of `today`: not drafts and
/// not dated in the future. Undated posts are kept.
pub fn visible_posts(posts: &[Post], today: NaiveDate) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| !post.draft && post.published.is_none_or(|d| d <= today))
        .cloned()
        .collect()
}
