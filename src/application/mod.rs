//! Application layer - Use cases and orchestration

pub mod list_posts;
pub mod list_tags;
pub mod posts_by_tag;

pub use list_posts::{ListOptions, ListPostsService};
pub use list_tags::ListTagsService;
pub use posts_by_tag::PostsByTagService;
