//! Output formatting utilities

use crate::domain::slug::slugify_all;
use crate::domain::Post;

/// Format a list of posts for display.
///
/// Short form is one row per post: date column, then title. Long form
/// adds the slugified tags and the excerpt under each row.
pub fn format_post_list(posts: &[Post], long: bool) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for post in posts {
        if let Some(date) = post.recency() {
            output.push_str(&format!("{}  {}\n", date.format("%Y-%m-%d"), post.title));
        } else {
            // No date - use spacing for alignment
            output.push_str(&format!("            {}\n", post.title));
        }

        if long {
            let tags = slugify_all(&post.tags);
            if !tags.is_empty() {
                output.push_str(&format!("            tags: {}\n", tags.join(", ")));
            }
            if let Some(excerpt) = &post.excerpt {
                output.push_str(&format!("            {}\n", excerpt));
            }
        }
    }
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn post(title: &str, date: Option<NaiveDate>) -> Post {
        Post {
            title: title.to_string(),
            slug: title.to_lowercase(),
            published: date,
            updated: None,
            draft: false,
            tags: vec!["Rust".to_string(), "Web Dev".to_string()],
            excerpt: Some("First paragraph.".to_string()),
            source_file: PathBuf::from("post.md"),
        }
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_post_list(&[], false);
        assert_eq!(output, "No posts found");
    }

    #[test]
    fn test_format_post_list_short() {
        let posts = vec![post(
            "Hello",
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        )];

        let output = format_post_list(&posts, false);
        assert!(output.contains("2024-01-15  Hello"));
        assert!(!output.contains("tags:"));
    }

    #[test]
    fn test_format_post_list_long() {
        let posts = vec![post(
            "Hello",
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        )];

        let output = format_post_list(&posts, true);
        assert!(output.contains("2024-01-15  Hello"));
        assert!(output.contains("tags: rust, web-dev"));
        assert!(output.contains("First paragraph."));
    }

    #[test]
    fn test_format_undated_post_aligned() {
        let posts = vec![post("Undated", None)];

        let output = format_post_list(&posts, false);
        assert!(output.contains("            Undated"));
    }

    #[test]
    fn test_format_empty_tag_list() {
        let output = format_tag_list(&[]);
        assert_eq!(output, "No tags found");
    }

    #[test]
    fn test_format_tag_list() {
        let tags = vec!["go".to_string(), "rust".to_string()];
        let output = format_tag_list(&tags);
        assert_eq!(output, "go\nrust\n");
    }
}
