//! TOML front matter parsing
//!
//! Posts carry their metadata in a TOML block fenced by `+++` lines at
//! the top of the file:
//!
//! ```text
//! +++
//! title = "My Post"
//! date = "2024-01-15"
//! tags = ["rust", "Web Dev"]
//! +++
//!
//! Body starts here.
//! ```
//!
//! A file without a parseable block is not a post record. Dates are kept
//! as strings and parsed leniently afterwards, so a malformed date
//! degrades to a missing date instead of rejecting the whole record.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Post metadata as authored in the front matter block
#[derive(Debug, Clone, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: Option<String>,
    pub updated: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub slug: Option<String>,
}

impl FrontMatter {
    /// Publication date, if the `date` field holds a parseable value
    pub fn published_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }

    /// Revision date, if the `updated` field holds a parseable value
    pub fn updated_date(&self) -> Option<NaiveDate> {
        self.updated.as_deref().and_then(parse_date)
    }
}

/// A post file split into metadata and markdown body
#[derive(Debug, Clone)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub body: String,
}

/// Parse a post file into front matter and body.
///
/// Returns None when the file does not start with a `+++` fence, the
/// closing fence is missing, or the TOML inside does not deserialize
/// (including a missing `title`).
pub fn parse_document(content: &str) -> Option<Document> {
    let (front, body) = split_front_matter(content)?;
    let front_matter: FrontMatter = toml::from_str(front.trim()).ok()?;

    Some(Document {
        front_matter,
        body: body.to_string(),
    })
}

/// Split `content` into the text between the `+++` fences and the body.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("+++")?;
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    let rest = rest.strip_prefix('\n')?;

    let end = rest.find("\n+++")?;
    let front = &rest[..end];

    // The closing fence must sit on its own line
    let after = &rest[end + 4..];
    let after = after.strip_prefix('\r').unwrap_or(after);
    if !after.is_empty() && !after.starts_with('\n') {
        return None;
    }

    let body = after.strip_prefix('\n').unwrap_or("");
    Some((front, body))
}

/// Parse a date string: plain `YYYY-MM-DD`, or an RFC 3339 datetime
/// reduced to its date. Returns None for anything else.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}
