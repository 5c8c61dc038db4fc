//! Content repository
//!
//! Scans a site's content directory for markdown posts. Files that do not
//! parse as posts (no front matter, broken TOML) are skipped one by one;
//! a scan never fails because of a single bad file.

use crate::domain::excerpt::first_paragraph;
use crate::domain::slug::slugify;
use crate::domain::Post;
use crate::error::{PostqError, Result};
use crate::infrastructure::frontmatter;
use crate::infrastructure::Config;
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

/// Regex for filenames carrying a leading date: 2024-01-15-my-post
fn dated_stem_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:[-_](.+))?$").unwrap())
}

/// A site rooted at a directory, with its loaded configuration
#[derive(Debug, Clone)]
pub struct ContentRepository {
    root: PathBuf,
    config: Config,
}

impl ContentRepository {
    /// Open a repository at the given root.
    ///
    /// Fails if the root or the configured content directory does not
    /// exist, or if `postq.toml` is present but malformed.
    pub fn new(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            return Err(PostqError::ContentDirNotFound(root));
        }

        let config = Config::load_from_dir(&root)?;
        let repository = ContentRepository { root, config };

        let content_dir = repository.content_dir();
        if !content_dir.is_dir() {
            return Err(PostqError::ContentDirNotFound(content_dir));
        }

        Ok(repository)
    }

    /// Open at an explicit root when one is given, otherwise discover
    /// from the current directory.
    pub fn open(root: Option<PathBuf>) -> Result<Self> {
        match root {
            Some(path) => Self::new(path),
            None => Self::discover(),
        }
    }

    /// Discover the site root by walking up from the current directory.
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` to the nearest directory containing
    /// `postq.toml`. Without one, `start` itself becomes the root with
    /// default configuration.
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if current.join("postq.toml").is_file() {
                return Self::new(current);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Self::new(start.to_path_buf()),
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The directory scanned for posts
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.config.content_dir)
    }

    /// Scan the content directory recursively and return every parseable
    /// post. Dot-directories are skipped; so are files that fail to read
    /// or to parse. Order is unspecified; callers sort.
    pub fn scan_posts(&self) -> Result<Vec<Post>> {
        let content_dir = self.content_dir();
        let mut posts = Vec::new();

        let walker = WalkDir::new(&content_dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            let Ok(rel) = path.strip_prefix(&content_dir) else {
                continue;
            };
            let Ok(content) = fs::read_to_string(path) else {
                continue;
            };
            if let Some(post) = post_from_content(&content, rel) {
                posts.push(post);
            }
        }

        Ok(posts)
    }
}

/// Build a post record from file content and its path relative to the
/// content directory. Returns None when the file has no parseable front
/// matter.
fn post_from_content(content: &str, rel: &Path) -> Option<Post> {
    let document = frontmatter::parse_document(content)?;
    let fm = document.front_matter;

    let stem = rel.file_stem()?.to_str()?;
    let (stem_date, stem_slug) = split_dated_stem(stem);

    // Front matter wins; the filename fills the gaps
    let published = fm.published_date().or(stem_date);
    let slug = fm
        .slug
        .as_deref()
        .map(slugify)
        .filter(|s| !s.is_empty())
        .or(stem_slug)
        .unwrap_or_else(|| slugify(&fm.title));

    let updated = fm.updated_date();

    Some(Post {
        title: fm.title,
        slug,
        published,
        updated,
        draft: fm.draft,
        tags: fm.tags,
        excerpt: first_paragraph(&document.body),
        source_file: rel.to_path_buf(),
    })
}

/// Split a filename stem into an optional leading date and an optional
/// slug from the remainder. `2024-01-15-my-post` yields both; a stem
/// without a date prefix yields only a slug.
fn split_dated_stem(stem: &str) -> (Option<NaiveDate>, Option<String>) {
    let Some(captures) = dated_stem_regex().captures(stem) else {
        let slug = slugify(stem);
        return (None, (!slug.is_empty()).then_some(slug));
    };

    let date = NaiveDate::parse_from_str(&captures[1], "%Y-%m-%d").ok();
    let slug = captures
        .get(2)
        .map(|m| slugify(m.as_str()))
        .filter(|s| !s.is_empty());

    (date, slug)
}
