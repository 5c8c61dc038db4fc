//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "postq")]
#[command(about = "Query markdown blog posts by recency and tag", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Site root (default: discovered via postq.toml, else the current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, newest first
    List {
        /// Maximum number of posts to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Include drafts and future-dated posts
        #[arg(short, long)]
        drafts: bool,

        /// Show tags and excerpts
        #[arg(long)]
        long: bool,
    },

    /// List the posts carrying a tag, newest first
    Tag {
        /// Tag to filter by (matched case-insensitively after slugification)
        tag: String,

        /// Maximum number of posts to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Include drafts and future-dated posts
        #[arg(short, long)]
        drafts: bool,

        /// Show tags and excerpts
        #[arg(long)]
        long: bool,
    },

    /// List every tag in use
    Tags {
        /// Include tags that only appear on drafts
        #[arg(short, long)]
        drafts: bool,
    },
}
