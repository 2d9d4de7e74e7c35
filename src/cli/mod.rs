pub mod excerpt;
pub mod gravatar;
pub mod render;
pub mod static_file;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "post-filters")]
#[command(version)]
#[command(about = "Excerpts, Gravatar URLs and static file paths for blog posts", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "site.toml", env = "POST_FILTERS_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the text of the first top-level paragraph
    Excerpt {
        /// HTML (or Markdown with --markdown) file; stdin when omitted
        file: Option<PathBuf>,
        #[arg(long)]
        markdown: bool,
    },
    /// Print the Gravatar URL for an email address
    Gravatar { email: String },
    /// Print the URL of a file in a post's static directory
    Static {
        path: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "static")]
        static_dir: Option<String>,
        /// Overrides site.files_url from the config file
        #[arg(long)]
        files_url: Option<String>,
    },
    /// Render a template with the post extensions registered
    Render {
        template: PathBuf,
        /// TOML front matter for the page (title, static)
        #[arg(long)]
        page: Option<PathBuf>,
        /// Post body, exposed to the template as `page.content`
        #[arg(long)]
        content: Option<PathBuf>,
        #[arg(long)]
        markdown: bool,
    },
}

pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
