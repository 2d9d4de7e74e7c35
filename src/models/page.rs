use crate::error::FilterResult;
use crate::services::static_path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Front matter of the page being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    #[serde(default)]
    pub title: Option<String>,
    /// Explicit static directory name; takes precedence over the title.
    #[serde(default, rename = "static")]
    pub static_dir: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl PageContext {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page from {}", path.display()))?;
        let page: PageContext = toml::from_str(&content)
            .with_context(|| format!("Failed to parse page from {}", path.display()))?;
        Ok(page)
    }

    pub fn static_context<'a>(&'a self, files_url: &'a str) -> StaticContext<'a> {
        StaticContext {
            files_url,
            static_dir: self.static_dir.as_deref(),
            title: self.title.as_deref(),
        }
    }
}

/// Everything needed to resolve a static file path for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticContext<'a> {
    pub files_url: &'a str,
    pub static_dir: Option<&'a str>,
    pub title: Option<&'a str>,
}

impl StaticContext<'_> {
    pub fn resolve(&self, path: &str) -> FilterResult<String> {
        static_path::resolve_static_path(self.files_url, self.static_dir, self.title, path)
    }
}
