use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    pub url: String,
    /// Base URL that per-post static directories live under.
    pub files_url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Used by the `excerpt` filter when a post has no top-level paragraph.
    #[serde(default)]
    pub excerpt_fallback: Option<String>,
    #[serde(default)]
    pub markdown: bool,
}

fn default_title() -> String {
    "Untitled".to_string()
}

impl Config {
    pub fn new(url: impl Into<String>, files_url: impl Into<String>) -> Self {
        Self {
            site: SiteConfig {
                title: default_title(),
                url: url.into(),
                files_url: files_url.into(),
            },
            content: ContentConfig::default(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Are you in a site directory?",
                path.display(),
                e
            )
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Err(e) = url::Url::parse(&self.site.url) {
            anyhow::bail!("site.url '{}' is not a valid URL: {}", self.site.url, e);
        }
        if self.site.files_url.is_empty() {
            anyhow::bail!("site.files_url must not be empty");
        }
        if !self.site.files_url.starts_with('/') && url::Url::parse(&self.site.files_url).is_err()
        {
            anyhow::bail!(
                "site.files_url '{}' must be an absolute URL or start with '/'",
                self.site.files_url
            );
        }
        Ok(())
    }
}
