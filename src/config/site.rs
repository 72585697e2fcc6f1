//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,
    /// Path segment under which post pages live (`/blog/<slug>/`)
    pub blog_dir: String,

    // Directory
    pub source_dir: String,
    pub posts_dir: String,
    pub public_dir: String,

    // Writing
    pub render_drafts: bool,

    /// How the CMS and the local posts are combined
    pub source_mode: SourceMode,

    #[serde(default)]
    pub microcms: MicroCmsSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: String::new(),
            language: "ja".to_string(),

            url: DEFAULT_SITE_URL.to_string(),
            root: "/".to_string(),
            blog_dir: "blog".to_string(),

            source_dir: "source".to_string(),
            posts_dir: "_posts".to_string(),
            public_dir: "public".to_string(),

            render_drafts: false,
            source_mode: SourceMode::default(),
            microcms: MicroCmsSettings::default(),
        }
    }
}

/// Used when `url` is left empty in the config file
pub const DEFAULT_SITE_URL: &str = "https://example.com";

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Site URL without trailing slash, never empty
    pub fn site_url(&self) -> &str {
        let url = self.url.trim().trim_end_matches('/');
        if url.is_empty() {
            DEFAULT_SITE_URL
        } else {
            url
        }
    }
}

/// Combination policy for remote and local content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Use the CMS when it works, local posts otherwise
    #[default]
    Fallback,
    /// Use both; the CMS wins on slug collisions
    Merge,
}

/// Non-secret microCMS settings that may live in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroCmsSettings {
    pub endpoint: String,
    pub api_version: String,
    pub page_size: u32,
    pub orders: String,
}

impl Default for MicroCmsSettings {
    fn default() -> Self {
        Self {
            endpoint: "blogs".to_string(),
            api_version: "v1".to_string(),
            page_size: 100,
            orders: "-publishedAt".to_string(),
        }
    }
}
