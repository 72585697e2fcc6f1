//! microcms-blog: blog content from microCMS with a local Markdown fallback
//!
//! The [`blog::Blog`] aggregator hands summaries, details and slugs to the
//! rendering layer, reading from the microCMS API when it is configured and
//! from `source/_posts` otherwise (or both, in merge mode). The [`feed`]
//! module turns the same data into RSS, robots.txt and sitemaps.

pub mod blog;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod helpers;
pub mod microcms;
pub mod server;
pub mod source;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site directory and its configuration
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source directory
    pub source_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Open the site rooted at `base_dir`, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        }
    }

    /// Directory holding local Markdown posts
    pub fn posts_dir(&self) -> PathBuf {
        self.source_dir.join(&self.config.posts_dir)
    }

    /// CMS settings from the config file, overridden by the environment
    pub fn cms_config(&self) -> config::CmsConfig {
        config::CmsConfig::from_env(&self.config.microcms)
    }

    /// Content aggregator for this site
    pub fn blog(&self) -> blog::Blog {
        blog::Blog::from_site(self, self.cms_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_site_without_config() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.posts_dir(), tmp.path().join("source").join("_posts"));
        assert_eq!(site.public_dir, tmp.path().join("public"));
    }

    #[test]
    fn test_site_with_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "source_dir: content\nposts_dir: blog\npublic_dir: dist\n",
        )
        .unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.posts_dir(), tmp.path().join("content").join("blog"));
        assert_eq!(site.public_dir, tmp.path().join("dist"));
    }
}
