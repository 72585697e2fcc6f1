//! Blog data - the single entry point the rendering layer reads from

use indexmap::IndexMap;

use crate::config::{CmsConfig, SourceMode};
use crate::content::ContentLoader;
use crate::error::SourceError;
use crate::microcms::CmsClient;
use crate::source::{
    BlogPostDetail, BlogPostSummary, CmsSource, ContentSource, FallbackSource, LocalSource,
    MergedSource,
};
use crate::Site;

/// Summaries grouped by category, in order of each category's newest post
pub type CategoryMap = IndexMap<String, Vec<BlogPostSummary>>;

/// Read-only view over the configured content sources
///
/// Nothing is cached: every call goes back to the sources.
pub struct Blog {
    source: Box<dyn ContentSource>,
}

impl Blog {
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Wire the CMS client and the local posts of `site` together
    pub fn from_site(site: &Site, cms: CmsConfig) -> Self {
        let remote = CmsSource::new(CmsClient::new(cms));
        let local = LocalSource::new(ContentLoader::new(site));

        tracing::debug!(
            "Content sources: microcms enabled={}, mode={:?}",
            remote.is_enabled(),
            site.config.source_mode
        );

        match site.config.source_mode {
            SourceMode::Fallback => Self::new(FallbackSource::new(remote, local)),
            SourceMode::Merge => Self::new(MergedSource::new(remote, local)),
        }
    }

    /// Every post, newest first
    pub async fn all_summaries(&self) -> Result<Vec<BlogPostSummary>, SourceError> {
        let mut summaries = self.source.summaries().await?;
        summaries.sort_by(|a, b| b.pub_date().cmp(&a.pub_date()));
        Ok(summaries)
    }

    /// The `n` newest posts
    pub async fn latest_summaries(&self, n: usize) -> Result<Vec<BlogPostSummary>, SourceError> {
        let mut summaries = self.all_summaries().await?;
        summaries.truncate(n);
        Ok(summaries)
    }

    /// Posts grouped by category; uncategorized posts are left out
    pub async fn summaries_by_category(&self) -> Result<CategoryMap, SourceError> {
        let mut groups = CategoryMap::new();
        for summary in self.all_summaries().await? {
            if let Some(category) = summary.category() {
                groups
                    .entry(category.to_string())
                    .or_default()
                    .push(summary);
            }
        }
        Ok(groups)
    }

    /// A single post by slug
    ///
    /// Fails with [`SourceError::NotFound`] when no source has it.
    pub async fn detail(&self, slug: &str) -> Result<BlogPostDetail, SourceError> {
        self.source.detail(slug).await.map_err(|e| {
            if e.is_not_found() {
                SourceError::NotFound(slug.to_string())
            } else {
                e
            }
        })
    }

    /// Slugs of every post, for static path generation
    pub async fn slugs(&self) -> Result<Vec<String>, SourceError> {
        self.source.slugs().await
    }
}
