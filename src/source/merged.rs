//! Serve CMS and local posts side by side

use async_trait::async_trait;
use std::collections::HashSet;

use super::{BlogPostDetail, BlogPostSummary, ContentSource, FallbackSource};
use crate::error::SourceError;

/// Combines both sources; on a slug collision the primary's entry wins
///
/// A failing primary contributes nothing; secondary errors propagate.
pub struct MergedSource<P, S> {
    inner: FallbackSource<P, S>,
}

impl<P: ContentSource, S: ContentSource> MergedSource<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self {
            inner: FallbackSource::new(primary, secondary),
        }
    }
}

/// Keep the first item for every key
fn dedup_by_key<T, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

#[async_trait]
impl<P: ContentSource, S: ContentSource> ContentSource for MergedSource<P, S> {
    fn name(&self) -> &str {
        "merged"
    }

    async fn summaries(&self) -> Result<Vec<BlogPostSummary>, SourceError> {
        let mut all = self
            .inner
            .try_primary("summaries", |source| source.summaries())
            .await
            .unwrap_or_default();
        all.extend(self.inner.secondary().summaries().await?);
        Ok(dedup_by_key(all, |s| s.slug().to_string()))
    }

    async fn detail(&self, slug: &str) -> Result<BlogPostDetail, SourceError> {
        self.inner.detail(slug).await
    }

    async fn slugs(&self) -> Result<Vec<String>, SourceError> {
        let mut all = self
            .inner
            .try_primary("slugs", |source| source.slugs())
            .await
            .unwrap_or_default();
        all.extend(self.inner.secondary().slugs().await?);
        Ok(dedup_by_key(all, String::clone))
    }
}
