//! Content source over local Markdown posts

use async_trait::async_trait;

use super::{BlogPostDetail, BlogPostSummary, ContentSource};
use crate::content::{ContentLoader, LocalEntry};
use crate::error::SourceError;

enum Entries {
    /// Re-read from disk on every call
    Directory(ContentLoader),
    Fixed(Vec<LocalEntry>),
}

/// Serves posts from the local content collection
///
/// Load failures are returned as [`SourceError::Local`] and are never
/// swallowed by the combinators.
pub struct LocalSource {
    entries: Entries,
}

impl LocalSource {
    pub fn new(loader: ContentLoader) -> Self {
        Self {
            entries: Entries::Directory(loader),
        }
    }

    /// A source over an in-memory collection
    pub fn from_entries(entries: Vec<LocalEntry>) -> Self {
        Self {
            entries: Entries::Fixed(entries),
        }
    }

    fn entries(&self) -> Result<Vec<LocalEntry>, SourceError> {
        match &self.entries {
            Entries::Directory(loader) => loader.load_entries().map_err(SourceError::Local),
            Entries::Fixed(entries) => Ok(entries.clone()),
        }
    }
}

#[async_trait]
impl ContentSource for LocalSource {
    fn name(&self) -> &str {
        "local"
    }

    async fn summaries(&self) -> Result<Vec<BlogPostSummary>, SourceError> {
        Ok(self
            .entries()?
            .into_iter()
            .map(BlogPostSummary::Local)
            .collect())
    }

    async fn detail(&self, slug: &str) -> Result<BlogPostDetail, SourceError> {
        self.entries()?
            .into_iter()
            .find(|e| e.slug() == slug)
            .map(BlogPostDetail::Local)
            .ok_or_else(|| SourceError::NotFound(slug.to_string()))
    }

    async fn slugs(&self) -> Result<Vec<String>, SourceError> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|e| e.data.slug)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::local_entries;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fixed_entries() {
        let source = LocalSource::from_entries(local_entries(&[
            ("one", "2024-01-01", None),
            ("two", "2024-01-02", Some("news")),
        ]));

        assert_eq!(source.slugs().await.unwrap(), vec!["one", "two"]);
        let detail = source.detail("two").await.unwrap();
        assert_eq!(detail.category(), Some("news"));
        assert!(matches!(
            source.detail("three").await,
            Err(SourceError::NotFound(ref s)) if s == "three"
        ));
    }

    #[tokio::test]
    async fn test_directory_errors_are_local_faults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("broken.md"), "---\ntitle: x\n---\nno date").unwrap();

        let source = LocalSource::new(ContentLoader::from_dir(tmp.path(), false));
        assert!(matches!(
            source.summaries().await,
            Err(SourceError::Local(_))
        ));
    }
}
