//! Remote-first source with a local safety net

use async_trait::async_trait;
use std::future::Future;

use super::{BlogPostDetail, BlogPostSummary, ContentSource};
use crate::error::SourceError;

/// Asks `primary` first and `secondary` whenever the primary is disabled
/// or returns any error
///
/// There is no retry: a failed primary call always ends on the secondary,
/// and whatever the secondary returns (errors included) is final.
pub struct FallbackSource<P, S> {
    primary: P,
    secondary: S,
}

impl<P: ContentSource, S: ContentSource> FallbackSource<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    /// Run `call` against the primary; `None` if it is disabled or failed
    pub(super) async fn try_primary<'a, T, F, Fut>(&'a self, operation: &str, call: F) -> Option<T>
    where
        F: FnOnce(&'a dyn ContentSource) -> Fut,
        Fut: Future<Output = Result<T, SourceError>>,
    {
        if !self.primary.is_enabled() {
            tracing::debug!(
                "{} is disabled, using {} for {}",
                self.primary.name(),
                self.secondary.name(),
                operation
            );
            return None;
        }

        match call(&self.primary).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    "{} failed for {} ({}), falling back to {}",
                    self.primary.name(),
                    operation,
                    e,
                    self.secondary.name()
                );
                None
            }
        }
    }

    async fn attempt<'a, T, F, Fut>(&'a self, operation: &str, call: F) -> Result<T, SourceError>
    where
        F: Fn(&'a dyn ContentSource) -> Fut,
        Fut: Future<Output = Result<T, SourceError>>,
    {
        match self.try_primary(operation, &call).await {
            Some(value) => Ok(value),
            None => call(&self.secondary).await,
        }
    }
}

#[async_trait]
impl<P: ContentSource, S: ContentSource> ContentSource for FallbackSource<P, S> {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn summaries(&self) -> Result<Vec<BlogPostSummary>, SourceError> {
        self.attempt("summaries", |source| source.summaries()).await
    }

    async fn detail(&self, slug: &str) -> Result<BlogPostDetail, SourceError> {
        self.attempt("detail", |source| source.detail(slug)).await
    }

    async fn slugs(&self) -> Result<Vec<String>, SourceError> {
        self.attempt("slugs", |source| source.slugs()).await
    }
}
