//! Content sources - where posts come from and how sources are combined
//!
//! [`CmsSource`] and [`LocalSource`] are the leaves. [`FallbackSource`]
//! routes to its secondary whenever the primary is disabled or fails, and
//! [`MergedSource`] serves both at once.

mod cms;
mod fallback;
mod local;
mod merged;
mod post;

use async_trait::async_trait;

pub use cms::CmsSource;
pub use fallback::FallbackSource;
pub use local::LocalSource;
pub use merged::MergedSource;
pub use post::{BlogPostDetail, BlogPostSummary, PostView, SourceKind};

use crate::error::SourceError;

/// Read-only access to a set of posts
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Whether the source can be queried at all
    fn is_enabled(&self) -> bool {
        true
    }

    async fn summaries(&self) -> Result<Vec<BlogPostSummary>, SourceError>;

    async fn detail(&self, slug: &str) -> Result<BlogPostDetail, SourceError>;

    async fn slugs(&self) -> Result<Vec<String>, SourceError>;
}
