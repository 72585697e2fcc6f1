//! Error types shared by the CMS client and the content sources

use thiserror::Error;

/// Errors raised by the microCMS client
#[derive(Debug, Error)]
pub enum CmsError {
    /// Remote mode was used without a service domain or API key
    #[error("microCMS is not configured (set MICROCMS_SERVICE_DOMAIN and MICROCMS_API_KEY)")]
    ConfigurationMissing,

    /// The API answered with a non-success status
    #[error("microCMS request failed ({status}): {message}")]
    Request { status: u16, message: String },

    /// The request never produced a usable response
    #[error("microCMS transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// No record matched the given id or slug
    #[error("microCMS has no entry for {0:?}")]
    NotFound(String),
}

impl CmsError {
    /// Upstream status code, when the error came from an HTTP response
    pub fn status(&self) -> Option<u16> {
        match self {
            CmsError::Request { status, .. } => Some(*status),
            CmsError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors surfaced by a [`crate::source::ContentSource`]
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("post not found (slug: {0})")]
    NotFound(String),

    #[error(transparent)]
    Cms(#[from] CmsError),

    #[error("local content error: {0:#}")]
    Local(anyhow::Error),
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SourceError::NotFound(_) | SourceError::Cms(CmsError::NotFound(_))
        )
    }
}
