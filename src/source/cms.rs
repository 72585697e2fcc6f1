//! microCMS-backed content source

use async_trait::async_trait;

use super::{BlogPostDetail, BlogPostSummary, ContentSource};
use crate::error::SourceError;
use crate::microcms::{CmsClient, ListParams};

/// Serves posts from the CMS through an injected [`CmsClient`]
pub struct CmsSource {
    client: CmsClient,
    draft_key: Option<String>,
}

impl CmsSource {
    pub fn new(client: CmsClient) -> Self {
        Self {
            client,
            draft_key: None,
        }
    }

    /// Include draft content visible with this key
    pub fn with_draft_key(mut self, draft_key: impl Into<String>) -> Self {
        self.draft_key = Some(draft_key.into());
        self
    }

    pub fn client(&self) -> &CmsClient {
        &self.client
    }

    fn list_params(&self) -> ListParams {
        ListParams {
            draft_key: self.draft_key.clone(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ContentSource for CmsSource {
    fn name(&self) -> &str {
        "microcms"
    }

    fn is_enabled(&self) -> bool {
        self.client.is_enabled()
    }

    async fn summaries(&self) -> Result<Vec<BlogPostSummary>, SourceError> {
        let summaries = self.client.fetch_summaries(self.list_params()).await?;
        Ok(summaries.into_iter().map(BlogPostSummary::Microcms).collect())
    }

    async fn detail(&self, slug: &str) -> Result<BlogPostDetail, SourceError> {
        let detail = self
            .client
            .fetch_detail(slug, self.draft_key.as_deref())
            .await?;
        Ok(BlogPostDetail::Microcms(detail))
    }

    async fn slugs(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.client.fetch_slugs().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsConfig;
    use crate::source::SourceKind;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_tags_results_as_microcms() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs"))
            .and(query_param("draftKey", "preview"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "contents": [{ "id": "a", "slug": "alpha", "publishedAt": "2024-01-01T00:00:00Z" }],
                "totalCount": 1,
            })))
            .mount(&server)
            .await;

        let config = CmsConfig {
            api_key: Some("k".to_string()),
            ..Default::default()
        }
        .with_base_url(server.uri());
        let source = CmsSource::new(CmsClient::new(config)).with_draft_key("preview");

        assert!(source.is_enabled());
        let summaries = source.summaries().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].source(), SourceKind::Microcms);
        assert_eq!(summaries[0].slug(), "alpha");
    }

    #[test]
    fn test_disabled_without_credentials() {
        let source = CmsSource::new(CmsClient::new(CmsConfig::default()));
        assert!(!source.is_enabled());
    }
}
