//! HTTP client for the microCMS content API

use serde::de::DeserializeOwned;

use super::normalize::{slug_or_id, to_detail, to_summary};
use super::types::{BlogContent, BlogDetail, BlogSummary, ListParams, ListResponse};
use crate::config::{CmsConfig, MAX_PAGE_SIZE};
use crate::error::CmsError;
use crate::helpers::encode_segment;

/// Header carrying the static API key
pub const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

type Query = Vec<(&'static str, String)>;

/// Client for one blog endpoint of a microCMS service
///
/// Owns its HTTP connection pool; build it once and share it.
pub struct CmsClient {
    config: CmsConfig,
    http: reqwest::Client,
}

impl CmsClient {
    /// Create a client with a default HTTP stack
    pub fn new(config: CmsConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("microcms-blog/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self::with_http_client(config, http)
    }

    /// Create a client on top of an existing `reqwest::Client`
    pub fn with_http_client(config: CmsConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// Whether a service location and an API key are configured
    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    fn credentials(&self) -> Result<(String, &str), CmsError> {
        match (self.config.base_url(), self.config.api_key.as_deref()) {
            (Some(base_url), Some(api_key)) => Ok((base_url, api_key)),
            _ => Err(CmsError::ConfigurationMissing),
        }
    }

    /// GET `{base_url}/{path}` and decode the JSON body
    async fn request<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T, CmsError> {
        let (base_url, api_key) = self.credentials()?;
        let url = format!("{}/{}", base_url, path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CmsError::Request {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }

    async fn list(&self, query: &Query) -> Result<ListResponse<BlogContent>, CmsError> {
        self.request(&self.config.endpoint, query).await
    }

    /// Fetch every record matching `query`, one page at a time
    async fn list_all(&self, query: Query) -> Result<Vec<BlogContent>, CmsError> {
        let page_size = self.config.effective_page_size();
        let mut contents: Vec<BlogContent> = Vec::new();

        loop {
            let mut page_query = query.clone();
            page_query.push(("limit", page_size.to_string()));
            page_query.push(("offset", contents.len().to_string()));

            let page = self.list(&page_query).await?;
            let received = page.contents.len();
            contents.extend(page.contents);
            tracing::debug!(
                "Fetched {} of {} entries from {}",
                contents.len(),
                page.total_count,
                self.config.endpoint
            );

            // An empty page means the total shrank while we were paging
            if received == 0 || contents.len() as u64 >= page.total_count {
                break;
            }
        }

        Ok(contents)
    }

    /// Fetch normalized summaries
    ///
    /// Without a limit every record is fetched, paging until the reported
    /// total is reached. A limit above the API maximum is clamped.
    pub async fn fetch_summaries(&self, params: ListParams) -> Result<Vec<BlogSummary>, CmsError> {
        let mut query: Query = vec![(
            "orders",
            params.orders.unwrap_or_else(|| self.config.orders.clone()),
        )];
        if let Some(draft_key) = params.draft_key {
            query.push(("draftKey", draft_key));
        }

        let contents = match params.limit {
            None => self.list_all(query).await?,
            Some(limit) => {
                query.push(("limit", limit.min(MAX_PAGE_SIZE).to_string()));
                self.list(&query).await?.contents
            }
        };

        Ok(contents.into_iter().map(to_summary).collect())
    }

    /// Fetch one record by id, or by its `slug` field when no id matches
    pub async fn fetch_detail(
        &self,
        id_or_slug: &str,
        draft_key: Option<&str>,
    ) -> Result<BlogDetail, CmsError> {
        self.credentials()?;
        if id_or_slug.is_empty() {
            return Err(CmsError::NotFound(String::new()));
        }

        let mut query: Query = Vec::new();
        if let Some(draft_key) = draft_key {
            query.push(("draftKey", draft_key.to_string()));
        }

        let path = format!("{}/{}", self.config.endpoint, encode_segment(id_or_slug));
        let entry = match self.request::<BlogContent>(&path, &query).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(
                    "No microCMS entry with id {:?} ({}), searching by slug",
                    id_or_slug,
                    e
                );
                query.push(("filters", format!("slug[equals]{}", id_or_slug)));
                query.push(("limit", "1".to_string()));
                self.list(&query)
                    .await?
                    .contents
                    .into_iter()
                    .next()
                    .ok_or_else(|| CmsError::NotFound(id_or_slug.to_string()))?
            }
        };

        Ok(to_detail(entry))
    }

    /// Public slugs of every record (the id where no slug is set)
    pub async fn fetch_slugs(&self) -> Result<Vec<String>, CmsError> {
        let contents = self
            .list_all(vec![("fields", "id,slug".to_string())])
            .await?;
        Ok(contents.iter().map(slug_or_id).collect())
    }
}
