//! microCMS connection settings, read from the environment

use super::MicroCmsSettings;

/// Largest `limit` the list endpoint accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Everything the CMS client needs to talk to the API
#[derive(Clone)]
pub struct CmsConfig {
    pub service_domain: Option<String>,
    pub api_key: Option<String>,
    pub api_version: String,
    pub endpoint: String,
    pub page_size: u32,
    pub orders: String,
    /// Replaces `https://{domain}.microcms.io/api/{version}` when set
    pub base_url: Option<String>,
}

impl std::fmt::Debug for CmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsConfig")
            .field("service_domain", &self.service_domain)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_version", &self.api_version)
            .field("endpoint", &self.endpoint)
            .field("page_size", &self.page_size)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self::from_lookup(&MicroCmsSettings::default(), |_| None)
    }
}

impl CmsConfig {
    /// Build from file settings, letting `MICROCMS_*` variables override them
    pub fn from_env(settings: &MicroCmsSettings) -> Self {
        Self::from_lookup(settings, |key| std::env::var(key).ok())
    }

    /// Same as [`CmsConfig::from_env`] with an injectable variable source
    pub fn from_lookup<F>(settings: &MicroCmsSettings, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            service_domain: var("MICROCMS_SERVICE_DOMAIN"),
            api_key: var("MICROCMS_API_KEY"),
            api_version: var("MICROCMS_API_VERSION")
                .unwrap_or_else(|| settings.api_version.clone()),
            endpoint: var("MICROCMS_BLOG_ENDPOINT").unwrap_or_else(|| settings.endpoint.clone()),
            page_size: settings.page_size,
            orders: settings.orders.clone(),
            base_url: None,
        }
    }

    /// Point the client at an explicit API root (e.g. a local mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// API root without trailing slash, if a domain or base URL is known
    pub fn base_url(&self) -> Option<String> {
        if let Some(url) = &self.base_url {
            return Some(url.trim_end_matches('/').to_string());
        }
        self.service_domain
            .as_ref()
            .map(|domain| format!("https://{}.microcms.io/api/{}", domain, self.api_version))
    }

    /// Remote mode is available only with both a location and a key
    pub fn is_enabled(&self) -> bool {
        self.base_url().is_some() && self.api_key.is_some()
    }

    /// Page size clamped to what the API allows
    pub fn effective_page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_enabled_requires_domain_and_key() {
        let settings = MicroCmsSettings::default();

        let config = CmsConfig::from_lookup(&settings, lookup(&[]));
        assert!(!config.is_enabled());

        let config = CmsConfig::from_lookup(&settings, lookup(&[("MICROCMS_API_KEY", "k")]));
        assert!(!config.is_enabled());

        let config = CmsConfig::from_lookup(
            &settings,
            lookup(&[("MICROCMS_SERVICE_DOMAIN", "happy"), ("MICROCMS_API_KEY", "")]),
        );
        assert!(!config.is_enabled());

        let config = CmsConfig::from_lookup(
            &settings,
            lookup(&[("MICROCMS_SERVICE_DOMAIN", "happy"), ("MICROCMS_API_KEY", "k")]),
        );
        assert!(config.is_enabled());
        assert_eq!(
            config.base_url().as_deref(),
            Some("https://happy.microcms.io/api/v1")
        );
    }

    #[test]
    fn test_env_overrides_file_settings() {
        let settings = MicroCmsSettings::default();
        let config = CmsConfig::from_lookup(
            &settings,
            lookup(&[
                ("MICROCMS_SERVICE_DOMAIN", "happy"),
                ("MICROCMS_API_VERSION", "v2"),
                ("MICROCMS_BLOG_ENDPOINT", "articles"),
            ]),
        );
        assert_eq!(config.endpoint, "articles");
        assert_eq!(
            config.base_url().as_deref(),
            Some("https://happy.microcms.io/api/v2")
        );
    }

    #[test]
    fn test_page_size_is_clamped() {
        let config = CmsConfig {
            page_size: 500,
            ..Default::default()
        };
        assert_eq!(config.effective_page_size(), MAX_PAGE_SIZE);

        let config = CmsConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_page_size(), 1);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = CmsConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
