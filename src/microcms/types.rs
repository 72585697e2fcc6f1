//! Wire types of the microCMS list/detail API and the normalized shapes

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a field, turning a value of an unexpected shape into `None`
///
/// Editors can change a field's type in the CMS at any time, so one odd
/// record must not fail a whole listing.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// An image field (`{ url, width, height }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageField {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// An image field as stored; a value of another shape is kept but has no URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageValue {
    Image(ImageField),
    Other(serde_json::Value),
}

impl ImageValue {
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageValue::Image(image) => image.url.as_deref(),
            ImageValue::Other(_) => None,
        }
    }
}

/// A category stored either as a plain string or as a content reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    Name(String),
    Reference {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

/// One record of the blog endpoint, as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogContent {
    pub id: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryField>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub revised_at: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<ImageValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyecatch: Option<ImageValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ImageValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageValue>,

    /// Any custom fields defined in the API schema
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Envelope of the list endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub contents: Vec<T>,
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Normalized listing entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub pub_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
    pub hero_image: Option<String>,
    pub raw: BlogContent,
}

/// Normalized entry with its body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetail {
    #[serde(flatten)]
    pub summary: BlogSummary,
    pub content_html: Option<String>,
    pub content_raw: Option<String>,
}

/// Options of a list request
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// `None` fetches every record, page by page
    pub limit: Option<u32>,
    /// Defaults to the configured order (newest published first)
    pub orders: Option<String>,
    pub draft_key: Option<String>,
}

impl ListParams {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn orders(mut self, orders: impl Into<String>) -> Self {
        self.orders = Some(orders.into());
        self
    }

    pub fn draft_key(mut self, draft_key: impl Into<String>) -> Self {
        self.draft_key = Some(draft_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let value = json!({
            "id": "abc123",
            "slug": "hello-world",
            "title": "Hello",
            "category": { "id": "news", "name": "News" },
            "publishedAt": "2024-01-01T00:00:00.000Z",
            "eyecatch": { "url": "https://images.example.com/a.png", "width": 800, "height": 600 },
            "tags": ["a", "b"]
        });
        let entry: BlogContent = serde_json::from_value(value).unwrap();
        assert_eq!(entry.slug.as_deref(), Some("hello-world"));
        assert_eq!(
            entry.category,
            Some(CategoryField::Reference {
                id: "news".to_string(),
                name: Some("News".to_string())
            })
        );
        match entry.eyecatch {
            Some(ImageValue::Image(image)) => assert_eq!(image.width, Some(800)),
            other => panic!("unexpected eyecatch: {:?}", other),
        }
        assert_eq!(entry.extra.get("tags"), Some(&json!(["a", "b"])));
    }

    #[test]
    fn test_unexpected_shapes_are_tolerated() {
        let value = json!({
            "id": "abc123",
            "description": 42,
            "category": [1, 2],
            "heroImage": "not-an-object",
            "publishedAt": null
        });
        let entry: BlogContent = serde_json::from_value(value).unwrap();
        assert_eq!(entry.description, None);
        assert_eq!(entry.category, None);
        assert_eq!(
            entry.hero_image,
            Some(ImageValue::Other(json!("not-an-object")))
        );
        assert_eq!(entry.hero_image.and_then(|i| i.url().map(str::to_string)), None);
        assert_eq!(entry.published_at, None);
    }

    #[test]
    fn test_list_response() {
        let value = json!({
            "contents": [{ "id": "a" }, { "id": "b" }],
            "totalCount": 10,
            "offset": 0,
            "limit": 2
        });
        let list: ListResponse<BlogContent> = serde_json::from_value(value).unwrap();
        assert_eq!(list.contents.len(), 2);
        assert_eq!(list.total_count, 10);
    }
}
