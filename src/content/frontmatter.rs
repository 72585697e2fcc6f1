//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::helpers::parse_date;

/// Accepts `category: News` as well as `category: [News, Misc]` (first wins)
fn first_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(
        match Option::<OneOrMany>::deserialize(deserializer)? {
            Some(OneOrMany::One(s)) => Some(s),
            Some(OneOrMany::Many(v)) => v.into_iter().next(),
            None => None,
        }
        .filter(|s| !s.trim().is_empty()),
    )
}

/// Dates may be written as YAML timestamps, strings, or quoted strings
fn date_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::String(s)) => Some(s),
        Some(serde_yaml::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Front-matter of a local post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "first_string", alias = "categories")]
    pub category: Option<String>,
    #[serde(rename = "pubDate", alias = "date", deserialize_with = "date_string")]
    pub pub_date: Option<String>,
    #[serde(rename = "updatedDate", alias = "updated", deserialize_with = "date_string")]
    pub updated_date: Option<String>,
    #[serde(rename = "heroImage")]
    pub hero_image: Option<String>,
    pub slug: Option<String>,
    pub draft: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = content[3..].trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return Ok((FrontMatter::default(), content));
        };
        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        // A `---` rule followed by prose is a Markdown separator, not YAML
        if !yaml_content.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
            .map_err(|e| anyhow!("Failed to parse YAML front-matter: {}", e))?;
        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str)> {
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let fm: FrontMatter = serde_json::from_str(&rest[..end_pos])
                    .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;
                let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
                return Ok((fm, remaining));
            }
        }

        if content.starts_with('{') {
            // The parser decides where the object ends
            let mut stream = serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
            if let Some(parsed) = stream.next() {
                let fm = parsed.map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;
                let remaining = content[stream.byte_offset()..].trim_start_matches(['\n', '\r']);
                return Ok((fm, remaining));
            }
        }

        Err(anyhow!("Invalid JSON front-matter"))
    }

    pub fn parse_pub_date(&self) -> Option<DateTime<Utc>> {
        self.pub_date.as_deref().and_then(parse_date)
    }

    pub fn parse_updated_date(&self) -> Option<DateTime<Utc>> {
        self.updated_date.as_deref().and_then(parse_date)
    }
}

/// `key: value` or `key:` with a plain identifier key (URLs don't count)
fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }
    let Some((key, after)) = trimmed.split_once(':') else {
        return false;
    };
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !matches!(key, "http" | "https" | "ftp")
        && (after.is_empty() || after.starts_with(' '))
}
