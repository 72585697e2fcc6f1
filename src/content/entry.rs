//! Local post entries

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use serde::Serialize;
use std::path::PathBuf;

use super::MarkdownRenderer;

lazy_static! {
    /// Loading syntax definitions is expensive, so every entry shares one renderer
    static ref RENDERER: MarkdownRenderer = MarkdownRenderer::new();
}

/// Validated front-matter of a local post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryData {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub pub_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
    pub hero_image: Option<String>,
}

/// A Markdown post from the local content directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalEntry {
    #[serde(flatten)]
    pub data: EntryData,

    /// Markdown body, front-matter stripped
    #[serde(skip)]
    pub body: String,

    /// Source file
    #[serde(skip)]
    pub path: PathBuf,
}

impl LocalEntry {
    pub fn new(data: EntryData, body: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            data,
            body: body.into(),
            path: path.into(),
        }
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    /// Render the body to HTML; nothing is rendered until this is called
    pub fn render(&self) -> String {
        RENDERER.render(&self.body)
    }
}
