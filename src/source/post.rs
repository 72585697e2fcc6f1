//! Source-tagged posts handed to the rendering layer

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::content::LocalEntry;
use crate::microcms::{BlogDetail, BlogSummary};

/// Where a post came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Microcms,
    Local,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Microcms => f.write_str("microcms"),
            SourceKind::Local => f.write_str("local"),
        }
    }
}

/// A listing entry from either source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum BlogPostSummary {
    Microcms(BlogSummary),
    Local(LocalEntry),
}

/// A full post from either source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum BlogPostDetail {
    Microcms(BlogDetail),
    Local(LocalEntry),
}

/// Read access to the fields both sources share
macro_rules! common_accessors {
    ($remote:ident => $summary:expr) => {
        pub fn source(&self) -> SourceKind {
            match self {
                Self::Microcms(_) => SourceKind::Microcms,
                Self::Local(_) => SourceKind::Local,
            }
        }

        pub fn slug(&self) -> &str {
            match self {
                Self::Microcms($remote) => &$summary.slug,
                Self::Local(e) => &e.data.slug,
            }
        }

        pub fn title(&self) -> &str {
            match self {
                Self::Microcms($remote) => &$summary.title,
                Self::Local(e) => &e.data.title,
            }
        }

        pub fn description(&self) -> &str {
            match self {
                Self::Microcms($remote) => &$summary.description,
                Self::Local(e) => &e.data.description,
            }
        }

        pub fn category(&self) -> Option<&str> {
            match self {
                Self::Microcms($remote) => $summary.category.as_deref(),
                Self::Local(e) => e.data.category.as_deref(),
            }
        }

        pub fn pub_date(&self) -> DateTime<Utc> {
            match self {
                Self::Microcms($remote) => $summary.pub_date,
                Self::Local(e) => e.data.pub_date,
            }
        }

        pub fn updated_date(&self) -> Option<DateTime<Utc>> {
            match self {
                Self::Microcms($remote) => $summary.updated_date,
                Self::Local(e) => e.data.updated_date,
            }
        }

        pub fn hero_image(&self) -> Option<&str> {
            match self {
                Self::Microcms($remote) => $summary.hero_image.as_deref(),
                Self::Local(e) => e.data.hero_image.as_deref(),
            }
        }
    };
}

impl BlogPostSummary {
    common_accessors!(s => s);
}

impl BlogPostDetail {
    common_accessors!(d => d.summary);

    /// HTML body; local Markdown is rendered on this call
    pub fn content_html(&self) -> Option<String> {
        match self {
            Self::Microcms(d) => d.content_html.clone(),
            Self::Local(e) => Some(e.render()),
        }
    }

    /// Flat, serializable view with the body rendered
    pub fn view(&self) -> PostView<'_> {
        PostView {
            source: self.source(),
            slug: self.slug(),
            title: self.title(),
            description: self.description(),
            category: self.category(),
            pub_date: self.pub_date(),
            updated_date: self.updated_date(),
            hero_image: self.hero_image(),
            content_html: self.content_html(),
        }
    }
}

/// What detail pages and the JSON API expose
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView<'a> {
    pub source: SourceKind,
    pub slug: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub category: Option<&'a str>,
    pub pub_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
    pub hero_image: Option<&'a str>,
    pub content_html: Option<String>,
}
