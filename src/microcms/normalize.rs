//! Mapping of raw records onto [`BlogSummary`] / [`BlogDetail`]

use chrono::{DateTime, Utc};

use super::types::{BlogContent, BlogDetail, BlogSummary, CategoryField};
use crate::helpers::parse_date;

/// Public identifier of a record: its `slug` field, or the id when empty
pub fn slug_or_id(entry: &BlogContent) -> String {
    match entry.slug.as_deref() {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => entry.id.clone(),
    }
}

/// URL of the first image field that is set
///
/// Only the first non-null field is considered, even when it has no URL.
pub fn pick_image_url(entry: &BlogContent) -> Option<String> {
    [&entry.hero_image, &entry.eyecatch, &entry.thumbnail, &entry.cover]
        .into_iter()
        .find_map(|field| field.as_ref())
        .and_then(|image| image.url())
        .map(str::to_string)
}

pub fn resolve_category(entry: &BlogContent) -> Option<String> {
    match entry.category.as_ref()? {
        CategoryField::Name(name) if !name.is_empty() => Some(name.clone()),
        CategoryField::Name(_) => None,
        CategoryField::Reference { id, .. } => Some(id.clone()),
    }
}

fn resolve_date(value: Option<&str>) -> Option<DateTime<Utc>> {
    value.and_then(parse_date)
}

/// Body of the record: `body`, else `content`
pub fn resolve_body(entry: &BlogContent) -> Option<String> {
    entry.body.clone().or_else(|| entry.content.clone())
}

/// Build the normalized summary of a record
pub fn to_summary(entry: BlogContent) -> BlogSummary {
    let slug = slug_or_id(&entry);

    let pub_date = resolve_date(entry.published_at.as_deref())
        .or_else(|| resolve_date(entry.created_at.as_deref()))
        .or_else(|| resolve_date(entry.updated_at.as_deref()))
        .unwrap_or_else(|| {
            tracing::warn!(
                "microCMS entry {:?} has no usable publish date, using the current time",
                entry.id
            );
            Utc::now()
        });
    let updated_date = resolve_date(entry.revised_at.as_deref())
        .or_else(|| resolve_date(entry.updated_at.as_deref()));

    BlogSummary {
        id: entry.id.clone(),
        title: entry.title.clone().unwrap_or_else(|| slug.clone()),
        description: entry.description.clone().unwrap_or_default(),
        category: resolve_category(&entry),
        pub_date,
        updated_date,
        hero_image: pick_image_url(&entry),
        slug,
        raw: entry,
    }
}

/// Build the normalized detail of a record
pub fn to_detail(entry: BlogContent) -> BlogDetail {
    let content = resolve_body(&entry);
    BlogDetail {
        summary: to_summary(entry),
        content_html: content.clone(),
        content_raw: content,
    }
}
