//! microCMS module - API client and record normalization

mod client;
mod normalize;
mod types;

pub use client::{CmsClient, API_KEY_HEADER};
pub use normalize::{slug_or_id, to_detail, to_summary};
pub use types::{
    BlogContent, BlogDetail, BlogSummary, CategoryField, ImageField, ImageValue, ListParams,
    ListResponse,
};
