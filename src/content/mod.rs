//! Content module - local Markdown posts

mod entry;
mod frontmatter;
pub mod loader;
mod markdown;

pub use entry::{EntryData, LocalEntry};
pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
