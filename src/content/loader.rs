//! Content loader - loads local posts from the source directory

use anyhow::{anyhow, bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{EntryData, FrontMatter, LocalEntry};
use crate::Site;

/// Loads Markdown posts from `<source_dir>/<posts_dir>`
pub struct ContentLoader {
    posts_dir: PathBuf,
    render_drafts: bool,
}

impl ContentLoader {
    pub fn new(site: &Site) -> Self {
        Self::from_dir(site.posts_dir(), site.config.render_drafts)
    }

    pub fn from_dir(posts_dir: impl Into<PathBuf>, render_drafts: bool) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            render_drafts,
        }
    }

    /// Load every post, newest first
    ///
    /// A file that cannot be read or lacks a required field fails the whole
    /// load, as does a slug used twice.
    pub fn load_entries(&self) -> Result<Vec<LocalEntry>> {
        if !self.posts_dir.exists() {
            tracing::debug!("No local posts directory at {:?}", self.posts_dir);
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for entry in WalkDir::new(&self.posts_dir).follow_links(true) {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let Some(local) = self.load_entry(path)? else {
                continue;
            };
            if let Some(previous) = seen.insert(local.data.slug.clone(), path.to_path_buf()) {
                bail!(
                    "Duplicate slug {:?} in {:?} and {:?}",
                    local.data.slug,
                    previous,
                    path
                );
            }
            entries.push(local);
        }

        entries.sort_by(|a, b| b.data.pub_date.cmp(&a.data.pub_date));
        tracing::debug!("Loaded {} local posts", entries.len());

        Ok(entries)
    }

    /// Find a single post by slug
    pub fn find(&self, slug: &str) -> Result<Option<LocalEntry>> {
        Ok(self
            .load_entries()?
            .into_iter()
            .find(|e| e.data.slug == slug))
    }

    /// Load one file; `None` for drafts that are not rendered
    fn load_entry(&self, path: &Path) -> Result<Option<LocalEntry>> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let (fm, body) = FrontMatter::parse(&content).with_context(|| format!("In {:?}", path))?;

        if fm.draft && !self.render_drafts {
            tracing::debug!("Skipping draft {:?}", path);
            return Ok(None);
        }

        let pub_date = fm
            .parse_pub_date()
            .ok_or_else(|| anyhow!("{:?}: missing or invalid `pubDate`", path))?;
        let updated_date = fm.parse_updated_date();

        let required = |value: Option<String>, field: &str| {
            value.ok_or_else(|| anyhow!("{:?}: missing `{}`", path, field))
        };
        let title = required(fm.title, "title")?;
        let description = required(fm.description, "description")?;

        // Slug from front-matter, else the file name
        let slug = match fm.slug.filter(|s| !s.trim().is_empty()) {
            Some(slug) => slug,
            None => path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
                .ok_or_else(|| anyhow!("{:?}: cannot derive a slug", path))?,
        };

        let data = EntryData {
            slug,
            title,
            description,
            category: fm.category,
            pub_date,
            updated_date,
            hero_image: fm.hero_image,
        };

        Ok(Some(LocalEntry::new(data, body, path)))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn post(title: &str, date: &str, extra: &str) -> String {
        format!(
            "---\ntitle: {}\ndescription: About {}\npubDate: {}\n{}---\n\nBody of {}\n",
            title, title, date, extra, title
        )
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let loader = ContentLoader::from_dir(tmp.path().join("nope"), false);
        assert!(loader.load_entries().unwrap().is_empty());
    }

    #[test]
    fn test_load_entries_sorted_newest_first() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "first.md", &post("First", "2024-01-01", "category: news\n"));
        write_post(tmp.path(), "nested/second.markdown", &post("Second", "2024-03-01", ""));
        write_post(tmp.path(), "notes.txt", "ignored");

        let entries = ContentLoader::from_dir(tmp.path(), false).load_entries().unwrap();
        let slugs: Vec<_> = entries.iter().map(|e| e.slug()).collect();
        assert_eq!(slugs, vec!["second", "first"]);
        assert_eq!(entries[1].data.category.as_deref(), Some("news"));
        assert_eq!(entries[1].data.description, "About First");
        assert_eq!(
            entries[0].data.pub_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert!(entries[0].body.contains("Body of Second"));
    }

    #[test]
    fn test_slug_from_frontmatter() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "file.md", &post("Custom", "2024-01-01", "slug: custom-slug\n"));

        let loader = ContentLoader::from_dir(tmp.path(), false);
        assert!(loader.find("custom-slug").unwrap().is_some());
        assert!(loader.find("file").unwrap().is_none());
    }

    #[test]
    fn test_drafts_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "draft.md", &post("Draft", "2024-01-01", "draft: true\n"));

        assert!(ContentLoader::from_dir(tmp.path(), false)
            .load_entries()
            .unwrap()
            .is_empty());
        assert_eq!(
            ContentLoader::from_dir(tmp.path(), true)
                .load_entries()
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_missing_required_field_fails() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "bad.md", "---\ntitle: No date\ndescription: x\n---\nBody");

        let err = ContentLoader::from_dir(tmp.path(), false)
            .load_entries()
            .unwrap_err();
        assert!(err.to_string().contains("pubDate"));
    }

    #[test]
    fn test_duplicate_slug_fails() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.md", &post("A", "2024-01-01", "slug: same\n"));
        write_post(tmp.path(), "b.md", &post("B", "2024-01-02", "slug: same\n"));

        let err = ContentLoader::from_dir(tmp.path(), false)
            .load_entries()
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate slug"));
    }
}
