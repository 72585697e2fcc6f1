//! Create a new local post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Write `<posts_dir>/<slug>.md` with the required front-matter
pub fn create_post(site: &Site, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let posts_dir = site.posts_dir();
    fs::create_dir_all(&posts_dir)?;

    let file_path = posts_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Utc::now();
    let content = format!(
        "---\ntitle: {}\ndescription: ''\npubDate: {}\n---\n",
        serde_json::to_string(title)?,
        now.format("%Y-%m-%d %H:%M:%S")
    );
    fs::write(&file_path, content)?;

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;
    use tempfile::TempDir;

    #[test]
    fn test_create_post() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        let path = create_post(&site, "Hello: New \"World\"", None).unwrap();
        assert_eq!(path, site.posts_dir().join("hello-new-world.md"));

        let entries = ContentLoader::new(&site).load_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].data.title, "Hello: New \"World\"");
        assert_eq!(entries[0].slug(), "hello-new-world");

        assert!(create_post(&site, "Hello: New \"World\"", None).is_err());
    }

    #[test]
    fn test_create_post_with_slug() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let path = create_post(&site, "日本語のタイトル", Some("first-post")).unwrap();
        assert!(path.ends_with("first-post.md"));
    }
}
