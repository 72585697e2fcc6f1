//! Generate feeds and sitemaps into the public directory

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::blog::Blog;
use crate::feed;
use crate::Site;

/// Listing written next to the feeds for the rendering layer
pub const POSTS_JSON: &str = "posts.json";

/// Fetch every post once and write all artifacts
pub async fn run(site: &Site, blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = blog.all_summaries().await?;
    let slugs = blog.slugs().await?;
    tracing::info!("Loaded {} posts ({} slugs)", posts.len(), slugs.len());

    fs::create_dir_all(&site.public_dir)?;
    let config = &site.config;

    write(&site.public_dir, feed::RSS, &feed::rss(config, &posts))?;
    write(&site.public_dir, feed::ROBOTS, &feed::robots(config))?;
    write(
        &site.public_dir,
        feed::SITEMAP_INDEX,
        &feed::sitemap_index(config),
    )?;
    write(&site.public_dir, feed::SITEMAP, &feed::sitemap(config, &slugs))?;
    write(
        &site.public_dir,
        POSTS_JSON,
        &serde_json::to_string_pretty(&posts)?,
    )?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

fn write(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}
