//! List blog content

use anyhow::Result;
use std::fmt::Write;

use crate::blog::Blog;
use crate::source::BlogPostSummary;

/// What `list` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListKind {
    Posts,
    Latest,
    Categories,
    Slugs,
}

/// Print content of the given kind to stdout
pub async fn run(blog: &Blog, kind: ListKind, limit: usize) -> Result<()> {
    print!("{}", render(blog, kind, limit).await?);
    Ok(())
}

async fn render(blog: &Blog, kind: ListKind, limit: usize) -> Result<String> {
    let mut out = String::new();

    match kind {
        ListKind::Posts => {
            let posts = blog.all_summaries().await?;
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in &posts {
                writeln!(out, "{}", post_line(post))?;
            }
        }
        ListKind::Latest => {
            let posts = blog.latest_summaries(limit).await?;
            writeln!(out, "Latest ({}):", posts.len())?;
            for post in &posts {
                writeln!(out, "{}", post_line(post))?;
            }
        }
        ListKind::Categories => {
            let groups = blog.summaries_by_category().await?;
            writeln!(out, "Categories ({}):", groups.len())?;
            for (category, posts) in &groups {
                writeln!(out, "  {} ({})", category, posts.len())?;
            }
        }
        ListKind::Slugs => {
            for slug in blog.slugs().await? {
                writeln!(out, "{}", slug)?;
            }
        }
    }

    Ok(out)
}

fn post_line(post: &BlogPostSummary) -> String {
    format!(
        "  {} - {} ({}) [{}]",
        post.pub_date().format("%Y-%m-%d"),
        post.title(),
        post.slug(),
        post.source()
    )
}
