//! Print a single post

use anyhow::Result;

use crate::blog::Blog;

/// Print the post as pretty JSON, body rendered
pub async fn run(blog: &Blog, slug: &str) -> Result<()> {
    let detail = blog.detail(slug).await?;
    println!("{}", serde_json::to_string_pretty(&detail.view())?);
    Ok(())
}
