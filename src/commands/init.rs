//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Site
title: My Blog
description: ''
author: ''
language: ja

# URL
url: https://example.com
root: /
blog_dir: blog

# Directory
source_dir: source
posts_dir: _posts
public_dir: public

# Writing
render_drafts: false

# fallback: microCMS first, local posts when it is unavailable
# merge: both, microCMS wins on duplicate slugs
source_mode: fallback

# Credentials come from MICROCMS_SERVICE_DOMAIN and MICROCMS_API_KEY
microcms:
  endpoint: blogs
  api_version: v1
  page_size: 100
  orders: -publishedAt
"#;

/// Create `_config.yml` and a sample post under `target_dir`
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    let posts_dir = target_dir.join("source").join("_posts");
    fs::create_dir_all(&posts_dir)?;
    fs::write(&config_path, CONFIG_TEMPLATE)?;

    let now = chrono::Utc::now();
    let sample_post = format!(
        r#"---
title: Hello World
description: The first post of this blog
pubDate: {}
category: notes
---

Welcome! This post lives in `source/_posts` and is shown whenever microCMS
is not configured or cannot be reached.

## Next steps

```bash
$ microcms-blog new "My New Post"
$ microcms-blog server
```
"#,
        now.format("%Y-%m-%d")
    );
    fs::write(posts_dir.join("hello-world.md"), sample_post)?;

    Ok(())
}
