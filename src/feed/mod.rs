//! RSS feed, robots.txt and sitemap rendering

use crate::config::SiteConfig;
use crate::helpers::{date_rss, full_url_for, post_url};
use crate::source::BlogPostSummary;

/// File name of the sitemap index referenced from robots.txt
pub const SITEMAP_INDEX: &str = "sitemap-index.xml";
/// File name of the (single) sitemap listed in the index
pub const SITEMAP: &str = "sitemap-0.xml";
pub const RSS: &str = "rss.xml";
pub const ROBOTS: &str = "robots.txt";

/// RSS 2.0 feed with one item per post, in the given order
pub fn rss(config: &SiteConfig, posts: &[BlogPostSummary]) -> String {
    let mut feed = String::new();
    feed.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    feed.push('\n');
    feed.push_str(r#"<rss version="2.0"><channel>"#);
    feed.push('\n');
    feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
    feed.push_str(&format!(
        "  <description>{}</description>\n",
        escape_xml(&config.description)
    ));
    feed.push_str(&format!(
        "  <link>{}</link>\n",
        escape_xml(&full_url_for(config, ""))
    ));
    if !config.language.is_empty() {
        feed.push_str(&format!(
            "  <language>{}</language>\n",
            escape_xml(&config.language)
        ));
    }

    for post in posts {
        let link = escape_xml(&post_url(config, post.slug()));
        feed.push_str("  <item>\n");
        feed.push_str(&format!("    <title>{}</title>\n", escape_xml(post.title())));
        feed.push_str(&format!("    <link>{}</link>\n", link));
        feed.push_str(&format!(
            "    <guid isPermaLink=\"true\">{}</guid>\n",
            link
        ));
        feed.push_str(&format!(
            "    <description>{}</description>\n",
            escape_xml(post.description())
        ));
        feed.push_str(&format!(
            "    <pubDate>{}</pubDate>\n",
            date_rss(&post.pub_date())
        ));
        feed.push_str("  </item>\n");
    }

    feed.push_str("</channel></rss>\n");
    feed
}

/// robots.txt allowing everything and pointing at the sitemap index
pub fn robots(config: &SiteConfig) -> String {
    [
        "User-agent: *".to_string(),
        "Allow: /".to_string(),
        format!("Sitemap: {}", full_url_for(config, SITEMAP_INDEX)),
        String::new(),
    ]
    .join("\n")
}

/// Sitemap index listing the single sitemap file
pub fn sitemap_index(config: &SiteConfig) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "\n",
            r#"<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
            "<sitemap><loc>{}</loc></sitemap></sitemapindex>\n"
        ),
        escape_xml(&full_url_for(config, SITEMAP))
    )
}

/// Sitemap with the home page, the blog index and one URL per slug
pub fn sitemap(config: &SiteConfig, slugs: &[String]) -> String {
    let mut urls = vec![full_url_for(config, "")];
    let blog_dir = config.blog_dir.trim_matches('/');
    if !blog_dir.is_empty() {
        urls.push(full_url_for(config, &format!("{}/", blog_dir)));
    }
    urls.extend(
        slugs
            .iter()
            .map(|slug| post_url(config, slug)),
    );

    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');
    for url in urls {
        xml.push_str(&format!("  <url><loc>{}</loc></url>\n", escape_xml(&url)));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
