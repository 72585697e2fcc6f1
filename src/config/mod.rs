//! Configuration module

mod cms;
mod site;

pub use cms::{CmsConfig, MAX_PAGE_SIZE};
pub use site::{MicroCmsSettings, SiteConfig, SourceMode, DEFAULT_SITE_URL};
