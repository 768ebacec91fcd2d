//! Search engine surfaces: per-page metadata, sitemaps and robots.txt.
//!
//! Every URL emitted here is built from `SiteContext::localized_url`, so the
//! canonical URL of a page, its hreflang alternates and its sitemap entry
//! always agree.

mod metadata;
mod robots;
mod sitemap;

pub use metadata::{
    case_study_metadata, service_metadata, synthesize, Alternates, MetadataBundle, OpenGraph,
    OpenGraphImage, PageMetadata, RobotsDirective, TwitterCard,
};
pub use robots::{RobotsGroup, RobotsPolicy, DISALLOWED_PATHS, USER_AGENTS};
pub use sitemap::{
    change_frequency_for, generate as generate_sitemap, priority_for, ChangeFrequency, Sitemap,
    SitemapAlternates, SitemapEntry,
};
