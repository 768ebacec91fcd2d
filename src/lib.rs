//! Locale resolution, message catalogs and localized SEO for the BenchLink+
//! marketing site.

pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod nav;
pub mod seo;
pub mod server;
pub mod site;
