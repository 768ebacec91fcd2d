//! Immutable site-wide context shared by the SEO and navigation builders.

use crate::config::Config;
use crate::i18n::{localize, Locale, LocaleRegistry};
use std::collections::BTreeMap;

/// Locale registry plus the site identity every URL and metadata block needs.
///
/// Built once at startup and shared read-only (behind an `Arc` in the server).
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub registry: LocaleRegistry,

    /// Site origin without trailing slash (e.g., "https://benchlinkplus.co")
    pub base_url: String,

    pub site_name: String,

    /// Image path used when a page does not supply its own
    pub default_image: String,
}

impl SiteContext {
    pub fn new(
        registry: LocaleRegistry,
        base_url: impl Into<String>,
        site_name: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            site_name: site_name.into(),
            default_image: "/og-image.jpg".to_string(),
        }
    }

    pub fn with_default_image(mut self, image: impl Into<String>) -> Self {
        self.default_image = image.into();
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            LocaleRegistry::get().clone(),
            &config.base_url,
            &config.site_name,
        )
        .with_default_image(&config.default_og_image)
    }

    /// Absolute URL of a site-relative path. The site root has no trailing
    /// slash (`https://benchlinkplus.co`, not `https://benchlinkplus.co/`).
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        match path {
            "" | "/" => self.base_url.clone(),
            _ if path.starts_with('/') => format!("{}{}", self.base_url, path),
            _ => format!("{}/{}", self.base_url, path),
        }
    }

    /// Absolute URL of `path` in `locale`.
    pub fn localized_url(&self, path: &str, locale: Locale) -> String {
        self.absolute(&localize(&self.registry, path, locale))
    }

    /// One absolute URL per registered locale for the same page.
    pub fn alternate_languages(&self, path: &str) -> BTreeMap<Locale, String> {
        self.registry
            .list_locales()
            .into_iter()
            .map(|locale| (locale, self.localized_url(path, locale)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SiteContext {
        SiteContext::new(LocaleRegistry::get().clone(), "https://example.com/", "Example")
    }

    // ==================== absolute Tests ====================

    #[test]
    fn test_new_trims_base_url() {
        assert_eq!(context().base_url, "https://example.com");
    }

    #[test]
    fn test_absolute_paths() {
        let ctx = context();
        assert_eq!(ctx.absolute("/"), "https://example.com");
        assert_eq!(ctx.absolute(""), "https://example.com");
        assert_eq!(ctx.absolute("/about"), "https://example.com/about");
        assert_eq!(ctx.absolute("og.jpg"), "https://example.com/og.jpg");
        assert_eq!(ctx.absolute("https://cdn.example.com/a.jpg"), "https://cdn.example.com/a.jpg");
    }

    // ==================== localized_url Tests ====================

    #[test]
    fn test_localized_url() {
        let ctx = context();
        assert_eq!(ctx.localized_url("/about", Locale::En), "https://example.com/about");
        assert_eq!(ctx.localized_url("/about", Locale::Pt), "https://example.com/pt/about");
        assert_eq!(ctx.localized_url("/", Locale::Zh), "https://example.com/zh");
        assert_eq!(ctx.localized_url("/", Locale::En), "https://example.com");
    }

    #[test]
    fn test_alternate_languages_has_every_locale() {
        let languages = context().alternate_languages("/contact");
        assert_eq!(languages.len(), 3);
        assert_eq!(languages[&Locale::En], "https://example.com/contact");
        assert_eq!(languages[&Locale::Zh], "https://example.com/zh/contact");
        assert_eq!(languages[&Locale::Pt], "https://example.com/pt/contact");
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            base_url: "https://benchlinkplus.co".to_string(),
            site_name: "BenchLink+".to_string(),
            default_og_image: "/default.jpg".to_string(),
            messages_dir: "messages".to_string(),
            catalog_load_timeout_ms: 5000,
            port: 8080,
        };
        let ctx = SiteContext::from_config(&config);
        assert_eq!(ctx.site_name, "BenchLink+");
        assert_eq!(ctx.default_image, "/default.jpg");
        assert_eq!(ctx.registry.default_locale(), Locale::En);
    }
}
