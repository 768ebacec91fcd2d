//! Internationalization (i18n) module for the localized site.
//!
//! # Architecture
//!
//! - `locale`: closed `Locale` enumeration of published languages
//! - `registry`: display and SEO data for every locale, default locale
//! - `routing`: resolving request paths and producing locale-prefixed links
//! - `catalog`: loading and caching per-locale message catalogs
//! - `validator`: catalog completeness checks against the default locale
//! - `format`: locale-aware number and date formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use benchlink_site::i18n::{localize, resolve, Locale, LocaleRegistry};
//!
//! let registry = LocaleRegistry::get();
//! let resolved = resolve(registry, "/zh/contact");
//! assert_eq!(resolved.locale, Locale::Zh);
//! assert_eq!(localize(registry, "/zh/contact", Locale::Pt), "/pt/contact");
//! ```

mod catalog;
mod format;
mod locale;
pub(crate) mod registry;
mod routing;
mod validator;

pub use catalog::{CatalogCache, CatalogLoader, MessageCatalog};
pub use format::{format_date, format_number};
pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleMetadata, LocaleRegistry, TextDirection};
pub use routing::{localize, prefix_path, resolve, strip_locale, switch_locale, ResolvedPath};
pub use validator::{CatalogValidator, ValidationReport};

/// `lang` and `dir` attributes for the document root of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct HtmlAttributes {
    pub lang: &'static str,
    pub dir: &'static str,
}

/// Document root attributes for `locale`.
pub fn html_attributes(registry: &LocaleRegistry, locale: Locale) -> HtmlAttributes {
    HtmlAttributes {
        lang: locale.code(),
        dir: registry.config(locale).direction.as_str(),
    }
}
