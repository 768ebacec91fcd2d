//! Error kinds shared across the locale, catalog and site modules.

use crate::i18n::Locale;
use thiserror::Error;

/// A locale code that is not part of the registry.
///
/// The resolver never surfaces this: an unregistered first segment is treated
/// as ordinary page content. It is only returned when a caller asks for a
/// `Locale` by code directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Unknown locale code: '{0}'")]
    InvalidLocale(String),
}

/// The locale table handed to `LocaleRegistry::new` is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("No default locale found in registry")]
    NoDefault,

    #[error("Multiple default locales found in registry: {0:?}")]
    MultipleDefaults(Vec<Locale>),

    #[error("Locale '{0}' is registered more than once")]
    DuplicateLocale(Locale),

    #[error("Locale '{0}' has no registry entry")]
    MissingLocale(Locale),
}

/// Loading a message catalog failed.
///
/// Every cause (missing file, unreadable file, malformed JSON, timeout) is
/// reported as `NotFound`: a registered locale without a usable catalog is a
/// deployment error and page generation must stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Message catalog for '{locale}' not found: {reason}")]
    NotFound { locale: Locale, reason: String },
}

/// A request path that does not map to any page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("No {kind} page for '{slug}'")]
    RouteNotFound { kind: &'static str, slug: String },
}
