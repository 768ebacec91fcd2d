//! Locale registry: single source of truth for all published locales.
//!
//! The registry holds display data (name, flag) and SEO data (hreflang tag,
//! Open Graph locale, text direction) for every `Locale`, in the canonical
//! display order used by the language switcher and the sitemap. It is built
//! once and never mutated. `LocaleRegistry::get()` returns the built-in table;
//! components receive the registry explicitly through `SiteContext`.

use crate::error::{LocaleError, RegistryError};
use crate::i18n::Locale;
use serde::Serialize;
use std::sync::OnceLock;

/// Text direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Configuration for a published locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    pub locale: Locale,

    /// Name of the language in its own script (e.g., "中文")
    pub name: &'static str,

    /// Flag glyph shown in the language switcher
    pub flag: &'static str,

    /// Tag emitted in `hreflang` attributes (e.g., "zh-Hans")
    pub hreflang: &'static str,

    /// Open Graph locale (e.g., "zh_CN")
    pub og_locale: &'static str,

    /// BCP 47 tag used for number and date formatting (e.g., "zh-CN")
    pub intl_tag: &'static str,

    pub direction: TextDirection,

    /// Whether URLs for this locale omit the prefix segment (exactly one)
    pub is_default: bool,
}

/// SEO attributes of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleMetadata {
    pub hreflang: &'static str,
    pub og_locale: &'static str,
    pub direction: TextDirection,
}

/// Validated, immutable table of published locales.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    /// Entries in display order
    locales: Vec<LocaleConfig>,

    /// Position in `locales` for each `Locale::index()`
    positions: [usize; Locale::COUNT],

    default: Locale,
}

/// Built-in registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Build a registry from a locale table.
    ///
    /// The table must list every `Locale` exactly once and mark exactly one
    /// entry as default. The table order becomes the display order.
    pub fn new(locales: Vec<LocaleConfig>) -> Result<Self, RegistryError> {
        let mut positions = [usize::MAX; Locale::COUNT];
        for (position, config) in locales.iter().enumerate() {
            let slot = &mut positions[config.locale.index()];
            if *slot != usize::MAX {
                return Err(RegistryError::DuplicateLocale(config.locale));
            }
            *slot = position;
        }

        if let Some(missing) = Locale::ALL
            .into_iter()
            .find(|locale| positions[locale.index()] == usize::MAX)
        {
            return Err(RegistryError::MissingLocale(missing));
        }

        let defaults: Vec<Locale> = locales
            .iter()
            .filter(|config| config.is_default)
            .map(|config| config.locale)
            .collect();

        let default = match defaults.as_slice() {
            [] => return Err(RegistryError::NoDefault),
            [only] => *only,
            _ => return Err(RegistryError::MultipleDefaults(defaults)),
        };

        Ok(Self {
            locales,
            positions,
            default,
        })
    }

    /// Get the built-in locale registry.
    ///
    /// # Panics
    /// Panics if the built-in table is malformed. The table is covered by unit
    /// tests, so this indicates a broken edit to `default_locales()`.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| {
            LocaleRegistry::new(default_locales()).expect("built-in locale table is valid")
        })
    }

    /// Check whether `code` names a registered locale (case-sensitive).
    pub fn is_valid_locale(&self, code: &str) -> bool {
        self.parse(code).is_some()
    }

    /// Look up a registered locale by code.
    pub fn parse(&self, code: &str) -> Option<Locale> {
        self.locales
            .iter()
            .map(|config| config.locale)
            .find(|locale| locale.code() == code)
    }

    /// Get the full configuration of a locale.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        &self.locales[self.positions[locale.index()]]
    }

    /// Get the SEO attributes of a locale.
    pub fn metadata(&self, locale: Locale) -> LocaleMetadata {
        let config = self.config(locale);
        LocaleMetadata {
            hreflang: config.hreflang,
            og_locale: config.og_locale,
            direction: config.direction,
        }
    }

    /// Get the SEO attributes for a raw locale code.
    pub fn metadata_for_code(&self, code: &str) -> Result<LocaleMetadata, LocaleError> {
        self.parse(code)
            .map(|locale| self.metadata(locale))
            .ok_or_else(|| LocaleError::InvalidLocale(code.to_string()))
    }

    /// Registered locales in display order.
    pub fn list_locales(&self) -> Vec<Locale> {
        self.locales.iter().map(|config| config.locale).collect()
    }

    /// Registered locale configurations in display order.
    pub fn list_configs(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// The locale whose paths carry no prefix.
    pub fn default_locale(&self) -> Locale {
        self.default
    }

    pub fn is_default(&self, locale: Locale) -> bool {
        locale == self.default
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// Default locale table, in display order.
pub(crate) fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::En,
            name: "English",
            flag: "🇬🇧",
            hreflang: "en",
            og_locale: "en_US",
            intl_tag: "en-US",
            direction: TextDirection::Ltr,
            is_default: true,
        },
        LocaleConfig {
            locale: Locale::Zh,
            name: "中文",
            flag: "🇨🇳",
            hreflang: "zh-Hans",
            og_locale: "zh_CN",
            intl_tag: "zh-CN",
            direction: TextDirection::Ltr,
            is_default: false,
        },
        LocaleConfig {
            locale: Locale::Pt,
            name: "Português",
            flag: "🇵🇹",
            hreflang: "pt",
            og_locale: "pt_PT",
            intl_tag: "pt-PT",
            direction: TextDirection::Ltr,
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Built-in Table Tests ====================

    #[test]
    fn test_default_table_is_valid() {
        assert!(LocaleRegistry::new(default_locales()).is_ok());
    }

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_default_locale_is_english() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.default_locale(), Locale::En);
        assert!(registry.is_default(Locale::En));
        assert!(!registry.is_default(Locale::Zh));
    }

    #[test]
    fn test_list_locales_display_order() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.list_locales(), vec![Locale::En, Locale::Zh, Locale::Pt]);
        assert_eq!(registry.list_locales(), registry.list_locales());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_display_data() {
        let registry = LocaleRegistry::get();
        let zh = registry.config(Locale::Zh);
        assert_eq!(zh.name, "中文");
        assert_eq!(zh.flag, "🇨🇳");
        assert_eq!(registry.config(Locale::Pt).name, "Português");
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_is_valid_locale() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_valid_locale("en"));
        assert!(registry.is_valid_locale("zh"));
        assert!(registry.is_valid_locale("pt"));
        assert!(!registry.is_valid_locale("fr"));
        assert!(!registry.is_valid_locale("ZH"));
        assert!(!registry.is_valid_locale(""));
    }

    #[test]
    fn test_metadata() {
        let registry = LocaleRegistry::get();
        let zh = registry.metadata(Locale::Zh);
        assert_eq!(zh.hreflang, "zh-Hans");
        assert_eq!(zh.og_locale, "zh_CN");
        assert_eq!(zh.direction, TextDirection::Ltr);
        assert_eq!(registry.metadata(Locale::Pt).og_locale, "pt_PT");
        assert_eq!(registry.metadata(Locale::En).og_locale, "en_US");
    }

    #[test]
    fn test_metadata_for_code_invalid() {
        let registry = LocaleRegistry::get();
        assert!(registry.metadata_for_code("pt").is_ok());
        assert_eq!(
            registry.metadata_for_code("xx"),
            Err(LocaleError::InvalidLocale("xx".to_string()))
        );
    }

    // ==================== Construction Error Tests ====================

    #[test]
    fn test_new_rejects_no_default() {
        let mut table = default_locales();
        table[0].is_default = false;
        assert_eq!(LocaleRegistry::new(table).unwrap_err(), RegistryError::NoDefault);
    }

    #[test]
    fn test_new_rejects_multiple_defaults() {
        let mut table = default_locales();
        table[2].is_default = true;
        assert_eq!(
            LocaleRegistry::new(table).unwrap_err(),
            RegistryError::MultipleDefaults(vec![Locale::En, Locale::Pt])
        );
    }

    #[test]
    fn test_new_rejects_duplicate() {
        let mut table = default_locales();
        table[2].locale = Locale::Zh;
        assert_eq!(
            LocaleRegistry::new(table).unwrap_err(),
            RegistryError::DuplicateLocale(Locale::Zh)
        );
    }

    #[test]
    fn test_new_rejects_missing() {
        let mut table = default_locales();
        table.pop();
        assert_eq!(
            LocaleRegistry::new(table).unwrap_err(),
            RegistryError::MissingLocale(Locale::Pt)
        );
    }

    #[test]
    fn test_new_keeps_table_order_and_default() {
        let mut table = default_locales();
        table.reverse();
        table[0].is_default = true;
        table[2].is_default = false;
        let registry = LocaleRegistry::new(table).expect("Should build");
        assert_eq!(registry.list_locales(), vec![Locale::Pt, Locale::Zh, Locale::En]);
        assert_eq!(registry.default_locale(), Locale::Pt);
        assert_eq!(registry.config(Locale::En).name, "English");
    }
}
