//! Locale type: the closed set of languages the site is published in.
//!
//! Adding a language means adding a variant here, a row in the registry table
//! and a `messages/<code>.json` catalog. Anything else that looks like a locale
//! code is rejected at construction time.

use crate::error::LocaleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported site locale.
///
/// Serializes as its short code (`"en"`, `"zh"`, `"pt"`), which also makes it
/// usable as a JSON map key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Zh,
    Pt,
}

impl Locale {
    /// Number of locale variants.
    pub const COUNT: usize = 3;

    /// Every variant, in declaration order.
    pub const ALL: [Locale; Locale::COUNT] = [Locale::En, Locale::Zh, Locale::Pt];

    /// Get the short locale code used in URLs and catalog file names.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Pt => "pt",
        }
    }

    /// Create a Locale from its code.
    ///
    /// Matching is case-sensitive: `"ZH"` is not a locale.
    pub fn from_code(code: &str) -> Result<Locale, LocaleError> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| LocaleError::InvalidLocale(code.to_string()))
    }

    /// Dense index of the variant, for per-locale lookup tables.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
