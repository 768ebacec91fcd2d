//! Locale-prefixed routing: resolving request paths and localizing links.
//!
//! The default locale is served without a prefix (`/contact`); every other
//! locale is served under `/<code>` (`/zh/contact`). Resolution rules:
//!
//! - Only a registered, non-default code in the first segment is a prefix.
//!   Anything else (`/xx/...`, `/ZH/...`, `/en/...`) is page content.
//! - Codes are matched case-sensitively and paths are not normalized:
//!   `/zh//contact` resolves to `zh` with remainder `//contact`.
//! - The bare prefix `/zh` and `/zh/` both resolve to the root `/`.
//! - A query string or fragment is split off before matching and re-attached
//!   to the remainder.

use crate::i18n::{Locale, LocaleRegistry};
use tracing::warn;

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub locale: Locale,

    /// Locale-independent part of the path
    pub remainder: String,

    /// `false` means no prefix was present and the default locale applies
    pub had_explicit_prefix: bool,
}

/// Split `path` at the first `?` or `#`.
fn split_suffix(path: &str) -> (&str, &str) {
    match path.find(|c: char| c == '?' || c == '#') {
        Some(index) => path.split_at(index),
        None => (path, ""),
    }
}

/// Resolve the locale of a request path.
pub fn resolve(registry: &LocaleRegistry, path: &str) -> ResolvedPath {
    let path = if path.is_empty() { "/" } else { path };
    let (path_part, suffix) = split_suffix(path);

    if let Some(rest) = path_part.strip_prefix('/') {
        let (segment, tail) = match rest.find('/') {
            Some(index) => rest.split_at(index),
            None => (rest, ""),
        };

        if let Some(locale) = registry
            .parse(segment)
            .filter(|locale| !registry.is_default(*locale))
        {
            let tail = if tail.is_empty() { "/" } else { tail };
            return ResolvedPath {
                locale,
                remainder: format!("{}{}", tail, suffix),
                had_explicit_prefix: true,
            };
        }
    }

    ResolvedPath {
        locale: registry.default_locale(),
        remainder: path.to_string(),
        had_explicit_prefix: false,
    }
}

/// Remove the locale prefix from a path, if it has one.
pub fn strip_locale(registry: &LocaleRegistry, path: &str) -> String {
    resolve(registry, path).remainder
}

/// Apply the prefix of `locale` to a locale-independent path.
///
/// The path is not inspected for an existing prefix; use `localize` for
/// paths that may already carry one.
pub fn prefix_path(registry: &LocaleRegistry, path: &str, locale: Locale) -> String {
    if registry.is_default(locale) {
        return if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        };
    }

    let (path_part, suffix) = split_suffix(path);
    match path_part {
        "" | "/" => format!("/{}{}", locale.code(), suffix),
        _ if path_part.starts_with('/') => format!("/{}{}{}", locale.code(), path_part, suffix),
        _ => format!("/{}/{}{}", locale.code(), path_part, suffix),
    }
}

/// Remove every leading non-default locale segment (`/zh/pt/x` -> `/x`).
fn strip_all_prefixes(registry: &LocaleRegistry, path: &str) -> String {
    let mut resolved = resolve(registry, path);
    while resolved.had_explicit_prefix {
        resolved = resolve(registry, &resolved.remainder);
    }
    resolved.remainder
}

/// Produce the path for `target` from a path in any locale.
///
/// Idempotent: localizing an already localized path returns it unchanged.
/// Stacked prefixes are all removed before `target` is applied.
pub fn localize(registry: &LocaleRegistry, path: &str, target: Locale) -> String {
    prefix_path(registry, &strip_all_prefixes(registry, path), target)
}

/// Path to navigate to when the user switches language from `from` to `to`.
///
/// The page-specific part of the path is preserved exactly. Switching to the
/// current locale returns `current_path` untouched.
pub fn switch_locale(
    registry: &LocaleRegistry,
    current_path: &str,
    from: Locale,
    to: Locale,
) -> String {
    if from == to {
        return current_path.to_string();
    }

    let resolved = resolve(registry, current_path);
    if resolved.locale != from {
        warn!(
            "Switching locale from '{}' but path '{}' resolves to '{}'",
            from, current_path, resolved.locale
        );
    }

    localize(registry, current_path, to)
}
