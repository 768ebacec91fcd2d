//! Message catalogs: per-locale translated strings.
//!
//! Catalogs live in `<messages_dir>/<code>.json` as nested JSON objects and are
//! flattened into dotted keys (`{"nav": {"home": "Home"}}` becomes `nav.home`).
//! A registered locale without a readable catalog is a deployment error: the
//! loader reports `CatalogError::NotFound` and callers abort instead of
//! rendering blank strings.

use crate::config::Config;
use crate::error::CatalogError;
use crate::i18n::{Locale, LocaleRegistry};
use futures::future::try_join_all;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

/// Translated strings for one locale, keyed by dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: Locale,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Parse a catalog from its JSON source.
    ///
    /// The document root must be an object. Numbers and booleans are stored
    /// as their JSON text; array elements are keyed by index (`items.0`).
    pub fn from_json_str(locale: Locale, source: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(source).map_err(|e| CatalogError::NotFound {
            locale,
            reason: format!("invalid JSON: {}", e),
        })?;

        if !value.is_object() {
            return Err(CatalogError::NotFound {
                locale,
                reason: "catalog root must be a JSON object".to_string(),
            });
        }

        let mut messages = HashMap::new();
        flatten("", &value, &mut messages);
        Ok(Self { locale, messages })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Get the message for a dotted key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Get the message for `key`, or the key itself when it is missing.
    ///
    /// Missing keys render visibly instead of as blank text; the catalog
    /// validator reports them at build time.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Get the message for `key` with `{name}` placeholders substituted.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> Option<String> {
        let template = self.get(key)?;
        Some(
            args.iter()
                .fold(template.to_string(), |text, (name, value)| {
                    text.replace(&format!("{{{}}}", name), value)
                }),
        )
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// All keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten(&join(key), child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten(&join(&index.to_string()), child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

/// Loads catalogs from a directory of `<code>.json` files.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    dir: PathBuf,
    timeout: Duration,
}

impl CatalogLoader {
    pub fn new(dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            dir: dir.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.messages_dir,
            Duration::from_millis(config.catalog_load_timeout_ms),
        )
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the catalog of `locale`.
    pub fn path_for(&self, locale: Locale) -> PathBuf {
        self.dir.join(format!("{}.json", locale.code()))
    }

    /// Load the catalog of `locale`.
    ///
    /// A read that does not finish within the configured timeout counts as a
    /// missing catalog.
    pub async fn load(&self, locale: Locale) -> Result<MessageCatalog, CatalogError> {
        let path = self.path_for(locale);
        let source = self
            .read_with_timeout(locale, &path, tokio::fs::read_to_string(&path))
            .await?;

        let catalog = MessageCatalog::from_json_str(locale, &source)?;
        debug!(
            "Loaded {} messages for '{}' from {}",
            catalog.len(),
            locale,
            path.display()
        );
        Ok(catalog)
    }

    /// Await `read`, mapping both a timeout and an I/O error to `NotFound`.
    async fn read_with_timeout<F>(
        &self,
        locale: Locale,
        path: &Path,
        read: F,
    ) -> Result<String, CatalogError>
    where
        F: Future<Output = std::io::Result<String>>,
    {
        tokio::time::timeout(self.timeout, read)
            .await
            .map_err(|_| CatalogError::NotFound {
                locale,
                reason: format!(
                    "timed out after {}ms reading {}",
                    self.timeout.as_millis(),
                    path.display()
                ),
            })?
            .map_err(|e| CatalogError::NotFound {
                locale,
                reason: format!("{}: {}", path.display(), e),
            })
    }

    /// Load every registered catalog concurrently, in registry order.
    pub async fn load_all(
        &self,
        registry: &LocaleRegistry,
    ) -> Result<Vec<MessageCatalog>, CatalogError> {
        try_join_all(
            registry
                .list_locales()
                .into_iter()
                .map(|locale| self.load(locale)),
        )
        .await
    }
}

/// Lazily loaded catalogs shared by every render that uses this cache.
///
/// Each locale is loaded at most once; concurrent callers wait on the same
/// in-flight load. Failed loads are not cached.
#[derive(Debug)]
pub struct CatalogCache {
    loader: CatalogLoader,
    cells: [OnceCell<Arc<MessageCatalog>>; Locale::COUNT],
}

impl CatalogCache {
    pub fn new(loader: CatalogLoader) -> Self {
        Self {
            loader,
            cells: std::array::from_fn(|_| OnceCell::new()),
        }
    }

    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    /// Get the catalog of `locale`, loading it on first use.
    pub async fn get(&self, locale: Locale) -> Result<Arc<MessageCatalog>, CatalogError> {
        self.cells[locale.index()]
            .get_or_try_init(|| async { self.loader.load(locale).await.map(Arc::new) })
            .await
            .map(Arc::clone)
    }

    /// Load every registered catalog up front, failing on the first one
    /// that is missing.
    pub async fn preload(&self, registry: &LocaleRegistry) -> Result<(), CatalogError> {
        let locales = registry.list_locales();
        if let Err(e) = try_join_all(locales.iter().map(|locale| self.get(*locale))).await {
            error!("Message catalog check failed: {}", e);
            return Err(e);
        }

        info!(
            "Loaded {} message catalogs from {}",
            locales.len(),
            self.loader.dir().display()
        );
        Ok(())
    }
}
