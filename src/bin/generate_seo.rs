//! Build-time SEO generator - checks the message catalogs and writes the
//! static sitemap and robots files.
//!
//! Usage:
//!   cargo run --bin generate-seo              # Writes into ./public
//!   cargo run --bin generate-seo -- dist      # Writes into ./dist
//!
//! Optional environment variables:
//! - BASE_URL (defaults to https://benchlinkplus.co)
//! - MESSAGES_DIR (defaults to messages)
//! - CATALOG_LOAD_TIMEOUT_MS (defaults to 5000)

use anyhow::{bail, Context, Result};
use benchlink_site::config::Config;
use benchlink_site::context::SiteContext;
use benchlink_site::i18n::{CatalogLoader, CatalogValidator, MessageCatalog};
use benchlink_site::seo::{generate_sitemap, RobotsPolicy};
use benchlink_site::site::sitemap_routes;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("generate_seo=info".parse()?)
                .add_directive("benchlink_site=info".parse()?),
        )
        .init();

    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "public".to_string()));

    let config = Config::from_env()?;
    let ctx = SiteContext::from_config(&config);

    info!("Loading message catalogs");
    let catalogs = CatalogLoader::from_config(&config)
        .load_all(&ctx.registry)
        .await
        .context("Message catalogs failed to load")?;
    check_catalogs(&ctx, &catalogs)?;

    let written = write_seo_files(&ctx, &out_dir, Utc::now())?;
    for path in &written {
        info!("Wrote {}", path.display());
    }

    info!("SEO files generated in {}", out_dir.display());
    Ok(())
}

/// Validate every catalog against the default locale's catalog. Missing keys
/// fail the run; extra keys and placeholder drift are only reported.
fn check_catalogs(ctx: &SiteContext, catalogs: &[MessageCatalog]) -> Result<()> {
    let default_locale = ctx.registry.default_locale();
    let Some(reference) = catalogs.iter().find(|c| c.locale() == default_locale) else {
        bail!("No catalog loaded for default locale '{}'", default_locale);
    };

    let mut failed = false;
    for catalog in catalogs.iter().filter(|c| c.locale() != default_locale) {
        let report = CatalogValidator::validate(reference, catalog);
        for warning in &report.warnings {
            warn!("[{}] {}", catalog.locale(), warning);
        }
        for err in &report.errors {
            error!("[{}] {}", catalog.locale(), err);
        }
        if report.has_errors() {
            failed = true;
        } else if report.is_clean() {
            info!("[{}] {} keys, all present", catalog.locale(), catalog.len());
        }
    }

    if failed {
        bail!("Message catalogs are incomplete");
    }
    Ok(())
}

/// Write `sitemap.xml`, one `<code>/sitemap.xml` per prefixed locale, and
/// `robots.txt`. Every sitemap shares `generated_at`.
fn write_seo_files(
    ctx: &SiteContext,
    out_dir: &Path,
    generated_at: DateTime<Utc>,
) -> Result<Vec<PathBuf>> {
    let sitemap = generate_sitemap(ctx, &sitemap_routes(), generated_at);
    let mut written = Vec::new();

    let write = |path: PathBuf, body: String, written: &mut Vec<PathBuf>| -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, body).with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
        Ok(())
    };

    write(out_dir.join("sitemap.xml"), sitemap.to_xml(ctx), &mut written)?;

    for locale in ctx.registry.list_locales() {
        if ctx.registry.is_default(locale) {
            continue;
        }
        let path = out_dir.join(locale.code()).join("sitemap.xml");
        write(path, sitemap.for_locale(locale).to_xml(ctx), &mut written)?;
    }

    write(
        out_dir.join("robots.txt"),
        RobotsPolicy::for_site(ctx).to_txt(),
        &mut written,
    )?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlink_site::i18n::{Locale, LocaleRegistry};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn context() -> SiteContext {
        SiteContext::new(LocaleRegistry::get().clone(), "https://benchlinkplus.co", "BenchLink+")
    }

    fn catalog(locale: Locale, json: &str) -> MessageCatalog {
        MessageCatalog::from_json_str(locale, json).unwrap()
    }

    #[test]
    fn test_write_seo_files() {
        let dir = TempDir::new().unwrap();
        let generated_at = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();

        let written = write_seo_files(&context(), dir.path(), generated_at).unwrap();
        assert_eq!(written.len(), 4);

        let full = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        let zh = fs::read_to_string(dir.path().join("zh").join("sitemap.xml")).unwrap();
        let robots = fs::read_to_string(dir.path().join("robots.txt")).unwrap();

        assert!(!dir.path().join("en").exists());
        assert_eq!(full.matches("<url>").count(), 3 * zh.matches("<url>").count());
        assert!(zh.contains("<loc>https://benchlinkplus.co/zh/services/japan-lean</loc>"));
        assert!(!zh.contains("<loc>https://benchlinkplus.co/about</loc>"));
        assert!(full.contains("<lastmod>2026-10-18T00:00:00Z</lastmod>"));
        assert!(robots.contains("Sitemap: https://benchlinkplus.co/pt/sitemap.xml"));
    }

    #[test]
    fn test_check_catalogs_passes_with_extra_keys() {
        let catalogs = vec![
            catalog(Locale::En, r#"{"nav": {"home": "Home"}}"#),
            catalog(Locale::Zh, r#"{"nav": {"home": "首页", "extra": "多余"}}"#),
            catalog(Locale::Pt, r#"{"nav": {"home": "Início"}}"#),
        ];
        assert!(check_catalogs(&context(), &catalogs).is_ok());
    }

    #[test]
    fn test_check_catalogs_fails_on_missing_keys() {
        let catalogs = vec![
            catalog(Locale::En, r#"{"nav": {"home": "Home", "about": "About"}}"#),
            catalog(Locale::Zh, r#"{"nav": {"home": "首页", "about": "关于我们"}}"#),
            catalog(Locale::Pt, r#"{"nav": {"home": "Início"}}"#),
        ];
        assert!(check_catalogs(&context(), &catalogs).is_err());
    }

    #[test]
    fn test_check_catalogs_requires_default() {
        let catalogs = vec![catalog(Locale::Zh, "{}")];
        assert!(check_catalogs(&context(), &catalogs).is_err());
    }
}
