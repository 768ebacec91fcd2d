use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub base_url: String,
    pub site_name: String,
    pub default_og_image: String,

    // Message catalogs
    pub messages_dir: String,
    pub catalog_load_timeout_ms: u64,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("BASE_URL")
            .or_else(|_| std::env::var("NEXT_PUBLIC_BASE_URL"))
            .unwrap_or_else(|_| "https://benchlinkplus.co".to_string());

        Ok(Self {
            base_url: normalize_base_url(&base_url)?,
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| "BenchLink+".to_string()),
            default_og_image: std::env::var("DEFAULT_OG_IMAGE")
                .unwrap_or_else(|_| "/og-image.jpg".to_string()),

            messages_dir: std::env::var("MESSAGES_DIR").unwrap_or_else(|_| "messages".to_string()),
            catalog_load_timeout_ms: match std::env::var("CATALOG_LOAD_TIMEOUT_MS") {
                Ok(value) => value
                    .parse()
                    .context("CATALOG_LOAD_TIMEOUT_MS must be a number of milliseconds")?,
                Err(_) => 5000,
            },

            port: match std::env::var("PORT") {
                Ok(value) => value.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },
        })
    }
}

/// Strip trailing slashes and check the scheme of the site origin.
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));

    match host {
        None => bail!("BASE_URL must start with http:// or https://, got '{}'", raw),
        Some("") => bail!("BASE_URL has no host: '{}'", raw),
        Some(_) => Ok(trimmed.to_string()),
    }
}
