//! Sitemap generation: one entry per (locale, route) pair.

use crate::context::SiteContext;
use crate::i18n::Locale;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapAlternates {
    pub languages: BTreeMap<Locale, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
    pub alternates: SitemapAlternates,

    #[serde(skip)]
    pub locale: Locale,

    #[serde(skip)]
    pub route: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

fn is_root(route: &str) -> bool {
    route.is_empty() || route == "/"
}

/// Crawl frequency hint: the home page changes daily, everything else weekly.
pub fn change_frequency_for(route: &str) -> ChangeFrequency {
    if is_root(route) {
        ChangeFrequency::Daily
    } else {
        ChangeFrequency::Weekly
    }
}

/// Priority: 1.0 for the home page, 0.8 for tour and case study detail pages,
/// 0.7 for everything else.
pub fn priority_for(route: &str) -> f64 {
    if is_root(route) {
        1.0
    } else if route.contains("/services/") || route.contains("/case-studies/") {
        0.8
    } else {
        0.7
    }
}

/// Build the sitemap for `routes` in every registered locale.
///
/// All entries share `generated_at` as their modification time. Entries are
/// ordered by locale (registry order), then route.
pub fn generate<S: AsRef<str>>(
    ctx: &SiteContext,
    routes: &[S],
    generated_at: DateTime<Utc>,
) -> Sitemap {
    let entries = ctx
        .registry
        .list_locales()
        .into_iter()
        .flat_map(|locale| {
            routes.iter().map(move |route| {
                let route = route.as_ref();
                SitemapEntry {
                    url: ctx.localized_url(route, locale),
                    last_modified: generated_at,
                    change_frequency: change_frequency_for(route),
                    priority: priority_for(route),
                    alternates: SitemapAlternates {
                        languages: ctx.alternate_languages(route),
                    },
                    locale,
                    route: route.to_string(),
                }
            })
        })
        .collect();

    Sitemap { entries }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl Sitemap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose URL belongs to `locale`.
    pub fn for_locale(&self, locale: Locale) -> Sitemap {
        Sitemap {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.locale == locale)
                .cloned()
                .collect(),
        }
    }

    /// Render as a sitemaps.org `urlset` with `xhtml:link` alternates.
    pub fn to_xml(&self, ctx: &SiteContext) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
             xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
        );

        for entry in &self.entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
            for locale in ctx.registry.list_locales() {
                if let Some(url) = entry.alternates.languages.get(&locale) {
                    xml.push_str(&format!(
                        "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
                        ctx.registry.config(locale).hreflang,
                        escape_xml(url)
                    ));
                }
            }
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                entry
                    .last_modified
                    .to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.change_frequency.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
