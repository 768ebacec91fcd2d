//! Page metadata: canonical URL, hreflang alternates, Open Graph, Twitter card
//! and robots directives for one page in one locale.

use crate::context::SiteContext;
use crate::i18n::{Locale, LocaleRegistry};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

/// The fields a page supplies to get its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub locale: Locale,
    pub title: String,
    pub description: String,

    /// Locale-independent page path (e.g., "/about"); "" and "/" are the root
    pub path: String,

    /// Site-relative or absolute image; the site default when `None`
    pub image: Option<String>,

    pub no_index: bool,
}

impl PageMetadata {
    pub fn new(locale: Locale, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            locale,
            title: title.into(),
            description: description.into(),
            path: String::new(),
            image: None,
            no_index: false,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_no_index(mut self, no_index: bool) -> Self {
        self.no_index = no_index;
        self
    }
}

/// Whether search engines may index a page.
///
/// There is no partial state: a page is either fully indexable with extended
/// crawler hints, or excluded from the index while its links are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsDirective {
    Indexable,
    NoIndex,
}

#[derive(Serialize)]
struct RobotsRepr {
    index: bool,
    follow: bool,
    #[serde(rename = "googleBot", skip_serializing_if = "Option::is_none")]
    google_bot: Option<GoogleBotRepr>,
}

#[derive(Serialize)]
struct GoogleBotRepr {
    index: bool,
    follow: bool,
    #[serde(rename = "max-video-preview")]
    max_video_preview: i32,
    #[serde(rename = "max-image-preview")]
    max_image_preview: &'static str,
    #[serde(rename = "max-snippet")]
    max_snippet: i32,
}

impl RobotsDirective {
    pub fn from_no_index(no_index: bool) -> Self {
        if no_index {
            RobotsDirective::NoIndex
        } else {
            RobotsDirective::Indexable
        }
    }

    pub fn index(self) -> bool {
        self == RobotsDirective::Indexable
    }

    pub fn follow(self) -> bool {
        true
    }

    /// Value of the `<meta name="robots">` tag.
    pub fn meta_content(self) -> &'static str {
        match self {
            RobotsDirective::Indexable => {
                "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
            }
            RobotsDirective::NoIndex => "noindex, follow",
        }
    }

    fn repr(self) -> RobotsRepr {
        RobotsRepr {
            index: self.index(),
            follow: self.follow(),
            google_bot: self.index().then_some(GoogleBotRepr {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: "large",
                max_snippet: -1,
            }),
        }
    }
}

impl Serialize for RobotsDirective {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.repr().serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternates {
    /// Locale → absolute URL of the same page, one entry per registered locale
    pub languages: BTreeMap<Locale, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OpenGraphImage>,
    pub locale: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Complete SEO metadata of one page in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataBundle {
    pub locale: Locale,
    pub title: String,
    pub description: String,
    pub metadata_base: String,
    pub canonical: String,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: RobotsDirective,
}

/// Build the metadata bundle of a page.
pub fn synthesize(ctx: &SiteContext, page: &PageMetadata) -> MetadataBundle {
    let canonical = ctx.localized_url(&page.path, page.locale);
    let image_url = ctx.absolute(page.image.as_deref().unwrap_or(&ctx.default_image));

    MetadataBundle {
        locale: page.locale,
        title: page.title.clone(),
        description: page.description.clone(),
        metadata_base: ctx.base_url.clone(),
        canonical: canonical.clone(),
        alternates: Alternates {
            languages: ctx.alternate_languages(&page.path),
        },
        open_graph: OpenGraph {
            title: page.title.clone(),
            description: page.description.clone(),
            url: canonical,
            site_name: ctx.site_name.clone(),
            images: vec![OpenGraphImage {
                url: image_url.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: page.title.clone(),
            }],
            locale: ctx.registry.metadata(page.locale).og_locale,
            kind: "website",
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: page.title.clone(),
            description: page.description.clone(),
            images: vec![image_url],
        },
        robots: RobotsDirective::from_no_index(page.no_index),
    }
}

/// Metadata for a tour detail page (`/services/<slug>`).
pub fn service_metadata(
    ctx: &SiteContext,
    locale: Locale,
    name: &str,
    description: &str,
    slug: &str,
) -> MetadataBundle {
    let page = PageMetadata::new(
        locale,
        format!("{} | Benchmarking Tour | {}", name, ctx.site_name),
        description,
    )
    .with_path(format!("/services/{}", slug))
    .with_image(format!("/routes/{}-og.jpg", slug));

    synthesize(ctx, &page)
}

/// Metadata for a case study detail page (`/case-studies/<slug>`).
pub fn case_study_metadata(
    ctx: &SiteContext,
    locale: Locale,
    client_name: &str,
    industry: &str,
    result: &str,
    slug: &str,
) -> MetadataBundle {
    let page = PageMetadata::new(
        locale,
        format!("{} Case Study | {} | {}", client_name, industry, ctx.site_name),
        format!(
            "{}. Discover how {} achieved breakthrough results through {} benchmarking programs.",
            result, client_name, ctx.site_name
        ),
    )
    .with_path(format!("/case-studies/{}", slug))
    .with_image(format!("/case-studies/{}-og.jpg", slug));

    synthesize(ctx, &page)
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl MetadataBundle {
    /// `<head>` tags for the canonical link, hreflang alternates and robots.
    ///
    /// Alternates use the registry hreflang tags, plus `x-default` pointing at
    /// the default-locale URL.
    pub fn head_links(&self, registry: &LocaleRegistry) -> String {
        let mut html = format!(
            "<link rel=\"canonical\" href=\"{}\" />\n",
            escape_attr(&self.canonical)
        );

        for locale in registry.list_locales() {
            if let Some(url) = self.alternates.languages.get(&locale) {
                html.push_str(&format!(
                    "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
                    registry.config(locale).hreflang,
                    escape_attr(url)
                ));
            }
        }

        if let Some(url) = self.alternates.languages.get(&registry.default_locale()) {
            html.push_str(&format!(
                "<link rel=\"alternate\" hreflang=\"x-default\" href=\"{}\" />\n",
                escape_attr(url)
            ));
        }

        html.push_str(&format!(
            "<meta name=\"robots\" content=\"{}\" />\n",
            self.robots.meta_content()
        ));
        html
    }
}
