//! Header navigation and language switcher model.

use crate::context::SiteContext;
use crate::i18n::{localize, resolve, switch_locale, Locale, MessageCatalog};
use serde::Serialize;

/// Header links as (route, catalog key under `nav.`).
const HEADER_LINKS: [(&str, &str); 5] = [
    ("/", "home"),
    ("/about", "about"),
    ("/services", "services"),
    ("/case-studies", "caseStudies"),
    ("/contact", "contact"),
];

const CTA_LINK: (&str, &str) = ("/inquiry", "inquiry");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: Locale,
    pub name: String,
    pub flag: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavModel {
    pub links: Vec<NavLink>,
    pub cta: NavLink,
    pub languages: Vec<LanguageOption>,
}

/// A link is active on its own route and on any page below it. The home
/// link is only active on the home page.
fn is_active(route: &str, remainder: &str) -> bool {
    let remainder = remainder
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    if route == "/" {
        return remainder == "/" || remainder.is_empty();
    }
    remainder == route
        || remainder
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn nav_link(
    ctx: &SiteContext,
    catalog: &MessageCatalog,
    locale: Locale,
    remainder: &str,
    (route, key): (&str, &str),
) -> NavLink {
    NavLink {
        href: localize(&ctx.registry, route, locale),
        label: catalog.text(&format!("nav.{}", key)).to_string(),
        active: is_active(route, remainder),
    }
}

impl NavModel {
    /// Build the navigation for a page rendered in `locale` at `current_path`.
    pub fn build(
        ctx: &SiteContext,
        catalog: &MessageCatalog,
        locale: Locale,
        current_path: &str,
    ) -> Self {
        let remainder = resolve(&ctx.registry, current_path).remainder;

        let links = HEADER_LINKS
            .iter()
            .map(|link| nav_link(ctx, catalog, locale, &remainder, *link))
            .collect();
        let cta = nav_link(ctx, catalog, locale, &remainder, CTA_LINK);

        let languages = ctx
            .registry
            .list_configs()
            .iter()
            .map(|config| LanguageOption {
                code: config.locale,
                name: config.name.to_string(),
                flag: config.flag.to_string(),
                href: switch_locale(&ctx.registry, current_path, locale, config.locale),
                active: config.locale == locale,
            })
            .collect();

        Self {
            links,
            cta,
            languages,
        }
    }
}
