//! Site routes: the static pages and the tour / case study detail pages.
//!
//! Routes are locale-independent paths; every route exists in every locale.

use crate::context::SiteContext;
use crate::error::SiteError;
use crate::i18n::{Locale, MessageCatalog};
use crate::seo::{self, MetadataBundle, PageMetadata};
use regex::Regex;
use std::sync::OnceLock;

/// A page with fixed copy; title and description come from the catalog
/// (`pages.<key>.title`, `pages.<key>.description`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPage {
    pub route: &'static str,
    pub key: &'static str,

    /// Reachable but excluded from search indexes and the sitemap
    pub no_index: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePage {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudyPage {
    pub slug: &'static str,
    pub client_name: &'static str,
    pub industry: &'static str,
    pub result: &'static str,
}

pub static STATIC_PAGES: [StaticPage; 10] = [
    StaticPage { route: "/", key: "home", no_index: false },
    StaticPage { route: "/about", key: "about", no_index: false },
    StaticPage { route: "/services", key: "services", no_index: false },
    StaticPage { route: "/case-studies", key: "caseStudies", no_index: false },
    StaticPage { route: "/contact", key: "contact", no_index: false },
    StaticPage { route: "/inquiry", key: "inquiry", no_index: false },
    StaticPage { route: "/privacy-policy", key: "privacyPolicy", no_index: false },
    StaticPage { route: "/terms", key: "terms", no_index: false },
    StaticPage { route: "/cookies", key: "cookies", no_index: false },
    StaticPage { route: "/inquiry/thank-you", key: "thankYou", no_index: true },
];

pub static SERVICES: [ServicePage; 7] = [
    ServicePage {
        slug: "germany-industry-4",
        name: "Germany Industry 4.0 Benchmarking Tour",
        description: "Immerse your team in the birthplace of Industry 4.0. Visit world-renowned smart factories, engage with innovation leaders, and discover cutting-edge automation, IoT, and digital twin technologies.",
    },
    ServicePage {
        slug: "shanghai-innovation",
        name: "Shanghai Innovation Ecosystem",
        description: "Discover how Shanghai leads China's innovation revolution. Visit Tesla Gigafactory, engage with AI startups, and explore smart city initiatives.",
    },
    ServicePage {
        slug: "shenzhen-manufacturing",
        name: "Shenzhen Smart Manufacturing",
        description: "Walk the factory floors of the world's hardware capital and see how Shenzhen's suppliers move from prototype to mass production in weeks.",
    },
    ServicePage {
        slug: "suzhou-excellence",
        name: "Suzhou Operational Excellence",
        description: "Study lean operations and quality systems at Suzhou Industrial Park's leading multinational and domestic manufacturers.",
    },
    ServicePage {
        slug: "silicon-valley",
        name: "Silicon Valley Innovation Tour",
        description: "Meet product and engineering leaders at Silicon Valley's technology companies and learn how they build, ship and scale.",
    },
    ServicePage {
        slug: "portugal-innovation",
        name: "Portugal Innovation & Startups",
        description: "Explore Lisbon and Porto's startup ecosystem, renewable energy projects and digital public services.",
    },
    ServicePage {
        slug: "japan-lean",
        name: "Japan Lean Manufacturing",
        description: "Learn the Toyota Production System at its source with gemba walks through Japan's benchmark lean factories.",
    },
];

pub static CASE_STUDIES: [CaseStudyPage; 3] = [
    CaseStudyPage {
        slug: "automotive-digital-transformation",
        client_name: "Leading Automotive Manufacturer",
        industry: "Automotive",
        result: "Reduced production cycle time by 35% within 6 months",
    },
    CaseStudyPage {
        slug: "electronics-supply-chain",
        client_name: "Global Electronics Brand",
        industry: "Electronics",
        result: "Cut supplier lead times by 28% after a Shenzhen supply chain program",
    },
    CaseStudyPage {
        slug: "pharma-quality-control",
        client_name: "European Pharmaceutical Group",
        industry: "Pharmaceuticals",
        result: "Halved batch release time with digital quality control practices",
    },
];

/// A page the router can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Static(&'static StaticPage),
    Service(&'static ServicePage),
    CaseStudy(&'static CaseStudyPage),
}

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

fn is_valid_slug(slug: &str) -> bool {
    let regex = SLUG_REGEX
        .get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));
    regex.is_match(slug)
}

/// Look up a tour detail page by slug.
pub fn find_service(slug: &str) -> Result<&'static ServicePage, SiteError> {
    is_valid_slug(slug)
        .then(|| SERVICES.iter().find(|service| service.slug == slug))
        .flatten()
        .ok_or_else(|| SiteError::RouteNotFound {
            kind: "service",
            slug: slug.to_string(),
        })
}

/// Look up a case study detail page by slug.
pub fn find_case_study(slug: &str) -> Result<&'static CaseStudyPage, SiteError> {
    is_valid_slug(slug)
        .then(|| CASE_STUDIES.iter().find(|study| study.slug == slug))
        .flatten()
        .ok_or_else(|| SiteError::RouteNotFound {
            kind: "case study",
            slug: slug.to_string(),
        })
}

/// Match a locale-independent path (a resolver remainder) to a page.
///
/// Query strings and fragments are ignored.
pub fn match_page(path: &str) -> Result<Page, SiteError> {
    let path = path
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let path = if path.is_empty() { "/" } else { path };

    if let Some(page) = STATIC_PAGES.iter().find(|page| page.route == path) {
        return Ok(Page::Static(page));
    }
    if let Some(slug) = path.strip_prefix("/services/") {
        return find_service(slug).map(Page::Service);
    }
    if let Some(slug) = path.strip_prefix("/case-studies/") {
        return find_case_study(slug).map(Page::CaseStudy);
    }

    Err(SiteError::RouteNotFound {
        kind: "site",
        slug: path.to_string(),
    })
}

/// Every indexable route, for the sitemap.
pub fn sitemap_routes() -> Vec<String> {
    STATIC_PAGES
        .iter()
        .filter(|page| !page.no_index)
        .map(|page| page.route.to_string())
        .chain(SERVICES.iter().map(|service| format!("/services/{}", service.slug)))
        .chain(CASE_STUDIES.iter().map(|study| format!("/case-studies/{}", study.slug)))
        .collect()
}

impl Page {
    /// Locale-independent path of the page.
    pub fn route(&self) -> String {
        match self {
            Page::Static(page) => page.route.to_string(),
            Page::Service(service) => format!("/services/{}", service.slug),
            Page::CaseStudy(study) => format!("/case-studies/{}", study.slug),
        }
    }

    /// Metadata of the page in `locale`.
    pub fn metadata(
        &self,
        ctx: &SiteContext,
        catalog: &MessageCatalog,
        locale: Locale,
    ) -> MetadataBundle {
        match self {
            Page::Static(page) => {
                let title = catalog.text(&format!("pages.{}.title", page.key)).to_string();
                let description = catalog
                    .text(&format!("pages.{}.description", page.key))
                    .to_string();
                let metadata = PageMetadata::new(locale, title, description)
                    .with_path(page.route)
                    .with_no_index(page.no_index);
                seo::synthesize(ctx, &metadata)
            }
            Page::Service(service) => seo::service_metadata(
                ctx,
                locale,
                service.name,
                service.description,
                service.slug,
            ),
            Page::CaseStudy(study) => seo::case_study_metadata(
                ctx,
                locale,
                study.client_name,
                study.industry,
                study.result,
                study.slug,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleRegistry;

    // ==================== Lookup Tests ====================

    #[test]
    fn test_find_service() {
        let service = find_service("germany-industry-4").expect("Should exist");
        assert_eq!(service.name, "Germany Industry 4.0 Benchmarking Tour");
    }

    #[test]
    fn test_find_service_unknown_slug() {
        assert_eq!(
            find_service("atlantis"),
            Err(SiteError::RouteNotFound {
                kind: "service",
                slug: "atlantis".to_string()
            })
        );
    }

    #[test]
    fn test_find_service_rejects_malformed_slug() {
        assert!(find_service("Germany-Industry-4").is_err());
        assert!(find_service("germany--industry").is_err());
        assert!(find_service("").is_err());
    }

    #[test]
    fn test_find_case_study() {
        assert!(find_case_study("pharma-quality-control").is_ok());
        let err = find_case_study("unknown").unwrap_err();
        assert!(err.to_string().contains("case study"));
    }

    // ==================== match_page Tests ====================

    #[test]
    fn test_match_static_pages() {
        assert!(matches!(match_page("/"), Ok(Page::Static(page)) if page.key == "home"));
        assert!(matches!(match_page(""), Ok(Page::Static(page)) if page.key == "home"));
        assert!(matches!(match_page("/about"), Ok(Page::Static(page)) if page.key == "about"));
        assert!(matches!(
            match_page("/inquiry/thank-you"),
            Ok(Page::Static(page)) if page.no_index
        ));
    }

    #[test]
    fn test_match_detail_pages() {
        assert!(matches!(
            match_page("/services/japan-lean"),
            Ok(Page::Service(service)) if service.slug == "japan-lean"
        ));
        assert!(matches!(
            match_page("/case-studies/electronics-supply-chain?ref=home"),
            Ok(Page::CaseStudy(study)) if study.industry == "Electronics"
        ));
    }

    #[test]
    fn test_match_unknown_paths() {
        assert!(match_page("/xx/services/foo").is_err());
        assert!(match_page("/services/unknown").is_err());
        assert!(match_page("/about/").is_err());
        assert!(match_page("/services/japan-lean/extra").is_err());
    }

    // ==================== Sitemap Route Tests ====================

    #[test]
    fn test_sitemap_routes() {
        let routes = sitemap_routes();
        assert_eq!(routes.len(), 9 + 7 + 3);
        assert_eq!(routes[0], "/");
        assert!(routes.contains(&"/services/silicon-valley".to_string()));
        assert!(routes.contains(&"/case-studies/automotive-digital-transformation".to_string()));
        assert!(!routes.contains(&"/inquiry/thank-you".to_string()));
    }

    #[test]
    fn test_every_route_matches_a_page() {
        for route in sitemap_routes() {
            let page = match_page(&route).expect("Route should match");
            assert_eq!(page.route(), route);
        }
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_static_page_metadata_uses_catalog() {
        let ctx = SiteContext::new(LocaleRegistry::get().clone(), "https://benchlinkplus.co", "BenchLink+");
        let catalog = MessageCatalog::from_json_str(
            Locale::Pt,
            r#"{"pages": {"about": {"title": "Sobre Nós", "description": "Quem somos"}}}"#,
        )
        .unwrap();

        let page = match_page("/about").unwrap();
        let bundle = page.metadata(&ctx, &catalog, Locale::Pt);
        assert_eq!(bundle.title, "Sobre Nós");
        assert_eq!(bundle.description, "Quem somos");
        assert_eq!(bundle.canonical, "https://benchlinkplus.co/pt/about");
    }

    #[test]
    fn test_thank_you_page_is_noindex() {
        let ctx = SiteContext::new(LocaleRegistry::get().clone(), "https://benchlinkplus.co", "BenchLink+");
        let catalog = MessageCatalog::from_json_str(Locale::En, "{}").unwrap();

        let bundle = match_page("/inquiry/thank-you")
            .unwrap()
            .metadata(&ctx, &catalog, Locale::En);
        assert!(!bundle.robots.index());
    }
}
