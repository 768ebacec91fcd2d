//! robots.txt policy.

use crate::context::SiteContext;
use serde::Serialize;

/// Paths no crawler should index: API endpoints, the inquiry confirmation
/// page, and any URL carrying UTM tracking parameters.
pub const DISALLOWED_PATHS: [&str; 3] = ["/api/", "/inquiry/thank-you", "/*?*utm_*"];

/// Crawlers with their own rule group.
pub const USER_AGENTS: [&str; 2] = ["*", "Baiduspider"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsGroup {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsGroup>,

    /// One sitemap URL per registered locale
    pub sitemap: Vec<String>,
}

impl RobotsPolicy {
    pub fn for_site(ctx: &SiteContext) -> Self {
        let rules = USER_AGENTS
            .iter()
            .map(|agent| RobotsGroup {
                user_agent: agent.to_string(),
                allow: vec!["/".to_string()],
                disallow: DISALLOWED_PATHS.iter().map(|path| path.to_string()).collect(),
            })
            .collect();

        let sitemap = ctx
            .registry
            .list_locales()
            .into_iter()
            .map(|locale| ctx.localized_url("/sitemap.xml", locale))
            .collect();

        Self { rules, sitemap }
    }

    /// Render as robots.txt.
    pub fn to_txt(&self) -> String {
        let mut txt = String::new();
        for group in &self.rules {
            txt.push_str(&format!("User-Agent: {}\n", group.user_agent));
            for path in &group.allow {
                txt.push_str(&format!("Allow: {}\n", path));
            }
            for path in &group.disallow {
                txt.push_str(&format!("Disallow: {}\n", path));
            }
            txt.push('\n');
        }
        for url in &self.sitemap {
            txt.push_str(&format!("Sitemap: {}\n", url));
        }
        txt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleRegistry;

    fn policy() -> RobotsPolicy {
        let ctx = SiteContext::new(LocaleRegistry::get().clone(), "https://benchlinkplus.co", "BenchLink+");
        RobotsPolicy::for_site(&ctx)
    }

    #[test]
    fn test_every_group_disallows_private_paths() {
        let policy = policy();
        assert_eq!(policy.rules.len(), 2);
        for group in &policy.rules {
            assert_eq!(group.allow, vec!["/"]);
            for path in DISALLOWED_PATHS {
                assert!(group.disallow.iter().any(|p| p == path), "{} missing", path);
            }
        }
        assert_eq!(policy.rules[1].user_agent, "Baiduspider");
    }

    #[test]
    fn test_sitemap_per_locale() {
        assert_eq!(
            policy().sitemap,
            vec![
                "https://benchlinkplus.co/sitemap.xml",
                "https://benchlinkplus.co/zh/sitemap.xml",
                "https://benchlinkplus.co/pt/sitemap.xml",
            ]
        );
    }

    #[test]
    fn test_to_txt() {
        let txt = policy().to_txt();
        assert!(txt.starts_with("User-Agent: *\nAllow: /\nDisallow: /api/\n"));
        assert!(txt.contains("User-Agent: Baiduspider\n"));
        assert!(txt.contains("Disallow: /*?*utm_*\n"));
        assert_eq!(txt.matches("Disallow: /inquiry/thank-you").count(), 2);
        assert!(txt.ends_with("Sitemap: https://benchlinkplus.co/pt/sitemap.xml\n"));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(policy()).unwrap();
        assert_eq!(json["rules"][0]["userAgent"], "*");
        assert_eq!(json["sitemap"][1], "https://benchlinkplus.co/zh/sitemap.xml");
    }
}
