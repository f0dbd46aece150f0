//! Immutable page content tables.
//!
//! These are the marketing copy and site metadata rendered verbatim by the
//! landing page. Nothing here is validated or transformed at runtime; the
//! tables are compile-time constants. Serde derives are provided so the
//! content can be exported as JSON (for CMS diffing or structured data).

use serde::Serialize;

/// Hero section copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hero {
    /// Short line above the headline.
    pub eyebrow: &'static str,
    /// Main headline.
    pub title: &'static str,
    /// Supporting paragraph.
    pub body: &'static str,
    /// Primary call-to-action label.
    pub primary_cta: &'static str,
    /// Secondary call-to-action label.
    pub secondary_cta: &'static str,
}

/// The hero table rendered at the top of the page.
pub const HERO: Hero = Hero {
    eyebrow: "Accounting software for ambitious teams",
    title: "Run finance, payroll, and reporting from one control center.",
    body: "Sage helps teams close books faster, improve cash visibility, and stay \
           audit-ready without switching between tools.",
    primary_cta: "Start free trial",
    secondary_cta: "Book a demo",
};

/// Trust points shown in the bar under the hero.
pub const TRUST_POINTS: [&str; 3] = [
    "Trusted by 500k+ businesses globally",
    "99.95% platform uptime",
    "SOC 2 aligned controls",
];

/// One card in the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    /// Card heading.
    pub title: &'static str,
    /// Card body copy.
    pub description: &'static str,
}

/// The feature grid, in display order.
pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Automated Invoicing",
        description: "Create, send, and reconcile invoices in minutes with recurring rules \
                      and smart reminders.",
    },
    FeatureCard {
        title: "Real-Time Cashflow",
        description: "Track inflows and outflows with live dashboards and predictive \
                      shortfall alerts.",
    },
    FeatureCard {
        title: "Payroll Confidence",
        description: "Run payroll with compliance checks, tax summaries, and employee \
                      self-service access.",
    },
];

/// Site-wide metadata consumed by the SEO artifacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMeta {
    /// Base URL of the deployment, without a trailing slash.
    pub base_url: &'static str,
    /// Site name for Open Graph and the footer.
    pub site_name: &'static str,
    /// Document title.
    pub title: &'static str,
    /// Meta description.
    pub description: &'static str,
}

/// Canonical site metadata for the current deployment.
pub const SITE: SiteMeta = SiteMeta {
    base_url: "http://10.10.5.186:3000",
    site_name: "Sage",
    title: "Sage | Finance, payroll, and reporting in one place",
    description: "Sage helps teams run invoicing, cashflow, payroll, and reporting from \
                  one modern control center.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_serializes_to_json() {
        let hero = serde_json::to_value(HERO).unwrap();
        assert_eq!(hero["primary_cta"], "Start free trial");

        let cards = serde_json::to_value(FEATURE_CARDS).unwrap();
        assert_eq!(cards.as_array().unwrap().len(), 3);
        assert_eq!(cards[0]["title"], "Automated Invoicing");
    }

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!SITE.base_url.ends_with('/'));
    }
}
