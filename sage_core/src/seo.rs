//! SEO artifact rendering.
//!
//! Renders the static, non-interactive outputs that ship next to the page:
//! the document `<head>` metadata block (via Leptos SSR, behind the `ssr`
//! feature), a one-entry `sitemap.xml`, and an allow-all `robots.txt`. All
//! functions are pure string renderers; the `seo_artifacts` example writes
//! them to `landing/public/`.

use chrono::NaiveDate;

use crate::content::SiteMeta;

/// Render the `<head>` metadata block as an HTML fragment.
///
/// Covers title, description, canonical link, Open Graph and Twitter cards,
/// and a JSON-LD `WebSite` payload. The fragment is pasted into the Trunk
/// `index.html`; it is not served separately.
#[cfg(feature = "ssr")]
pub fn render_head(site: &SiteMeta) -> String {
    use leptos::prelude::*;
    use leptos::tachys::html::attribute::custom::custom_attribute;
    use leptos::tachys::view::RenderHtml;

    let canonical = format!("{}/", site.base_url);
    let og_url = canonical.clone();

    let head = view! {
        <title>{site.title}</title>
        <meta name="description" content=site.description />
        <link rel="canonical" href=canonical />
        <meta {..custom_attribute("property", "og:type")} content="website" />
        <meta {..custom_attribute("property", "og:url")} content=og_url />
        <meta {..custom_attribute("property", "og:title")} content=site.title />
        <meta {..custom_attribute("property", "og:description")} content=site.description />
        <meta {..custom_attribute("property", "og:site_name")} content=site.site_name />
        <meta name="twitter:card" content="summary_large_image" />
        <meta name="twitter:title" content=site.title />
        <meta name="twitter:description" content=site.description />
    };

    // Leptos escapes text nodes, so the JSON-LD script is appended raw.
    format!(
        "{}\n<script type=\"application/ld+json\">{}</script>\n",
        head.to_html(),
        structured_data(site)
    )
}

/// JSON-LD payload describing the site.
pub fn structured_data(site: &SiteMeta) -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": site.site_name,
        "url": format!("{}/", site.base_url),
        "description": site.description,
    })
    .to_string()
}

/// Render `sitemap.xml`: a single entry for the landing page.
///
/// Fixed weekly change frequency and priority 1.0; `last_modified` is
/// stamped by the caller (the generator passes the current date).
pub fn render_sitemap(site: &SiteMeta, last_modified: NaiveDate) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
            "  <url>\n",
            "    <loc>{base}/</loc>\n",
            "    <lastmod>{lastmod}</lastmod>\n",
            "    <changefreq>weekly</changefreq>\n",
            "    <priority>1.0</priority>\n",
            "  </url>\n",
            "</urlset>\n",
        ),
        base = site.base_url,
        lastmod = last_modified.format("%Y-%m-%d"),
    )
}

/// Render `robots.txt`: allow everything, point at the sitemap.
pub fn render_robots(site: &SiteMeta) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site.base_url
    )
}


#[cfg(all(test, feature = "ssr"))]
mod head_tests {
    use super::*;
    use crate::content::SITE;

    #[test]
    fn head_carries_title_description_and_canonical() {
        let head = render_head(&SITE);
        assert!(head.contains("<title>Sage | Finance, payroll, and reporting in one place</title>"));
        assert!(head.contains("name=\"description\""));
        assert!(head.contains("rel=\"canonical\""));
        assert!(head.contains("http://10.10.5.186:3000/"));
    }

    #[test]
    fn head_carries_open_graph_and_twitter_cards() {
        let head = render_head(&SITE);
        assert!(head.contains("property=\"og:type\""));
        assert!(head.contains("content=\"website\""));
        assert!(head.contains("property=\"og:site_name\""));
        assert!(head.contains("name=\"twitter:card\" content=\"summary_large_image\""));
    }

    #[test]
    fn head_embeds_json_ld_script() {
        let head = render_head(&SITE);
        assert!(head.contains("<script type=\"application/ld+json\">"));
        assert!(head.contains("schema.org"));
    }
}
