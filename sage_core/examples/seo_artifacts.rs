//! Regenerate the static SEO artifacts shipped next to the landing page.
//!
//! Run from the workspace root: `cargo run -p sage-core --example seo_artifacts`
//!
//! `sitemap.xml` and `robots.txt` land in `landing/public/`, where Trunk
//! picks them up. The `<head>` fragment is printed to stdout for pasting
//! into `landing/index.html` when the metadata changes.

use chrono::Utc;
use sage_core::content::SITE;
use sage_core::seo;

fn main() {
    let today = Utc::now().date_naive();

    let sitemap = seo::render_sitemap(&SITE, today);
    let robots = seo::render_robots(&SITE);

    std::fs::write("landing/public/sitemap.xml", &sitemap).expect("Failed to write sitemap.xml");
    std::fs::write("landing/public/robots.txt", &robots).expect("Failed to write robots.txt");

    println!("Wrote landing/public/sitemap.xml ({} bytes)", sitemap.len());
    println!("Wrote landing/public/robots.txt ({} bytes)", robots.len());
    println!();
    println!("<head> fragment for landing/index.html:");
    println!("{}", seo::render_head(&SITE));
}
