use leptos::prelude::*;
use sage_core::content::SITE;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("(c)2026 {}. All rights reserved.", SITE.site_name);
    view! {
        <footer class="footer">
            <div class="container">
                <span class="footer-brand">{SITE.site_name}</span>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
