// Sage Landing Page — Leptos 0.8 Edition

mod sections;

use leptos::prelude::*;
use sections::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    log_boot_note();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <TrustBar />
            <Features />
        </main>
        <Footer />
    }
}

/// Styled console note for anyone poking around the devtools.
fn log_boot_note() {
    web_sys::console::log_2(
        &JsValue::from_str("%cSage — finance, payroll, and reporting in one place."),
        &JsValue::from_str("color: #00875a; font-weight: bold;"),
    );
}
