use leptos::prelude::*;
use sage_core::content::TRUST_POINTS;

#[component]
pub fn TrustBar() -> impl IntoView {
    view! {
        <section class="trust">
            <div class="container">
                <ul class="trust-list">
                    {TRUST_POINTS
                        .into_iter()
                        .map(|point| view! { <li class="trust-point">{point}</li> })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
