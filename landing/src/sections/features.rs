use leptos::prelude::*;
use sage_core::content;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="features-grid">
                    {content::FEATURE_CARDS
                        .into_iter()
                        .map(|card| view! { <FeatureCard card=card /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(card: content::FeatureCard) -> impl IntoView {
    view! {
        <article class="feature-card">
            <h3 class="feature-title">{card.title}</h3>
            <p class="feature-description">{card.description}</p>
        </article>
    }
}
