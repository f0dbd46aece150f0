use leptos::prelude::*;
use sage_core::content::HERO;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <p class="hero-eyebrow">{HERO.eyebrow}</p>
                <h1 class="hero-title">{HERO.title}</h1>
                <p class="hero-body">{HERO.body}</p>
                <div class="hero-actions">
                    <button type="button" class="btn btn-primary">{HERO.primary_cta}</button>
                    <button type="button" class="btn btn-secondary">{HERO.secondary_cta}</button>
                </div>
            </div>
        </section>
    }
}
