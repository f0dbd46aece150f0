//! Navigation bar with the dropdown menu.
//!
//! The menu state machine itself lives in `sage_core::menu`; this component
//! binds it to the DOM: trigger buttons toggle their menu, a window-level
//! pointer press outside the `<nav>` region or an Escape key closes it, and
//! ArrowDown on a focused trigger opens its menu without scrolling the page.

use leptos::html;
use leptos::prelude::*;
use sage_core::{MenuId, MenuState};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

#[component]
pub fn Nav() -> impl IntoView {
    let state = RwSignal::new(MenuState::new());
    let nav_ref = NodeRef::<html::Nav>::new();

    // Window-level observers. Unlike a `forget()`-style registration these
    // are removed in on_cleanup, so no handler outlives the component.
    if let Some(window) = web_sys::window() {
        let on_pointer_down = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(
            move |event: web_sys::PointerEvent| {
                let inside = nav_ref
                    .get_untracked()
                    .zip(event.target())
                    .is_some_and(|(nav, target)| nav.contains(target.dyn_ref::<web_sys::Node>()));
                if !inside {
                    state.update(|s| s.close());
                }
            },
        );
        let on_key_down = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                if event.key() == "Escape" {
                    state.update(|s| s.close());
                }
            },
        );

        let _ = window.add_event_listener_with_callback(
            "pointerdown",
            on_pointer_down.as_ref().unchecked_ref(),
        );
        let _ =
            window.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref());

        on_cleanup(move || {
            let _ = window.remove_event_listener_with_callback(
                "pointerdown",
                on_pointer_down.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "keydown",
                on_key_down.as_ref().unchecked_ref(),
            );
        });
    }

    view! {
        <header class="header">
            <div class="header-inner">
                <a href="/" class="brand">"Sage"</a>
                <nav node_ref=nav_ref class="nav" aria-label="Primary">
                    {MenuId::ALL
                        .into_iter()
                        .map(|id| view! { <MenuTrigger id=id state=state /> })
                        .collect_view()}
                </nav>
            </div>
            <MenuPanel state=state />
        </header>
    }
}

#[component]
fn MenuTrigger(id: MenuId, state: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="nav-trigger"
            aria-haspopup="menu"
            aria-controls="menu-panel"
            aria-expanded=move || if state.get().is_open(id) { "true" } else { "false" }
            on:click=move |_| state.update(|s| s.toggle(id))
            on:keydown=move |event: web_sys::KeyboardEvent| {
                if event.key() == "ArrowDown" {
                    event.prevent_default();
                    state.update(|s| s.toggle(id));
                }
            }
        >
            {id.label()}
        </button>
    }
}

#[component]
fn MenuPanel(state: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <Show when=move || state.get().open().is_some()>
            <section
                id="menu-panel"
                class="menu-panel"
                role="menu"
                aria-label=move || {
                    state
                        .get()
                        .open()
                        .map(|id| format!("{} menu", id.name()))
                        .unwrap_or_default()
                }
            >
                {move || {
                    state
                        .get()
                        .items()
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="menu-item" role="menuitem" tabindex="0">
                                    {*item}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </section>
        </Show>
    }
}
