//! # sage-core
//!
//! Core library for the Sage landing page: navigation menu state, the
//! immutable page content tables, and SEO artifact rendering.
//!
//! The interactive part of the page is a single-selection dropdown menu in
//! the navigation bar. Its state machine lives here as [`MenuState`] so it
//! can be unit-tested without a browser; the `sage-landing` crate binds it
//! to the DOM.
//!
//! ## Quick start
//!
//! ```rust
//! use sage_core::{MenuId, MenuState};
//!
//! let mut menu = MenuState::new();
//! menu.toggle(MenuId::Features);
//! assert_eq!(menu.items(), ["Invoicing", "Cashflow", "Payroll", "Reports"]);
//!
//! // Toggling the open menu closes it again.
//! menu.toggle(MenuId::Features);
//! assert!(menu.open().is_none());
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - the dropdown menu state machine
//! - [`content`] - hero copy, trust points, feature cards, site metadata
//! - [`seo`] - `<head>` metadata, `sitemap.xml`, and `robots.txt` rendering
//!
//! The Leptos-based `<head>` renderer sits behind the default `ssr` feature;
//! the CSR landing crate depends on this crate with default features off so
//! its WASM build sees only leptos `csr`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod content;
pub mod menu;
pub mod seo;

pub use menu::{MenuId, MenuState};
