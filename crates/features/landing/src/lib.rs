//! # Landing page
//!
//! Server-side renderer for the Venezuelan Legal Services landing page.
//!
//! The page is a tree of Dioxus components fed from [`vls_domain::SiteContent`]
//! and rendered once to an HTML string with `dioxus-ssr`. The `<head>` carries a
//! single schema.org JSON-LD block built by [`structured_data::LegalService`].
//!
//! ## Guarantees
//!
//! * One card per service and reason, one `<li>` per step, one `<details>` per FAQ entry.
//! * The visible FAQ and the JSON-LD FAQ listing are derived from the same list.
//! * The JSON-LD payload never contains `<`, `>` or `&`, so content cannot close
//!   the surrounding `<script>` element.
//! * Rendering is pure: same content and year, same bytes.
//!
//! ## Example
//!
//! ```rust
//! use vls_domain::SiteContent;
//! use vls_landing::{RenderOptions, render_page};
//!
//! let html = render_page(&SiteContent::default(), &RenderOptions::with_year(2030)).unwrap();
//! assert!(html.contains("application/ld+json"));
//! ```

pub mod components;
mod error;
mod render;
pub mod structured_data;

pub use crate::error::{RenderError, RenderErrorExt};
pub use crate::render::{DOCTYPE, RenderOptions, render_page};
pub use crate::structured_data::LegalService;
