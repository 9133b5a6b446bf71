//! Page behaviors for the portfolio site, free of any browser dependency.
//!
//! Everything here is plain data and arithmetic over element geometry so it
//! can be tested natively. The `client` crate owns the DOM and feeds these
//! functions primitive coordinates, then applies their results.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Site configuration, defaults and JSON overrides |
//! | [`theme`] | Light/dark preference and the storage seam |
//! | [`nav`] | Sticky header, mobile menu, active-section link |
//! | [`reveal`] | Scroll-triggered entrance animation bookkeeping |
//! | [`scrollbar`] | Custom scrollbar thumb math and drag state |
//! | [`contact`] | Contact form payload, relay contract, status machine |
//! | [`glue`] | Anchor scrolling, parallax, typing reveal |
//! | [`events`] | Declarative `(source, event) -> handler` table |
//! | [`state`] | The page's single UI-state record |

pub mod config;
pub mod contact;
pub mod events;
pub mod glue;
pub mod nav;
pub mod reveal;
pub mod scrollbar;
pub mod state;
pub mod theme;
