//! Interaction engine for the portfolio page.
//!
//! This crate holds every piece of page behavior that can be expressed without
//! a browser: theme switching, the collapsible navigation menu, scroll-linked
//! link highlighting, the hero typing animation, one-shot scroll reveals, the
//! contact form flow, and the back-to-top control. Each component is a small
//! state owner whose handlers return [`effect::Effect`]s. The `client` crate
//! resolves DOM elements, applies those effects, and feeds timer and network
//! results back in.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`effect`] | Effect, target, and timer vocabulary shared with the host |
//! | [`consts`] | Timings, thresholds, class names, glyphs |
//! | [`config`] | Page configuration with defaults, parsed from JSON |
//! | [`theme`] | Light/dark preference and toggle |
//! | [`nav_menu`] | Hamburger menu open/close state |
//! | [`scroll_spy`] | Smooth-scroll clicks and active-link tracking |
//! | [`typing`] | Typing/deleting state machine for the hero heading |
//! | [`reveal`] | At-most-once reveal bookkeeping |
//! | [`contact`] | Contact form validation, mailto fallback, submit outcomes |
//! | [`back_to_top`] | Back-to-top visibility and click |
//! | [`year`] | Footer year stamp |

pub mod back_to_top;
pub mod config;
pub mod consts;
pub mod contact;
pub mod effect;
pub mod nav_menu;
pub mod reveal;
pub mod scroll_spy;
pub mod theme;
pub mod typing;
pub mod year;
