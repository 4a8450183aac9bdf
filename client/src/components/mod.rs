//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module installs one independent behavior onto the resolved DOM. None
//! depends on another; a component whose elements are missing installs
//! nothing and the rest of the page is unaffected.

pub mod back_to_top;
pub mod contact_form;
pub mod nav_menu;
pub mod reveal;
pub mod scroll_spy;
pub mod theme_toggle;
pub mod typing;
pub mod year;
