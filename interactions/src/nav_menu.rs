//! Collapsible navigation menu.
//!
//! Three independent triggers: the hamburger toggles, a link inside the menu
//! closes, and a click outside both the menu and the hamburger closes. The
//! menu never closes on its own.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

use crate::consts::{ARIA_EXPANDED, HAMBURGER_ACTIVE_CLASS, NAV_OPEN_CLASS};
use crate::effect::{Effect, Target};

#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger clicked.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        state_effects(self.open)
    }

    /// A link inside the menu was clicked.
    pub fn link_clicked(&mut self) -> Vec<Effect> {
        self.open = false;
        state_effects(false)
    }

    /// A click landed somewhere in the document. Closes the menu when the
    /// click is outside both the menu and the hamburger and the menu is open.
    pub fn document_clicked(&mut self, inside_menu: bool, inside_hamburger: bool) -> Vec<Effect> {
        if inside_menu || inside_hamburger || !self.open {
            return Vec::new();
        }
        self.open = false;
        state_effects(false)
    }
}

fn state_effects(open: bool) -> Vec<Effect> {
    vec![
        Effect::class_if(Target::Nav, NAV_OPEN_CLASS, open),
        Effect::class_if(Target::Hamburger, HAMBURGER_ACTIVE_CLASS, open),
        Effect::SetAttribute { target: Target::Hamburger, name: ARIA_EXPANDED, value: open.to_string() },
    ]
}
