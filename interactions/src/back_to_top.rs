//! Back-to-top control.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

use crate::consts::{BACK_TO_TOP_THRESHOLD_PX, VISIBLE_CLASS};
use crate::effect::{Effect, Target};

/// Tracks whether the control is currently shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackToTop {
    visible: bool,
}

impl BackToTop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Visible iff the last scroll offset exceeds the threshold.
    pub fn scrolled(&mut self, scroll_y: f64) -> Effect {
        self.visible = scroll_y > BACK_TO_TOP_THRESHOLD_PX;
        Effect::class_if(Target::BackToTop, VISIBLE_CLASS, self.visible)
    }

    #[must_use]
    pub fn clicked(self) -> Effect {
        Effect::ScrollTo { top: 0.0 }
    }
}
