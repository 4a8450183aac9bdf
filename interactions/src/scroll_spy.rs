//! Smooth-scroll link clicks and scroll-position link highlighting.
//!
//! Both paths write the same `active` class. A click pulse can overwrite the
//! scroll-driven highlight and vice versa while the pulse timer is pending;
//! neither takes precedence.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

use crate::consts::{ACTIVE_CLASS, CLICK_PULSE_MS, HEADER_CLEARANCE_PX, SECTION_BAND_OFFSET_PX};
use crate::effect::{Effect, Target, Timer};

/// Geometry of a `section[id]` at the time of a scroll event.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// `offsetTop` in document coordinates.
    pub top: f64,
    /// `offsetHeight`.
    pub height: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Whether `scroll_y` lies in this section's active band.
    #[must_use]
    pub fn contains(&self, scroll_y: f64) -> bool {
        let band_top = self.top - SECTION_BAND_OFFSET_PX;
        scroll_y > band_top && scroll_y <= band_top + self.height
    }
}

/// The in-page navigation links, by their `href` attribute.
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    hrefs: Vec<String>,
}

impl ScrollSpy {
    #[must_use]
    pub fn new(hrefs: Vec<String>) -> Self {
        Self { hrefs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }

    /// Section id a link points at, or `None` for links that are not in-page
    /// anchors.
    #[must_use]
    pub fn target_id(&self, link: usize) -> Option<&str> {
        self.hrefs.get(link).and_then(|href| anchor_id(href))
    }

    /// A link was clicked and its target section sits at `target_top`
    /// (document coordinates). Highlights the link for a short pulse and
    /// scrolls to the section minus the header clearance.
    #[must_use]
    pub fn link_clicked(&self, link: usize, target_top: f64) -> Vec<Effect> {
        if link >= self.hrefs.len() {
            return Vec::new();
        }
        let mut effects = self.clear_all();
        effects.push(Effect::AddClass { target: Target::NavLink(link), class: ACTIVE_CLASS });
        effects.push(Effect::ScrollTo { top: target_top - HEADER_CLEARANCE_PX });
        effects.push(Effect::Schedule { delay_ms: CLICK_PULSE_MS, timer: Timer::ClearPulse(link) });
        effects
    }

    /// The click pulse for `link` expired.
    #[must_use]
    pub fn pulse_expired(&self, link: usize) -> Vec<Effect> {
        if link >= self.hrefs.len() {
            return Vec::new();
        }
        vec![Effect::RemoveClass { target: Target::NavLink(link), class: ACTIVE_CLASS }]
    }

    /// Recompute the highlight for the current scroll offset. When several
    /// bands contain the offset the last section wins; when none does, the
    /// current highlight is left alone.
    #[must_use]
    pub fn scrolled(&self, scroll_y: f64, sections: &[Section]) -> Vec<Effect> {
        let Some(section) = sections.iter().rev().find(|s| s.contains(scroll_y)) else {
            return Vec::new();
        };
        let mut effects = self.clear_all();
        for (index, href) in self.hrefs.iter().enumerate() {
            if anchor_id(href) == Some(section.id.as_str()) {
                effects.push(Effect::AddClass { target: Target::NavLink(index), class: ACTIVE_CLASS });
            }
        }
        effects
    }

    fn clear_all(&self) -> Vec<Effect> {
        (0..self.hrefs.len())
            .map(|index| Effect::RemoveClass { target: Target::NavLink(index), class: ACTIVE_CLASS })
            .collect()
    }
}

/// Strip the leading `#` from an in-page anchor href.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}
