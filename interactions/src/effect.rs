//! Effects returned from component handlers for the host to apply.
//!
//! Components never touch the DOM. They describe what should change in terms
//! of [`Target`]s, and the host resolves each target to an element (or to
//! nothing, in which case the effect is dropped).

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

/// A DOM node a component may address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The element carrying the light-mode flag (`<body>`).
    Root,
    ThemeIcon,
    Hamburger,
    Nav,
    /// In-page navigation link, by position in document order.
    NavLink(usize),
    HeroRole,
    /// Reveal-eligible card, by position in document order.
    Reveal(usize),
    Form,
    FormNote,
    SubmitButton,
    BackToTop,
    Year,
}

/// Deferred continuation the host must hand back when its delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Drop the click highlight from a nav link.
    ClearPulse(usize),
    /// Reset the contact form note.
    ClearNote,
    /// Advance the typing animation.
    TypeTick,
}

/// A single observable change requested by a component.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetText { target: Target, text: String },
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    /// Replace the whole `class` attribute.
    SetClassName { target: Target, class: String },
    SetAttribute { target: Target, name: &'static str, value: String },
    SetDisabled { target: Target, disabled: bool },
    /// Smoothly scroll the viewport to an absolute vertical offset.
    ScrollTo { top: f64 },
    /// Navigate the window to a URL.
    Navigate(String),
    ResetForm,
    /// Write a key/value pair to local storage. Failures are ignored.
    Persist { key: String, value: String },
    /// Stop observing a reveal-eligible element.
    Unobserve(usize),
    Schedule { delay_ms: u32, timer: Timer },
}

impl Effect {
    #[must_use]
    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText { target, text: text.into() }
    }

    /// Add or remove `class` depending on `on`.
    #[must_use]
    pub fn class_if(target: Target, class: &'static str, on: bool) -> Self {
        if on {
            Self::AddClass { target, class }
        } else {
            Self::RemoveClass { target, class }
        }
    }

    /// The target this effect writes to, if it writes to one.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::SetText { target, .. }
            | Self::AddClass { target, .. }
            | Self::RemoveClass { target, .. }
            | Self::SetClassName { target, .. }
            | Self::SetAttribute { target, .. }
            | Self::SetDisabled { target, .. } => Some(*target),
            Self::ResetForm => Some(Target::Form),
            Self::Unobserve(index) => Some(Target::Reveal(*index)),
            Self::ScrollTo { .. } | Self::Navigate(_) | Self::Persist { .. } | Self::Schedule { .. } => None,
        }
    }
}
