//! Light/dark theme preference and toggle.
//!
//! The preference is read once at startup and written back on every toggle.
//! Persistence is best-effort: the host drops a failed write, and the visual
//! state still flips.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{LIGHT_MODE_CLASS, MOON_ICON, SUN_ICON};
use crate::effect::{Effect, Target};

/// Display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Anything but `"light"` is dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => SUN_ICON,
            Self::Dark => MOON_ICON,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Owns the current theme and the storage key it persists under.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    theme: Theme,
    storage_key: String,
}

impl ThemeToggle {
    #[must_use]
    pub fn new(stored: Option<&str>, storage_key: impl Into<String>) -> Self {
        Self { theme: Theme::from_stored(stored), storage_key: storage_key.into() }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Effects applied once at startup. Dark mode is the page default and
    /// needs no changes.
    #[must_use]
    pub fn init(&self) -> Vec<Effect> {
        match self.theme {
            Theme::Light => vec![
                Effect::AddClass { target: Target::Root, class: LIGHT_MODE_CLASS },
                Effect::text(Target::ThemeIcon, SUN_ICON),
            ],
            Theme::Dark => Vec::new(),
        }
    }

    /// Flip the theme, persist it, and update the icon.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.theme = self.theme.flipped();
        vec![
            Effect::class_if(Target::Root, LIGHT_MODE_CLASS, self.theme == Theme::Light),
            Effect::Persist { key: self.storage_key.clone(), value: self.theme.as_str().to_owned() },
            Effect::text(Target::ThemeIcon, self.theme.icon()),
        ]
    }
}
