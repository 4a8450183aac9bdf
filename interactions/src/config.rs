//! Page configuration.
//!
//! Every field has a default, so a page without a config block (or with a
//! partial one) behaves like the stock portfolio. The host reads the JSON
//! from an inline `<script type="application/json" id="site-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_RECIPIENT, PLACEHOLDER_MARKER, THEME_STORAGE_KEY};

/// Selectors whose matches take part in the scroll reveal.
pub const DEFAULT_REVEAL_SELECTORS: &[&str] = &[
    ".scroll-reveal",
    ".spec-card",
    ".project-card",
    ".cert-card",
    ".timeline-item",
    ".about-card",
    ".contact-card",
];

pub const DEFAULT_PHRASES: &[&str] = &[
    ".NET Full-Stack & Game Developer",
    "Computer Engineer @ BHI",
    "Low-Level Systems Programmer",
    "Unity & C# Game Developer",
    "FPGA & VHDL Designer",
];

/// Errors produced while loading page configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block was not valid JSON for [`SiteConfig`].
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Phrases cycled by the hero typing animation.
    pub phrases: Vec<String>,
    /// Recipient of the mailto fallback.
    pub recipient: String,
    /// Substring marking an unconfigured form action.
    pub placeholder_marker: String,
    pub theme_storage_key: String,
    pub reveal_selectors: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| (*s).to_owned()).collect(),
            recipient: DEFAULT_RECIPIENT.to_owned(),
            placeholder_marker: PLACEHOLDER_MARKER.to_owned(),
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            reveal_selectors: DEFAULT_REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config block. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for an empty recipient or storage key.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.recipient.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "recipient", reason: "must not be empty" });
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "themeStorageKey", reason: "must not be empty" });
        }
        Ok(())
    }

    /// Reveal selectors joined into one `querySelectorAll` argument.
    #[must_use]
    pub fn reveal_query(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}
