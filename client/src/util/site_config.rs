//! Page configuration lookup.
//!
//! Reads the optional `<script type="application/json" id="site-config">`
//! block. A missing block means the stock defaults; a malformed one is logged
//! and also falls back to the defaults, so a typo never disables the page.

#[cfg(test)]
#[path = "site_config_test.rs"]
mod site_config_test;

use interactions::config::SiteConfig;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Resolve a raw config block into a usable config.
#[must_use]
pub fn resolve(raw: Option<&str>) -> SiteConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            SiteConfig::default()
        }
    }
}

/// Load the page configuration from the live document.
#[must_use]
pub fn load() -> SiteConfig {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        resolve(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SiteConfig::default()
    }
}
