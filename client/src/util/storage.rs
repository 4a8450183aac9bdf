//! Browser `localStorage` access for the theme preference.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: private browsing, disabled storage, or quota
//! errors turn reads into `None` and writes into `false`, and callers carry
//! on. Non-hydrate builds always take that path.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read a string value for `key`.
#[must_use]
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write `value` under `key`. Returns whether the write went through.
#[must_use]
pub fn write(key: &str, value: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::info!("localStorage unavailable; {key} not persisted");
            return false;
        };
        match storage.set_item(key, value) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("localStorage write for {key} failed: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        false
    }
}
