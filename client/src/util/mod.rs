//! Utility helpers shared across the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (listeners, storage,
//! config lookup) from component wiring to improve reuse and testability.

#[cfg(feature = "hydrate")]
pub mod listen;
pub mod site_config;
pub mod storage;
