//! Shared constants for the interaction engine.

// ── Theme ───────────────────────────────────────────────────────

/// Default `localStorage` key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class on the root element while light mode is active.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

pub const SUN_ICON: &str = "☀️";
pub const MOON_ICON: &str = "🌙";

// ── Navigation ──────────────────────────────────────────────────

pub const NAV_OPEN_CLASS: &str = "nav-open";
pub const HAMBURGER_ACTIVE_CLASS: &str = "is-active";
pub const ARIA_EXPANDED: &str = "aria-expanded";

/// Class shared by the click pulse and the scroll tracker.
pub const ACTIVE_CLASS: &str = "active";

/// Header clearance subtracted from a section's offset when scrolling to it.
pub const HEADER_CLEARANCE_PX: f64 = 80.0;

/// Offset applied to each section's top when computing its active band.
pub const SECTION_BAND_OFFSET_PX: f64 = 100.0;

/// Lifetime of the highlight a clicked link receives.
pub const CLICK_PULSE_MS: u32 = 1000;

// ── Typing animation ────────────────────────────────────────────

pub const TYPING_CURSOR_CLASS: &str = "typing-cursor";
pub const TYPE_START_DELAY_MS: u32 = 800;
pub const TYPE_TICK_MS: u32 = 65;
pub const DELETE_TICK_MS: u32 = 35;
pub const PAUSE_AFTER_TYPING_MS: u32 = 2200;
pub const PAUSE_AFTER_DELETING_MS: u32 = 400;

// ── Scroll reveal ───────────────────────────────────────────────

pub const REVEALED_CLASS: &str = "revealed";

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Observer root margin; the negative bottom inset triggers slightly early.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

// ── Contact form ────────────────────────────────────────────────

/// Marker left in the form action until a real endpoint is configured.
pub const PLACEHOLDER_MARKER: &str = "YOUR_FORM_ID";

pub const DEFAULT_RECIPIENT: &str = "abdelrahman2027ahmed@gmail.com";

pub const NOTE_LIFETIME_MS: u32 = 5000;
pub const NOTE_BASE_CLASS: &str = "form-note";

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMIT_PENDING_LABEL: &str = "Sending…";

// ── Back to top ─────────────────────────────────────────────────

pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 400.0;
pub const VISIBLE_CLASS: &str = "visible";
