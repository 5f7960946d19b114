//! Shared constants for the toggle widget.

// ── Preference ──────────────────────────────────────────────────

/// Cookie holding the shooter-mode flag.
pub const PREFERENCE_COOKIE: &str = "shooterMode";

/// Days until the preference cookie expires, counted from the last write.
pub const PREFERENCE_EXPIRY_DAYS: u32 = 365;

/// Milliseconds in one day, used to turn an expiry in days into a timestamp.
pub const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

// ── DOM ─────────────────────────────────────────────────────────

/// Element id of the injected toggle button.
pub const BUTTON_ID: &str = "navToggleBtn";

/// CSS class identifying navigation-control marker elements.
pub const MARKER_CLASS: &str = "nav-button";

// ── Timing ──────────────────────────────────────────────────────

/// Delay between a toggle and the page reload. Must stay non-zero so the
/// restyled button paints first.
pub const RELOAD_DELAY_MS: u32 = 100;

/// Offsets of the two late initialization passes after the first one.
pub const RETRY_DELAYS_MS: [u32; 2] = [100, 500];

// ── Appearance ──────────────────────────────────────────────────

pub const SHOOTER_LABEL: &str = "\u{1F3AF} Shooter Mode";
pub const CLICK_LABEL: &str = "\u{1F5B1}\u{FE0F} Click Mode";

pub const SHOOTER_ACCENT: &str = "#00ff00";
pub const CLICK_ACCENT: &str = "#0088ff";

pub const SHOOTER_GLOW: &str = "0 0 10px rgba(0, 255, 0, 0.5)";
pub const CLICK_GLOW: &str = "0 0 10px rgba(0, 136, 255, 0.5)";
