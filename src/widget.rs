//! Toggle button appearance and mount state.
//!
//! The button's look is a pure function of the preference: [`Appearance`]
//! carries the label and the mode-dependent colours, [`base_style`] the
//! fixed declarations applied once at mount.

use crate::consts::{CLICK_ACCENT, CLICK_GLOW, CLICK_LABEL, SHOOTER_ACCENT, SHOOTER_GLOW, SHOOTER_LABEL};
use crate::preference::Mode;

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

/// Mode-dependent label and colours of the button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub mode: Mode,
    pub label: &'static str,
    /// Used for both border and text colour.
    pub accent: &'static str,
    pub glow: &'static str,
}

impl Appearance {
    #[must_use]
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Shooter => Self { mode, label: SHOOTER_LABEL, accent: SHOOTER_ACCENT, glow: SHOOTER_GLOW },
            Mode::Click => Self { mode, label: CLICK_LABEL, accent: CLICK_ACCENT, glow: CLICK_GLOW },
        }
    }

    /// Style properties that change with the mode, as `(property, value)`.
    #[must_use]
    pub fn style_properties(&self) -> [(&'static str, &'static str); 3] {
        [("border-color", self.accent), ("color", self.accent), ("box-shadow", self.glow)]
    }
}

/// Full inline `cssText` for a freshly mounted button.
///
/// Placement, stacking, background and visibility are `!important` so host
/// page rules hiding generic buttons cannot hide or bury the widget.
#[must_use]
pub fn base_style(appearance: &Appearance) -> String {
    format!(
        "position: fixed !important; \
         top: 10px !important; \
         right: 10px !important; \
         z-index: 99999 !important; \
         padding: 10px 15px; \
         background: rgba(0, 0, 0, 0.9) !important; \
         border: 2px solid {accent}; \
         color: {accent}; \
         font-family: 'Courier New', monospace; \
         font-size: 14px; \
         cursor: pointer; \
         border-radius: 5px; \
         box-shadow: {glow}; \
         display: block !important; \
         visibility: visible !important; \
         opacity: 1 !important;",
        accent = appearance.accent,
        glow = appearance.glow,
    )
}

/// Whether this view has a widget. `Mounted` is terminal until reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MountState {
    #[default]
    Absent,
    Mounted,
}

/// Lifecycle of the one-shot document click listener.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeferredReveal {
    #[default]
    Disarmed,
    Armed,
    /// Fired once; never re-armed in this view.
    Spent,
}
