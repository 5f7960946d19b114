//! Widget configuration.
//!
//! Every field has a default matching the stock deployment, so an empty
//! object (or no configuration at all) yields a working widget. Pages can
//! override fields through `window.NavigationToggleConfig`, either as a JSON
//! string or as a plain object.

use serde::Deserialize;

use crate::consts::{
    BUTTON_ID, MARKER_CLASS, PREFERENCE_COOKIE, PREFERENCE_EXPIRY_DAYS, RELOAD_DELAY_MS, RETRY_DELAYS_MS,
};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Error returned by [`WidgetConfig::from_json`] and [`WidgetConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`WidgetConfig`].
    #[error("failed to parse widget config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Cookie names must be non-empty and free of `=`, `;`, and whitespace.
    #[error("invalid cookie name: {0:?}")]
    CookieName(String),
    /// A zero-day expiry would delete the preference on every write.
    #[error("cookie expiry must be at least one day")]
    ZeroExpiry,
    /// The reload must wait long enough for the restyled button to paint.
    #[error("reload delay must be non-zero")]
    ZeroReloadDelay,
    #[error("marker class must be a single non-empty class name: {0:?}")]
    MarkerClass(String),
    #[error("button id must be non-empty and contain no whitespace: {0:?}")]
    ButtonId(String),
}

/// Tunables for the preference cookie, the injected button, and the
/// initialization schedule.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub cookie_name: String,
    pub expiry_days: u32,
    pub marker_class: String,
    pub button_id: String,
    pub reload_delay_ms: u32,
    pub retry_delays_ms: Vec<u32>,
    /// Re-check for markers on structural DOM changes until the widget mounts.
    pub observe_mutations: bool,
    pub log_level: log::Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            cookie_name: PREFERENCE_COOKIE.to_owned(),
            expiry_days: PREFERENCE_EXPIRY_DAYS,
            marker_class: MARKER_CLASS.to_owned(),
            button_id: BUTTON_ID.to_owned(),
            reload_delay_ms: RELOAD_DELAY_MS,
            retry_delays_ms: RETRY_DELAYS_MS.to_vec(),
            observe_mutations: true,
            log_level: log::Level::Info,
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error from
    /// [`WidgetConfig::validate`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_name.is_empty()
            || self
                .cookie_name
                .chars()
                .any(|c| c == '=' || c == ';' || c == ',' || c.is_whitespace())
        {
            return Err(ConfigError::CookieName(self.cookie_name.clone()));
        }
        if self.expiry_days == 0 {
            return Err(ConfigError::ZeroExpiry);
        }
        if self.reload_delay_ms == 0 {
            return Err(ConfigError::ZeroReloadDelay);
        }
        if !is_css_ident(&self.marker_class) {
            return Err(ConfigError::MarkerClass(self.marker_class.clone()));
        }
        if self.button_id.is_empty() || self.button_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::ButtonId(self.button_id.clone()));
        }
        Ok(())
    }

    /// Selector matching any marker element.
    #[must_use]
    pub fn marker_selector(&self) -> String {
        format!(".{}", self.marker_class)
    }
}

/// Conservative CSS identifier check: ASCII letters, digits, `-` and `_`,
/// not starting with a digit.
fn is_css_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '-' || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
