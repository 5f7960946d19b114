//! Shooter-mode preference persisted in a cookie.
//!
//! The flag is default-on: a client that never wrote the cookie, or whose
//! cookie expired, is in shooter mode. Any stored value other than the exact
//! string `"true"` reads as click mode.

use std::fmt;

use crate::cookie::{self, Directive};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Cookie storage seam. The browser implementation wraps `document.cookie`;
/// tests use an in-memory jar.
pub trait CookieJar {
    /// The full `name=value; name=value` list visible to the page.
    fn read_all(&self) -> String;

    /// Apply one cookie directive (the string assigned to `document.cookie`).
    fn write(&mut self, directive: &str);

    /// HTTP date `days` days from now.
    fn expires_after_days(&self, days: u32) -> String;
}

/// The two states of the preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Shooter,
    Click,
}

impl Mode {
    #[must_use]
    pub fn is_shooter(self) -> bool {
        self == Self::Shooter
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Shooter => Self::Click,
            Self::Click => Self::Shooter,
        }
    }

    /// Stored cookie value for this mode.
    #[must_use]
    pub fn as_cookie_value(self) -> &'static str {
        match self {
            Self::Shooter => "true",
            Self::Click => "false",
        }
    }
}

impl From<bool> for Mode {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Shooter } else { Self::Click }
    }
}

impl From<Mode> for bool {
    fn from(mode: Mode) -> Self {
        mode.is_shooter()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shooter => "shooter",
            Self::Click => "click",
        })
    }
}

/// Default-on reading of preference `name` from a raw cookie list.
#[must_use]
pub fn enabled_in(jar: &str, name: &str) -> bool {
    cookie::find(jar, name).map_or(true, |value| value == "true")
}

/// Reads and writes the named preference cookie.
pub struct PreferenceStore<J> {
    jar: J,
    name: String,
    expiry_days: u32,
}

impl<J: CookieJar> PreferenceStore<J> {
    #[must_use]
    pub fn new(jar: J, name: impl Into<String>, expiry_days: u32) -> Self {
        Self { jar, name: name.into(), expiry_days }
    }

    /// Raw stored value for `name`, or `None` when unset or expired.
    pub fn get(&self, name: &str) -> Option<String> {
        cookie::find(&self.jar.read_all(), name).map(str::to_owned)
    }

    /// Persist `value` under `name` site-wide for `days` days.
    pub fn set(&mut self, name: &str, value: &str, days: u32) {
        let expires = self.jar.expires_after_days(days);
        let directive = Directive::new(name, value, &expires);
        self.jar.write(&directive.to_string());
    }

    /// `true` unless the preference cookie holds something other than `"true"`.
    pub fn is_enabled(&self) -> bool {
        enabled_in(&self.jar.read_all(), &self.name)
    }

    pub fn mode(&self) -> Mode {
        Mode::from(self.is_enabled())
    }

    /// Flip and persist the preference, returning the new mode.
    pub fn toggle(&mut self) -> Mode {
        let next = self.mode().flipped();
        let name = self.name.clone();
        self.set(&name, next.as_cookie_value(), self.expiry_days);
        log::debug!("preference {name} set to {next}");
        next
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }
}
