//! `document.cookie` string handling.
//!
//! Reading parses the `name=value; name=value` list the browser hands back;
//! writing builds a single `Set-Cookie`-style directive. Both are pure string
//! functions so they can be tested without a browser.

use std::fmt;

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Find the value of `name` in a raw cookie list.
///
/// Entries are separated by `;` and may carry leading spaces. The first entry
/// that starts with `name=` wins; its value is everything after that prefix,
/// so values containing `=` come back intact.
pub fn find<'a>(jar: &'a str, name: &str) -> Option<&'a str> {
    jar.split(';')
        .map(|entry| entry.trim_start_matches(' '))
        .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
}

/// A site-wide (`path=/`), `SameSite=Lax` cookie write, rendered with
/// [`fmt::Display`] into the string assigned to `document.cookie`. Lax keeps
/// the cookie on ordinary link navigation and off cross-site subrequests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub value: &'a str,
    /// Expiry already formatted as an HTTP date (`Date.toUTCString()`).
    pub expires: &'a str,
}

impl<'a> Directive<'a> {
    #[must_use]
    pub fn new(name: &'a str, value: &'a str, expires: &'a str) -> Self {
        Self { name, value, expires }
    }
}

impl fmt::Display for Directive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={};expires={};path=/;SameSite=Lax", self.name, self.value, self.expires)
    }
}
