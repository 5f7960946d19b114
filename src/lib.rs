//! # nav-toggle
//!
//! Floating "shooter mode / click mode" toggle injected into web pages.
//!
//! The crate is compiled to WebAssembly and loaded by every page of the host
//! site. It reads a boolean preference from a cookie (absent means shooter
//! mode), renders a fixed-position button reflecting it, and on click writes
//! the flipped value and reloads the page so other scripts pick it up.
//!
//! Everything that decides *what* happens is browser-independent and tested
//! natively; the `browser` feature adds the `web-sys` binding that does it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Per-page [`controller::WidgetController`] and the [`controller::ViewHost`] seam |
//! | [`preference`] | Cookie-backed preference store and [`preference::Mode`] |
//! | [`cookie`] | `document.cookie` parsing and directive formatting |
//! | [`widget`] | Button appearance, base style, mount/reveal states |
//! | [`schedule`] | Planned initialization passes (ready, retries) |
//! | [`config`] | [`config::WidgetConfig`] and validation |
//! | [`consts`] | Default names, delays, labels and colours |
//! | `dom` | `web-sys` implementations of the seams (`browser` feature) |
//! | `api` | WASM entry point and `window.NavigationToggle` (`browser` feature) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod cookie;
pub mod preference;
pub mod schedule;
pub mod widget;

#[cfg(feature = "browser")]
pub mod api;
#[cfg(feature = "browser")]
pub mod dom;

#[cfg(test)]
mod testing;
