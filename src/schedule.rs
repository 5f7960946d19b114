//! When initialization passes run.
//!
//! The first pass waits for the document structure (`DOMContentLoaded`) when
//! the page is still parsing, otherwise it runs immediately. Each retry delay
//! adds one timed pass for content that mounts late. Passes are idempotent,
//! so overlap between them is harmless.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// `document.readyState` while the HTML is still being parsed.
pub const READY_STATE_LOADING: &str = "loading";

/// One planned initialization pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    /// On `DOMContentLoaded`.
    OnReady,
    /// Synchronously, during startup.
    Now,
    /// After a timeout of this many milliseconds.
    After(u32),
}

/// Plan the passes for a document in `ready_state`.
#[must_use]
pub fn plan(ready_state: &str, retry_delays_ms: &[u32]) -> Vec<Pass> {
    let first = if ready_state == READY_STATE_LOADING { Pass::OnReady } else { Pass::Now };
    std::iter::once(first)
        .chain(retry_delays_ms.iter().copied().map(Pass::After))
        .collect()
}
