//! Per-view widget controller.
//!
//! DESIGN
//! ======
//! One `WidgetController` exists per loaded page. It owns the preference
//! store, the mount state machine and the deferred-reveal listener state;
//! every DOM side effect goes through the [`ViewHost`] seam so the whole
//! decision layer runs without a browser. A reload discards the controller
//! and the next page starts again at [`MountState::Absent`].
//!
//! All entry points are idempotent: the three mount paths (unconditional,
//! marker presence, first marker click) may run any number of times and the
//! page still ends up with exactly one button.

use crate::preference::{CookieJar, Mode, PreferenceStore};
use crate::widget::{Appearance, DeferredReveal, MountState};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// DOM operations the controller needs from the page.
pub trait ViewHost {
    /// An element with the widget's id exists in the document.
    fn widget_in_view(&self) -> bool;

    /// At least one marker element exists in the document.
    fn has_markers(&self) -> bool;

    /// Create the button with `appearance` and append it to the page.
    /// Returns `false` when the page has nowhere to put it yet.
    fn mount_widget(&mut self, appearance: &Appearance) -> bool;

    /// Restyle the existing button in place.
    fn apply_appearance(&mut self, appearance: &Appearance);

    /// Reload the page after `delay_ms`. Not cancellable.
    fn schedule_reload(&mut self, delay_ms: u32);

    /// Start delivering document clicks to [`WidgetController::on_document_click`].
    fn install_activation_listener(&mut self);

    fn remove_activation_listener(&mut self);

    /// Stop delivering DOM mutations to [`WidgetController::on_content_changed`].
    fn stop_observing(&mut self);
}

pub struct WidgetController<J, H> {
    store: PreferenceStore<J>,
    host: H,
    reload_delay_ms: u32,
    mount: MountState,
    reveal: DeferredReveal,
}

impl<J: CookieJar, H: ViewHost> WidgetController<J, H> {
    #[must_use]
    pub fn new(store: PreferenceStore<J>, host: H, reload_delay_ms: u32) -> Self {
        Self {
            store,
            host,
            reload_delay_ms,
            mount: MountState::Absent,
            reveal: DeferredReveal::Disarmed,
        }
    }

    // --- Initialization ---

    /// One best-effort initialization pass: unconditional mount, marker
    /// check, then arm the deferred reveal. Safe to repeat.
    pub fn initialize(&mut self) {
        self.mount_unconditionally();
        self.ensure_widget_present();
        self.arm_deferred_reveal();
    }

    /// Mount the widget on every page, markers or not.
    pub fn mount_unconditionally(&mut self) {
        self.render();
    }

    /// Mount the widget if the page has navigation markers.
    pub fn ensure_widget_present(&mut self) {
        if self.mount == MountState::Absent && self.host.has_markers() {
            self.render();
        }
    }

    /// Install the one-shot click listener. Only the first call in a view
    /// installs anything.
    pub fn arm_deferred_reveal(&mut self) {
        if self.reveal == DeferredReveal::Disarmed {
            self.host.install_activation_listener();
            self.reveal = DeferredReveal::Armed;
        }
    }

    // --- Events ---

    /// Document click. `target_in_marker` is whether the click target is, or
    /// sits inside, a marker element.
    pub fn on_document_click(&mut self, target_in_marker: bool) {
        if self.reveal != DeferredReveal::Armed || !target_in_marker || !self.store.is_enabled() {
            return;
        }
        self.reveal = DeferredReveal::Spent;
        self.host.remove_activation_listener();
        log::debug!("first marker activation, revealing toggle");
        self.render();
    }

    /// Structural DOM change reported by the mutation observer.
    pub fn on_content_changed(&mut self) {
        self.ensure_widget_present();
    }

    /// Button click: flip the preference, restyle, then reload.
    pub fn activate(&mut self) -> Mode {
        let mode = self.toggle();
        self.host.schedule_reload(self.reload_delay_ms);
        mode
    }

    // --- Exported operations ---

    pub fn is_enabled(&self) -> bool {
        self.store.is_enabled()
    }

    /// Flip the preference and restyle the button without reloading.
    pub fn toggle(&mut self) -> Mode {
        let mode = self.store.toggle();
        self.refresh();
        mode
    }

    /// Re-read the preference and restyle an existing button. Does nothing
    /// when no button is on the page.
    pub fn refresh(&mut self) {
        if self.mount == MountState::Mounted || self.host.widget_in_view() {
            self.host.apply_appearance(&Appearance::for_mode(self.store.mode()));
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn mount_state(&self) -> MountState {
        self.mount
    }

    #[must_use]
    pub fn reveal_state(&self) -> DeferredReveal {
        self.reveal
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn store(&self) -> &PreferenceStore<J> {
        &self.store
    }

    /// Create the button unless this view already has one. A button that
    /// someone else put on the page is adopted instead of duplicated.
    fn render(&mut self) {
        if self.mount == MountState::Mounted {
            return;
        }
        if self.host.widget_in_view() {
            log::debug!("adopting toggle already present in the page");
        } else {
            let appearance = Appearance::for_mode(self.store.mode());
            if !self.host.mount_widget(&appearance) {
                return;
            }
            log::debug!("mounted toggle in {} mode", appearance.mode);
        }
        self.mount = MountState::Mounted;
        self.host.stop_observing();
    }
}
