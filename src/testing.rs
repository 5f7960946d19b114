//! In-memory stand-ins for the browser seams, shared by unit tests.

use crate::controller::ViewHost;
use crate::preference::CookieJar;
use crate::widget::Appearance;

/// Cookie jar that behaves like `document.cookie` for name/value pairs:
/// writing a name replaces its value in place, new names append.
#[derive(Debug, Default)]
pub struct MemoryJar {
    pub entries: Vec<(String, String)>,
    pub directives: Vec<String>,
}

impl MemoryJar {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
            directives: Vec::new(),
        }
    }
}

impl CookieJar for MemoryJar {
    fn read_all(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&mut self, directive: &str) {
        self.directives.push(directive.to_owned());
        let pair = directive.split(';').next().unwrap_or_default();
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_owned();
        } else {
            self.entries.push((name.to_owned(), value.to_owned()));
        }
    }

    fn expires_after_days(&self, days: u32) -> String {
        format!("+{days}d")
    }
}

/// Host that records every call the controller makes.
#[derive(Debug, Default)]
pub struct FakeView {
    pub marker_count: usize,
    /// An element with the widget id that the controller did not create.
    pub foreign_widget: bool,
    /// Simulates a document whose body has not been parsed yet.
    pub no_body: bool,
    pub mounted: Vec<Appearance>,
    pub applied: Vec<Appearance>,
    pub reloads: Vec<u32>,
    pub listeners_installed: usize,
    pub listeners_removed: usize,
    pub observers_disconnected: usize,
}

impl FakeView {
    pub fn with_markers(marker_count: usize) -> Self {
        Self { marker_count, ..Self::default() }
    }

    /// Appearance currently shown, if a widget exists.
    pub fn current(&self) -> Option<&Appearance> {
        self.applied.last().or(self.mounted.last())
    }
}

impl ViewHost for FakeView {
    fn widget_in_view(&self) -> bool {
        self.foreign_widget || !self.mounted.is_empty()
    }

    fn has_markers(&self) -> bool {
        self.marker_count > 0
    }

    fn mount_widget(&mut self, appearance: &Appearance) -> bool {
        if self.no_body {
            return false;
        }
        self.mounted.push(appearance.clone());
        true
    }

    fn apply_appearance(&mut self, appearance: &Appearance) {
        self.applied.push(appearance.clone());
    }

    fn schedule_reload(&mut self, delay_ms: u32) {
        self.reloads.push(delay_ms);
    }

    fn install_activation_listener(&mut self) {
        self.listeners_installed += 1;
    }

    fn remove_activation_listener(&mut self) {
        self.listeners_removed += 1;
    }

    fn stop_observing(&mut self) {
        self.observers_disconnected += 1;
    }
}
