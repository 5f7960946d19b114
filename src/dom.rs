//! Browser implementations of the controller seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DocumentCookies` backs the preference with `document.cookie`; `DomHost`
//! creates and restyles the button, owns the document click listener and the
//! mutation observer, and reloads the page. Failures here are logged and
//! swallowed: the widget must never break the page it is injected into.
//!
//! Closures handed to the browser hold a `Weak` back to the controller. They
//! are kept alive in `DomHost` (or forgotten, for the button) and never
//! dropped while the browser may still invoke them.

use std::cell::RefCell;
use std::rc::Weak;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlDocument, HtmlElement, MutationObserver, MutationObserverInit};

use crate::config::WidgetConfig;
use crate::consts::MS_PER_DAY;
use crate::controller::{ViewHost, WidgetController};
use crate::preference::CookieJar;
use crate::widget::{Appearance, base_style};

/// Controller wired to the live page.
pub type PageController = WidgetController<DocumentCookies, DomHost>;

/// Error raised while talking to the DOM.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("document has no body yet")]
    NoBody,
    #[error("document has no root element")]
    NoRoot,
    /// A DOM object did not have the expected interface.
    #[error("expected {0}")]
    Cast(&'static str),
    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// The current window's document.
///
/// # Errors
///
/// Returns [`DomError::NoWindow`] or [`DomError::NoDocument`] outside a page.
pub fn document() -> Result<Document, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)?.document().ok_or(DomError::NoDocument)
}

// =============================================================
// Cookies
// =============================================================

/// `document.cookie` as a [`CookieJar`].
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    /// # Errors
    ///
    /// Returns [`DomError::Cast`] when the document is not an HTML document.
    pub fn new(document: &Document) -> Result<Self, DomError> {
        let document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| DomError::Cast("HtmlDocument"))?;
        Ok(Self { document })
    }
}

impl CookieJar for DocumentCookies {
    fn read_all(&self) -> String {
        match self.document.cookie() {
            Ok(cookies) => cookies,
            Err(err) => {
                log::warn!("reading cookies failed: {}", DomError::from(err));
                String::new()
            }
        }
    }

    fn write(&mut self, directive: &str) {
        if let Err(err) = self.document.set_cookie(directive) {
            log::warn!("writing cookie failed: {}", DomError::from(err));
        }
    }

    fn expires_after_days(&self, days: u32) -> String {
        let at = js_sys::Date::now() + f64::from(days) * MS_PER_DAY;
        js_sys::Date::new(&JsValue::from_f64(at)).to_utc_string().into()
    }
}

// =============================================================
// View host
// =============================================================

/// [`ViewHost`] over the live document.
pub struct DomHost {
    document: Document,
    button_id: String,
    marker_selector: String,
    controller: Weak<RefCell<PageController>>,
    click_listener: Option<Closure<dyn FnMut(Event)>>,
    observer: Option<(MutationObserver, Closure<dyn FnMut()>)>,
}

impl DomHost {
    #[must_use]
    pub fn new(document: Document, config: &WidgetConfig, controller: Weak<RefCell<PageController>>) -> Self {
        Self {
            document,
            button_id: config.button_id.clone(),
            marker_selector: config.marker_selector(),
            controller,
            click_listener: None,
            observer: None,
        }
    }

    /// Watch the whole document tree for structural changes and report them
    /// to the controller until the widget is mounted.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] when the observer cannot be created or attached.
    pub fn observe_mutations(&mut self) -> Result<(), DomError> {
        if self.observer.is_some() {
            return Ok(());
        }
        let root = self.document.document_element().ok_or(DomError::NoRoot)?;
        let controller = self.controller.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            with_controller(&controller, PageController::on_content_changed);
        });
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(&root, &init)?;
        self.observer = Some((observer, callback));
        Ok(())
    }

    fn button(&self) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(&self.button_id)
            .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
    }

    fn create_button(&self, appearance: &Appearance) -> Result<(), DomError> {
        let body = self.document.body().ok_or(DomError::NoBody)?;
        let button = self
            .document
            .create_element("button")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::Cast("HtmlElement"))?;
        button.set_id(&self.button_id);
        button.set_attribute("type", "button")?;
        button.set_attribute("style", &base_style(appearance))?;
        button.set_text_content(Some(appearance.label));

        let controller = self.controller.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.stop_propagation();
            with_controller(&controller, |c| {
                c.activate();
            });
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        // Lives as long as the button, which lives as long as the page.
        on_click.forget();

        body.append_child(&button)?;
        Ok(())
    }

    fn restyle(&self, appearance: &Appearance) -> Result<(), DomError> {
        let Some(button) = self.button() else {
            return Ok(());
        };
        button.set_text_content(Some(appearance.label));
        let style = button.style();
        for (property, value) in appearance.style_properties() {
            style.set_property(property, value)?;
        }
        Ok(())
    }

    fn add_click_listener(&mut self) -> Result<(), DomError> {
        let controller = self.controller.clone();
        let selector = self.marker_selector.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let in_marker = target_in_marker(&event, &selector);
            with_controller(&controller, |c| c.on_document_click(in_marker));
        });
        self.document
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        self.click_listener = Some(listener);
        Ok(())
    }
}

impl ViewHost for DomHost {
    fn widget_in_view(&self) -> bool {
        self.document.get_element_by_id(&self.button_id).is_some()
    }

    fn has_markers(&self) -> bool {
        match self.document.query_selector(&self.marker_selector) {
            Ok(found) => found.is_some(),
            Err(err) => {
                log::warn!("marker lookup failed: {}", DomError::from(err));
                false
            }
        }
    }

    fn mount_widget(&mut self, appearance: &Appearance) -> bool {
        match self.create_button(appearance) {
            Ok(()) => true,
            Err(DomError::NoBody) => {
                log::debug!("no body yet, deferring toggle mount");
                false
            }
            Err(err) => {
                log::warn!("mounting toggle failed: {err}");
                false
            }
        }
    }

    fn apply_appearance(&mut self, appearance: &Appearance) {
        if let Err(err) = self.restyle(appearance) {
            log::warn!("restyling toggle failed: {err}");
        }
    }

    fn schedule_reload(&mut self, delay_ms: u32) {
        gloo_timers::callback::Timeout::new(delay_ms, reload).forget();
    }

    fn install_activation_listener(&mut self) {
        if self.click_listener.is_some() {
            return;
        }
        if let Err(err) = self.add_click_listener() {
            log::warn!("installing click listener failed: {err}");
        }
    }

    fn remove_activation_listener(&mut self) {
        // Called from inside the listener itself, so the closure stays owned
        // here and is only detached.
        let Some(listener) = self.click_listener.as_ref() else {
            return;
        };
        if let Err(err) = self
            .document
            .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            log::warn!("removing click listener failed: {}", DomError::from(err));
        }
    }

    fn stop_observing(&mut self) {
        if let Some((observer, _)) = self.observer.as_ref() {
            observer.disconnect();
        }
    }
}

/// Whether the event target is, or is inside, an element matching `selector`.
fn target_in_marker(event: &Event, selector: &str) -> bool {
    event.target().is_some_and(|target| {
        target
            .dyn_ref::<Element>()
            .is_some_and(|el| matches!(el.closest(selector), Ok(Some(_))))
    })
}

/// Run `f` against the controller if it is still alive and not already
/// borrowed by an outer call.
pub(crate) fn with_controller(controller: &Weak<RefCell<PageController>>, f: impl FnOnce(&mut PageController)) {
    let Some(controller) = controller.upgrade() else {
        return;
    };
    match controller.try_borrow_mut() {
        Ok(mut c) => f(&mut c),
        Err(_) => log::warn!("toggle controller busy, dropping nested event"),
    }
}

fn reload() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().reload() {
        log::warn!("page reload failed: {}", DomError::from(err));
    }
}
