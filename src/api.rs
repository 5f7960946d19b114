//! WASM entry point and the `window.NavigationToggle` object.
//!
//! `start` runs when the module is instantiated: it reads the optional
//! `window.NavigationToggleConfig`, sets up logging, builds the page's
//! controller, and schedules the initialization passes. The controller is
//! owned by the exported [`NavigationToggle`] handle and by the pending
//! timers; reloading the page drops all of it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::{ConfigError, WidgetConfig};
use crate::dom::{DocumentCookies, DomError, DomHost, PageController, with_controller};
use crate::preference::PreferenceStore;
use crate::schedule::{self, Pass};

/// Global the page may set before the module loads.
const CONFIG_GLOBAL: &str = "NavigationToggleConfig";

/// Global the module publishes for other scripts.
const EXPORT_GLOBAL: &str = "NavigationToggle";

/// Handle exposed to page scripts as `window.NavigationToggle`.
#[wasm_bindgen]
pub struct NavigationToggle {
    controller: Rc<RefCell<PageController>>,
    /// Direct cookie access for calls that arrive while the controller is
    /// mid-event (a page script reacting synchronously to the widget).
    cookies: RefCell<PreferenceStore<DocumentCookies>>,
}

#[wasm_bindgen]
impl NavigationToggle {
    #[wasm_bindgen(js_name = isShooterModeEnabled)]
    pub fn is_shooter_mode_enabled(&self) -> bool {
        match self.controller.try_borrow() {
            Ok(c) => c.is_enabled(),
            Err(_) => self.cookies.borrow().is_enabled(),
        }
    }

    /// Flip the preference and restyle the button. Does not reload.
    #[wasm_bindgen(js_name = toggleShooterMode)]
    pub fn toggle_shooter_mode(&self) -> bool {
        match self.controller.try_borrow_mut() {
            Ok(mut c) => c.toggle().is_shooter(),
            Err(_) => {
                log::debug!("toggle controller busy, writing preference directly");
                self.cookies.borrow_mut().toggle().is_shooter()
            }
        }
    }

    #[wasm_bindgen(js_name = updateToggleButton)]
    pub fn update_toggle_button(&self) {
        with_controller(&Rc::downgrade(&self.controller), PageController::refresh);
    }
}

/// Module entry point.
///
/// # Errors
///
/// Returns the underlying [`DomError`] as a JS error when there is no
/// document to attach to.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or(DomError::NoWindow).map_err(to_js)?;
    let (config, config_err) = match read_config(&window) {
        Ok(config) => (config, None),
        Err(err) => (WidgetConfig::default(), Some(err)),
    };
    if console_log::init_with_level(config.log_level).is_err() {
        log::debug!("logger already installed");
    }
    if let Some(err) = config_err {
        log::warn!("{err}; using default configuration");
    }

    let document = crate::dom::document().map_err(to_js)?;
    let controller = build_controller(&document, &config).map_err(to_js)?;

    if config.observe_mutations {
        if let Err(err) = controller.borrow_mut().host_mut().observe_mutations() {
            log::warn!("mutation observer unavailable: {err}");
        }
    }

    schedule_initialization(&document, &controller, &config.retry_delays_ms).map_err(to_js)?;

    let cookies = preference_store(&document, &config).map_err(to_js)?;
    let handle = NavigationToggle { controller, cookies: RefCell::new(cookies) };
    js_sys::Reflect::set(&window, &JsValue::from_str(EXPORT_GLOBAL), &JsValue::from(handle))?;
    log::info!("navigation toggle ready");
    Ok(())
}

/// Read `window.NavigationToggleConfig`, accepting a JSON string or a plain
/// object. An unset global means defaults.
fn read_config(window: &Window) -> Result<WidgetConfig, ConfigError> {
    let Ok(raw) = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return Ok(WidgetConfig::default());
    };
    if raw.is_undefined() || raw.is_null() {
        return Ok(WidgetConfig::default());
    }
    let json = match raw.as_string() {
        Some(text) => text,
        None => match js_sys::JSON::stringify(&raw) {
            Ok(text) => text.into(),
            Err(_) => return Ok(WidgetConfig::default()),
        },
    };
    WidgetConfig::from_json(&json)
}

fn preference_store(document: &Document, config: &WidgetConfig) -> Result<PreferenceStore<DocumentCookies>, DomError> {
    let cookies = DocumentCookies::new(document)?;
    Ok(PreferenceStore::new(cookies, config.cookie_name.clone(), config.expiry_days))
}

fn build_controller(document: &Document, config: &WidgetConfig) -> Result<Rc<RefCell<PageController>>, DomError> {
    let store = preference_store(document, config)?;
    Ok(Rc::new_cyclic(|weak| {
        let host = DomHost::new(document.clone(), config, weak.clone());
        RefCell::new(PageController::new(store, host, config.reload_delay_ms))
    }))
}

/// Run an initialization pass once the document structure is parsed, then
/// again at each retry delay for content that arrives late.
fn schedule_initialization(
    document: &Document,
    controller: &Rc<RefCell<PageController>>,
    retry_delays_ms: &[u32],
) -> Result<(), DomError> {
    for pass in schedule::plan(&document.ready_state(), retry_delays_ms) {
        let pending = Rc::clone(controller);
        match pass {
            Pass::OnReady => {
                let on_ready = Closure::once(move || initialize(&pending));
                document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
                on_ready.forget();
            }
            Pass::Now => initialize(&pending),
            Pass::After(delay_ms) => {
                gloo_timers::callback::Timeout::new(delay_ms, move || initialize(&pending)).forget();
            }
        }
    }
    Ok(())
}

fn initialize(controller: &Rc<RefCell<PageController>>) {
    with_controller(&Rc::downgrade(controller), PageController::initialize);
}

fn to_js(err: DomError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
