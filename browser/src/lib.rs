#![warn(
    missing_docs,
    clippy::pedantic,
    clippy::allow_attributes,
    clippy::absolute_paths,
    clippy::alloc_instead_of_core,
    clippy::decimal_literal_representation,
    clippy::missing_docs_in_private_items
)]
#![allow(clippy::must_use_candidate)]

//! Browser bindings for the sign-up panel, compiled to WASM.
//!
//! The hosting page needs `#signUp` and `#signIn` triggers, a `#container`
//! that gets the active-panel class, and a `#signup-form` with `username`,
//! `email`, `password`, `confirm_password` and `full_name` fields.

#[expect(clippy::missing_docs_in_private_items)]
mod utils;

use signup_core::{
    api::HttpTransport, form::FIELD_NAMES, panel::ACTIVE_CLASS, Controller, Panel, Settings,
    SignupForm, View,
};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, FormData, HtmlFormElement, Window};

#[wasm_bindgen]
extern "C" {
    fn alert(s: &str);
}

/// Wire up the page, sending registrations to the default endpoint.
///
/// ## Errors
///
/// Fails if any of the expected elements are missing from the page.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_with(Settings::default())
}

/// Wire up the page, sending registrations to `endpoint` instead of the
/// default.
///
/// ## Errors
///
/// Fails if `endpoint` isn't an absolute URL, or if any of the expected
/// elements are missing from the page.
#[wasm_bindgen(js_name = startWithEndpoint)]
pub fn start_with_endpoint(endpoint: &str) -> Result<(), JsValue> {
    let settings =
        Settings::with_endpoint(endpoint).map_err(|err| JsValue::from_str(&err.to_string()))?;

    start_with(settings)
}

/// Look up our elements once and attach the listeners.
fn start_with(settings: Settings) -> Result<(), JsValue> {
    utils::set_panic_hook();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let sign_up = element(&document, "signUp")?;
    let sign_in = element(&document, "signIn")?;
    let form: HtmlFormElement = element(&document, "signup-form")?.dyn_into()?;

    let page = Page {
        container: element(&document, "container")?,
        form: form.clone(),
        window,
    };
    let controller = Controller::new(HttpTransport::default(), settings);

    listen(&sign_up, "click", {
        let controller = controller.clone();
        let mut page = page.clone();
        move |_| controller.sign_up_clicked(&mut page)
    })?;

    listen(&sign_in, "click", {
        let controller = controller.clone();
        let mut page = page.clone();
        move |_| controller.sign_in_clicked(&mut page)
    })?;

    listen(&form, "submit", move |event: Event| {
        // We always submit ourselves, never with a native form post.
        event.prevent_default();

        let form = match FormData::new_with_form(&page.form) {
            Ok(data) => read_form(&data),
            Err(err) => {
                tracing::error!(?err, "could not read signup form");
                return;
            }
        };

        let controller = controller.clone();
        let mut page = page.clone();
        spawn_local(async move {
            controller.submit(&form, &mut page).await;
        });
    })?;

    Ok(())
}

/// Get an element that must be on the page.
fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
}

/// Attach an event listener for the lifetime of the page.
fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;

    // Listeners are never removed, so JS owns the closure from here on.
    closure.forget();

    Ok(())
}

/// Pull our fields out of the form. Anything missing reads as empty.
fn read_form(data: &FormData) -> SignupForm {
    SignupForm::from_fields(
        FIELD_NAMES
            .iter()
            .map(|name| (name, data.get(name).as_string().unwrap_or_default())),
    )
}

/// The DOM handles the controller acts on.
#[derive(Debug, Clone)]
struct Page {
    /// Used to navigate away after signing up.
    window: Window,

    /// Carries `ACTIVE_CLASS` while the sign-up side is showing.
    container: Element,

    /// The registration form.
    form: HtmlFormElement,
}

impl View for Page {
    fn set_panel(&mut self, panel: Panel) {
        let classes = self.container.class_list();

        let res = if panel.is_active() {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };

        if let Err(err) = res {
            tracing::warn!(?err, ?panel, "could not toggle panel class");
        }
    }

    fn alert(&mut self, message: &str) {
        alert(message);
    }

    fn navigate(&mut self, target: &str) {
        if let Err(err) = self.window.location().set_href(target) {
            tracing::error!(?err, to = target, "could not navigate");
        }
    }

    fn reset_form(&mut self) {
        self.form.reset();
    }
}
