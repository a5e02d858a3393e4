//! DOM helpers for the scholarship form.

use common::form::FormField;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Shows a blocking browser alert.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Reads the `name` and current value of the input, textarea or select that
/// fired an event and maps the name to a [`FormField`].
pub fn changed_field(target: Option<EventTarget>) -> Option<(FormField, String)> {
    let target = target?;
    let (name, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        (input.name(), input.value())
    } else if let Some(textarea) = target.dyn_ref::<HtmlTextAreaElement>() {
        (textarea.name(), textarea.value())
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        (select.name(), select.value())
    } else {
        return None;
    };
    name.parse::<FormField>().ok().map(|field| (field, value))
}

/// First file of a file input, if the user picked one.
pub fn first_file(target: Option<EventTarget>) -> Option<web_sys::File> {
    target?
        .dyn_into::<HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

/// Clears a file input so it no longer shows the previous pick.
pub fn reset_file_input(input: Option<HtmlInputElement>) {
    if let Some(input) = input {
        input.set_value("");
    }
}
