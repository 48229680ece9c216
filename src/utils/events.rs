//! Custom event dispatch on `window`.

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};

use super::dom;
use crate::error::EventError;

/// Check that `name` is usable as an event name.
pub fn validate_event_name(name: &str) -> Result<&str, EventError> {
    if name.trim().is_empty() {
        return Err(EventError::EmptyName);
    }
    Ok(name)
}

/// Dispatch a `CustomEvent` named `name` on `window` with `detail`.
///
/// With `debug` set, the event name is logged to the browser console.
pub fn dispatch_custom_event(name: &str, detail: &JsValue, debug: bool) -> Result<(), EventError> {
    let name = validate_event_name(name)?;
    let window = dom::window().ok_or(EventError::WindowUnavailable)?;

    let init = CustomEventInit::new();
    init.set_detail(detail);
    let event = CustomEvent::new_with_event_init_dict(name, &init)
        .map_err(|_| EventError::CreationFailed)?;

    window
        .dispatch_event(&event)
        .map_err(|_| EventError::DispatchFailed)?;

    if debug {
        web_sys::console::log_2(&"Dispatched event:".into(), &name.into());
    }
    Ok(())
}

/// Dispatch a `CustomEvent` whose detail is `detail` converted to a JS value.
pub fn dispatch_custom_event_with<T: Serialize>(
    name: &str,
    detail: &T,
    debug: bool,
) -> Result<(), EventError> {
    validate_event_name(name)?;
    let detail = serde_wasm_bindgen::to_value(detail)
        .map_err(|e| EventError::Serialization(e.to_string()))?;
    dispatch_custom_event(name, &detail, debug)
}
