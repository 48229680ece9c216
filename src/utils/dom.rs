//! DOM and Web API accessors.
//!
//! Every helper in [`crate::utils`] reaches the browser through these, so a
//! missing window or document surfaces as `None` rather than a panic.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, HtmlElement, Navigator, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get the current document as an `HtmlDocument` (needed for `cookie`).
pub fn html_document() -> Option<HtmlDocument> {
    document()?.dyn_into::<HtmlDocument>().ok()
}

/// Get the root `<html>` element.
#[inline]
pub fn document_element() -> Option<Element> {
    document()?.document_element()
}

/// Get `<body>`.
#[inline]
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Get the navigator.
#[inline]
pub fn navigator() -> Option<Navigator> {
    Some(window()?.navigator())
}

/// Read a property that `web-sys` has no binding for (e.g. vendor-prefixed ones).
pub fn js_property(target: &wasm_bindgen::JsValue, name: &str) -> Option<wasm_bindgen::JsValue> {
    js_sys::Reflect::get(target, &name.into())
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}
