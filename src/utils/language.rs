//! Browser and document language lookup.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::dom;

/// Get the user's preferred language (e.g. `"en-US"`).
///
/// Falls back to the legacy `navigator.userLanguage`.
pub fn user_language() -> Option<String> {
    let navigator = dom::navigator()?;
    navigator
        .language()
        .or_else(|| dom::js_property(&navigator, "userLanguage")?.as_string())
}

/// Get the `lang` attribute of the `<html>` element (e.g. `"en"`).
pub fn site_language() -> Option<String> {
    let root = dom::document_element()?.dyn_into::<HtmlElement>().ok()?;
    Some(root.lang())
}
