//! Current page URL helpers.

use super::dom;
use crate::config::TEMPLATE_URL_KEY;

/// Get the site origin: protocol, host and port (`location.origin`).
pub fn site_url() -> Option<String> {
    dom::window()?.location().origin().ok()
}

/// Get the full page URL including path and query (`location.href`).
pub fn full_url() -> Option<String> {
    dom::window()?.location().href().ok()
}

/// Get the template URL from `<body data-template-url="...">`.
///
/// An empty attribute counts as unset.
pub fn template_url() -> Option<String> {
    dom::body()?
        .dataset()
        .get(TEMPLATE_URL_KEY)
        .filter(|url| !url.is_empty())
}
