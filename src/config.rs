//! Compile-time constants shared by the browser helpers.

use crate::utils::selectors::ObserveOptions;

// =============================================================================
// Cookies
// =============================================================================

/// Path attribute written on every cookie.
pub const COOKIE_PATH: &str = "/";

/// Milliseconds in one day, for cookie expiry arithmetic.
pub const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// `expires` attribute format (RFC 1123, as produced by `toUTCString`).
pub const COOKIE_EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

// =============================================================================
// Device
// =============================================================================

/// Media query that matches a portrait viewport.
pub const PORTRAIT_MEDIA_QUERY: &str = "(orientation: portrait)";

// =============================================================================
// Paths
// =============================================================================

/// `dataset` key read from `<body>` for the template URL (`data-template-url`).
pub const TEMPLATE_URL_KEY: &str = "templateUrl";


// =============================================================================
// Selectors
// =============================================================================

/// Watcher subscription when none is given: child additions and removals
/// anywhere in the document.
pub const DEFAULT_OBSERVE_OPTIONS: ObserveOptions = ObserveOptions {
    child_list: true,
    subtree: true,
    attributes: false,
    character_data: false,
};
