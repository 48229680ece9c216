//! Cookie accessors over `document.cookie`.
//!
//! Parsing and formatting are pure functions so they can be tested off the
//! browser; [`get_cookie`], [`set_cookie`] and [`delete_cookie`] wire them to
//! the live document.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use super::dom;
use crate::config::{COOKIE_EXPIRES_FORMAT, COOKIE_PATH, MS_PER_DAY};
use crate::error::CookieError;

// =============================================================================
// Pure Helpers
// =============================================================================

/// Find the value of `name` in a `document.cookie` style string.
///
/// Entries are split on `;` and trimmed; the first `name=` entry wins.
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
}

/// Expiry `days` after `now_ms` (Unix milliseconds).
///
/// Zero or NaN days means a session cookie, so no expiry. Negative days
/// give a date in the past, which deletes the cookie.
pub fn expiry_after_days(now_ms: f64, days: f64) -> Option<DateTime<Utc>> {
    if days == 0.0 || days.is_nan() {
        return None;
    }
    let at = now_ms + days * MS_PER_DAY;
    DateTime::from_timestamp_millis(at as i64)
}

/// Build the string assigned to `document.cookie`.
pub fn format_cookie(name: &str, value: &str, expires: Option<DateTime<Utc>>) -> String {
    match expires {
        Some(at) => format!(
            "{}={}; expires={}; path={}",
            name,
            value,
            at.format(COOKIE_EXPIRES_FORMAT),
            COOKIE_PATH
        ),
        None => format!("{}={}; path={}", name, value, COOKIE_PATH),
    }
}

// =============================================================================
// Document Access
// =============================================================================

/// Read a cookie from the current document.
pub fn get_cookie(name: &str) -> Option<String> {
    let cookies = dom::html_document()?.cookie().ok()?;
    find_cookie(&cookies, name).map(str::to_string)
}

/// Write a cookie that expires `days` from now (0 for a session cookie).
pub fn set_cookie(name: &str, value: &str, days: f64) -> Result<(), CookieError> {
    let document = dom::html_document().ok_or(CookieError::DocumentUnavailable)?;
    let expires = expiry_after_days(js_sys::Date::now(), days);
    document
        .set_cookie(&format_cookie(name, value, expires))
        .map_err(|_| {
            warn!(cookie = name, "cookie write rejected");
            CookieError::WriteFailed
        })
}

/// Remove a cookie by writing it with an expiry in the past.
pub fn delete_cookie(name: &str) -> Result<(), CookieError> {
    set_cookie(name, "", -1.0)
}

/// Read a JSON-encoded cookie.
///
/// Returns `None` if the cookie doesn't exist or doesn't decode as `T`.
pub fn get_cookie_json<T: DeserializeOwned>(name: &str) -> Option<T> {
    let raw = get_cookie(name)?;
    let json = js_sys::decode_uri_component(&raw).ok()?;
    serde_json::from_str(&String::from(json)).ok()
}

/// Store `data` as a JSON-encoded cookie.
pub fn set_cookie_json<T: Serialize>(name: &str, data: &T, days: f64) -> Result<(), CookieError> {
    let json =
        serde_json::to_string(data).map_err(|e| CookieError::Serialization(e.to_string()))?;
    let encoded = String::from(js_sys::encode_uri_component(&json));
    set_cookie(name, &encoded, days)
}
