//! String validation predicates.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

// Scheme, optional credentials, host (public IPv4 or domain with a TLD),
// optional port, optional path/query/fragment.
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:(?:(?:https?|ftp):)?//)(?:\S+(?::\S*)?@)?",
        r"(?P<host>",
        r"(?:[1-9]\d?|1\d\d|2[01]\d|22[0-3])(?:\.(?:1?\d{1,2}|2[0-4]\d|25[0-5])){2}(?:\.(?:[1-9]\d?|1\d\d|2[0-4]\d|25[0-4]))",
        r"|",
        r"(?:(?:[a-z\x{00a1}-\x{ffff}0-9]-*)*[a-z\x{00a1}-\x{ffff}0-9]+)",
        r"(?:\.(?:[a-z\x{00a1}-\x{ffff}0-9]-*)*[a-z\x{00a1}-\x{ffff}0-9]+)*",
        r"(?:\.(?:[a-z\x{00a1}-\x{ffff}]{2,})).?",
        r")",
        r"(?::\d{2,5})?(?:[/?#]\S*)?$",
    ))
    .expect("url pattern is valid")
});

// Loopback, link-local and private networks, matched as a host prefix.
static RESERVED_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"(?:10|127)(?:\.\d{1,3}){3}",
        r"|(?:169\.254|192\.168)(?:\.\d{1,3}){2}",
        r"|172\.(?:1[6-9]|2\d|3[0-1])(?:\.\d{1,3}){2}",
        r")",
    ))
    .expect("reserved host pattern is valid")
});

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid"));

static FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+\.[0-9]+").expect("float pattern is valid"));

/// Check if `value` is an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Check if `value` is an `http`, `https`, `ftp` or protocol-relative URL.
///
/// Hosts in loopback, link-local or private IPv4 ranges are rejected.
pub fn is_url(value: &str) -> bool {
    URL.captures(value)
        .and_then(|caps| caps.name("host"))
        .is_some_and(|host| !RESERVED_HOST.is_match(host.as_str()))
}

/// Check if `value` is an optionally negative run of ASCII digits.
pub fn is_integer(value: &str) -> bool {
    INTEGER.is_match(value)
}

/// Check if `value` parses as a finite number, ignoring surrounding whitespace.
///
/// Unsigned `0x`, `0o` and `0b` literals count as numbers too.
pub fn is_numeric(value: &str) -> bool {
    let value = value.trim();
    if let Some(radix) = radix_literal(value) {
        return radix;
    }
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

// `Some(valid)` when `value` carries a radix prefix.
fn radix_literal(value: &str) -> Option<bool> {
    let (prefix, digits) = value.split_at_checked(2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some(!digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)))
}

/// Check if `value` contains a decimal number (`digits.digits`) anywhere.
pub fn is_float(value: &str) -> bool {
    FLOAT.is_match(value)
}

/// Check if `value` is empty, optionally treating whitespace as empty.
pub fn is_empty(value: &str, ignore_whitespace: bool) -> bool {
    if ignore_whitespace {
        value.trim().is_empty()
    } else {
        value.is_empty()
    }
}
