//! Error types for the browser helpers.
//!
//! One enum per concern:
//!
//! - [`CookieError`] - `document.cookie` writes
//! - [`EventError`] - custom event construction and dispatch
//! - [`WatchError`] - DOM mutation observers
//! - [`MathError`] - range arguments to the math helpers
//!
//! The rate limiters in [`crate::timing`] cannot fail and have no error type.

use thiserror::Error;

/// Cookie access errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CookieError {
    /// No HTML document is available.
    #[error("HTML document not available")]
    DocumentUnavailable,
    /// The browser rejected the cookie write.
    #[error("failed to write cookie")]
    WriteFailed,
    /// The value could not be encoded or decoded as JSON.
    #[error("cookie serialization failed: {0}")]
    Serialization(String),
}

/// Custom event dispatch errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// Event name is empty or whitespace.
    #[error("event name must be a non-empty string")]
    EmptyName,
    /// Browser window not available.
    #[error("browser window not available")]
    WindowUnavailable,
    /// The `CustomEvent` constructor threw.
    #[error("failed to create custom event")]
    CreationFailed,
    /// `dispatchEvent` threw.
    #[error("failed to dispatch custom event")]
    DispatchFailed,
    /// The event detail could not be converted to a JS value.
    #[error("event detail serialization failed: {0}")]
    Serialization(String),
}

/// DOM mutation watcher errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchError {
    /// Browser document not available.
    #[error("browser document not available")]
    DocumentUnavailable,
    /// The `MutationObserver` constructor threw.
    #[error("failed to create mutation observer")]
    ObserverCreationFailed,
    /// `observe` rejected the target or options.
    #[error("failed to start observing")]
    ObserveFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A range's maximum is below its minimum.
    #[error("invalid range parameters")]
    InvalidRange,
}
