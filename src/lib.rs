//! Browser helpers for Rust/WebAssembly front ends.
//!
//! - [`timing`] - [`Throttle`](timing::Throttle) and [`Debounce`](timing::Debounce)
//!   call-rate limiters over an injectable [`Scheduler`](timing::Scheduler)
//! - [`utils`] - cookies, device queries, events, language, math, paths,
//!   selectors and string validators
//!
//! Diagnostics go through [`tracing`]; install a subscriber in the host
//! application to see them.

pub mod config;
pub mod error;
pub mod timing;
pub mod utils;

pub use error::{CookieError, EventError, MathError, WatchError};
