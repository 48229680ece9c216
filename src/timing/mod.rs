//! Call-rate limiters over an injected timer service.
//!
//! - [`Throttle`] - fire at most once per interval, first call immediate
//! - [`Debounce`] - fire once per burst, on the trailing or leading [`Edge`]
//! - [`Scheduler`] - the single-shot timer capability both limiters consume,
//!   with [`BrowserScheduler`] for real pages and [`ManualScheduler`] for a
//!   virtual clock
//!
//! ```no_run
//! use std::rc::Rc;
//! use std::time::Duration;
//! use webbelt::timing::{BrowserScheduler, Edge, debounce};
//!
//! let scheduler = Rc::new(BrowserScheduler::new());
//! let on_resize = debounce(scheduler, Duration::from_millis(150), Edge::Trailing, |width: f64| {
//!     web_sys::console::log_1(&width.into());
//! });
//! on_resize.call(1024.0);
//! ```

mod debounce;
mod scheduler;
mod target;
mod throttle;

pub use debounce::{Debounce, Edge, debounce};
pub use scheduler::{BrowserScheduler, ManualScheduler, Scheduler, TimerCallback, TimerId};
pub use throttle::{Throttle, throttle};
