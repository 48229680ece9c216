//! Browser helpers, each a thin adapter over one Web API or a pure function.
//!
//! Provides:
//! - [`cookies`] - `document.cookie` read, write and delete
//! - [`device`] - viewport size, touch support, orientation, mouse position
//! - [`events`] - `CustomEvent` dispatch on `window`
//! - [`language`] - navigator and document language
//! - [`math`] - random numbers, normalization, interpolation
//! - [`paths`] - origin, full URL and template URL of the current page
//! - [`selectors`] - element lookup and a mutation watcher
//! - [`validations`] - email, URL and number string predicates

pub mod cookies;
pub mod device;
pub mod dom;
pub mod events;
pub mod language;
pub mod math;
pub mod paths;
pub mod selectors;
pub mod validations;

pub use cookies::{delete_cookie, get_cookie, set_cookie};
pub use device::{
    Orientation, Point, ViewportSize, device_orientation, is_touch_device, mouse_position,
    viewport_size,
};
pub use events::{dispatch_custom_event, dispatch_custom_event_with};
pub use language::{site_language, user_language};
pub use math::{lerp, normalize, random_int, random_number};
pub use paths::{full_url, site_url, template_url};
pub use selectors::{ElementWatcher, ObserveOptions, element_exists, on_element_change};
pub use validations::{is_email, is_empty, is_float, is_integer, is_numeric, is_url};
