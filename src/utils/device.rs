//! Viewport, touch, orientation and pointer queries.

use serde::Serialize;
use web_sys::MouseEvent;

use super::dom;
use crate::config::PORTRAIT_MEDIA_QUERY;

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// A document-relative position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Portrait => write!(f, "portrait"),
            Self::Landscape => write!(f, "landscape"),
        }
    }
}

/// Get the viewport size.
///
/// Prefers `window.inner{Width,Height}`, falling back to the client size of
/// the root element and then of `<body>`.
pub fn viewport_size() -> Option<ViewportSize> {
    let window = dom::window()?;
    let inner = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .zip(window.inner_height().ok().and_then(|h| h.as_f64()));
    if let Some((width, height)) = inner {
        return Some(ViewportSize { width, height });
    }

    let element = dom::document_element().or_else(|| dom::body().map(Into::into))?;
    Some(ViewportSize {
        width: element.client_width() as f64,
        height: element.client_height() as f64,
    })
}

/// Check whether the device supports touch input.
pub fn is_touch_device() -> bool {
    let Some(window) = dom::window() else {
        return false;
    };
    if js_sys::Reflect::has(&window, &"ontouchstart".into()).unwrap_or(false) {
        return true;
    }

    let navigator = window.navigator();
    navigator.max_touch_points() > 0
        || dom::js_property(&navigator, "msMaxTouchPoints")
            .and_then(|points| points.as_f64())
            .is_some_and(|points| points > 0.0)
}

/// Get the device orientation.
///
/// Anything other than a matching portrait media query reads as landscape.
pub fn device_orientation() -> Orientation {
    let portrait = dom::window()
        .and_then(|w| w.match_media(PORTRAIT_MEDIA_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches());

    if portrait {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    }
}

/// Resolve a pointer position from its page, client and scroll coordinates.
///
/// Page coordinates win when either is non-zero. Otherwise client
/// coordinates offset by `scroll` are used when either is non-zero. Failing
/// both, the origin.
pub fn resolve_pointer(page: Point, client: Point, scroll: Point) -> Point {
    if page.x != 0.0 || page.y != 0.0 {
        page
    } else if client.x != 0.0 || client.y != 0.0 {
        Point::new(client.x + scroll.x, client.y + scroll.y)
    } else {
        Point::default()
    }
}

/// Get the mouse position of `event` relative to the document.
pub fn mouse_position(event: &MouseEvent) -> Point {
    let page = Point::new(event.page_x() as f64, event.page_y() as f64);
    let client = Point::new(event.client_x() as f64, event.client_y() as f64);
    resolve_pointer(page, client, scroll_offset())
}

// Body and root element scroll are summed; at most one is non-zero in
// practice, depending on the document's mode.
fn scroll_offset() -> Point {
    let mut offset = Point::default();
    if let Some(body) = dom::body() {
        offset.x += body.scroll_left() as f64;
        offset.y += body.scroll_top() as f64;
    }
    if let Some(root) = dom::document_element() {
        offset.x += root.scroll_left() as f64;
        offset.y += root.scroll_top() as f64;
    }
    offset
}
