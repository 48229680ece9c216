//! Selector queries and a `MutationObserver` based element watcher.

use js_sys::Array;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, MutationObserver, MutationObserverInit, MutationRecord, NodeList};

use super::dom;
use crate::config::DEFAULT_OBSERVE_OPTIONS;
use crate::error::WatchError;

/// Check whether any element matches `selector`.
///
/// An invalid selector counts as no match.
pub fn element_exists(selector: &str) -> bool {
    dom::document()
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .is_some()
}

/// Which mutations the watcher subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserveOptions {
    pub child_list: bool,
    pub subtree: bool,
    pub attributes: bool,
    pub character_data: bool,
}

impl ObserveOptions {
    fn to_init(self) -> MutationObserverInit {
        let init = MutationObserverInit::new();
        init.set_child_list(self.child_list);
        init.set_subtree(self.subtree);
        init.set_attributes(self.attributes);
        init.set_character_data(self.character_data);
        init
    }
}

impl Default for ObserveOptions {
    fn default() -> Self {
        DEFAULT_OBSERVE_OPTIONS
    }
}

type MutationCallback = Closure<dyn FnMut(Array, MutationObserver)>;

/// An active subscription created by [`on_element_change`].
///
/// Dropping the watcher disconnects it. Call [`forget`](Self::forget) to
/// keep it observing for the lifetime of the page.
pub struct ElementWatcher {
    observer: MutationObserver,
    callback: Option<MutationCallback>,
}

impl ElementWatcher {
    /// Stop observing.
    pub fn disconnect(self) {
        drop(self);
    }

    /// Keep observing until the page unloads, leaking the callback.
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for ElementWatcher {
    fn drop(&mut self) {
        if self.callback.is_some() {
            self.observer.disconnect();
        }
    }
}

impl std::fmt::Debug for ElementWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementWatcher")
            .field("active", &self.callback.is_some())
            .finish()
    }
}

/// Watch the document for elements matching `selector` being added or removed.
///
/// For every added (or removed) element, `on_added` (or `on_removed`) runs
/// once if the element itself matches, then once per matching descendant.
///
/// ```no_run
/// use webbelt::utils::selectors::{ObserveOptions, on_element_change};
///
/// let watcher = on_element_change(
///     ".toast",
///     |el| web_sys::console::log_1(&el.into()),
///     |_| {},
///     ObserveOptions::default(),
/// )
/// .expect("document available");
/// watcher.disconnect();
/// ```
pub fn on_element_change<A, R>(
    selector: &str,
    mut on_added: A,
    mut on_removed: R,
    options: ObserveOptions,
) -> Result<ElementWatcher, WatchError>
where
    A: FnMut(Element) + 'static,
    R: FnMut(Element) + 'static,
{
    let document = dom::document().ok_or(WatchError::DocumentUnavailable)?;
    let selector = selector.to_string();

    let callback: MutationCallback =
        Closure::new(move |records: Array, _observer: MutationObserver| {
            for record in records.iter() {
                let Ok(record) = record.dyn_into::<MutationRecord>() else {
                    continue;
                };
                visit_matches(&record.added_nodes(), &selector, &mut on_added);
                visit_matches(&record.removed_nodes(), &selector, &mut on_removed);
            }
        });

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|_| WatchError::ObserverCreationFailed)?;
    observer
        .observe_with_options(&document, &options.to_init())
        .map_err(|_| {
            debug!(?options, "mutation observer rejected options");
            WatchError::ObserveFailed
        })?;

    Ok(ElementWatcher {
        observer,
        callback: Some(callback),
    })
}

fn visit_matches(nodes: &NodeList, selector: &str, handler: &mut dyn FnMut(Element)) {
    for i in 0..nodes.length() {
        // Text and comment nodes have no descendants to match
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        if element.matches(selector).unwrap_or(false) {
            handler(element.clone());
        }

        let Ok(descendants) = element.query_selector_all(selector) else {
            continue;
        };
        for j in 0..descendants.length() {
            if let Some(found) = descendants.item(j).and_then(|n| n.dyn_into::<Element>().ok()) {
                handler(found);
            }
        }
    }
}
