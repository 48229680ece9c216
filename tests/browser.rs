//! In-browser checks for the DOM adapters and the browser scheduler.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_test::*;
use webbelt::timing::{BrowserScheduler, Edge, debounce, throttle};
use webbelt::utils::{cookies, device, dom, events, language, paths, selectors, validations};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_cookie_round_trip() {
    cookies::set_cookie("webbelt_test", "dark", 1.0).unwrap();
    assert_eq!(cookies::get_cookie("webbelt_test").as_deref(), Some("dark"));

    cookies::delete_cookie("webbelt_test").unwrap();
    assert_eq!(cookies::get_cookie("webbelt_test"), None);
}

#[wasm_bindgen_test]
fn test_cookie_json_round_trip() {
    let prefs = vec!["a; b".to_string(), "c=d".to_string()];
    cookies::set_cookie_json("webbelt_json", &prefs, 1.0).unwrap();
    assert_eq!(cookies::get_cookie_json::<Vec<String>>("webbelt_json"), Some(prefs));
    cookies::delete_cookie("webbelt_json").unwrap();
}

#[wasm_bindgen_test]
fn test_dispatch_custom_event() {
    let window = dom::window().unwrap();
    let received = Rc::new(RefCell::new(None));

    let sink = received.clone();
    let listener =
        Closure::<dyn FnMut(web_sys::CustomEvent)>::new(move |event: web_sys::CustomEvent| {
            *sink.borrow_mut() = event.detail().as_f64();
        });
    window
        .add_event_listener_with_callback("webbelt:ping", listener.as_ref().unchecked_ref())
        .unwrap();

    events::dispatch_custom_event_with("webbelt:ping", &7.5, false).unwrap();
    assert_eq!(*received.borrow(), Some(7.5));

    window
        .remove_event_listener_with_callback("webbelt:ping", listener.as_ref().unchecked_ref())
        .unwrap();
}

#[wasm_bindgen_test]
async fn test_element_watcher_sees_added_and_removed() {
    let document = dom::document().unwrap();
    let body = dom::body().unwrap();
    let added = Rc::new(RefCell::new(0));
    let removed = Rc::new(RefCell::new(0));

    let (on_added, on_removed) = (added.clone(), removed.clone());
    let watcher = selectors::on_element_change(
        ".webbelt-item",
        move |_| *on_added.borrow_mut() += 1,
        move |_| *on_removed.borrow_mut() += 1,
        selectors::ObserveOptions::default(),
    )
    .unwrap();

    // A wrapper that matches, holding one matching child
    let wrapper = document.create_element("div").unwrap();
    wrapper.set_class_name("webbelt-item");
    let child = document.create_element("span").unwrap();
    child.set_class_name("webbelt-item");
    wrapper.append_child(&child).unwrap();

    body.append_child(&wrapper).unwrap();
    assert!(selectors::element_exists(".webbelt-item"));
    TimeoutFuture::new(0).await;
    assert_eq!(*added.borrow(), 2);

    body.remove_child(&wrapper).unwrap();
    TimeoutFuture::new(0).await;
    assert_eq!(*removed.borrow(), 2);

    watcher.disconnect();
    body.append_child(&wrapper).unwrap();
    TimeoutFuture::new(0).await;
    assert_eq!(*added.borrow(), 2);
    body.remove_child(&wrapper).unwrap();
}

#[wasm_bindgen_test]
async fn test_browser_scheduler_drives_throttle() {
    let scheduler = Rc::new(BrowserScheduler::new());
    let calls = Rc::new(RefCell::new(Vec::new()));

    let sink = calls.clone();
    let throttled = throttle(scheduler.clone(), Duration::from_millis(20), move |n: u32| {
        sink.borrow_mut().push(n);
    });
    throttled.call(1);
    throttled.call(2);
    throttled.call(3);
    assert_eq!(*calls.borrow(), vec![1]);

    TimeoutFuture::new(80).await;
    assert_eq!(*calls.borrow(), vec![1, 3]);
    assert_eq!(scheduler.pending(), 0);
}

#[wasm_bindgen_test]
async fn test_browser_scheduler_drives_debounce() {
    let scheduler = Rc::new(BrowserScheduler::new());
    let calls = Rc::new(RefCell::new(Vec::new()));

    let sink = calls.clone();
    let debounced = debounce(
        scheduler.clone(),
        Duration::from_millis(20),
        Edge::Trailing,
        move |n: u32| sink.borrow_mut().push(n),
    );
    debounced.call(1);
    debounced.call(2);
    assert_eq!(scheduler.pending(), 1);

    TimeoutFuture::new(60).await;
    assert_eq!(*calls.borrow(), vec![2]);
}

#[wasm_bindgen_test]
fn test_validators_in_browser() {
    assert!(validations::is_email("user@example.com"));
    assert!(!validations::is_url("http://127.0.0.1"));
}

#[wasm_bindgen_test]
fn test_template_url_from_body_dataset() {
    let dataset = dom::body().unwrap().dataset();

    dataset.set("templateUrl", "/wp-content/themes/belt").unwrap();
    assert_eq!(paths::template_url().as_deref(), Some("/wp-content/themes/belt"));

    dataset.set("templateUrl", "").unwrap();
    assert_eq!(paths::template_url(), None);

    dataset.delete("templateUrl");
    assert_eq!(paths::template_url(), None);
}

#[wasm_bindgen_test]
fn test_site_and_full_url_match_location() {
    let location = dom::window().unwrap().location();

    assert_eq!(paths::site_url(), location.origin().ok());
    assert_eq!(paths::full_url(), location.href().ok());
}

#[wasm_bindgen_test]
fn test_site_language_reads_root_lang() {
    let root = dom::document_element()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    let previous = root.lang();

    root.set_lang("fr-CA");
    assert_eq!(language::site_language().as_deref(), Some("fr-CA"));

    root.set_lang(&previous);
}

#[wasm_bindgen_test]
fn test_user_language_is_reported() {
    let lang = language::user_language().unwrap();
    assert!(!lang.is_empty());
}

#[wasm_bindgen_test]
fn test_viewport_and_orientation() {
    let size = device::viewport_size().unwrap();
    assert!(size.width >= 0.0);
    assert!(size.height >= 0.0);

    let orientation = device::device_orientation();
    assert!(matches!(
        orientation,
        device::Orientation::Portrait | device::Orientation::Landscape
    ));
}
