//! Helpers for the in-browser component tests (`wasm-pack test --headless --firefox`).

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Fresh `<div>` appended to the body to mount a component into.
pub fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// Lets the yew scheduler render and run effects.
pub async fn settle() {
    TimeoutFuture::new(0).await;
}

pub fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

pub fn click(root: &Element, selector: &str) {
    find(root, selector)
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .unchecked_into::<HtmlElement>()
        .click();
}

pub fn fire_window_event(event: &web_sys::Event) {
    web_sys::window().unwrap().dispatch_event(event).unwrap();
}
