use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("document unavailable"))
}

/// Elements matching `selector` in document order; nodes of another type are skipped.
pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(node) = list.item(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<T>() {
            out.push(element);
        }
    }
    Ok(out)
}

pub(crate) fn query_one<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<T>().ok()))
}

pub(crate) fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

pub(crate) fn set_class(element: &Element, class: &str, enabled: bool) {
    let _ = element.class_list().toggle_with_force(class, enabled);
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub(crate) fn viewport_width() -> Option<f64> {
    window().ok()?.inner_width().ok()?.as_f64()
}

pub(crate) fn smooth_scroll_to(top: f64) {
    let Ok(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
