use std::rc::Rc;

use gloo::events::EventListener;
use safespeech_demo_core::markup::{AUDIO_PLAYER, MOBILE_LAYOUT_CLASS, WORKFLOW_CONTAINER};
use safespeech_demo_core::{LayoutMode, PageConfig};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, Window};

use crate::dom;

/// Applies the layout for the current width now and on every resize.
pub(crate) fn install(window: &Window, config: Rc<PageConfig>) -> EventListener {
    apply_current(&config);
    EventListener::new(window, "resize", move |_| apply_current(&config))
}

pub(crate) fn apply_current(config: &PageConfig) {
    let Some(width) = dom::viewport_width() else {
        return;
    };
    let mode = LayoutMode::classify(width, &config.layout);
    if let Err(err) = apply_layout(mode, config) {
        gloo::console::warn!("layout update failed", err);
    }
}

pub(crate) fn apply_layout(mode: LayoutMode, config: &PageConfig) -> Result<(), JsValue> {
    let document = dom::document()?;
    if let Some(container) = dom::query_one::<Element>(&document, WORKFLOW_CONTAINER)? {
        dom::set_class(&container, MOBILE_LAYOUT_CLASS, mode.is_mobile());
    }
    let height = mode.player_height_style(&config.layout);
    let players: Vec<HtmlElement> = dom::query_all(&document, AUDIO_PLAYER)?;
    for player in &players {
        dom::set_style(player, "height", &height);
    }
    Ok(())
}
