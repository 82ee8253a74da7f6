use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::audio;
use crate::controller::PageInteractionController;
use crate::dom;

/// Global the host page uses to reach the page behaviors.
pub(crate) const FACADE_NAME: &str = "SafeSpeechDemo";

/// Publishes `window.SafeSpeechDemo` with `pauseAllAudio`, `scrollToSection`
/// and `playAudio`. Pausing and playing work as soon as the module runs;
/// `scrollToSection` needs an installed controller for its highlight timer.
pub(crate) fn install() -> Result<(), JsValue> {
    let window = dom::window()?;
    let facade = Object::new();

    let pause = Closure::<dyn Fn()>::new(pause_all_audio);
    Reflect::set(&facade, &JsValue::from_str("pauseAllAudio"), &pause.into_js_value())?;

    let scroll = Closure::<dyn Fn(JsValue)>::new(|id: JsValue| {
        if let Some(id) = id.as_string() {
            scroll_to_section(&id);
        }
    });
    Reflect::set(&facade, &JsValue::from_str("scrollToSection"), &scroll.into_js_value())?;

    let play = Closure::<dyn Fn(JsValue)>::new(|src: JsValue| {
        if let Some(src) = src.as_string() {
            play_audio(&src);
        }
    });
    Reflect::set(&facade, &JsValue::from_str("playAudio"), &play.into_js_value())?;

    Reflect::set(&window, &JsValue::from_str(FACADE_NAME), &facade)?;
    Ok(())
}

#[wasm_bindgen(js_name = pauseAllAudio)]
pub fn pause_all_audio() {
    audio::pause_all();
}

#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    if let Some(controller) = PageInteractionController::current() {
        controller.scroll_to_section(section_id);
    }
}

/// Returns whether a player with that `src` attribute was found.
#[wasm_bindgen(js_name = playAudio)]
pub fn play_audio(src: &str) -> bool {
    audio::play_source(src)
}
