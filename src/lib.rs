//! Interaction layer of the SafeSpeech demo page.
//!
//! Wires smooth in-page scrolling, single-playback audio coordination, the
//! workflow reveal animation and responsive layout tweaks onto the host
//! document. Host-independent rules live in `safespeech_demo_core`.

mod audio;
mod config;
mod controller;
mod dom;
mod facade;
mod navigation;
mod responsive;
mod styles;
mod workflow;

use gloo::events::EventListener;
use wasm_bindgen::prelude::wasm_bindgen;

pub use controller::PageInteractionController;
pub use facade::{pause_all_audio, play_audio, scroll_to_section};
pub use safespeech_demo_core::{LayoutMode, PageConfig, PlayerId, RevealState};

#[wasm_bindgen(start)]
pub fn start() {
    let Ok(document) = dom::document() else {
        return;
    };
    if let Err(err) = styles::ensure_stylesheet(&document) {
        gloo::console::warn!("stylesheet not injected", err);
    }
    if let Err(err) = facade::install() {
        gloo::console::warn!("facade not installed", err);
    }
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    let Ok(document) = dom::document() else {
        return;
    };
    PageInteractionController::install(config::load_page_config(&document));
}
