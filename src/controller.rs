use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use safespeech_demo_core::{LayoutMode, PageConfig, PlayerId, RevealState};
use wasm_bindgen::JsValue;

use crate::audio::{self, AudioPlayers};
use crate::dom;
use crate::facade;
use crate::navigation::Navigation;
use crate::responsive;
use crate::styles;
use crate::workflow::WorkflowReveal;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<PageInteractionController>>> = RefCell::new(None);
}

/// Owns every listener, timer and observer the page behaviors install.
/// Dropping it (via [`PageInteractionController::shutdown`]) detaches them.
pub struct PageInteractionController {
    config: Rc<PageConfig>,
    navigation: Rc<Navigation>,
    audio: Option<Rc<AudioPlayers>>,
    workflow: Option<Rc<WorkflowReveal>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl PageInteractionController {
    /// Attaches all behaviors to the current document, replacing any
    /// controller installed earlier. Each initializer runs independently; a
    /// failing one is logged and skipped.
    pub fn install(config: PageConfig) -> Rc<Self> {
        if let Some(previous) = Self::current() {
            previous.shutdown();
        }
        console::log!("safespeech demo page loaded");

        let config = Rc::new(config);
        let navigation = Navigation::new(config.clone());
        let mut listeners = Vec::new();
        let mut audio = None;
        let mut workflow = None;

        match (dom::window(), dom::document()) {
            (Ok(window), Ok(document)) => {
                report("stylesheet", styles::ensure_stylesheet(&document));
                report("facade", facade::install());
                if let Some(links) = report("smooth scrolling", navigation.install(&document)) {
                    listeners.extend(links);
                }
                if let Some(players) = report("audio players", AudioPlayers::discover(&document)) {
                    listeners.extend(players.install());
                    audio = Some(players);
                }
                listeners.push(audio::install_keyboard(&document));
                workflow = report(
                    "workflow animation",
                    WorkflowReveal::discover(&document, config.clone()).and_then(|reveal| {
                        if let Some(reveal) = reveal.as_ref() {
                            reveal.observe()?;
                        }
                        Ok(reveal)
                    }),
                )
                .flatten();
                listeners.push(responsive::install(&window, config.clone()));
                if let Some(reveal) = workflow.clone() {
                    listeners.push(EventListener::new(&window, "pagehide", move |_| {
                        reveal.cancel_pending();
                    }));
                }
            }
            (Err(err), _) | (_, Err(err)) => {
                console::warn!("page behaviors not installed", err);
            }
        }

        let controller = Rc::new(Self {
            config,
            navigation,
            audio,
            workflow,
            listeners: RefCell::new(listeners),
        });
        CONTROLLER.with(|slot| {
            *slot.borrow_mut() = Some(controller.clone());
        });
        controller
    }

    pub fn current() -> Option<Rc<Self>> {
        CONTROLLER.with(|slot| slot.borrow().clone())
    }

    /// Detaches listeners, cancels pending timers and forgets the controller.
    pub fn shutdown(&self) {
        self.listeners.borrow_mut().clear();
        self.navigation.cancel();
        if let Some(reveal) = self.workflow.as_ref() {
            reveal.shutdown();
        }
        if let Some(players) = self.audio.as_ref() {
            players.reset();
        }
        CONTROLLER.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot
                .as_ref()
                .is_some_and(|current| std::ptr::eq(Rc::as_ptr(current), self))
            {
                slot.take();
            }
        });
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn pause_all_audio(&self) {
        audio::pause_all();
    }

    pub fn scroll_to_section(&self, id: &str) {
        self.navigation.scroll_to_section(id);
    }

    pub fn play_audio(&self, src: &str) -> bool {
        audio::play_source(src)
    }

    pub fn apply_layout(&self, mode: LayoutMode) {
        if let Err(err) = responsive::apply_layout(mode, &self.config) {
            console::warn!("layout update failed", err);
        }
    }

    /// Index (document order) of the player holding the playing indicator.
    pub fn active_player(&self) -> Option<PlayerId> {
        self.audio.as_ref().and_then(|players| players.active())
    }

    /// `None` when the page has no workflow diagram.
    pub fn reveal_state(&self) -> Option<RevealState> {
        self.workflow.as_ref().map(|reveal| reveal.state())
    }

    pub fn workflow_container(&self) -> Option<web_sys::Element> {
        self.workflow.as_ref().map(|reveal| reveal.container().clone())
    }
}

fn report<T>(label: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            console::warn!("initializer failed", label, err);
            None
        }
    }
}
