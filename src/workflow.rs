use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::timers::callback::Timeout;
use js_sys::Array;
use safespeech_demo_core::markup::{WORKFLOW_ARROW, WORKFLOW_CONTAINER, WORKFLOW_STEP};
use safespeech_demo_core::reveal::{
    arrow_transition, hidden_transform, step_transition, HIDDEN_OPACITY, VISIBLE_OPACITY,
    VISIBLE_TRANSFORM,
};
use safespeech_demo_core::{
    reveal_cues, transition, CueTarget, PageConfig, RevealEffect, RevealEvent, RevealState,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;

struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// Staggered reveal of the workflow diagram, started the first time the
/// container is sufficiently visible.
pub(crate) struct WorkflowReveal {
    config: Rc<PageConfig>,
    container: Element,
    steps: Vec<HtmlElement>,
    arrows: Vec<HtmlElement>,
    state: Cell<RevealState>,
    pending: RefCell<Vec<Timeout>>,
    observer: RefCell<Option<ObserverHandle>>,
}

impl WorkflowReveal {
    /// `None` when the page has no workflow container.
    pub(crate) fn discover(
        document: &Document,
        config: Rc<PageConfig>,
    ) -> Result<Option<Rc<Self>>, JsValue> {
        let Some(container) = dom::query_one::<Element>(document, WORKFLOW_CONTAINER)? else {
            return Ok(None);
        };
        let steps = dom::query_all(document, WORKFLOW_STEP)?;
        let arrows = dom::query_all(document, WORKFLOW_ARROW)?;
        Ok(Some(Rc::new(Self {
            config,
            container,
            steps,
            arrows,
            state: Cell::new(RevealState::Idle),
            pending: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
        })))
    }

    pub(crate) fn container(&self) -> &Element {
        &self.container
    }

    pub(crate) fn state(&self) -> RevealState {
        self.state.get()
    }

    pub(crate) fn observe(self: &Rc<Self>) -> Result<(), JsValue> {
        let reveal: Weak<Self> = Rc::downgrade(self);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let Some(reveal) = reveal.upgrade() else {
                    return;
                };
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    reveal.handle(RevealEvent::Intersection {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.config.reveal.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&self.container);
        *self.observer.borrow_mut() = Some(ObserverHandle {
            observer,
            _callback: callback,
        });
        Ok(())
    }

    pub(crate) fn handle(self: &Rc<Self>, event: RevealEvent) {
        let next = transition(self.state.get(), event, self.config.reveal.threshold);
        self.state.set(next.state);
        match next.effect {
            RevealEffect::None => {}
            RevealEffect::Start => {
                self.unobserve();
                self.start();
            }
            RevealEffect::CancelPending => {
                self.pending.borrow_mut().clear();
                self.settle();
            }
        }
    }

    /// Drops the cues of a running reveal; an idle watcher keeps observing.
    pub(crate) fn cancel_pending(self: &Rc<Self>) {
        if self.state.get() == RevealState::Animating {
            self.handle(RevealEvent::Cancelled);
        }
    }

    /// Cancels pending cues (if any) and releases the observer.
    pub(crate) fn shutdown(self: &Rc<Self>) {
        self.cancel_pending();
        self.pending.borrow_mut().clear();
        if let Some(handle) = self.observer.borrow_mut().take() {
            handle.observer.disconnect();
        }
    }

    fn unobserve(&self) {
        // The observer callback may be running; keep the closure alive.
        if let Some(handle) = self.observer.borrow().as_ref() {
            handle.observer.unobserve(&self.container);
        }
    }

    fn start(self: &Rc<Self>) {
        let timing = &self.config.reveal;
        let hidden = hidden_transform(timing);
        for step in &self.steps {
            dom::set_style(step, "opacity", HIDDEN_OPACITY);
            dom::set_style(step, "transform", &hidden);
        }
        for arrow in &self.arrows {
            dom::set_style(arrow, "opacity", HIDDEN_OPACITY);
        }

        let cues = reveal_cues(self.steps.len(), self.arrows.len(), timing);
        console::log!("workflow reveal started", cues.len() as u32);
        if cues.is_empty() {
            self.handle(RevealEvent::Finished);
            return;
        }
        let remaining = Rc::new(Cell::new(cues.len()));
        let timeouts = cues
            .into_iter()
            .map(|cue| {
                let reveal = Rc::downgrade(self);
                let remaining = remaining.clone();
                Timeout::new(cue.delay_ms, move || {
                    let Some(reveal) = reveal.upgrade() else {
                        return;
                    };
                    reveal.apply(cue.target);
                    remaining.set(remaining.get().saturating_sub(1));
                    if remaining.get() == 0 {
                        reveal.handle(RevealEvent::Finished);
                    }
                })
            })
            .collect();
        *self.pending.borrow_mut() = timeouts;
    }

    fn apply(&self, target: CueTarget) {
        let timing = &self.config.reveal;
        match target {
            CueTarget::Step(index) => {
                let Some(step) = self.steps.get(index) else {
                    return;
                };
                dom::set_style(step, "transition", &step_transition(timing));
                dom::set_style(step, "opacity", VISIBLE_OPACITY);
                dom::set_style(step, "transform", VISIBLE_TRANSFORM);
            }
            CueTarget::Arrow(index) => {
                let Some(arrow) = self.arrows.get(index) else {
                    return;
                };
                dom::set_style(arrow, "transition", &arrow_transition(timing));
                dom::set_style(arrow, "opacity", VISIBLE_OPACITY);
            }
        }
    }

    /// Shows every element at once so a cancelled reveal never leaves the
    /// diagram hidden.
    fn settle(&self) {
        for cue in reveal_cues(self.steps.len(), self.arrows.len(), &self.config.reveal) {
            self.apply(cue.target);
        }
    }
}
