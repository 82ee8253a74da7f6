use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use safespeech_demo_core::markup::{ANCHOR_LINKS, HIGHLIGHT_CLASS, HIGHLIGHT_SELECTOR};
use safespeech_demo_core::{anchor_target_id, scroll_offset, PageConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

pub(crate) struct Navigation {
    config: Rc<PageConfig>,
    highlight_reset: RefCell<Option<Timeout>>,
}

impl Navigation {
    pub(crate) fn new(config: Rc<PageConfig>) -> Rc<Self> {
        Rc::new(Self {
            config,
            highlight_reset: RefCell::new(None),
        })
    }

    /// Smooth scrolling for every in-page link. Default navigation is always
    /// suppressed, even when the target id is missing.
    pub(crate) fn install(self: &Rc<Self>, document: &Document) -> Result<Vec<EventListener>, JsValue> {
        let links: Vec<Element> = dom::query_all(document, ANCHOR_LINKS)?;
        let listeners = links
            .into_iter()
            .map(|link| {
                let navigation = Rc::clone(self);
                let target = link.clone();
                EventListener::new_with_options(
                    &link,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        let Some(href) = target.get_attribute("href") else {
                            return;
                        };
                        let Some(id) = anchor_target_id(&href) else {
                            return;
                        };
                        navigation.scroll_to_id(id);
                    },
                )
            })
            .collect();
        Ok(listeners)
    }

    pub(crate) fn scroll_to_id(&self, id: &str) -> Option<HtmlElement> {
        let document = dom::document().ok()?;
        let target = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let top = scroll_offset(f64::from(target.offset_top()), self.config.scroll_margin_px);
        dom::smooth_scroll_to(top);
        Some(target)
    }

    pub(crate) fn scroll_to_section(&self, id: &str) {
        if let Some(target) = self.scroll_to_id(id) {
            self.highlight(&target);
        }
    }

    /// Moves the highlight marker to `element` and clears it after the
    /// configured delay. A newer highlight cancels the older reset.
    pub(crate) fn highlight(&self, element: &Element) {
        if let Ok(document) = dom::document() {
            let marked: Vec<Element> =
                dom::query_all(&document, HIGHLIGHT_SELECTOR).unwrap_or_default();
            for previous in marked {
                dom::set_class(&previous, HIGHLIGHT_CLASS, false);
            }
        }
        dom::set_class(element, HIGHLIGHT_CLASS, true);

        let element = element.clone();
        let reset = Timeout::new(self.config.highlight_duration_ms, move || {
            dom::set_class(&element, HIGHLIGHT_CLASS, false);
        });
        *self.highlight_reset.borrow_mut() = Some(reset);
    }

    pub(crate) fn cancel(&self) {
        self.highlight_reset.borrow_mut().take();
    }
}
