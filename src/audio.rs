use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use safespeech_demo_core::markup::{
    AUDIO_PLAYER, ERROR_CLASS, ERROR_MESSAGE_CLASS, PLAYING_CLASS, SAMPLE_CONTAINER,
};
use safespeech_demo_core::playback::{AUDIO_ERROR_MESSAGE, SPACE_KEY_CODE};
use safespeech_demo_core::{MediaCommand, PlaybackCoordinator, PlayerId, StopReason};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlAudioElement, HtmlMediaElement, KeyboardEvent};

use crate::dom;

/// Players discovered at install time plus the shared playback state.
pub(crate) struct AudioPlayers {
    players: Vec<HtmlMediaElement>,
    playback: RefCell<PlaybackCoordinator>,
}

impl AudioPlayers {
    pub(crate) fn discover(document: &Document) -> Result<Rc<Self>, JsValue> {
        let players = dom::query_all(document, AUDIO_PLAYER)?;
        Ok(Rc::new(Self {
            players,
            playback: RefCell::new(PlaybackCoordinator::new()),
        }))
    }

    pub(crate) fn install(self: &Rc<Self>) -> Vec<EventListener> {
        let mut listeners = Vec::with_capacity(self.players.len() * 5);
        for (index, player) in self.players.iter().enumerate() {
            let id = PlayerId(index as u32);
            listeners.push(EventListener::new(player, "loadstart", {
                let player = player.clone();
                move |_| console::log!("audio loading started", player.src())
            }));
            listeners.push(EventListener::new(player, "play", {
                let players = Rc::clone(self);
                move |_| players.on_play(id)
            }));
            listeners.push(EventListener::new(player, "pause", {
                let players = Rc::clone(self);
                move |_| players.on_stop(id, StopReason::Paused)
            }));
            listeners.push(EventListener::new(player, "ended", {
                let players = Rc::clone(self);
                move |_| players.on_stop(id, StopReason::Ended)
            }));
            listeners.push(EventListener::new(player, "error", {
                let players = Rc::clone(self);
                move |_| players.on_error(id)
            }));
        }
        listeners
    }

    pub(crate) fn active(&self) -> Option<PlayerId> {
        self.playback.borrow().active()
    }

    pub(crate) fn reset(&self) {
        self.playback.borrow_mut().clear();
    }

    fn player(&self, id: PlayerId) -> Option<&HtmlMediaElement> {
        self.players.get(id.0 as usize)
    }

    fn mark(&self, id: PlayerId, class: &str, enabled: bool) {
        let Some(player) = self.player(id) else {
            return;
        };
        if let Some(container) = dom::closest(player, SAMPLE_CONTAINER) {
            dom::set_class(&container, class, enabled);
        }
    }

    fn on_play(&self, id: PlayerId) {
        let Some(player) = self.player(id) else {
            return;
        };
        console::log!("audio playing", player.src());
        let unpaused = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, other)| !other.paused())
            .map(|(index, _)| PlayerId(index as u32));
        let outcome = self.playback.borrow_mut().started(id, unpaused);
        for other in outcome.pause {
            if let Some(other) = self.player(other) {
                let _ = other.pause();
            }
        }
        if let Some(previous) = outcome.unmark {
            self.mark(previous, PLAYING_CLASS, false);
        }
        self.mark(id, PLAYING_CLASS, true);
    }

    fn on_stop(&self, id: PlayerId, reason: StopReason) {
        if let Some(player) = self.player(id) {
            console::log!(format!("audio {}", reason.label()), player.src());
        }
        self.playback.borrow_mut().stopped(id, reason);
        self.mark(id, PLAYING_CLASS, false);
    }

    /// Every error event appends its own message node; repeats are kept.
    fn on_error(&self, id: PlayerId) {
        let Some(player) = self.player(id) else {
            return;
        };
        let count = self.playback.borrow_mut().failed(id);
        console::error!("audio error", player.src(), count);
        self.mark(id, PLAYING_CLASS, false);
        self.mark(id, ERROR_CLASS, true);
        if let Err(err) = Self::append_error_message(player) {
            console::warn!("audio error message not shown", err);
        }
    }

    fn append_error_message(player: &HtmlMediaElement) -> Result<(), JsValue> {
        let Some(parent) = player.parent_node() else {
            return Ok(());
        };
        let document = dom::document()?;
        let message = document.create_element("div")?;
        message.set_class_name(ERROR_MESSAGE_CLASS);
        message.set_text_content(Some(AUDIO_ERROR_MESSAGE));
        parent.append_child(&message)?;
        Ok(())
    }
}

/// Pauses every player currently on the page. Safe to call repeatedly and
/// before any controller is installed.
pub(crate) fn pause_all() {
    let Ok(document) = dom::document() else {
        return;
    };
    let players: Vec<HtmlMediaElement> =
        dom::query_all(&document, AUDIO_PLAYER).unwrap_or_default();
    for player in players {
        let _ = player.pause();
    }
}

/// Plays the first `<audio>` whose `src` attribute equals `src`.
pub(crate) fn play_source(src: &str) -> bool {
    let Ok(document) = dom::document() else {
        return false;
    };
    let audios: Vec<HtmlAudioElement> = dom::query_all(&document, "audio").unwrap_or_default();
    let Some(audio) = audios
        .into_iter()
        .find(|audio| audio.get_attribute("src").as_deref() == Some(src))
    else {
        return false;
    };
    play(&audio);
    true
}

pub(crate) fn play(player: &HtmlMediaElement) {
    let src = player.src();
    match player.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                console::warn!("audio play rejected", src, err);
            }
        }),
        Err(err) => console::warn!("audio play failed", src, err),
    }
}

/// Space toggles the focused `<audio>` element instead of scrolling the page.
pub(crate) fn install_keyboard(document: &Document) -> EventListener {
    EventListener::new_with_options(
        document,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key.code() != SPACE_KEY_CODE {
                return;
            }
            let Some(audio) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlAudioElement>().ok())
            else {
                return;
            };
            event.prevent_default();
            match MediaCommand::toggle(audio.paused()) {
                MediaCommand::Play => play(&audio),
                MediaCommand::Pause => {
                    let _ = audio.pause();
                }
            }
        },
    )
}

