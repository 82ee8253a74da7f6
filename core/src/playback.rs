use std::collections::BTreeMap;

pub const SPACE_KEY_CODE: &str = "Space";
pub const AUDIO_ERROR_MESSAGE: &str = "Audio file not found or cannot be played";

/// Index of a player in document order at install time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Paused,
    Ended,
}

impl StopReason {
    pub fn label(self) -> &'static str {
        match self {
            StopReason::Paused => "paused",
            StopReason::Ended => "ended",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    Pause,
}

impl MediaCommand {
    pub fn toggle(paused: bool) -> Self {
        if paused {
            MediaCommand::Play
        } else {
            MediaCommand::Pause
        }
    }
}

/// Side effects the page has to apply after a player starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Other players still running; each must be paused.
    pub pause: Vec<PlayerId>,
    /// Previously active player whose indicator must be cleared now.
    pub unmark: Option<PlayerId>,
}

/// Tracks which player owns the "playing" indicator.
///
/// Only one player is active at a time. Starting a player hands the
/// indicator over immediately, so the invariant holds even before the
/// paused players report their own `pause` events.
#[derive(Clone, Debug, Default)]
pub struct PlaybackCoordinator {
    active: Option<PlayerId>,
    errors: BTreeMap<PlayerId, u32>,
}

impl PlaybackCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<PlayerId> {
        self.active
    }

    pub fn is_marked(&self, id: PlayerId) -> bool {
        self.active == Some(id)
    }

    /// `unpaused` lists the players currently reported as not paused; the
    /// started player itself is ignored if present.
    pub fn started<I>(&mut self, id: PlayerId, unpaused: I) -> PlayOutcome
    where
        I: IntoIterator<Item = PlayerId>,
    {
        let pause = unpaused.into_iter().filter(|other| *other != id).collect();
        let unmark = match self.active.replace(id) {
            Some(previous) if previous != id => Some(previous),
            _ => None,
        };
        PlayOutcome { pause, unmark }
    }

    /// Returns true when the stopped player was the active one.
    pub fn stopped(&mut self, id: PlayerId, _reason: StopReason) -> bool {
        if self.active == Some(id) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Records a media error and returns how many this player has reported.
    pub fn failed(&mut self, id: PlayerId) -> u32 {
        if self.active == Some(id) {
            self.active = None;
        }
        let count = self.errors.entry(id).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn error_count(&self, id: PlayerId) -> u32 {
        self.errors.get(&id).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restarting_same_player_keeps_indicator() {
        let mut playback = PlaybackCoordinator::new();
        let a = PlayerId(0);
        playback.started(a, [a]);
        let outcome = playback.started(a, [a]);
        assert_eq!(outcome, PlayOutcome::default());
        assert!(playback.is_marked(a));
    }

    #[test]
    fn stopping_inactive_player_is_ignored() {
        let mut playback = PlaybackCoordinator::new();
        let a = PlayerId(0);
        let b = PlayerId(1);
        playback.started(b, []);
        assert!(!playback.stopped(a, StopReason::Ended));
        assert_eq!(playback.active(), Some(b));
    }

    #[test]
    fn toggle_follows_paused_flag() {
        assert_eq!(MediaCommand::toggle(true), MediaCommand::Play);
        assert_eq!(MediaCommand::toggle(false), MediaCommand::Pause);
    }
}
