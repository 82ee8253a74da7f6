pub mod config;
pub mod layout;
pub mod markup;
pub mod playback;
pub mod reveal;
pub mod scroll;

pub use config::{ConfigError, LayoutConfig, PageConfig, RevealTiming};
pub use layout::LayoutMode;
pub use playback::{MediaCommand, PlayOutcome, PlaybackCoordinator, PlayerId, StopReason};
pub use reveal::{reveal_cues, transition, CueTarget, RevealCue, RevealEffect, RevealEvent, RevealState};
pub use scroll::{anchor_target_id, scroll_offset};
