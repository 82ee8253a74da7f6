//! Selectors and class names the page markup and the bundled stylesheet
//! agree on. They are fixed: the stylesheet rules are written against them.

pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const AUDIO_PLAYER: &str = ".audio-player";
pub const SAMPLE_CONTAINER: &str = ".audio-sample";
pub const WORKFLOW_CONTAINER: &str = ".workflow-diagram";
pub const WORKFLOW_STEP: &str = ".workflow-step";
pub const WORKFLOW_ARROW: &str = ".workflow-arrow";

pub const HIGHLIGHT_CLASS: &str = "section-highlight";
pub const HIGHLIGHT_SELECTOR: &str = ".section-highlight";
pub const PLAYING_CLASS: &str = "playing";
pub const ERROR_CLASS: &str = "audio-error";
pub const ERROR_MESSAGE_CLASS: &str = "audio-error-message";
pub const MOBILE_LAYOUT_CLASS: &str = "mobile-layout";

/// Every class the stylesheet has to style.
pub const STYLED_CLASSES: [&str; 5] = [
    HIGHLIGHT_CLASS,
    PLAYING_CLASS,
    ERROR_CLASS,
    ERROR_MESSAGE_CLASS,
    MOBILE_LAYOUT_CLASS,
];
