use crate::config::RevealTiming;

pub const REVEAL_THRESHOLD: f64 = 0.5;
pub const STEP_STAGGER_MS: u32 = 300;
pub const ARROW_DELAY_MS: u32 = 250;
pub const STEP_TRANSITION_MS: u32 = 500;
pub const ARROW_TRANSITION_MS: u32 = 300;
pub const HIDDEN_OFFSET_PX: u32 = 20;

pub const HIDDEN_OPACITY: &str = "0";
pub const VISIBLE_OPACITY: &str = "1";
pub const VISIBLE_TRANSFORM: &str = "translateY(0)";

// Browsers report ratios like 0.4999 when crossing a 0.5 threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Animating,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealEvent {
    Intersection { is_intersecting: bool, ratio: f64 },
    Finished,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    None,
    /// Stop observing, reset the elements and schedule every cue.
    Start,
    /// Drop all pending cues.
    CancelPending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: RevealState,
    pub effect: RevealEffect,
}

impl Transition {
    fn stay(state: RevealState) -> Self {
        Self {
            state,
            effect: RevealEffect::None,
        }
    }
}

/// Any entry flagged as intersecting starts the reveal. The ratio check only
/// matters for hosts that report a ratio without the flag. A container too
/// tall to ever reach the threshold still animates once it enters the view.
pub fn intersection_qualifies(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting || (ratio > 0.0 && ratio + RATIO_TOLERANCE >= threshold)
}

/// One-shot reveal lifecycle. Nothing ever leads back to `Idle`.
pub fn transition(state: RevealState, event: RevealEvent, threshold: f64) -> Transition {
    match (state, event) {
        (
            RevealState::Idle,
            RevealEvent::Intersection {
                is_intersecting,
                ratio,
            },
        ) => {
            if intersection_qualifies(is_intersecting, ratio, threshold) {
                Transition {
                    state: RevealState::Animating,
                    effect: RevealEffect::Start,
                }
            } else {
                Transition::stay(RevealState::Idle)
            }
        }
        (RevealState::Idle, RevealEvent::Cancelled) => Transition::stay(RevealState::Done),
        (RevealState::Animating, RevealEvent::Finished) => Transition::stay(RevealState::Done),
        (RevealState::Animating, RevealEvent::Cancelled) => Transition {
            state: RevealState::Done,
            effect: RevealEffect::CancelPending,
        },
        (state, _) => Transition::stay(state),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueTarget {
    Step(usize),
    Arrow(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealCue {
    pub delay_ms: u32,
    pub target: CueTarget,
}

/// Cues ordered by start delay. Step `i` starts at `i * stagger`, arrow `i`
/// (only for `i < arrow_count`) follows its step by `arrow_delay`.
pub fn reveal_cues(step_count: usize, arrow_count: usize, timing: &RevealTiming) -> Vec<RevealCue> {
    let mut cues = Vec::with_capacity(step_count + arrow_count.min(step_count));
    for index in 0..step_count {
        let start = timing.step_stagger_ms.saturating_mul(index as u32);
        cues.push(RevealCue {
            delay_ms: start,
            target: CueTarget::Step(index),
        });
        if index < arrow_count {
            cues.push(RevealCue {
                delay_ms: start.saturating_add(timing.arrow_delay_ms),
                target: CueTarget::Arrow(index),
            });
        }
    }
    cues.sort_by_key(|cue| cue.delay_ms);
    cues
}

pub fn hidden_transform(timing: &RevealTiming) -> String {
    format!("translateY({}px)", timing.hidden_offset_px)
}

pub fn step_transition(timing: &RevealTiming) -> String {
    format!("all {} ease", css_seconds(timing.step_transition_ms))
}

pub fn arrow_transition(timing: &RevealTiming) -> String {
    format!("opacity {} ease", css_seconds(timing.arrow_transition_ms))
}

fn css_seconds(ms: u32) -> String {
    format!("{}s", f64::from(ms) / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_render_as_css() {
        let timing = RevealTiming::default();
        assert_eq!(step_transition(&timing), "all 0.5s ease");
        assert_eq!(arrow_transition(&timing), "opacity 0.3s ease");
        assert_eq!(hidden_transform(&timing), "translateY(20px)");
    }

    #[test]
    fn out_of_view_stays_idle() {
        let next = transition(
            RevealState::Idle,
            RevealEvent::Intersection {
                is_intersecting: false,
                ratio: 0.0,
            },
            REVEAL_THRESHOLD,
        );
        assert_eq!(next.state, RevealState::Idle);
        assert_eq!(next.effect, RevealEffect::None);
    }

    #[test]
    fn tall_container_below_threshold_still_starts() {
        assert!(intersection_qualifies(true, 0.3, REVEAL_THRESHOLD));
        assert!(intersection_qualifies(false, 0.4996, REVEAL_THRESHOLD));
        assert!(!intersection_qualifies(false, 0.2, REVEAL_THRESHOLD));
    }

    #[test]
    fn cancel_while_animating_drops_cues() {
        let next = transition(RevealState::Animating, RevealEvent::Cancelled, REVEAL_THRESHOLD);
        assert_eq!(next.state, RevealState::Done);
        assert_eq!(next.effect, RevealEffect::CancelPending);
    }
}
