use safespeech_demo_core::{PlayOutcome, PlaybackCoordinator, PlayerId, StopReason};

const A: PlayerId = PlayerId(0);
const B: PlayerId = PlayerId(1);
const C: PlayerId = PlayerId(2);

#[test]
fn playing_b_after_a_hands_over_indicator() {
    let mut playback = PlaybackCoordinator::new();

    let first = playback.started(A, [A]);
    assert_eq!(first, PlayOutcome::default());
    assert!(playback.is_marked(A));

    let second = playback.started(B, [A, B]);
    assert_eq!(second.pause, vec![A]);
    assert_eq!(second.unmark, Some(A));
    assert!(playback.is_marked(B));
    assert!(!playback.is_marked(A));
    assert!(!playback.is_marked(C));

    // The pause event of A arrives after B took over.
    assert!(!playback.stopped(A, StopReason::Paused));
    assert_eq!(playback.active(), Some(B));
}

#[test]
fn at_most_one_player_marked() {
    let mut playback = PlaybackCoordinator::new();
    let players = [A, B, C];
    for (round, id) in [A, C, B, A, B].into_iter().enumerate() {
        playback.started(id, players.iter().copied().take(round % 3));
        let marked = players.iter().filter(|p| playback.is_marked(**p)).count();
        assert_eq!(marked, 1);
    }
}

#[test]
fn pause_and_end_clear_indicator() {
    let mut playback = PlaybackCoordinator::new();
    playback.started(A, []);
    assert!(playback.stopped(A, StopReason::Paused));
    assert_eq!(playback.active(), None);

    playback.started(B, []);
    assert!(playback.stopped(B, StopReason::Ended));
    assert_eq!(playback.active(), None);
}

#[test]
fn errors_are_counted_per_player() {
    let mut playback = PlaybackCoordinator::new();
    assert_eq!(playback.failed(C), 1);
    assert_eq!(playback.failed(C), 2);
    assert_eq!(playback.error_count(C), 2);
    assert_eq!(playback.error_count(A), 0);
}
