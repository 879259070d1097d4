// Playback controller behaviour through the public API

use sortty::algorithms::Algorithm;
use sortty::playback::{Cadence, PlaybackController, PlaybackError, PlaybackState, TickOutcome};
use std::time::Duration;

fn controller(array: &[i64]) -> PlaybackController {
    PlaybackController::new(array.to_vec(), Cadence::default())
}

#[test]
fn test_full_playback_for_every_algorithm() {
    let input = [64, 34, 25, 12, 22, 11, 90];
    for algorithm in Algorithm::ALL {
        let mut c = controller(&input);
        c.start(algorithm.key(), &input).expect("Start failed");
        let total = c.total_steps();

        let mut ticks = 0;
        while c.is_running() {
            assert!(matches!(c.tick(), TickOutcome::Applied(_)));
            ticks += 1;
            assert!(c.position() <= total);
        }

        assert_eq!(ticks, total);
        assert_eq!(c.state(), PlaybackState::Finished);
        assert_eq!(c.display().array, vec![11, 12, 22, 25, 34, 64, 90]);
    }
}

#[test]
fn test_poll_driven_playback_reaches_the_end() {
    let mut c = controller(&[3, 1, 2]);
    c.start("merge", &[3, 1, 2]).expect("Start failed");
    let total = c.total_steps();

    let mut now = c.next_deadline().expect("Timer not armed");
    let mut applied = 0;
    while let Some(outcome) = c.poll(now) {
        assert_eq!(outcome, TickOutcome::Applied(applied));
        applied += 1;
        match c.next_deadline() {
            Some(deadline) => now = deadline,
            None => break,
        }
    }

    assert_eq!(applied, total);
    assert_eq!(c.state(), PlaybackState::Finished);
    assert!(c.next_deadline().is_none());
}

#[test]
fn test_ticks_are_spaced_by_the_cadence() {
    let mut c = controller(&[2, 1]);
    assert!(c.set_cadence(Cadence::from_delay_ms(300).expect("Cadence rejected")));
    c.start("bubble", &[2, 1]).expect("Start failed");

    let first = c.next_deadline().expect("Timer not armed");
    c.poll(first).expect("Tick failed");
    assert_eq!(
        c.next_deadline().expect("Timer not armed") - first,
        Duration::from_millis(300)
    );
}

#[test]
fn test_unknown_key_does_not_start() {
    let mut c = controller(&[1, 2, 3]);
    let err = c.start("bogo", &[1, 2, 3]).unwrap_err();
    assert!(matches!(err, PlaybackError::UnknownAlgorithm(_)));
    assert_eq!(c.state(), PlaybackState::Idle);
}

#[test]
fn test_error_messages_are_readable() {
    let mut c = controller(&[1]);
    let err = c.start("counting", &[-1, 2, 3]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input: counting sort requires non-negative values, found -1 at index 0"
    );
}
