//! Timer-driven playback of a precomputed step trace
//!
//! [`PlaybackController`] owns the current [`StepSequence`], the play index,
//! and the [`DisplayState`] consumers render. The display is replaced
//! wholesale on each applied step, never patched in place.
//!
//! # State machine
//!
//! ```text
//!            start              tick (last step)
//!   Idle ───────────▶ Running ──────────────────▶ Finished
//!    ▲                  │                            │
//!    └──── start/stop ──┘         reset / start ─────┘
//! ```
//!
//! There is no paused state. Starting again after a stop generates a fresh
//! trace from whatever array is currently displayed and plays it from index 0.
//!
//! # Timing
//!
//! The controller never sleeps. The event loop calls [`PlaybackController::poll`]
//! with the current time; when the one-shot [`Timer`] is due, one step is
//! applied and the timer is re-armed for the next cadence interval.

pub mod cadence;
pub mod errors;
pub mod timer;

pub use cadence::Cadence;
pub use errors::PlaybackError;
pub use timer::Timer;

use crate::algorithms::Algorithm;
use crate::step::{IndexSet, RecursionInfo, Step, StepSequence};
use std::time::Instant;

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
    Finished,
}

/// What the presentation layer draws for the current moment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub array: Vec<i64>,
    pub comparing: IndexSet,
    pub swapping: IndexSet,
    pub sorted: IndexSet,
    pub recursion: Option<RecursionInfo>,
}

impl DisplayState {
    /// Plain bars, nothing highlighted
    pub fn idle(array: Vec<i64>) -> Self {
        DisplayState {
            array,
            comparing: IndexSet::new(),
            swapping: IndexSet::new(),
            sorted: IndexSet::new(),
            recursion: None,
        }
    }

    pub fn from_step(step: &Step) -> Self {
        DisplayState {
            array: step.array.clone(),
            comparing: step.comparing.clone(),
            swapping: step.swapping.clone(),
            sorted: step.sorted.clone(),
            recursion: step.recursion.clone(),
        }
    }
}

/// Result of a single [`PlaybackController::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Step at this index was applied to the display
    Applied(usize),
    /// The index had already run past the trace; playback is now finished
    Exhausted,
    /// Controller was not running
    Ignored,
}

/// Plays a [`StepSequence`] one step per cadence interval
#[derive(Debug)]
pub struct PlaybackController {
    state: PlaybackState,
    sequence: Option<StepSequence>,
    position: usize,
    display: DisplayState,
    cadence: Cadence,
    timer: Timer,
    algorithm: Option<Algorithm>,
}

impl PlaybackController {
    /// Create an idle controller displaying `array`
    pub fn new(array: Vec<i64>, cadence: Cadence) -> Self {
        PlaybackController {
            state: PlaybackState::Idle,
            sequence: None,
            position: 0,
            display: DisplayState::idle(array),
            cadence,
            timer: Timer::new(),
            algorithm: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Number of steps applied so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the stored trace, 0 when none is stored
    pub fn total_steps(&self) -> usize {
        self.sequence.as_ref().map_or(0, StepSequence::len)
    }

    pub fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    /// Algorithm of the most recent successful start
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// When the next tick is due, if one is scheduled
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Start playback, or stop it if already running.
    ///
    /// When running, this only stops: the stored trace is left as is and the
    /// key and input are not looked at. Otherwise a new trace is generated from
    /// `input` and played from index 0. On error nothing changes.
    pub fn start(&mut self, key: &str, input: &[i64]) -> Result<PlaybackState, PlaybackError> {
        if self.is_running() {
            self.stop();
            return Ok(self.state);
        }

        let algorithm: Algorithm = key.parse()?;
        let sequence = algorithm.generate(input).map_err(|e| {
            log::warn!("{} rejected input: {}", algorithm.display_name(), e);
            PlaybackError::from(e)
        })?;

        log::info!(
            "playback started: {} ({} steps, {}ms cadence)",
            algorithm.display_name(),
            sequence.len(),
            self.cadence.delay_ms()
        );
        self.sequence = Some(sequence);
        self.position = 0;
        self.algorithm = Some(algorithm);
        self.state = PlaybackState::Running;
        self.timer.arm(Instant::now(), self.cadence.as_duration());
        Ok(self.state)
    }

    /// The Start/Pause button: start from the array currently on display
    pub fn toggle(&mut self, key: &str) -> Result<PlaybackState, PlaybackError> {
        let current = self.display.array.clone();
        self.start(key, &current)
    }

    /// Halt playback, keeping the last applied step on display
    pub fn stop(&mut self) {
        self.timer.cancel();
        if self.is_running() {
            log::info!("playback stopped at step {}/{}", self.position, self.total_steps());
            self.state = PlaybackState::Idle;
        }
    }

    /// Apply the step at the play index and advance.
    ///
    /// Applying the last step moves the controller to [`PlaybackState::Finished`],
    /// so `total_steps()` ticks from index 0 always finish playback.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        let step = self
            .sequence
            .as_ref()
            .and_then(|sequence| sequence.get(self.position));

        match step {
            Some(step) => {
                let applied = self.position;
                self.display = DisplayState::from_step(step);
                self.position += 1;
                if self.position >= self.total_steps() {
                    self.finish();
                }
                TickOutcome::Applied(applied)
            }
            None => {
                self.finish();
                TickOutcome::Exhausted
            }
        }
    }

    /// Fire the pending tick if it is due at `now`, then schedule the next one
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.is_running() || !self.timer.fire(now) {
            return None;
        }
        let outcome = self.tick();
        if self.is_running() {
            self.timer.arm(now, self.cadence.as_duration());
        }
        Some(outcome)
    }

    /// Change the delay between ticks. Ignored (returns `false`) while running.
    pub fn set_cadence(&mut self, cadence: Cadence) -> bool {
        if self.is_running() {
            log::debug!("cadence change to {}ms ignored while running", cadence.delay_ms());
            return false;
        }
        self.cadence = cadence;
        true
    }

    /// Drop the trace and all highlights; the bars keep their current values
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.sequence = None;
        self.position = 0;
        self.display = DisplayState::idle(std::mem::take(&mut self.display.array));
        self.state = PlaybackState::Idle;
    }

    /// Replace the displayed array ("Set Array"), resetting playback
    pub fn load_array(&mut self, array: Vec<i64>) -> Result<(), PlaybackError> {
        if self.is_running() {
            return Err(PlaybackError::Busy {
                action: "change the array",
            });
        }
        if array.is_empty() {
            return Err(PlaybackError::InvalidInput(
                crate::algorithms::TraceError::EmptyInput,
            ));
        }
        self.reset();
        self.display = DisplayState::idle(array);
        Ok(())
    }

    fn finish(&mut self) {
        self.timer.cancel();
        self.state = PlaybackState::Finished;
        log::info!("playback finished after {} steps", self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn controller(array: &[i64]) -> PlaybackController {
        PlaybackController::new(array.to_vec(), Cadence::default())
    }

    #[test]
    fn start_generates_and_runs() {
        let mut c = controller(&[3, 1, 2]);
        assert_eq!(c.toggle("bubble"), Ok(PlaybackState::Running));
        assert_eq!(c.position(), 0);
        assert!(c.total_steps() > 0);
        assert_eq!(c.algorithm(), Some(Algorithm::Bubble));
    }

    #[test]
    fn ticking_every_step_finishes() {
        let mut c = controller(&[4, 3, 2, 1]);
        c.toggle("quick").unwrap();
        let total = c.total_steps();
        for expected in 0..total {
            assert_eq!(c.tick(), TickOutcome::Applied(expected));
            assert!(c.position() <= total);
        }
        assert_eq!(c.state(), PlaybackState::Finished);
        assert_eq!(c.position(), total);
        assert_eq!(c.display().array, vec![1, 2, 3, 4]);
        assert!(c.display().sorted.covers(4));
        assert_eq!(c.tick(), TickOutcome::Ignored);
        assert_eq!(c.position(), total);
    }

    #[test]
    fn start_while_running_stops_and_keeps_trace() {
        let mut c = controller(&[2, 1]);
        c.toggle("bubble").unwrap();
        c.tick();
        let before = c.sequence().cloned();

        assert_eq!(c.start("no-such-key", &[]), Ok(PlaybackState::Idle));
        assert_eq!(c.sequence().cloned(), before);
        assert_eq!(c.position(), 1);
        assert!(c.next_deadline().is_none());
    }

    #[test]
    fn restart_regenerates_from_displayed_array() {
        let mut c = controller(&[3, 2, 1]);
        c.toggle("bubble").unwrap();
        // compare (0,1), swap (0,1) -> [2, 3, 1]
        c.tick();
        c.tick();
        c.stop();
        assert_eq!(c.display().array, vec![2, 3, 1]);

        c.toggle("bubble").unwrap();
        assert_eq!(c.position(), 0);
        assert_eq!(c.sequence().unwrap().get(0).unwrap().array, vec![2, 3, 1]);
    }

    #[test]
    fn unknown_algorithm_leaves_controller_idle() {
        let mut c = controller(&[1, 2]);
        let err = c.toggle("bogo").unwrap_err();
        assert!(matches!(err, PlaybackError::UnknownAlgorithm(_)));
        assert_eq!(c.state(), PlaybackState::Idle);
        assert!(c.sequence().is_none());
    }

    #[test]
    fn invalid_input_keeps_previous_display() {
        let mut c = controller(&[5, 4]);
        c.toggle("bubble").unwrap();
        c.tick();
        c.stop();
        let shown = c.display().clone();

        let err = c.start("counting", &[-1, 2, 3]).unwrap_err();
        assert!(matches!(err, PlaybackError::InvalidInput(_)));
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.display(), &shown);

        assert!(c.start("merge", &[]).is_err());
        assert_eq!(c.display(), &shown);
    }

    #[test]
    fn cadence_is_locked_while_running() {
        let mut c = controller(&[2, 1]);
        let fast = Cadence::from_delay_ms(100).unwrap();
        c.toggle("bubble").unwrap();
        assert!(!c.set_cadence(fast));
        assert_eq!(c.cadence(), Cadence::default());
        c.stop();
        assert!(c.set_cadence(fast));
        assert_eq!(c.cadence(), fast);
    }

    #[test]
    fn reset_clears_trace_and_highlights() {
        let mut c = controller(&[2, 1]);
        c.toggle("merge").unwrap();
        c.tick();
        c.reset();
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.total_steps(), 0);
        assert_eq!(c.position(), 0);
        assert_eq!(c.display(), &DisplayState::idle(vec![2, 1]));
        assert!(c.next_deadline().is_none());
    }

    #[test]
    fn poll_waits_for_the_cadence() {
        let mut c = controller(&[2, 1]);
        c.toggle("bubble").unwrap();
        let deadline = c.next_deadline().unwrap();

        assert_eq!(c.poll(deadline - Duration::from_millis(1)), None);
        assert_eq!(c.poll(deadline), Some(TickOutcome::Applied(0)));
        assert_eq!(c.position(), 1);

        let next = c.next_deadline().unwrap();
        assert_eq!(next, deadline + c.cadence().as_duration());
    }

    #[test]
    fn stopped_controller_ignores_pending_tick() {
        let mut c = controller(&[2, 1]);
        c.toggle("bubble").unwrap();
        let deadline = c.next_deadline().unwrap();
        c.stop();
        assert_eq!(c.poll(deadline + Duration::from_secs(5)), None);
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn load_array_is_rejected_while_running() {
        let mut c = controller(&[2, 1]);
        c.toggle("bubble").unwrap();
        assert!(matches!(
            c.load_array(vec![9, 8]),
            Err(PlaybackError::Busy { .. })
        ));
        c.stop();
        c.load_array(vec![9, 8]).unwrap();
        assert_eq!(c.display().array, vec![9, 8]);
        assert_eq!(c.total_steps(), 0);
    }

    #[test]
    fn finished_playback_can_restart() {
        let mut c = controller(&[1]);
        c.toggle("insertion").unwrap();
        c.tick();
        assert_eq!(c.state(), PlaybackState::Finished);
        assert_eq!(c.toggle("insertion"), Ok(PlaybackState::Running));
        assert_eq!(c.position(), 0);
    }
}
