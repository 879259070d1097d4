//! Playback error types

use crate::algorithms::{TraceError, UnknownAlgorithm};
use thiserror::Error;

/// Reasons the controller refused a request.
///
/// None of these change controller state: a failed `start` leaves the
/// controller idle with its previous display untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] TraceError),

    #[error("delay of {delay_ms}ms is outside the supported range {min}..={max}ms")]
    InvalidCadence { delay_ms: u64, min: u64, max: u64 },

    /// The request is only accepted while playback is stopped
    #[error("cannot {action} while playback is running")]
    Busy { action: &'static str },
}
