//! Playback cadence (delay between ticks)

use super::errors::PlaybackError;
use std::time::Duration;

/// Delay between steps, in milliseconds, clamped to `[MIN_DELAY_MS, MAX_DELAY_MS]`.
///
/// The user sees an inverted "speed" (`1000 - delay`), so a higher number
/// means faster playback. Both scales share the 100..=900 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cadence(u64);

impl Cadence {
    pub const MIN_DELAY_MS: u64 = 100;
    pub const MAX_DELAY_MS: u64 = 900;
    pub const DEFAULT_DELAY_MS: u64 = 500;
    /// Displayed speed = `SPEED_SCALE - delay`
    pub const SPEED_SCALE: u64 = 1000;
    /// Increment used by the speed up/down keys
    pub const STEP_MS: u64 = 100;

    pub fn from_delay_ms(delay_ms: u64) -> Result<Self, PlaybackError> {
        if (Self::MIN_DELAY_MS..=Self::MAX_DELAY_MS).contains(&delay_ms) {
            Ok(Cadence(delay_ms))
        } else {
            Err(PlaybackError::InvalidCadence {
                delay_ms,
                min: Self::MIN_DELAY_MS,
                max: Self::MAX_DELAY_MS,
            })
        }
    }

    /// Build from the user-facing speed value (higher = faster)
    pub fn from_display_speed(speed: u64) -> Result<Self, PlaybackError> {
        let delay_ms = Self::SPEED_SCALE.checked_sub(speed).unwrap_or(u64::MAX);
        Self::from_delay_ms(delay_ms)
    }

    pub fn delay_ms(self) -> u64 {
        self.0
    }

    pub fn display_speed(self) -> u64 {
        Self::SPEED_SCALE - self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// One notch faster, saturating at the minimum delay
    pub fn faster(self) -> Self {
        Cadence(self.0.saturating_sub(Self::STEP_MS).max(Self::MIN_DELAY_MS))
    }

    /// One notch slower, saturating at the maximum delay
    pub fn slower(self) -> Self {
        Cadence((self.0 + Self::STEP_MS).min(Self::MAX_DELAY_MS))
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Cadence(Self::DEFAULT_DELAY_MS)
    }
}
