use crate::MicroSeconds;

/// Slowest speed a converter will time, in revolutions per minute.
///
/// Anything slower (including zero, negative and NaN speeds) is timed at
/// this speed instead of dividing by zero.
const MIN_RPM: f32 = 0.01;

/// Microseconds per minute, halved: one step is a high and a low level.
const HALF_MICROS_PER_MINUTE: f32 = 30_000_000.0;

/// Conversions for rotary motion.
///
/// This converts a rotational speed into the half-period of the step signal
/// that produces it.
#[derive(Debug, Clone, Copy)]
pub struct RotaryConverter {
    microsteps_per_rev: u32,
}

impl RotaryConverter {
    /// Creates a new rotary converter.
    ///
    /// # Parameters
    ///
    /// - `microsteps_per_rev`: Microsteps for one revolution of the driven
    ///   part (after any gearing).
    pub fn new(microsteps_per_rev: u32) -> Self {
        Self { microsteps_per_rev }
    }

    /// Returns the number of microsteps in one revolution.
    pub fn microsteps_per_rev(&self) -> u32 {
        self.microsteps_per_rev
    }

    /// Computes the half-period of the step signal for a speed.
    ///
    /// `half_period = 30e6 / (rpm * microsteps_per_rev)` microseconds,
    /// never less than 1 µs.
    ///
    /// # Parameters
    ///
    /// - `rpm`: Speed in revolutions per minute.
    pub fn half_period(&self, rpm: f32) -> MicroSeconds {
        let rpm = rpm.max(MIN_RPM);
        let steps_per_minute = rpm * self.microsteps_per_rev.max(1) as f32;
        let half = HALF_MICROS_PER_MINUTE / steps_per_minute;
        MicroSeconds::new(half.clamp(1.0, u32::MAX as f32) as u32)
    }
}
