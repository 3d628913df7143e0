use ufmt_macros::uDebug;

use crate::Direction;
use crate::MilliSeconds;

/// Operator-adjustable settings.
///
/// Written by the console between ticks and read by the sequencer during
/// ticks. Both run on the same polling loop, so no locking is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    radius_cm: f32,
    z_rpm: f32,
}

impl Configuration {
    /// Default distance from the rotation axis to the sensor reference.
    pub const DEFAULT_RADIUS_CM: f32 = 14.0;
    /// Default platform speed.
    pub const DEFAULT_Z_RPM: f32 = 10.0;
    /// Slowest platform speed.
    pub const MIN_Z_RPM: f32 = 1.0;
    /// Fastest platform speed.
    pub const MAX_Z_RPM: f32 = 50.0;
    /// Largest accepted radius.
    pub const MAX_RADIUS_CM: f32 = 100.0;

    /// Returns the platform radius in cm.
    pub fn radius_cm(&self) -> f32 {
        self.radius_cm
    }

    /// Returns the platform speed in RPM.
    pub fn z_rpm(&self) -> f32 {
        self.z_rpm
    }

    /// Sets the platform radius.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the radius is in `(0, MAX_RADIUS_CM]`.
    /// - `Err(ConfigError::RadiusOutOfRange)` otherwise; the radius is left
    ///   unchanged.
    pub fn set_radius_cm(&mut self, radius_cm: f32) -> Result<(), ConfigError> {
        if radius_cm.is_finite() && radius_cm > 0.0 && radius_cm <= Self::MAX_RADIUS_CM {
            self.radius_cm = radius_cm;
            Ok(())
        } else {
            Err(ConfigError::RadiusOutOfRange)
        }
    }

    /// Sets the platform speed, clamped to `[MIN_Z_RPM, MAX_Z_RPM]`.
    ///
    /// # Returns
    ///
    /// - `Ok(applied)` with the speed actually stored.
    /// - `Err(ConfigError::SpeedNotANumber)` for NaN; the speed is left
    ///   unchanged.
    pub fn set_z_rpm(&mut self, rpm: f32) -> Result<f32, ConfigError> {
        if rpm.is_nan() {
            return Err(ConfigError::SpeedNotANumber);
        }
        self.z_rpm = rpm.clamp(Self::MIN_Z_RPM, Self::MAX_Z_RPM);
        Ok(self.z_rpm)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            radius_cm: Self::DEFAULT_RADIUS_CM,
            z_rpm: Self::DEFAULT_Z_RPM,
        }
    }
}

/// Errors from changing the [Configuration].
#[derive(Debug, uDebug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The radius was not in the accepted range.
    RadiusOutOfRange,
    /// The speed was NaN.
    SpeedNotANumber,
}

/// Fixed mechanical and scan parameters.
///
/// These are data, not logic: recalibrating the machine means editing the
/// [Default] values here and nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConstants {
    /// Rotational sampling positions per platform revolution.
    pub slices_per_rev: u16,
    /// Microsteps per platform revolution (motor microsteps times gearing).
    pub z_microsteps_per_rev: u32,
    /// Microsteps per lead screw revolution.
    pub y_microsteps_per_rev: u32,
    /// Carriage travel per lead screw revolution, in cm.
    pub y_lead_cm_per_rev: f32,
    /// Layer increments per layer (`MOV_Y`).
    pub layer_moves: u8,
    /// Height of one layer increment, in cm.
    pub layer_cm_per_move: f32,
    /// Carriage speed while homing, in cm/s.
    pub y_rapid_cm_per_s: f32,
    /// Carriage speed between layers, in cm/s.
    pub y_fine_cm_per_s: f32,
    /// Direction that raises the carriage.
    pub y_up: Direction,
    /// Direction that turns the platform.
    pub z_forward: Direction,
    /// A reading counts as a detection only beyond `radius + margin`.
    pub detection_margin_cm: f32,
    /// Longest a phase may last before the scan is declared stalled.
    /// `None` waits forever.
    pub phase_timeout: Option<MilliSeconds>,
}

impl ScanConstants {
    /// Returns the height gained by one layer, in cm.
    pub fn layer_height_cm(&self) -> f32 {
        self.layer_moves as f32 * self.layer_cm_per_move
    }
}

impl Default for ScanConstants {
    fn default() -> Self {
        Self {
            slices_per_rev: 360,
            // 200 full steps, 1/16 microstepping, 16T:36T belt reduction.
            z_microsteps_per_rev: 7200,
            // 200 full steps, 1/16 microstepping.
            y_microsteps_per_rev: 3200,
            // T8 lead screw.
            y_lead_cm_per_rev: 0.8,
            layer_moves: 1,
            layer_cm_per_move: 0.1,
            y_rapid_cm_per_s: 0.8,
            y_fine_cm_per_s: 0.2,
            y_up: Direction::Positive,
            z_forward: Direction::Positive,
            detection_margin_cm: 5.0,
            phase_timeout: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(14.0, config.radius_cm());
        assert_eq!(10.0, config.z_rpm());
    }

    #[test]
    fn test_radius_validation() {
        let mut config = Configuration::default();
        assert_eq!(Ok(()), config.set_radius_cm(20.5));
        assert_eq!(20.5, config.radius_cm());
        assert_eq!(Err(ConfigError::RadiusOutOfRange), config.set_radius_cm(0.0));
        assert_eq!(Err(ConfigError::RadiusOutOfRange), config.set_radius_cm(-3.0));
        assert_eq!(Err(ConfigError::RadiusOutOfRange), config.set_radius_cm(100.5));
        assert_eq!(Err(ConfigError::RadiusOutOfRange), config.set_radius_cm(f32::NAN));
        assert_eq!(20.5, config.radius_cm());
    }

    #[test]
    fn test_speed_nan_rejected() {
        let mut config = Configuration::default();
        assert_eq!(Err(ConfigError::SpeedNotANumber), config.set_z_rpm(f32::NAN));
        assert_eq!(10.0, config.z_rpm());
    }

    proptest! {
        #[test]
        fn test_speed_clamped(rpm in -1000.0f32..1000.0) {
            let mut config = Configuration::default();
            let applied = config.set_z_rpm(rpm).unwrap();
            assert_eq!(applied, config.z_rpm());
            assert!(applied >= 1.0 && applied <= 50.0);
            if (1.0..=50.0).contains(&rpm) {
                assert_eq!(rpm, applied);
            }
        }
    }

    #[test]
    fn test_layer_height() {
        let constants = ScanConstants::default();
        assert!((constants.layer_height_cm() - 0.1).abs() < 1e-6);
    }
}
