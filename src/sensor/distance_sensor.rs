use crate::AnalogSensor;
use crate::Calibration;
use crate::ExponentialSmoother;
use crate::Smoother;

/// Anything that can report a distance to the scanned object.
pub trait RangeFinder {
    /// Takes one filtered reading, in centimeters.
    fn distance_cm(&mut self) -> f32;
}

/// Calibrated, filtered IR distance sensor.
///
/// # Type Parameters
///
/// - `A`: raw analog channel.
/// - `F`: smoothing stage; [ExponentialSmoother] unless a burst filter is
///   wanted.
pub struct DistanceSensor<A, F = ExponentialSmoother> {
    sensor: A,
    smoother: F,
    calibration: Calibration,
}

impl<A: AnalogSensor, F: Smoother> DistanceSensor<A, F> {
    /// Creates a new distance sensor.
    pub fn new(sensor: A, smoother: F, calibration: Calibration) -> Self {
        Self {
            sensor,
            smoother,
            calibration,
        }
    }
}

impl<A: AnalogSensor, F: Smoother> RangeFinder for DistanceSensor<A, F> {
    fn distance_cm(&mut self) -> f32 {
        let smoothed = self.smoother.smooth(&mut self.sensor);
        self.calibration.to_cm(smoothed)
    }
}
