mod analog;
mod calibration;
mod distance_sensor;
mod smoother;

pub use analog::AnalogSensor;
pub use calibration::Calibration;
pub use distance_sensor::DistanceSensor;
pub use distance_sensor::RangeFinder;
pub use smoother::ExponentialSmoother;
pub use smoother::Smoother;
pub use smoother::TrimmedMeanSmoother;

#[cfg(test)]
pub use analog::TestAnalog;
