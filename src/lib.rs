//! Motion, sensing and sequencing logic for a turntable 3D scanner.
//!
//! Everything here is hardware-independent: the board crate supplies pins,
//! a clock and an ADC through the traits exported below, then calls
//! [Sequencer::tick] from its main loop.
#![cfg_attr(not(test), no_std)]

mod clock;
mod config;
pub mod console;
mod kinematics;
mod microseconds;
mod milliseconds;
mod scan;
mod sensor;
mod thousandths;

pub use clock::Clock;
pub use config::ConfigError;
pub use config::Configuration;
pub use config::ScanConstants;
pub use kinematics::AxisState;
pub use kinematics::Direction;
pub use kinematics::LimitSwitch;
pub use kinematics::LimitSwitchState;
pub use kinematics::LinearConverter;
pub use kinematics::MotorAxis;
pub use kinematics::RotaryConverter;
pub use kinematics::StepperPins;
pub use kinematics::Steps;
pub use microseconds::MicroSeconds;
pub use milliseconds::MilliSeconds;
pub use scan::Event;
pub use scan::Phase;
pub use scan::Point;
pub use scan::ScanState;
pub use scan::ScannerIo;
pub use scan::Sequencer;
pub use scan::SEPARATOR;
pub use sensor::AnalogSensor;
pub use sensor::Calibration;
pub use sensor::DistanceSensor;
pub use sensor::ExponentialSmoother;
pub use sensor::RangeFinder;
pub use sensor::Smoother;
pub use sensor::TrimmedMeanSmoother;
pub use thousandths::Thousandths;

#[cfg(test)]
pub use kinematics::{Edge, TestLimitSwitch, TestStepper};
#[cfg(test)]
pub use sensor::TestAnalog;
