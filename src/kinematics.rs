mod direction;
mod limit_switch;
mod linear_converter;
mod motor_axis;
mod rotary_converter;
mod stepper;
mod steps;

pub use direction::Direction;
pub use limit_switch::LimitSwitch;
pub use limit_switch::LimitSwitchState;
pub use linear_converter::LinearConverter;
pub use motor_axis::AxisState;
pub use motor_axis::MotorAxis;
pub use rotary_converter::RotaryConverter;
pub use stepper::StepperPins;
pub use steps::Steps;

#[cfg(test)]
pub use limit_switch::TestLimitSwitch;
#[cfg(test)]
pub use stepper::test::{Edge, TestStepper};
