use crate::Direction;

/// Step and direction outputs of one stepper driver.
///
/// Implementations only drive pins. They never wait: holding a level for the
/// required time is the job of [crate::MotorAxis].
pub trait StepperPins {
    /// Drives the step output high (leading edge of a pulse).
    fn set_pulse_high(&mut self);

    /// Drives the step output low (trailing edge of a pulse).
    fn set_pulse_low(&mut self);

    /// Drives the direction output.
    ///
    /// # Parameters
    ///
    /// - `direction`: Direction for subsequent steps.
    fn set_direction(&mut self, direction: Direction);
}
