use arduino_hal::{
    hal::port::Dynamic,
    port::{mode::Output, Pin},
};
use scancore::{Direction, StepperPins};

/// Step and direction outputs of one stepper driver.
///
/// The pins are downgraded so that both axes share one type.
pub struct Stepper {
    /// Pin to use for pulses.
    pin_pulse: Pin<Output, Dynamic>,
    /// Pin to use for direction indication.
    pin_direction: Pin<Output, Dynamic>,
}

impl Stepper {
    /// Creates a new `Stepper` with the pulse output low.
    ///
    /// # Parameters
    ///
    /// - `pin_pulse`: Pin to use for pulse signals.
    /// - `pin_direction`: Pin to use for direction signals.
    pub fn new(
        mut pin_pulse: Pin<Output, Dynamic>,
        pin_direction: Pin<Output, Dynamic>,
    ) -> Self {
        pin_pulse.set_low();
        Self {
            pin_pulse,
            pin_direction,
        }
    }
}

impl StepperPins for Stepper {
    fn set_pulse_high(&mut self) {
        self.pin_pulse.set_high();
    }

    fn set_pulse_low(&mut self) {
        self.pin_pulse.set_low();
    }

    fn set_direction(&mut self, direction: Direction) {
        if direction.is_high() {
            self.pin_direction.set_high();
        } else {
            self.pin_direction.set_low();
        }
    }
}
