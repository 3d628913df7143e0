use arduino_hal::{
    hal::port::Dynamic,
    port::{
        mode::{Input, PullUp},
        Pin,
    },
};
use scancore::LimitSwitchState;

/// Limit switch wired between the pin and ground.
///
/// The input is pulled up, so a closed switch reads low.
pub struct LimitSwitch {
    pin: Pin<Input<PullUp>, Dynamic>,
}
impl LimitSwitch {
    /// Creates a new `LimitSwitch`.
    ///
    /// # Parameters
    ///
    /// - `pin`: Pin to use for the limit switch.
    pub fn new(pin: Pin<Input<PullUp>, Dynamic>) -> Self {
        Self { pin }
    }
}

impl scancore::LimitSwitch for LimitSwitch {
    fn read_limitswitch_state(&self) -> LimitSwitchState {
        if self.pin.is_low() {
            LimitSwitchState::AtLimit
        } else {
            LimitSwitchState::NotAtLimit
        }
    }
}
