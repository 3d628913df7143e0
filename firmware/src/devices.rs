mod analog;
mod clock;
mod limitswitch;
mod stepper;

pub use analog::AnalogPin;
pub use clock::Timer0Clock;
pub use limitswitch::LimitSwitch;
pub use stepper::Stepper;

use arduino_hal::{
    hal::port::{PD0, PD1},
    pac::USART0,
    port::{
        mode::{Input, Output},
        Pin,
    },
    Usart,
};

/// USART0 on the Uno's USB serial pins.
pub type UnoSerial = Usart<USART0, Pin<Input, PD0>, Pin<Output, PD1>>;
