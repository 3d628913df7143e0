use arduino_hal::{
    hal::port::PC0,
    port::{mode::Analog, Pin},
    Adc,
};
use scancore::AnalogSensor;

/// The IR range finder on A0.
///
/// A conversion takes roughly 100 µs and is only done once per slice.
pub struct AnalogPin {
    adc: Adc,
    pin: Pin<Analog, PC0>,
}
impl AnalogPin {
    pub fn new(adc: Adc, pin: Pin<Analog, PC0>) -> Self {
        Self { adc, pin }
    }
}

impl AnalogSensor for AnalogPin {
    fn read_raw(&mut self) -> u16 {
        self.pin.analog_read(&mut self.adc)
    }
}
