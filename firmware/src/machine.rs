use arduino_hal::{
    default_serial, delay_ms, pins, prelude::*, Adc, Peripherals, Pins,
};
use scancore::{
    console::{self, LineReader, ReadError, Reply},
    Calibration, Configuration, DistanceSensor, ExponentialSmoother,
    MilliSeconds, ScanConstants, ScannerIo, Sequencer, Thousandths,
};
use ufmt::{uwrite, uwriteln};

use crate::devices::{
    AnalogPin, LimitSwitch, Stepper, Timer0Clock, UnoSerial,
};

/// Write an error line to the serial port.
macro_rules! error {
    ($self:expr, $($arg:tt)*) => {{
        uwrite!(&mut $self.serial, "ERROR: ").unwrap_infallible();
        uwriteln!(&mut $self.serial, $($arg)*).unwrap_infallible();
    }};
}

/// Write an info line to the serial port.
macro_rules! info {
    ($self:expr, $($arg:tt)*) => {{
        uwrite!(&mut $self.serial, "INFO: ").unwrap_infallible();
        uwriteln!(&mut $self.serial, $($arg)*).unwrap_infallible();
    }};
}

type ScanSequencer =
    Sequencer<Stepper, LimitSwitch, DistanceSensor<AnalogPin>>;

/// The whole scanner: owns every peripheral and runs the polling loop.
pub struct Machine {
    serial: UnoSerial,
    clock: Timer0Clock,
    line_reader: LineReader<32>,
    config: Configuration,
    sequencer: ScanSequencer,
    pending_reply: Option<PendingReply>,
}

impl Machine {
    const BAUD_RATE: u32 = 57600;
    /// Longest any phase may last before the scan is abandoned.
    const PHASE_TIMEOUT: MilliSeconds = MilliSeconds::new(10 * 60 * 1000);

    pub fn new() -> Self {
        let peripherals: Peripherals = unsafe { Peripherals::steal() };
        let pins: Pins = pins!(peripherals);
        let mut serial = default_serial!(peripherals, pins, Self::BAUD_RATE);

        // Announce the machine!
        delay_ms(100);
        uwriteln!(&mut serial, "SCANBOT").unwrap_infallible();

        let clock = Timer0Clock::new(peripherals.TC0);
        unsafe { avr_device::interrupt::enable() };

        // Axes
        let z_pins = Stepper::new(
            pins.d2.into_output().downgrade(),
            pins.d5.into_output().downgrade(),
        );
        let y_pins = Stepper::new(
            pins.d3.into_output().downgrade(),
            pins.d6.into_output().downgrade(),
        );
        let top_limit = LimitSwitch::new(pins.d9.into_pull_up_input().downgrade());
        let bottom_limit =
            LimitSwitch::new(pins.d10.into_pull_up_input().downgrade());

        // Sensor
        let mut adc = Adc::new(peripherals.ADC, Default::default());
        let a0 = pins.a0.into_analog_input(&mut adc);
        let range_finder = DistanceSensor::new(
            AnalogPin::new(adc, a0),
            ExponentialSmoother::default(),
            Calibration::default(),
        );

        let io = ScannerIo {
            y_pins,
            z_pins,
            top_limit,
            bottom_limit,
            range_finder,
        };
        let constants = ScanConstants {
            phase_timeout: Some(Self::PHASE_TIMEOUT),
            ..ScanConstants::default()
        };
        let sequencer = Sequencer::new(io, constants, &clock);

        Self {
            serial,
            clock,
            line_reader: LineReader::new(),
            config: Configuration::default(),
            sequencer,
            pending_reply: None,
        }
    }

    /// One iteration of the polling loop.
    ///
    /// Takes at most one byte of console input, then ticks the sequencer
    /// once. Console replies wait until no step command is in flight.
    pub fn poll(&mut self) {
        self.poll_console();
        if let Some(event) = self.sequencer.tick(&self.clock, &self.config) {
            uwriteln!(&mut self.serial, "{}", event).unwrap_infallible();
        }
        // Serial writes block; hold replies so they never stretch a step.
        if !self.sequencer.motion_in_flight() {
            if let Some(reply) = self.pending_reply.take() {
                self.print_reply(reply);
            }
        }
    }

    fn poll_console(&mut self) {
        let byte = match self.serial.read() {
            Ok(byte) => byte,
            Err(nb::Error::WouldBlock) => return,
            Err(nb::Error::Other(never)) => match never {},
        };

        // A newer reply replaces one that has not been written yet.
        self.pending_reply = match self.line_reader.push(byte) {
            Ok(Some(line)) if line.trim().is_empty() => return,
            Ok(Some(line)) => Some(console::handle(line, &mut self.config).into()),
            Ok(None) => return,
            Err(ReadError::BufferOverflow) => Some(PendingReply::Overflow),
        };
    }

    fn print_reply(&mut self, reply: PendingReply) {
        match reply {
            PendingReply::Handled(Ok(Reply::Ok)) => {
                uwriteln!(&mut self.serial, "OK.").unwrap_infallible()
            }
            PendingReply::Handled(Ok(Reply::Status)) => self.print_status(),
            PendingReply::Handled(Err(console::Error::ParseError)) => {
                error!(self, "Could not parse input.")
            }
            PendingReply::Handled(Err(console::Error::Config(err))) => {
                error!(self, "Rejected setting: {:?}.", err)
            }
            PendingReply::Overflow => error!(self, "Input buffer overflow."),
        }
    }

    fn print_status(&mut self) {
        let state = self.sequencer.scan_state();
        info!(
            self,
            "radius {} cm, speed {} rpm.",
            Thousandths::from_f32(self.config.radius_cm()),
            Thousandths::from_f32(self.config.z_rpm())
        );
        info!(
            self,
            "phase {:?}, height {} cm, slice {}.",
            state.phase,
            Thousandths::from_f32(state.height_cm),
            state.slice
        );
    }
}

/// Console output held back until it can be written without delaying a step.
enum PendingReply {
    Handled(Result<Reply, console::Error>),
    Overflow,
}

impl From<Result<Reply, console::Error>> for PendingReply {
    fn from(result: Result<Reply, console::Error>) -> Self {
        PendingReply::Handled(result)
    }
}
