use crate::AxisState;
use crate::Clock;
use crate::Configuration;
use crate::Event;
use crate::LimitSwitch;
use crate::LinearConverter;
use crate::MicroSeconds;
use crate::MilliSeconds;
use crate::MotorAxis;
use crate::Phase;
use crate::Point;
use crate::RangeFinder;
use crate::ScanConstants;
use crate::ScanState;
use crate::StepperPins;

/// Hardware the sequencer drives.
///
/// # Type Parameters
///
/// - `S`: step/direction outputs (both axes).
/// - `L`: limit switches (both ends of the carriage).
/// - `R`: distance sensor.
pub struct ScannerIo<S, L, R> {
    /// Carriage (vertical) axis.
    pub y_pins: S,
    /// Platform (rotation) axis.
    pub z_pins: S,
    /// Switch at the top of the carriage travel.
    pub top_limit: L,
    /// Switch at the bottom of the carriage travel.
    pub bottom_limit: L,
    pub range_finder: R,
}

/// Scan sequencer: the top-level, non-blocking state machine.
///
/// After homing, the scanner cycles forever between turning the platform
/// through one revolution ([Phase::Rotate]) and raising the carriage by one
/// layer ([Phase::Linear]). The sequencer is the only writer of the
/// [ScanState] and the only caller of either motor axis.
pub struct Sequencer<S, L, R> {
    y_axis: MotorAxis<S>,
    z_axis: MotorAxis<S>,
    top_limit: L,
    bottom_limit: L,
    range_finder: R,
    constants: ScanConstants,
    y_screw: LinearConverter,
    state: ScanState,
    applied_z_rpm: Option<f32>,
    phase_entered: MilliSeconds,
}

impl<S, L, R> Sequencer<S, L, R>
where
    S: StepperPins,
    L: LimitSwitch,
    R: RangeFinder,
{
    /// Creates a new sequencer in the [Phase::Return] phase.
    ///
    /// The carriage is set up to run down at rapid speed. The platform axis
    /// is timed from the [Configuration] on the first rotation tick.
    pub fn new<C: Clock>(io: ScannerIo<S, L, R>, constants: ScanConstants, clock: &C) -> Self {
        let now = clock.micros();
        let y_screw = LinearConverter::new(constants.y_lead_cm_per_rev);
        let y_axis = MotorAxis::new(
            io.y_pins,
            constants.y_microsteps_per_rev,
            now,
            y_screw.rpm(constants.y_rapid_cm_per_s),
            constants.y_up.reversed(),
        );
        let z_axis = MotorAxis::new(
            io.z_pins,
            constants.z_microsteps_per_rev,
            now,
            Configuration::DEFAULT_Z_RPM,
            constants.z_forward,
        );

        Self {
            y_axis,
            z_axis,
            top_limit: io.top_limit,
            bottom_limit: io.bottom_limit,
            range_finder: io.range_finder,
            constants,
            y_screw,
            state: ScanState::new(),
            applied_z_rpm: None,
            phase_entered: clock.millis(),
        }
    }

    /// Runs one tick of the scan.
    ///
    /// Does at most one edge of work per axis and returns without waiting.
    ///
    /// # Parameters
    ///
    /// - `clock`: Source of the current time.
    /// - `config`: Operator settings, read-only here.
    ///
    /// # Returns
    ///
    /// - `Some(event)` if something should be reported.
    /// - `None` otherwise.
    pub fn tick<C: Clock>(&mut self, clock: &C, config: &Configuration) -> Option<Event> {
        let now = clock.micros();
        let now_ms = clock.millis();

        if let Some(event) = self.check_stall(now_ms) {
            return Some(event);
        }

        match self.state.phase {
            Phase::Return => self.tick_return(now, now_ms),
            Phase::Linear => self.tick_linear(now, now_ms),
            Phase::Rotate => self.tick_rotate(now, now_ms, config),
            Phase::Stalled => None,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Returns the scan progress.
    pub fn scan_state(&self) -> &ScanState {
        &self.state
    }

    /// True while either axis is part-way through a counted command.
    ///
    /// Anything slow the caller does (such as a blocking serial write)
    /// stretches the current half-period when this holds.
    pub fn motion_in_flight(&self) -> bool {
        let busy = |state: AxisState| matches!(state, AxisState::PulseHigh | AxisState::PulseLow);
        busy(self.y_axis.state()) || busy(self.z_axis.state())
    }

    /// Returns the carriage axis.
    pub fn y_axis(&self) -> &MotorAxis<S> {
        &self.y_axis
    }

    /// Returns the platform axis.
    pub fn z_axis(&self) -> &MotorAxis<S> {
        &self.z_axis
    }

    /// Homing: free-run the carriage down until the bottom switch closes.
    fn tick_return(&mut self, now: MicroSeconds, now_ms: MilliSeconds) -> Option<Event> {
        if !self.bottom_limit.is_at_limit() {
            self.y_axis.free_run(now);
            return None;
        }

        let fine_rpm = self.y_screw.rpm(self.constants.y_fine_cm_per_s);
        self.y_axis.configure(now, fine_rpm, self.constants.y_up);
        self.state.set_layer(0, self.constants.layer_height_cm());
        self.state.slice = 0;
        self.enter(Phase::Rotate, now_ms);
        Some(Event::Homed)
    }

    /// Raise the carriage one layer, unless it hits the top.
    fn tick_linear(&mut self, now: MicroSeconds, now_ms: MilliSeconds) -> Option<Event> {
        if self.top_limit.is_at_limit() {
            let rapid_rpm = self.y_screw.rpm(self.constants.y_rapid_cm_per_s);
            self.y_axis.configure(now, rapid_rpm, self.constants.y_up.reversed());
            self.enter(Phase::Return, now_ms);
            return None;
        }

        let revolutions = if self.y_axis.state() == AxisState::Idle {
            self.y_screw.revolutions(self.constants.layer_height_cm())
        } else {
            0.0
        };
        if self.y_axis.advance(now, revolutions) == AxisState::Done {
            self.y_axis.reset();
            let layer = self.state.layer.wrapping_add(1);
            self.state.set_layer(layer, self.constants.layer_height_cm());
            self.enter(Phase::Rotate, now_ms);
        }
        None
    }

    /// Turn one slice; sample when it completes.
    fn tick_rotate(
        &mut self,
        now: MicroSeconds,
        now_ms: MilliSeconds,
        config: &Configuration,
    ) -> Option<Event> {
        let slices = self.constants.slices_per_rev;
        let idle = self.z_axis.state() == AxisState::Idle;

        // Retime only between slices.
        if idle && self.applied_z_rpm != Some(config.z_rpm()) {
            self.z_axis.configure(now, config.z_rpm(), self.constants.z_forward);
            self.applied_z_rpm = Some(config.z_rpm());
        }

        let revolutions = if idle { 1.0 / slices as f32 } else { 0.0 };
        if self.z_axis.advance(now, revolutions) != AxisState::Done {
            return None;
        }

        let distance_cm = self.range_finder.distance_cm();
        let event = self.detect(distance_cm, config).map(Event::Point);

        self.state.slice += 1;
        self.z_axis.reset();
        if self.state.slice >= slices {
            self.state.slice = 0;
            self.enter(Phase::Linear, now_ms);
        }
        event
    }

    /// Turns a reading into a point, or `None` if nothing was detected.
    fn detect(&self, distance_cm: f32, config: &Configuration) -> Option<Point> {
        let radius_cm = config.radius_cm();
        let threshold = radius_cm + self.constants.detection_margin_cm;
        if !distance_cm.is_finite() || distance_cm <= threshold {
            return None;
        }
        Some(Point::from_slice(
            radius_cm,
            distance_cm,
            self.state.slice,
            self.constants.slices_per_rev,
            self.state.height_cm,
        ))
    }

    /// Declares a stall if the current phase overran its timeout.
    fn check_stall(&mut self, now_ms: MilliSeconds) -> Option<Event> {
        let timeout = self.constants.phase_timeout?;
        let phase = self.state.phase;
        if phase == Phase::Stalled || now_ms.elapsed_since(self.phase_entered) <= timeout {
            return None;
        }
        self.y_axis.reset();
        self.z_axis.reset();
        self.enter(Phase::Stalled, now_ms);
        Some(Event::Stalled(phase))
    }

    fn enter(&mut self, phase: Phase, now_ms: MilliSeconds) {
        self.state.phase = phase;
        self.phase_entered = now_ms;
    }
}
