use ufmt_macros::uDebug;

use crate::Direction;
use crate::MicroSeconds;
use crate::RotaryConverter;
use crate::StepperPins;
use crate::Steps;

/// Sub-state of a [MotorAxis].
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum AxisState {
    /// No command in flight; the next non-zero command is accepted.
    Idle,
    /// Waiting to raise the step output.
    PulseHigh,
    /// Step output is high; waiting to lower it and count the step.
    PulseLow,
    /// The command has issued all its steps. The owner should observe this
    /// and [MotorAxis::reset] the axis.
    Done,
}

/// Non-blocking driver for one stepper motor.
///
/// A `MotorAxis` turns a command of some number of revolutions into step
/// pulses. Every call to [MotorAxis::advance] does at most one edge worth of
/// work and returns immediately. Timing is only ever measured as time
/// elapsed since the previous edge, so the axis tolerates an irregular
/// polling cadence, provided it polls faster than the half-period.
///
/// # Type Parameters
///
/// - `S`: the step/direction outputs.
pub struct MotorAxis<S> {
    pins: S,
    converter: RotaryConverter,
    half_period: MicroSeconds,
    direction: Direction,
    state: AxisState,
    target: Steps,
    issued: Steps,
    last_edge: MicroSeconds,
    pulse_high: bool,
}

impl<S: StepperPins> MotorAxis<S> {
    /// Creates a new `MotorAxis` and configures it.
    ///
    /// # Parameters
    ///
    /// - `pins`: Step and direction outputs.
    /// - `microsteps_per_rev`: Microsteps for one revolution of the axis.
    /// - `now`: Current time.
    /// - `rpm`: Initial speed.
    /// - `direction`: Initial direction.
    pub fn new(
        pins: S,
        microsteps_per_rev: u32,
        now: MicroSeconds,
        rpm: f32,
        direction: Direction,
    ) -> Self {
        let converter = RotaryConverter::new(microsteps_per_rev);
        let mut axis = Self {
            pins,
            converter,
            half_period: converter.half_period(rpm),
            direction,
            state: AxisState::Idle,
            target: Steps::zero(),
            issued: Steps::zero(),
            last_edge: now,
            pulse_high: true,
        };
        axis.configure(now, rpm, direction);
        axis
    }

    /// Configures speed and direction.
    ///
    /// This must be called whenever the speed or direction changes. It
    /// re-derives the half-period, drives the direction output, forces the
    /// step output low and abandons any command in flight. The next edge is
    /// held off for one half-period, which also covers the driver's
    /// direction setup time.
    ///
    /// # Parameters
    ///
    /// - `now`: Current time.
    /// - `rpm`: Speed in revolutions per minute of the axis.
    /// - `direction`: Direction for subsequent steps.
    pub fn configure(&mut self, now: MicroSeconds, rpm: f32, direction: Direction) {
        self.half_period = self.converter.half_period(rpm);
        self.direction = direction;
        self.pins.set_direction(direction);
        self.reset();
        self.last_edge = now;
    }

    /// Advances the axis by at most one edge.
    ///
    /// A non-zero `revolutions` is a new command. It is only honoured in the
    /// [AxisState::Idle] state and ignored otherwise, so an in-flight
    /// command can never be overwritten. Pass zero to keep advancing the
    /// current command.
    ///
    /// # Parameters
    ///
    /// - `now`: Current time.
    /// - `revolutions`: Revolutions to turn, or zero.
    ///
    /// # Returns
    ///
    /// The state after this call.
    pub fn advance(&mut self, now: MicroSeconds, revolutions: f32) -> AxisState {
        match self.state {
            AxisState::Idle => {
                if revolutions != 0.0 {
                    let target = Steps::from_revolutions(
                        revolutions,
                        self.converter.microsteps_per_rev(),
                    );
                    if target > Steps::zero() {
                        self.target = target;
                        self.issued = Steps::zero();
                        self.last_edge = now;
                        self.state = AxisState::PulseHigh;
                    }
                }
            }
            AxisState::PulseHigh => {
                if now.has_elapsed(self.last_edge, self.half_period) {
                    self.raise(now);
                    self.state = AxisState::PulseLow;
                }
            }
            AxisState::PulseLow => {
                if now.has_elapsed(self.last_edge, self.half_period) {
                    self.lower(now);
                    self.issued = self.issued.inc().unwrap_or(self.target);
                    self.state = if self.issued >= self.target {
                        AxisState::Done
                    } else {
                        AxisState::PulseHigh
                    };
                }
            }
            // Nobody collected the result; tolerate it.
            AxisState::Done => self.state = AxisState::Idle,
        }
        self.state
    }

    /// Rapid free-run drive.
    ///
    /// Toggles the step output every half-period with no step counting and
    /// no command protocol. This is for moves that end on a physical event
    /// (a limit switch) rather than on a step count. Call
    /// [MotorAxis::reset] when the event arrives.
    ///
    /// # Parameters
    ///
    /// - `now`: Current time.
    pub fn free_run(&mut self, now: MicroSeconds) {
        if now.has_elapsed(self.last_edge, self.half_period) {
            if self.pulse_high {
                self.lower(now);
            } else {
                self.raise(now);
            }
        }
    }

    /// Returns the axis to [AxisState::Idle], leaving the step output low.
    pub fn reset(&mut self) {
        if self.pulse_high {
            self.pins.set_pulse_low();
            self.pulse_high = false;
        }
        self.state = AxisState::Idle;
        self.target = Steps::zero();
        self.issued = Steps::zero();
    }

    /// Returns the current sub-state.
    pub fn state(&self) -> AxisState {
        self.state
    }

    /// Returns the steps issued for the current command.
    pub fn steps_issued(&self) -> Steps {
        self.issued
    }

    /// Returns the step target of the current command.
    pub fn target_steps(&self) -> Steps {
        self.target
    }

    /// Returns the configured half-period.
    pub fn half_period(&self) -> MicroSeconds {
        self.half_period
    }

    /// Returns the configured direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn raise(&mut self, now: MicroSeconds) {
        self.pins.set_pulse_high();
        self.pulse_high = true;
        self.last_edge = now;
    }

    fn lower(&mut self, now: MicroSeconds) {
        self.pins.set_pulse_low();
        self.pulse_high = false;
        self.last_edge = now;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Edge, TestStepper};
    use proptest::collection;
    use proptest::prelude::*;

    const MSPR: u32 = 3200;
    /// 30e6 / (15 * 3200)
    const HALF: u32 = 625;

    fn axis_at(start: u32) -> (MotorAxis<TestStepper>, TestStepper) {
        let stepper = TestStepper::new();
        let axis = MotorAxis::new(
            stepper.clone(),
            MSPR,
            MicroSeconds::new(start),
            15.0,
            Direction::Positive,
        );
        stepper.clear();
        (axis, stepper)
    }

    /// Ticks with a fixed interval until `Done`, returning the tick count.
    fn run_to_done(axis: &mut MotorAxis<TestStepper>, now: &mut u32, dt: u32) -> u32 {
        let mut ticks = 0;
        while axis.advance(MicroSeconds::new(*now), 0.0) != AxisState::Done {
            *now = now.wrapping_add(dt);
            ticks += 1;
            assert!(ticks < 1_000_000, "axis never finished");
        }
        ticks
    }

    #[test]
    fn test_new_is_idle_and_low() {
        let stepper = TestStepper::new();
        let axis = MotorAxis::new(
            stepper.clone(),
            MSPR,
            MicroSeconds::new(0),
            15.0,
            Direction::Negative,
        );
        assert_eq!(AxisState::Idle, axis.state());
        assert_eq!(MicroSeconds::new(HALF), axis.half_period());
        assert_eq!(Some(Direction::Negative), stepper.direction());
        assert_eq!(vec![Edge::Direction(Direction::Negative), Edge::Low], stepper.edges());
    }

    #[test]
    fn test_idle_without_command() {
        let (mut axis, stepper) = axis_at(0);
        for t in 0..10 {
            assert_eq!(AxisState::Idle, axis.advance(MicroSeconds::new(t * 1000), 0.0));
        }
        assert_eq!(0, stepper.edge_count());
    }

    #[test]
    fn test_zero_target_stays_idle() {
        let (mut axis, stepper) = axis_at(0);
        let tiny = 0.1 / MSPR as f32;
        assert_eq!(AxisState::Idle, axis.advance(MicroSeconds::new(0), tiny));
        assert_eq!(AxisState::Idle, axis.advance(MicroSeconds::new(0), -1.0));
        assert_eq!(0, stepper.edge_count());
    }

    #[test]
    fn test_single_step_sequence() {
        let (mut axis, stepper) = axis_at(0);
        let one = 1.0 / MSPR as f32;
        assert_eq!(AxisState::PulseHigh, axis.advance(MicroSeconds::new(0), one));
        assert_eq!(Steps::new(1), axis.target_steps());
        assert_eq!(AxisState::PulseHigh, axis.advance(MicroSeconds::new(HALF - 1), 0.0));
        assert_eq!(AxisState::PulseLow, axis.advance(MicroSeconds::new(HALF), 0.0));
        assert_eq!(AxisState::PulseLow, axis.advance(MicroSeconds::new(2 * HALF - 1), 0.0));
        assert_eq!(AxisState::Done, axis.advance(MicroSeconds::new(2 * HALF), 0.0));
        assert_eq!(Steps::new(1), axis.steps_issued());
        assert_eq!(vec![Edge::High, Edge::Low], stepper.edges());
    }

    #[test]
    fn test_command_ignored_mid_flight() {
        let (mut axis, _stepper) = axis_at(0);
        axis.advance(MicroSeconds::new(0), 0.01);
        let target = axis.target_steps();
        assert_eq!(Steps::new(32), target);

        let mut now = 0;
        for _ in 0..20 {
            now += HALF;
            axis.advance(MicroSeconds::new(now), 5.0);
            assert_eq!(target, axis.target_steps());
        }
        assert_ne!(AxisState::Idle, axis.state());
    }

    #[test]
    fn test_done_rearms_without_pulses() {
        let (mut axis, stepper) = axis_at(0);
        let mut now = 0;
        axis.advance(MicroSeconds::new(now), 2.0 / MSPR as f32);
        run_to_done(&mut axis, &mut now, HALF);
        let edges = stepper.edge_count();

        now += 10 * HALF;
        assert_eq!(AxisState::Idle, axis.advance(MicroSeconds::new(now), 0.0));
        assert_eq!(AxisState::Idle, axis.advance(MicroSeconds::new(now + 10 * HALF), 0.0));
        assert_eq!(edges, stepper.edge_count());
        assert_eq!(2, stepper.pulse_count());
    }

    #[test]
    fn test_done_ignores_command_until_idle() {
        let (mut axis, _stepper) = axis_at(0);
        let mut now = 0;
        axis.advance(MicroSeconds::new(now), 1.0 / MSPR as f32);
        run_to_done(&mut axis, &mut now, HALF);
        assert_eq!(AxisState::Idle, axis.advance(MicroSeconds::new(now), 1.0));
        assert_eq!(AxisState::PulseHigh, axis.advance(MicroSeconds::new(now), 1.0));
        assert_eq!(Steps::new(MSPR), axis.target_steps());
    }

    #[test]
    fn test_reset_mid_pulse_leaves_output_low() {
        let (mut axis, stepper) = axis_at(0);
        axis.advance(MicroSeconds::new(0), 1.0);
        axis.advance(MicroSeconds::new(HALF), 0.0);
        assert!(stepper.pulse_is_high());
        axis.reset();
        assert!(!stepper.pulse_is_high());
        assert_eq!(AxisState::Idle, axis.state());
        assert_eq!(Steps::zero(), axis.steps_issued());
    }

    #[test]
    fn test_free_run_toggles_each_half_period() {
        let (mut axis, stepper) = axis_at(0);
        let mut now = 0;
        for _ in 0..50 {
            now += HALF / 5;
            axis.free_run(MicroSeconds::new(now));
        }
        // 50 fifths of a half-period is 10 half-periods, so 10 edges.
        assert_eq!(10, stepper.edge_count());
        assert_eq!(5, stepper.pulse_count());
        assert_eq!(AxisState::Idle, axis.state());
        assert_eq!(Steps::zero(), axis.steps_issued());
    }

    #[test]
    fn test_configure_resets_and_retimes() {
        let (mut axis, stepper) = axis_at(0);
        axis.advance(MicroSeconds::new(0), 1.0);
        axis.advance(MicroSeconds::new(HALF), 0.0);
        axis.configure(MicroSeconds::new(HALF + 1), 30.0, Direction::Negative);
        assert_eq!(AxisState::Idle, axis.state());
        assert_eq!(MicroSeconds::new(HALF / 2), axis.half_period());
        assert_eq!(Direction::Negative, axis.direction());
        assert_eq!(Some(Direction::Negative), stepper.direction());
        assert!(!stepper.pulse_is_high());
    }

    proptest! {
        #[test]
        fn test_step_count_matches_command(
            revolutions in 0.0001f32..0.2,
            dt in HALF..(3 * HALF),
            start: u32,
        ) {
            let (mut axis, stepper) = axis_at(start);
            let expected = Steps::from_revolutions(revolutions, MSPR);
            let mut now = start;
            let state = axis.advance(MicroSeconds::new(now), revolutions);
            if expected == Steps::zero() {
                assert_eq!(AxisState::Idle, state);
            } else {
                loop {
                    now = now.wrapping_add(dt);
                    let state = axis.advance(MicroSeconds::new(now), 0.0);
                    let pulses = stepper.pulse_count() as u32;
                    assert!(pulses <= expected.get_value());
                    assert!(axis.steps_issued() <= axis.target_steps());
                    if state == AxisState::Done {
                        break;
                    }
                    assert!(pulses < expected.get_value());
                }
                assert_eq!(expected.get_value(), stepper.pulse_count() as u32);
                assert_eq!(expected, axis.steps_issued());
            }
        }
    }

    proptest! {
        #[test]
        fn test_edges_respect_half_period(
            start in (u32::MAX - 50_000)..u32::MAX,
            intervals in collection::vec(1u32..(2 * HALF), 1..400),
        ) {
            let (mut axis, stepper) = axis_at(start);
            let mut now = start;
            axis.advance(MicroSeconds::new(now), 0.1);

            let mut last_edge: Option<u32> = None;
            for dt in intervals {
                now = now.wrapping_add(dt);
                let before = stepper.edge_count();
                axis.advance(MicroSeconds::new(now), 0.0);
                let after = stepper.edge_count();
                assert!(after - before <= 1);
                if after > before {
                    if let Some(previous) = last_edge {
                        assert!(now.wrapping_sub(previous) >= HALF);
                    }
                    last_edge = Some(now);
                }
            }
        }
    }
}
