use crate::MicroSeconds;
use crate::MilliSeconds;

/// Abstraction for the free-running monotonic counters.
///
/// Nothing in this crate waits on a clock. Every state machine samples the
/// clock once per tick and compares elapsed time against a threshold.
pub trait Clock {
    /// Returns the microsecond counter, used for step pulse timing.
    fn micros(&self) -> MicroSeconds;

    /// Returns the millisecond counter, used for phase-level timing.
    fn millis(&self) -> MilliSeconds;
}

#[cfg(test)]
pub mod test {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Clock to use for testing purposes.
    ///
    /// Cloned clocks share the same time, so a test can keep one handle and
    /// move time forward while another handle is borrowed elsewhere. Both
    /// counters wrap independently, as the hardware ones do, so the
    /// millisecond counter keeps counting up when the microseconds wrap.
    #[derive(Clone)]
    pub struct TestClock {
        state: Arc<Mutex<TestClockState>>,
    }

    struct TestClockState {
        micros: u32,
        millis: u32,
        /// Microseconds not yet counted into `millis`.
        sub_millis: u32,
    }

    impl TestClock {
        /// Creates a new test clock reading `micros`.
        pub fn new(micros: u32) -> Self {
            Self {
                state: Arc::new(Mutex::new(TestClockState {
                    micros,
                    millis: micros / 1000,
                    sub_millis: micros % 1000,
                })),
            }
        }

        /// Jumps both counters to `micros`.
        pub fn set_micros(&self, micros: u32) {
            let mut state = self.state.lock().unwrap();
            state.micros = micros;
            state.millis = micros / 1000;
            state.sub_millis = micros % 1000;
        }

        /// Moves the clock forward, wrapping like the hardware counters.
        pub fn advance(&self, micros: u32) {
            let mut state = self.state.lock().unwrap();
            state.micros = state.micros.wrapping_add(micros);
            let total = state.sub_millis as u64 + micros as u64;
            state.millis = state.millis.wrapping_add((total / 1000) as u32);
            state.sub_millis = (total % 1000) as u32;
        }
    }
    impl Clock for TestClock {
        fn micros(&self) -> MicroSeconds {
            MicroSeconds::new(self.state.lock().unwrap().micros)
        }

        fn millis(&self) -> MilliSeconds {
            MilliSeconds::new(self.state.lock().unwrap().millis)
        }
    }

    #[test]
    fn test_test_clock() {
        let clock = TestClock::new(0);
        let handle = clock.clone();
        handle.advance(2500);
        assert_eq!(MicroSeconds::new(2500), clock.micros());
        assert_eq!(MilliSeconds::new(2), clock.millis());
        handle.set_micros(7);
        assert_eq!(MicroSeconds::new(7), clock.micros());
    }

    #[test]
    fn test_test_clock_millis_survive_micros_wrap() {
        let clock = TestClock::new(u32::MAX - 500);
        let before = clock.millis();
        clock.advance(1000);
        assert_eq!(MicroSeconds::new(499), clock.micros());
        assert_eq!(MilliSeconds::new(4_294_967), clock.millis());
        assert_eq!(MilliSeconds::new(1), clock.millis().elapsed_since(before));
    }
}
