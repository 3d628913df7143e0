use ufmt_macros::uDebug;

/// Abstraction for a limit switch.
///
/// A limit switch just has a state; either at the limit, or not at the
/// limit. Electrical polarity (the scanner's switches are active-low) is
/// resolved by the implementation.
pub trait LimitSwitch {
    fn read_limitswitch_state(&self) -> LimitSwitchState;

    /// Returns `true` if the switch is engaged.
    fn is_at_limit(&self) -> bool {
        self.read_limitswitch_state() == LimitSwitchState::AtLimit
    }
}

/// State of a limit switch.
#[derive(Debug, uDebug, Copy, Clone, PartialEq)]
pub enum LimitSwitchState {
    /// The carriage has reached the switch and must not travel further
    /// toward it.
    AtLimit,
    /// The carriage may still travel toward the switch.
    NotAtLimit,
}

/// Limit switch to use for testing purposes.
///
/// Clones share their state, so the test can press a switch that the
/// sequencer owns.
#[cfg(test)]
#[derive(Clone)]
pub struct TestLimitSwitch {
    state: std::sync::Arc<std::sync::Mutex<LimitSwitchState>>,
}
#[cfg(test)]
impl TestLimitSwitch {
    /// Creates a new test limit switch.
    pub fn new(state: LimitSwitchState) -> Self {
        Self {
            state: std::sync::Arc::new(std::sync::Mutex::new(state)),
        }
    }

    /// Sets the state of the test limit switch.
    pub fn set_limitswitch_state(&self, state: LimitSwitchState) {
        *self.state.lock().unwrap() = state;
    }
}
#[cfg(test)]
impl LimitSwitch for TestLimitSwitch {
    fn read_limitswitch_state(&self) -> LimitSwitchState {
        *self.state.lock().unwrap()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_test_limit_switch() {
        let tls = TestLimitSwitch::new(LimitSwitchState::NotAtLimit);
        let handle = tls.clone();
        assert!(!tls.is_at_limit());
        handle.set_limitswitch_state(LimitSwitchState::AtLimit);
        assert_eq!(LimitSwitchState::AtLimit, tls.read_limitswitch_state());
        assert!(tls.is_at_limit());
        handle.set_limitswitch_state(LimitSwitchState::NotAtLimit);
        assert_eq!(LimitSwitchState::NotAtLimit, tls.read_limitswitch_state());
    }
}
