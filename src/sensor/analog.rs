/// Abstraction for a raw analog input channel.
pub trait AnalogSensor {
    /// Samples the channel once.
    fn read_raw(&mut self) -> u16;
}

/// Analog channel to use for testing purposes.
///
/// Clones share the reading, and every sample taken is counted.
#[cfg(test)]
#[derive(Clone)]
pub struct TestAnalog {
    state: std::sync::Arc<std::sync::Mutex<(u16, usize)>>,
}
#[cfg(test)]
impl TestAnalog {
    /// Creates a new test channel reading `raw`.
    pub fn new(raw: u16) -> Self {
        Self {
            state: std::sync::Arc::new(std::sync::Mutex::new((raw, 0))),
        }
    }

    /// Sets the value returned by subsequent samples.
    pub fn set_raw(&self, raw: u16) {
        self.state.lock().unwrap().0 = raw;
    }

    /// Returns the number of samples taken.
    pub fn samples(&self) -> usize {
        self.state.lock().unwrap().1
    }
}
#[cfg(test)]
impl AnalogSensor for TestAnalog {
    fn read_raw(&mut self) -> u16 {
        let mut state = self.state.lock().unwrap();
        state.1 += 1;
        state.0
    }
}
