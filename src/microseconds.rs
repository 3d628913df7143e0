/// Time in microseconds.
///
/// Values come from a free-running counter, so they wrap around. Compare
/// them only through [MicroSeconds::elapsed_since].
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct MicroSeconds(u32);
impl MicroSeconds {
    /// Creates a new `MicroSeconds`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the value as a `u32`.
    pub fn get_value(&self) -> u32 {
        self.0
    }

    /// Returns the time elapsed from `earlier` to `self`.
    ///
    /// Uses wrapping subtraction, so it stays correct across one counter
    /// wraparound.
    pub fn elapsed_since(&self, earlier: MicroSeconds) -> MicroSeconds {
        MicroSeconds(self.0.wrapping_sub(earlier.0))
    }

    /// Checks whether at least `period` has passed since `earlier`.
    pub fn has_elapsed(&self, earlier: MicroSeconds, period: MicroSeconds) -> bool {
        self.elapsed_since(earlier) >= period
    }
}
