/// Time in milliseconds, from a free-running (wrapping) counter.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct MilliSeconds(u32);
impl MilliSeconds {
    /// Creates a new `MilliSeconds`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the value as a `u32`.
    pub fn get_value(&self) -> u32 {
        self.0
    }

    /// Returns the time elapsed from `earlier` to `self`, wrap-tolerant.
    pub fn elapsed_since(&self, earlier: MilliSeconds) -> MilliSeconds {
        MilliSeconds(self.0.wrapping_sub(earlier.0))
    }
}
