/// Power-law fit of the IR sensor's response curve.
///
/// `distance_cm = 10^log_scale_b * raw^exponent_a`, with `A` and `B` fitted
/// empirically against a ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub exponent_a: f32,
    pub log_scale_b: f32,
}

impl Calibration {
    /// Exponent of the fit for the stock sensor.
    pub const DEFAULT_EXPONENT_A: f32 = -1.15;
    /// Base-10 log of the scale factor of the fit for the stock sensor.
    pub const DEFAULT_LOG_SCALE_B: f32 = 4.43;

    /// Creates a new calibration.
    pub fn new(exponent_a: f32, log_scale_b: f32) -> Self {
        Self {
            exponent_a,
            log_scale_b,
        }
    }

    /// Converts a (smoothed) raw reading to centimeters.
    ///
    /// A reading of zero with a negative exponent gives infinity; callers
    /// treat non-finite distances as "nothing detected".
    pub fn to_cm(&self, raw: f32) -> f32 {
        libm::powf(10.0, self.log_scale_b) * libm::powf(raw, self.exponent_a)
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXPONENT_A, Self::DEFAULT_LOG_SCALE_B)
    }
}
