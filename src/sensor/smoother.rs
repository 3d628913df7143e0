use crate::AnalogSensor;

/// Turns raw samples into a smoothed raw value.
pub trait Smoother {
    /// Samples `sensor` as needed and returns the smoothed raw value.
    fn smooth<A: AnalogSensor>(&mut self, sensor: &mut A) -> f32;
}

/// Single-sample exponential smoothing.
///
/// `value = alpha * raw + (1 - alpha) * previous`, seeded with the first
/// sample. One ADC read per call, which keeps a scan tick short.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialSmoother {
    alpha: f32,
    value: Option<f32>,
}

impl ExponentialSmoother {
    /// Default weight of a new sample.
    pub const DEFAULT_ALPHA: f32 = 0.1;

    /// Creates a new smoother. `alpha` is clamped to `[0, 1]`.
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            value: None,
        }
    }

    /// Returns the current smoothed value, if any sample has been seen.
    pub fn value(&self) -> Option<f32> {
        self.value
    }

    /// Folds one raw sample into the smoothed value.
    pub fn update(&mut self, raw: u16) -> f32 {
        let raw = raw as f32;
        let next = match self.value {
            None => raw,
            Some(previous) => self.alpha * raw + (1.0 - self.alpha) * previous,
        };
        self.value = Some(next);
        next
    }
}

impl Default for ExponentialSmoother {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALPHA)
    }
}

impl Smoother for ExponentialSmoother {
    fn smooth<A: AnalogSensor>(&mut self, sensor: &mut A) -> f32 {
        let raw = sensor.read_raw();
        self.update(raw)
    }
}

/// Burst sampling with the extremes discarded.
///
/// Takes `N` samples, sorts them, drops the lowest and highest `TRIM`, and
/// averages the rest. No state is kept between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimmedMeanSmoother<const N: usize, const TRIM: usize>;

impl<const N: usize, const TRIM: usize> TrimmedMeanSmoother<N, TRIM> {
    /// Creates a new smoother.
    pub fn new() -> Self {
        Self
    }

    /// Returns the trimmed mean of `samples`, sorting them in place.
    pub fn trimmed_mean(samples: &mut [u16; N]) -> f32 {
        samples.sort_unstable();
        let kept = if N > 2 * TRIM {
            &samples[TRIM..N - TRIM]
        } else {
            &samples[..]
        };
        if kept.is_empty() {
            return 0.0;
        }
        let sum: u32 = kept.iter().map(|&s| s as u32).sum();
        sum as f32 / kept.len() as f32
    }
}

impl<const N: usize, const TRIM: usize> Smoother for TrimmedMeanSmoother<N, TRIM> {
    fn smooth<A: AnalogSensor>(&mut self, sensor: &mut A) -> f32 {
        let mut samples = [0u16; N];
        for sample in samples.iter_mut() {
            *sample = sensor.read_raw();
        }
        Self::trimmed_mean(&mut samples)
    }
}
