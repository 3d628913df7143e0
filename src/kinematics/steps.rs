use ufmt_macros::uDebug;

/// Underlying type representing the number of steps.
type StepRepr = u32;

/// Products this close to an integer count as that integer.
///
/// Fractions like `1/360` have no exact `f32` form, and truncating
/// `7200 * (1/360)` must still give 20 steps, not 19.
const SNAP_TOLERANCE: f32 = 1.0e-3;

/// Number of microsteps in a single command.
///
/// `Steps` is careful to prevent overflows, so that a step counter can never
/// wrap back below its target.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct Steps(StepRepr);
impl Steps {
    /// Create a new number of steps.
    pub fn new(steps: StepRepr) -> Self {
        Self(steps)
    }

    /// Zero steps.
    pub fn zero() -> Self {
        Steps(0)
    }

    /// Returns the value represented by `Steps`.
    pub fn get_value(&self) -> StepRepr {
        self.0
    }

    /// Increment the value if it's safe to do so without an overflow.
    pub fn inc(&self) -> Option<Self> {
        self.0.checked_add(1).map(Steps)
    }

    /// Converts a (possibly fractional) number of revolutions to steps.
    ///
    /// The product is truncated toward zero. Negative, NaN and infinite
    /// revolutions give zero steps; huge values saturate.
    ///
    /// # Parameters
    ///
    /// - `revolutions`: Number of revolutions to turn.
    /// - `microsteps_per_rev`: Microsteps in one revolution of the axis.
    pub fn from_revolutions(revolutions: f32, microsteps_per_rev: u32) -> Self {
        let exact = revolutions * microsteps_per_rev as f32;
        if !exact.is_finite() || exact <= 0.0 {
            return Steps::zero();
        }
        let nearest = libm::roundf(exact);
        let whole = if libm::fabsf(exact - nearest) < SNAP_TOLERANCE {
            nearest
        } else {
            libm::truncf(exact)
        };
        Steps(whole as StepRepr)
    }
}
