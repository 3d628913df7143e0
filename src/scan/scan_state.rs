use ufmt_macros::uDebug;

/// Top-level phase of a scan.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    /// Rapid homing of the carriage onto the bottom limit switch.
    Return,
    /// Raising the carriage by one layer.
    Linear,
    /// Turning the platform through one revolution, one slice at a time.
    Rotate,
    /// A phase overran its timeout. Terminal until reset.
    Stalled,
}

/// Overall scan progress.
///
/// Only the sequencer writes this. `slice` stays in `[0, slices_per_rev]`
/// and `layer` only grows, one at a time, until the next homing.
/// `height_cm` is always `layer` times the layer height; it is never
/// accumulated, so it carries no rounding drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanState {
    pub phase: Phase,
    pub layer: u32,
    pub height_cm: f32,
    pub slice: u16,
}

impl ScanState {
    /// State at power-on: homing, at height zero, first slice.
    pub fn new() -> Self {
        Self {
            phase: Phase::Return,
            layer: 0,
            height_cm: 0.0,
            slice: 0,
        }
    }
}

impl ScanState {
    /// Moves to `layer`, deriving the height from it.
    ///
    /// # Parameters
    ///
    /// - `layer`: Layers completed since homing.
    /// - `layer_height_cm`: Height of one layer.
    pub fn set_layer(&mut self, layer: u32, layer_height_cm: f32) {
        self.layer = layer;
        self.height_cm = layer as f32 * layer_height_cm;
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}
