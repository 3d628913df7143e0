use core::f32::consts::PI;

use ufmt::{uDisplay, uWrite, Formatter};

use crate::Thousandths;

/// One point-cloud sample, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    /// Computes the point seen at a slice of the platform.
    ///
    /// The angle is `slice / slices_per_rev` of a full turn and the point
    /// lies at `radius - distance` from the rotation axis.
    ///
    /// # Parameters
    ///
    /// - `radius_cm`: Configured platform radius.
    /// - `distance_cm`: Filtered sensor reading.
    /// - `slice`: Slice index within the revolution.
    /// - `slices_per_rev`: Slices in a full revolution.
    /// - `height_cm`: Carriage height of the current layer.
    pub fn from_slice(
        radius_cm: f32,
        distance_cm: f32,
        slice: u16,
        slices_per_rev: u16,
        height_cm: f32,
    ) -> Self {
        let angle = slice as f32 / slices_per_rev.max(1) as f32 * 2.0 * PI;
        let r = radius_cm - distance_cm;
        Self {
            x: r * libm::cosf(angle),
            y: r * libm::sinf(angle),
            z: height_cm,
        }
    }
}

/// Renders the wire format: `"<x> <y> <z>"`, three decimals each.
impl uDisplay for Point {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        Thousandths::from_f32(self.x).fmt(f)?;
        f.write_char(' ')?;
        Thousandths::from_f32(self.y).fmt(f)?;
        f.write_char(' ')?;
        Thousandths::from_f32(self.z).fmt(f)
    }
}
