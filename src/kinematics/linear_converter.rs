/// Conversions for linear motion through a lead screw.
///
/// This converts:
/// - Linear speed (cm/s) to lead screw speed (RPM).
/// - Linear distance (cm) to lead screw revolutions.
#[derive(Debug, Clone, Copy)]
pub struct LinearConverter {
    lead_cm_per_rev: f32,
}

impl LinearConverter {
    /// Creates a new linear converter.
    ///
    /// # Parameters
    ///
    /// - `lead_cm_per_rev`: Carriage travel for one screw revolution.
    pub fn new(lead_cm_per_rev: f32) -> Self {
        Self { lead_cm_per_rev }
    }

    /// Converts a carriage speed in cm/s to a screw speed in RPM.
    pub fn rpm(&self, cm_per_s: f32) -> f32 {
        cm_per_s * 60.0 / self.lead_cm_per_rev
    }

    /// Converts a carriage travel in cm to screw revolutions.
    pub fn revolutions(&self, cm: f32) -> f32 {
        cm / self.lead_cm_per_rev
    }
}
