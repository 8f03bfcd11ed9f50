use serde::Serialize;

use crate::math::{angle_deg, R2, Scalar};

use super::charge::Charge;
use super::superposition::{field_at_point, potential_at_point};

/// Field and potential evaluated at a single probe point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSample {
    /// Probe position in meters.
    pub position: [Scalar; 2],
    /// x-component of E in N/C.
    pub ex: Scalar,
    /// y-component of E in N/C.
    pub ey: Scalar,
    /// |E| in N/C.
    pub magnitude: Scalar,
    /// Direction of E in degrees from +x (atan2).
    pub angle_deg: Scalar,
    /// Potential in volts.
    pub potential: Scalar,
}

impl FieldSample {
    /// Evaluates the superposed field and potential of `charges` at `point`.
    #[must_use]
    pub fn evaluate(charges: &[Charge], point: R2, k: Scalar) -> Self {
        let e = field_at_point(charges, point, k);
        Self {
            position: [point.x, point.y],
            ex: e.x,
            ey: e.y,
            magnitude: e.norm(),
            angle_deg: angle_deg(&e),
            potential: potential_at_point(charges, point, k),
        }
    }

    /// Field vector.
    #[must_use]
    pub fn field(&self) -> R2 {
        R2::new(self.ex, self.ey)
    }
}
