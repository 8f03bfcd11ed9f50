use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_REGULARIZATION, MICRO_COULOMB, POTENTIAL_REGULARIZATION};
use crate::errors::FieldError;
use crate::math::{Matrix, R2, Scalar};
use crate::sweep::Axis;

/// Sign classification of a charge, used for marker colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// q > 0.
    Positive,
    /// q < 0.
    Negative,
    /// q == 0; contributes nothing but still occupies a position.
    Neutral,
}

/// Point charge in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Charge in coulombs (signed).
    pub q: Scalar,
    /// Position x in meters.
    pub x: Scalar,
    /// Position y in meters.
    pub y: Scalar,
}

impl Charge {
    /// Creates a charge of `q` coulombs at `(x, y)`.
    #[must_use]
    pub const fn new(q: Scalar, x: Scalar, y: Scalar) -> Self {
        Self { q, x, y }
    }

    /// Creates a charge given in microcoulombs.
    #[must_use]
    pub fn micro(q_uc: Scalar, x: Scalar, y: Scalar) -> Self {
        Self::new(q_uc * MICRO_COULOMB, x, y)
    }

    /// Position as a vector.
    #[must_use]
    pub fn position(&self) -> R2 {
        R2::new(self.x, self.y)
    }

    /// Coordinate of the charge along `axis`.
    #[must_use]
    pub const fn axial_position(&self, axis: Axis) -> Scalar {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Sign classification of `q`.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        if self.q > 0.0 {
            Polarity::Positive
        } else if self.q < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    /// Coulomb field of this charge at `(qx, qy)` using Coulomb constant `k`.
    ///
    /// E = k q (r - r₀) / (|r - r₀|³ + [`FIELD_REGULARIZATION`]).
    #[must_use]
    pub fn field_at(&self, qx: Scalar, qy: Scalar, k: Scalar) -> R2 {
        let dx = qx - self.x;
        let dy = qy - self.y;
        let r2 = dx * dx + dy * dy;
        let r3 = r2 * r2.sqrt() + FIELD_REGULARIZATION;
        let s = k * self.q / r3;
        R2::new(s * dx, s * dy)
    }

    /// Electric potential of this charge at `(qx, qy)`.
    ///
    /// φ = k q / (|r - r₀| + [`POTENTIAL_REGULARIZATION`]).
    #[must_use]
    pub fn potential_at(&self, qx: Scalar, qy: Scalar, k: Scalar) -> Scalar {
        let dx = qx - self.x;
        let dy = qy - self.y;
        let r = (dx * dx + dy * dy).sqrt() + POTENTIAL_REGULARIZATION;
        k * self.q / r
    }

    /// Elementwise field over equal-shaped coordinate arrays, returned as `(Ex, Ey)`.
    pub fn field_on(&self, x: &Matrix, y: &Matrix, k: Scalar) -> Result<(Matrix, Matrix), FieldError> {
        FieldError::check_shapes(x, y)?;
        let mut ex = Matrix::zeros(x.nrows(), x.ncols());
        let mut ey = Matrix::zeros(x.nrows(), x.ncols());
        self.accumulate_field(x, y, k, &mut ex, &mut ey);
        Ok((ex, ey))
    }

    /// Elementwise potential over equal-shaped coordinate arrays.
    pub fn potential_on(&self, x: &Matrix, y: &Matrix, k: Scalar) -> Result<Matrix, FieldError> {
        FieldError::check_shapes(x, y)?;
        Ok(x.zip_map(y, |qx, qy| self.potential_at(qx, qy, k)))
    }

    /// Adds this charge's field into `ex`/`ey`. Shapes must already agree.
    pub(crate) fn accumulate_field(&self, x: &Matrix, y: &Matrix, k: Scalar, ex: &mut Matrix, ey: &mut Matrix) {
        for (idx, (&qx, &qy)) in x.iter().zip(y.iter()).enumerate() {
            let e = self.field_at(qx, qy, k);
            ex[idx] += e.x;
            ey[idx] += e.y;
        }
    }

    /// Adds this charge's potential into `v`. Shapes must already agree.
    pub(crate) fn accumulate_potential(&self, x: &Matrix, y: &Matrix, k: Scalar, v: &mut Matrix) {
        for (idx, (&qx, &qy)) in x.iter().zip(y.iter()).enumerate() {
            v[idx] += self.potential_at(qx, qy, k);
        }
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "q = {:+.2} µC at ({:.2}, {:.2}) m",
            self.q / MICRO_COULOMB,
            self.x,
            self.y
        )
    }
}
