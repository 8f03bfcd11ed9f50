use crate::errors::FieldError;
use crate::math::{Matrix, R2, Scalar};

use super::charge::Charge;

/// Field components evaluated on a grid, aligned with the query coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    /// x-component of E in N/C.
    pub ex: Matrix,
    /// y-component of E in N/C.
    pub ey: Matrix,
}

impl FieldGrid {
    /// Elementwise |E|.
    #[must_use]
    pub fn magnitude(&self) -> Matrix {
        self.ex.zip_map(&self.ey, |ex, ey| ex.hypot(ey))
    }

    /// `(rows, cols)` of the component matrices.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.ex.shape()
    }
}

/// Superposed electric field of `charges` over equal-shaped coordinate arrays.
///
/// Accumulation starts from zero, so an empty `charges` slice yields an
/// all-zero field of the same shape as `x`.
pub fn compute_field(charges: &[Charge], x: &Matrix, y: &Matrix, k: Scalar) -> Result<FieldGrid, FieldError> {
    FieldError::check_shapes(x, y)?;
    let mut ex = Matrix::zeros(x.nrows(), x.ncols());
    let mut ey = Matrix::zeros(x.nrows(), x.ncols());
    for c in charges {
        c.accumulate_field(x, y, k, &mut ex, &mut ey);
    }
    Ok(FieldGrid { ex, ey })
}

/// Superposed electric potential of `charges` over equal-shaped coordinate arrays.
pub fn compute_potential(charges: &[Charge], x: &Matrix, y: &Matrix, k: Scalar) -> Result<Matrix, FieldError> {
    FieldError::check_shapes(x, y)?;
    let mut v = Matrix::zeros(x.nrows(), x.ncols());
    for c in charges {
        c.accumulate_potential(x, y, k, &mut v);
    }
    Ok(v)
}

/// Superposed electric field of `charges` at a single point.
#[must_use]
pub fn field_at_point(charges: &[Charge], point: R2, k: Scalar) -> R2 {
    charges
        .iter()
        .fold(R2::zeros(), |acc, c| acc + c.field_at(point.x, point.y, k))
}

/// Superposed electric potential of `charges` at a single point.
#[must_use]
pub fn potential_at_point(charges: &[Charge], point: R2, k: Scalar) -> Scalar {
    charges
        .iter()
        .map(|c| c.potential_at(point.x, point.y, k))
        .sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::COULOMB_CONSTANT as K;

    fn coords() -> (Matrix, Matrix) {
        let x = Matrix::from_fn(3, 4, |_, j| -1.0 + 0.7 * j as Scalar);
        let y = Matrix::from_fn(3, 4, |i, _| -0.9 + 0.8 * i as Scalar);
        (x, y)
    }

    #[test]
    fn superposition_is_linear() {
        let (x, y) = coords();
        let c1 = Charge::micro(20.0, -1.5, 0.0);
        let c2 = Charge::micro(-30.0, 0.0, 0.1);
        let both = compute_field(&[c1, c2], &x, &y, K).unwrap();
        let a = compute_field(&[c1], &x, &y, K).unwrap();
        let b = compute_field(&[c2], &x, &y, K).unwrap();
        assert_relative_eq!(both.ex, &a.ex + &b.ex, max_relative = 1.0e-12);
        assert_relative_eq!(both.ey, &a.ey + &b.ey, max_relative = 1.0e-12);

        let v = compute_potential(&[c1, c2], &x, &y, K).unwrap();
        let va = compute_potential(&[c1], &x, &y, K).unwrap();
        let vb = compute_potential(&[c2], &x, &y, K).unwrap();
        assert_relative_eq!(v, va + vb, max_relative = 1.0e-12);
    }

    #[test]
    fn empty_charge_set_yields_zeros_of_input_shape() {
        let (x, y) = coords();
        let field = compute_field(&[], &x, &y, K).unwrap();
        assert_eq!(field.shape(), (3, 4));
        assert!(field.ex.iter().chain(field.ey.iter()).all(|&e| e == 0.0));
        let v = compute_potential(&[], &x, &y, K).unwrap();
        assert_eq!(v, Matrix::zeros(3, 4));
        assert_eq!(field_at_point(&[], R2::new(1.0, 2.0), K), R2::zeros());
        assert_eq!(potential_at_point(&[], R2::new(1.0, 2.0), K), 0.0);
    }

    #[test]
    fn grid_and_point_evaluation_agree() {
        let (x, y) = coords();
        let charges = [Charge::micro(1.0, 0.2, 0.3), Charge::micro(-2.0, -0.4, 0.6)];
        let field = compute_field(&charges, &x, &y, K).unwrap();
        let v = compute_potential(&charges, &x, &y, K).unwrap();
        for i in 0..x.len() {
            let p = R2::new(x[i], y[i]);
            let e = field_at_point(&charges, p, K);
            assert_relative_eq!(field.ex[i], e.x, max_relative = 1.0e-12);
            assert_relative_eq!(field.ey[i], e.y, max_relative = 1.0e-12);
            assert_relative_eq!(v[i], potential_at_point(&charges, p, K), max_relative = 1.0e-12);
        }
    }

    #[test]
    fn mismatched_shapes_fail_fast() {
        let x = Matrix::zeros(2, 2);
        let y = Matrix::zeros(2, 3);
        assert!(matches!(
            compute_field(&[Charge::micro(1.0, 0.0, 0.0)], &x, &y, K),
            Err(FieldError::ShapeMismatch { .. })
        ));
        assert!(compute_potential(&[], &x, &y, K).is_err());
    }

    #[test]
    fn magnitude_is_hypot_of_components() {
        let field = FieldGrid {
            ex: Matrix::from_row_slice(1, 2, &[3.0, 0.0]),
            ey: Matrix::from_row_slice(1, 2, &[4.0, -2.0]),
        };
        assert_eq!(field.magnitude(), Matrix::from_row_slice(1, 2, &[5.0, 2.0]));
    }
}
