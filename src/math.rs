//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{DMatrix, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors.
pub type R2 = Vector2<Scalar>;
/// Dense real matrix used for grid-aligned values (rows walk `y`, columns walk `x`).
pub type Matrix = DMatrix<Scalar>;

/// Direction of `v` in degrees, measured counter-clockwise from +x via `atan2`.
#[must_use]
pub fn angle_deg(v: &R2) -> Scalar {
    v.y.atan2(v.x).to_degrees()
}

/// Numerical derivative of uniformly spaced samples.
///
/// Second-order central differences in the interior and first-order one-sided
/// differences at both ends, the same convention as `numpy.gradient`.
/// Fewer than two samples have no defined slope and yield zeros.
#[must_use]
pub fn gradient(values: &[Scalar], spacing: Scalar) -> Vec<Scalar> {
    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let mut out = Vec::with_capacity(n);
    out.push((values[1] - values[0]) / spacing);
    for i in 1..n - 1 {
        out.push((values[i + 1] - values[i - 1]) / (2.0 * spacing));
    }
    out.push((values[n - 1] - values[n - 2]) / spacing);
    out
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angle_of_diagonal_is_45_degrees() {
        assert_relative_eq!(angle_deg(&R2::new(1.0, 1.0)), 45.0, epsilon = 1.0e-12);
        assert_relative_eq!(angle_deg(&R2::new(-1.0, 0.0)), 180.0, epsilon = 1.0e-12);
        assert_relative_eq!(angle_deg(&R2::new(0.0, -2.0)), -90.0, epsilon = 1.0e-12);
    }

    #[test]
    fn gradient_of_quadratic_is_exact_in_interior() {
        let h = 0.5;
        let values: Vec<Scalar> = (0..5).map(|i| (i as Scalar * h).powi(2)).collect();
        let g = gradient(&values, h);
        assert_eq!(g.len(), 5);
        for (i, slope) in g.iter().enumerate().take(4).skip(1) {
            assert_relative_eq!(*slope, 2.0 * i as Scalar * h, epsilon = 1.0e-12);
        }
        assert_relative_eq!(g[0], 0.5, epsilon = 1.0e-12);
    }

    #[test]
    fn gradient_of_short_input_is_zero() {
        assert!(gradient(&[], 1.0).is_empty());
        assert_eq!(gradient(&[3.0], 1.0), vec![0.0]);
    }
}
