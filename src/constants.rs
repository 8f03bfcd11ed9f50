//! Physical constants and numerical regularization parameters.
//!
//! ## Accuracy
//!
//! ε₀ is provided with 11 significant figures (CODATA 2018). Coulomb's constant
//! is derived from it rather than typed in separately, so the two never drift
//! apart.
//!
//! ## Regularization
//!
//! Point-charge fields are singular at the charge itself. The evaluation
//! routines add a tiny constant to the distance denominators so that a query
//! landing exactly on a charge yields a large but finite number instead of
//! `NaN`/`inf`. The constants below are far smaller than any meaningful charge
//! separation: they only alter results within roughly 1e-7 m (field) and
//! 1e-20 m (potential) of a charge.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_812_8e-12;

/// Coulomb's constant k = 1 / (4π ε₀) in N·m²/C² (≈ 8.9875517923 × 10⁹).
pub const COULOMB_CONSTANT: Scalar = 1.0 / (4.0 * PI * VACUUM_PERMITTIVITY);

/// One microcoulomb in coulombs.
pub const MICRO_COULOMB: Scalar = 1.0e-6;

/// Additive term on r³ in the field denominator, in m³.
///
/// Numerical-stability device, not physics: with the query exactly on the
/// charge `dx = dy = 0`, so the field evaluates to `0 / 1e-20 = 0`.
pub const FIELD_REGULARIZATION: Scalar = 1.0e-20;

/// Additive term on r in the potential denominator, in m.
///
/// With the query exactly on the charge the potential evaluates to
/// `k q / 1e-20`, which is huge but finite for any physical charge.
pub const POTENTIAL_REGULARIZATION: Scalar = 1.0e-20;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn coulomb_constant_matches_reference() {
        assert_relative_eq!(COULOMB_CONSTANT, 8.987_551_792_3e9, max_relative = 1.0e-9);
    }
}
