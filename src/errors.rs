//! Shared error types used across submodules.

use thiserror::Error;

use crate::config::ConfigError;
use crate::equilibrium::EquilibriumError;
use crate::scenario::ScenarioError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Raised when the `X` and `Y` coordinate arrays of a query do not share a shape.
    #[error("coordinate shape mismatch: X is {x_rows}x{x_cols}, Y is {y_rows}x{y_cols}")]
    ShapeMismatch {
        /// Rows of the `X` array.
        x_rows: usize,
        /// Columns of the `X` array.
        x_cols: usize,
        /// Rows of the `Y` array.
        y_rows: usize,
        /// Columns of the `Y` array.
        y_cols: usize,
    },
    /// Wraps configuration validation errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Wraps equilibrium-finder input errors.
    #[error(transparent)]
    Equilibrium(#[from] EquilibriumError),
    /// Wraps scenario loading and orchestration errors.
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    /// Raised when writing an export file fails.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl FieldError {
    /// Checks that two matrices have the same shape.
    pub(crate) fn check_shapes(x: &crate::math::Matrix, y: &crate::math::Matrix) -> Result<()> {
        if x.shape() == y.shape() {
            Ok(())
        } else {
            Err(Self::ShapeMismatch {
                x_rows: x.nrows(),
                x_cols: x.ncols(),
                y_rows: y.nrows(),
                y_cols: y.ncols(),
            })
        }
    }
}

/// Convenience alias for results carrying [`FieldError`].
pub type Result<T> = std::result::Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Matrix;

    #[test]
    fn check_shapes_accepts_equal_and_reports_mismatch() {
        assert!(FieldError::check_shapes(&Matrix::zeros(2, 3), &Matrix::zeros(2, 3)).is_ok());
        let err = FieldError::check_shapes(&Matrix::zeros(2, 3), &Matrix::zeros(3, 2)).unwrap_err();
        assert_eq!(err.to_string(), "coordinate shape mismatch: X is 2x3, Y is 3x2");
    }
}
