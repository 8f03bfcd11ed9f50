//! Rectangular evaluation grids.

use crate::config::FieldConfig;
use crate::errors::FieldError;
use crate::fields::{compute_field, compute_potential, Charge, FieldGrid};
use crate::math::{Matrix, Scalar};
use crate::sweep::linspace;

/// Meshgrid of query points: `x[(i, j)] = xs[j]`, `y[(i, j)] = ys[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: Matrix,
    y: Matrix,
}

impl Grid {
    /// Builds an `ny`×`nx` meshgrid spanning the given ranges inclusively.
    #[must_use]
    pub fn new(x_range: (Scalar, Scalar), y_range: (Scalar, Scalar), nx: usize, ny: usize) -> Self {
        let xs = linspace(x_range.0, x_range.1, nx);
        let ys = linspace(y_range.0, y_range.1, ny);
        Self {
            x: Matrix::from_fn(ny, nx, |_, j| xs[j]),
            y: Matrix::from_fn(ny, nx, |i, _| ys[i]),
        }
    }

    /// Square grid described by `config`.
    #[must_use]
    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(config.x_range, config.y_range, config.grid_size, config.grid_size)
    }

    /// Wraps caller-supplied coordinate arrays, which must share a shape.
    pub fn from_coordinates(x: Matrix, y: Matrix) -> Result<Self, FieldError> {
        FieldError::check_shapes(&x, &y)?;
        Ok(Self { x, y })
    }

    /// x-coordinates of every cell.
    #[must_use]
    pub const fn x(&self) -> &Matrix {
        &self.x
    }

    /// y-coordinates of every cell.
    #[must_use]
    pub const fn y(&self) -> &Matrix {
        &self.y
    }

    /// `(rows, cols)`; rows walk y, columns walk x.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Superposed field of `charges` on every cell.
    pub fn field(&self, charges: &[Charge], k: Scalar) -> Result<FieldGrid, FieldError> {
        compute_field(charges, &self.x, &self.y, k)
    }

    /// Superposed potential of `charges` on every cell.
    pub fn potential(&self, charges: &[Charge], k: Scalar) -> Result<Matrix, FieldError> {
        compute_potential(charges, &self.x, &self.y, k)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn meshgrid_layout_matches_rows_y_cols_x() {
        let grid = Grid::new((0.0, 3.0), (-1.0, 1.0), 4, 3);
        assert_eq!(grid.shape(), (3, 4));
        assert_eq!(grid.x()[(2, 3)], 3.0);
        assert_eq!(grid.y()[(2, 3)], 1.0);
        assert_eq!(grid.x()[(0, 1)], 1.0);
        assert_eq!(grid.y()[(1, 0)], 0.0);
    }

    #[test]
    fn from_coordinates_rejects_mismatch() {
        let err = Grid::from_coordinates(Matrix::zeros(2, 2), Matrix::zeros(1, 2)).unwrap_err();
        assert!(matches!(err, FieldError::ShapeMismatch { y_rows: 1, .. }));
    }

    #[test]
    fn grid_field_matches_free_function() {
        let config = FieldConfig { grid_size: 9, ..FieldConfig::default() };
        let grid = Grid::from_config(&config);
        let charges = [Charge::micro(1.0, 0.1, 0.2)];
        let k = config.coulomb_constant;
        let a = grid.field(&charges, k).unwrap();
        let b = compute_field(&charges, grid.x(), grid.y(), k).unwrap();
        assert_eq!(a, b);
        let v = grid.potential(&charges, k).unwrap();
        assert_relative_eq!(v[(4, 4)], charges[0].potential_at(0.0, 0.0, k), max_relative = 1.0e-12);
    }
}
