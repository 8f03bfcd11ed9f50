//! Engine configuration passed explicitly into every entry point.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::COULOMB_CONSTANT;
use crate::equilibrium::EquilibriumConfig;
use crate::math::Scalar;
use crate::sweep::LineSweep;

/// Raised when a configuration value is out of range.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Coulomb's constant must be finite and positive.
    #[error("coulomb constant must be finite and positive, got {0}")]
    CoulombConstant(Scalar),
    /// A coordinate range is empty, reversed or not finite.
    #[error("invalid {axis} range [{min}, {max}]")]
    Range {
        /// Name of the offending range.
        axis: &'static str,
        /// Lower bound.
        min: Scalar,
        /// Upper bound.
        max: Scalar,
    },
    /// A grid or sweep needs at least two samples per axis.
    #[error("{what} needs at least 2 points, got {got}")]
    TooFewPoints {
        /// Name of the offending setting.
        what: &'static str,
        /// Provided value.
        got: usize,
    },
    /// Equilibrium thresholds must be finite and non-negative.
    #[error("invalid equilibrium threshold {name} = {value}")]
    Threshold {
        /// Name of the offending threshold.
        name: &'static str,
        /// Provided value.
        value: Scalar,
    },
}

/// Static configuration for field evaluation, grids and line sweeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Coulomb's constant in N·m²/C².
    pub coulomb_constant: Scalar,
    /// Grid extent along x, in meters.
    pub x_range: (Scalar, Scalar),
    /// Grid extent along y, in meters.
    pub y_range: (Scalar, Scalar),
    /// Samples per grid axis.
    pub grid_size: usize,
    /// Line sweep used for 1D plots and the equilibrium search.
    pub line: LineSweep,
    /// Equilibrium finder thresholds.
    pub equilibrium: EquilibriumConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            coulomb_constant: COULOMB_CONSTANT,
            x_range: (-2.0, 2.0),
            y_range: (-1.5, 1.5),
            grid_size: 200,
            line: LineSweep::default(),
            equilibrium: EquilibriumConfig::default(),
        }
    }
}

impl FieldConfig {
    /// Checks every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let k = self.coulomb_constant;
        if !(k.is_finite() && k > 0.0) {
            return Err(ConfigError::CoulombConstant(k));
        }
        check_range("x", self.x_range)?;
        check_range("y", self.y_range)?;
        check_range("line", (self.line.start, self.line.stop))?;
        if self.grid_size < 2 {
            return Err(ConfigError::TooFewPoints { what: "grid_size", got: self.grid_size });
        }
        if self.line.num_points < 2 {
            return Err(ConfigError::TooFewPoints { what: "line.num_points", got: self.line.num_points });
        }
        let r = self.equilibrium.exclusion_radius;
        if !(r.is_finite() && r >= 0.0) {
            return Err(ConfigError::Threshold { name: "exclusion_radius", value: r });
        }
        if let Some(t) = self.equilibrium.asymptote_threshold {
            if !(t.is_finite() && t > 0.0) {
                return Err(ConfigError::Threshold { name: "asymptote_threshold", value: t });
            }
        }
        Ok(())
    }
}

fn check_range(axis: &'static str, (min, max): (Scalar, Scalar)) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(ConfigError::Range { axis, min, max })
    }
}
