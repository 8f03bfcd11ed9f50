//! Zero-crossing detection for sampled axial fields.
//!
//! Along a line through a set of point charges the axial field changes sign in
//! two very different ways: smoothly through a genuine equilibrium point, and
//! abruptly across the pole at each charge. Both show up as a sign change
//! between neighbouring samples, so every crossing is located by linear
//! interpolation and then classified. Crossings whose estimated root falls
//! within the exclusion radius of any charge are pole artifacts and are
//! discarded. An optional magnitude threshold drops intervals whose endpoint
//! values are so large that they can only straddle a pole.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::math::Scalar;

/// Input errors raised by the equilibrium finder.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EquilibriumError {
    /// Coordinates and values are not index-aligned.
    #[error("sample length mismatch: {coords} coordinates but {values} values")]
    LengthMismatch {
        /// Number of coordinates.
        coords: usize,
        /// Number of values.
        values: usize,
    },
}

/// Tunable thresholds for the equilibrium finder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquilibriumConfig {
    /// Roots closer than this to any charge (meters, along the sweep axis) are discarded.
    pub exclusion_radius: Scalar,
    /// When set, intervals with an endpoint magnitude above this (N/C) are discarded.
    pub asymptote_threshold: Option<Scalar>,
}

impl Default for EquilibriumConfig {
    fn default() -> Self {
        Self { exclusion_radius: 0.01, asymptote_threshold: None }
    }
}

/// Classification of a raw zero crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingKind {
    /// Genuine zero of the field.
    Equilibrium,
    /// Root lies within the exclusion radius of a charge.
    NearCharge,
    /// Interval endpoints exceed the asymptote threshold.
    Asymptote,
}

/// A sign change between samples `index` and `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Index of the left sample of the bracketing interval.
    pub index: usize,
    /// Linearly interpolated root.
    pub root: Scalar,
    /// Classification.
    pub kind: CrossingKind,
}

/// Three-valued sign; `None` for NaN so that NaN samples never bracket a root.
fn sign(v: Scalar) -> Option<i8> {
    if v > 0.0 {
        Some(1)
    } else if v < 0.0 {
        Some(-1)
    } else if v == 0.0 {
        Some(0)
    } else {
        None
    }
}

/// Indices `i` where `sign(values[i]) != sign(values[i + 1])`.
#[must_use]
pub fn sign_changes(values: &[Scalar]) -> Vec<usize> {
    values
        .windows(2)
        .enumerate()
        .filter_map(|(i, w)| match (sign(w[0]), sign(w[1])) {
            (Some(a), Some(b)) if a != b => Some(i),
            _ => None,
        })
        .collect()
}

/// Root of the line through `(x0, y0)` and `(x1, y1)`.
///
/// Returns `None` when `y1 == y0` (the secant is flat) or the estimate is not finite.
#[must_use]
pub fn interpolate_root(x0: Scalar, y0: Scalar, x1: Scalar, y1: Scalar) -> Option<Scalar> {
    let dy = y1 - y0;
    if dy == 0.0 {
        return None;
    }
    let root = x0 - y0 * (x1 - x0) / dy;
    root.is_finite().then_some(root)
}

/// Locates equilibrium points in a sampled axial field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EquilibriumFinder {
    config: EquilibriumConfig,
}

impl EquilibriumFinder {
    /// Creates a finder with the given thresholds.
    #[must_use]
    pub const fn new(config: EquilibriumConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use.
    #[must_use]
    pub const fn config(&self) -> &EquilibriumConfig {
        &self.config
    }

    /// Every sign change in `values`, with its interpolated root and classification.
    ///
    /// Flat intervals, which cannot be interpolated, are skipped.
    pub fn crossings(
        &self,
        coords: &[Scalar],
        values: &[Scalar],
        charge_positions: &[Scalar],
    ) -> Result<Vec<Crossing>, EquilibriumError> {
        if coords.len() != values.len() {
            return Err(EquilibriumError::LengthMismatch { coords: coords.len(), values: values.len() });
        }
        let mut out: Vec<Crossing> = Vec::new();
        for i in sign_changes(values) {
            let (x0, y0, x1, y1) = (coords[i], values[i], coords[i + 1], values[i + 1]);
            let Some(root) = interpolate_root(x0, y0, x1, y1) else {
                debug!(index = i, x0, x1, "skipping flat crossing interval");
                continue;
            };
            // A sample that is exactly zero closes one interval and opens the next.
            if out.last().is_some_and(|c| c.root == root) {
                continue;
            }
            let kind = self.classify(y0, y1, root, charge_positions);
            if kind != CrossingKind::Equilibrium {
                debug!(index = i, root, ?kind, "discarding crossing");
            }
            out.push(Crossing { index: i, root, kind });
        }
        Ok(out)
    }

    /// Roots of genuine equilibrium points, in ascending sample order.
    pub fn find(
        &self,
        coords: &[Scalar],
        values: &[Scalar],
        charge_positions: &[Scalar],
    ) -> Result<Vec<Scalar>, EquilibriumError> {
        Ok(self
            .crossings(coords, values, charge_positions)?
            .into_iter()
            .filter(|c| c.kind == CrossingKind::Equilibrium)
            .map(|c| c.root)
            .collect())
    }

    fn classify(&self, y0: Scalar, y1: Scalar, root: Scalar, charge_positions: &[Scalar]) -> CrossingKind {
        if charge_positions
            .iter()
            .any(|&p| (root - p).abs() < self.config.exclusion_radius)
        {
            return CrossingKind::NearCharge;
        }
        match self.config.asymptote_threshold {
            Some(limit) if y0.abs().max(y1.abs()) > limit => CrossingKind::Asymptote,
            _ => CrossingKind::Equilibrium,
        }
    }
}

/// Formats equilibrium coordinates for display in reports.
#[must_use]
pub fn format_equilibrium_points(points: &[Scalar]) -> Vec<String> {
    points.iter().map(|x| format!("x = {x:.4} m")).collect()
}
