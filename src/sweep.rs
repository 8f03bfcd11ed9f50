//! One-dimensional line sweeps of field and potential.

use serde::{Deserialize, Serialize};

use crate::fields::Charge;
use crate::math::Scalar;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Free axis of a line sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Vary x, hold y fixed.
    #[default]
    X,
    /// Vary y, hold x fixed.
    Y,
}

/// Quantity reported by a line sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleMode {
    /// Field component parallel to the sweep axis, in N/C.
    #[default]
    Field,
    /// Scalar potential, in volts.
    Potential,
}

/// Description of a straight-line sweep parallel to a coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSweep {
    /// Free axis.
    pub axis: Axis,
    /// Value held by the other coordinate, in meters.
    pub fixed_coord: Scalar,
    /// First coordinate along the free axis, in meters.
    pub start: Scalar,
    /// Last coordinate along the free axis, in meters.
    pub stop: Scalar,
    /// Number of evenly spaced samples (inclusive of both ends).
    pub num_points: usize,
    /// Quantity to evaluate.
    pub mode: SampleMode,
}

impl Default for LineSweep {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            fixed_coord: 0.0,
            start: -5.0,
            stop: 5.0,
            num_points: 2000,
            mode: SampleMode::Field,
        }
    }
}

impl LineSweep {
    /// Sweep along x over the default domain with y held at `fixed_coord`.
    #[must_use]
    pub fn along_x(fixed_coord: Scalar) -> Self {
        Self { axis: Axis::X, fixed_coord, ..Self::default() }
    }

    /// Sweep along y over the default domain with x held at `fixed_coord`.
    #[must_use]
    pub fn along_y(fixed_coord: Scalar) -> Self {
        Self { axis: Axis::Y, fixed_coord, ..Self::default() }
    }

    /// Sets the sample count.
    #[must_use]
    pub const fn with_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Sets the swept domain.
    #[must_use]
    pub const fn with_domain(mut self, start: Scalar, stop: Scalar) -> Self {
        self.start = start;
        self.stop = stop;
        self
    }

    /// Sets the reported quantity.
    #[must_use]
    pub const fn with_mode(mut self, mode: SampleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Distance between neighbouring samples (0 for fewer than two points).
    #[must_use]
    pub fn spacing(&self) -> Scalar {
        if self.num_points < 2 {
            0.0
        } else {
            (self.stop - self.start) / (self.num_points as Scalar - 1.0)
        }
    }

    /// Sample coordinates along the free axis.
    #[must_use]
    pub fn coords(&self) -> Vec<Scalar> {
        linspace(self.start, self.stop, self.num_points)
    }

    fn point(&self, s: Scalar) -> (Scalar, Scalar) {
        match self.axis {
            Axis::X => (s, self.fixed_coord),
            Axis::Y => (self.fixed_coord, s),
        }
    }

    fn evaluate(&self, charges: &[Charge], s: Scalar, k: Scalar) -> Scalar {
        let (x, y) = self.point(s);
        match self.mode {
            SampleMode::Field => charges
                .iter()
                .map(|c| {
                    let e = c.field_at(x, y, k);
                    match self.axis {
                        Axis::X => e.x,
                        Axis::Y => e.y,
                    }
                })
                .sum(),
            SampleMode::Potential => charges.iter().map(|c| c.potential_at(x, y, k)).sum(),
        }
    }
}

/// Index-aligned coordinates and values produced by a line sweep.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineSample {
    /// Coordinates along the free axis, in meters.
    pub coords: Vec<Scalar>,
    /// Sampled quantity at each coordinate.
    pub values: Vec<Scalar>,
}

impl LineSample {
    /// One sweep per charge, in charge order, for decomposition plots.
    #[must_use]
    pub fn per_charge(charges: &[Charge], sweep: &LineSweep, k: Scalar) -> Vec<Self> {
        charges
            .iter()
            .map(|c| sample_1d(std::slice::from_ref(c), sweep, k))
            .collect()
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// True if no samples were taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Evaluates the superposed field component or potential along `sweep`.
#[must_use]
pub fn sample_1d(charges: &[Charge], sweep: &LineSweep, k: Scalar) -> LineSample {
    let coords = sweep.coords();
    let values = coords.iter().map(|&s| sweep.evaluate(charges, s, k)).collect();
    LineSample { coords, values }
}
