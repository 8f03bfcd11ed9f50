//! High-level orchestration of a complete charge-configuration analysis.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::config::FieldConfig;
use crate::equilibrium::EquilibriumFinder;
use crate::errors::FieldError;
use crate::fields::{Charge, FieldGrid, FieldSample};
use crate::grid::Grid;
use crate::math::{Matrix, R2, Scalar};
use crate::sweep::{sample_1d, LineSample, SampleMode};

/// Errors that can occur while loading or running a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// A scenario needs at least one charge.
    #[error("scenario {0:?} has no charges")]
    EmptyCharges(String),
    /// Raised when the scenario file cannot be read.
    #[error("failed to read scenario {path}: {source}")]
    Read {
        /// Offending path.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Raised when the scenario file is not valid TOML for a scenario.
    #[error("failed to parse scenario: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A named set of charges together with the configuration used to analyse them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable identifier.
    #[serde(default = "default_name")]
    pub name: String,
    /// Charges in the plane.
    pub charges: Vec<Charge>,
    /// Engine configuration.
    #[serde(default)]
    pub config: FieldConfig,
    /// Probe point for the single-sample report entry.
    #[serde(default = "default_probe")]
    pub probe: [Scalar; 2],
}

fn default_name() -> String {
    "scenario".to_owned()
}

const fn default_probe() -> [Scalar; 2] {
    [1.0, 1.0]
}

/// Everything computed for one scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    /// Grid the 2D quantities are aligned with.
    pub grid: Grid,
    /// Superposed field on the grid.
    pub field: FieldGrid,
    /// Superposed potential on the grid.
    pub potential: Matrix,
    /// Axial field along the configured line.
    pub total_field_line: LineSample,
    /// Axial field of each charge alone along the configured line.
    pub per_charge_lines: Vec<LineSample>,
    /// Potential along the configured line.
    pub potential_line: LineSample,
    /// Equilibrium points found on the line.
    pub equilibrium_points: Vec<Scalar>,
    /// Field sample at the probe point.
    pub probe_sample: FieldSample,
}

impl Scenario {
    /// Creates a scenario with default configuration.
    #[must_use]
    pub fn new(name: impl Into<String>, charges: Vec<Charge>) -> Self {
        Self { name: name.into(), charges, config: FieldConfig::default(), probe: default_probe() }
    }

    /// Three collinear charges: +20 µC at x = -1.5, -30 µC at 0, +40 µC at 0.5.
    #[must_use]
    pub fn three_charge_demo() -> Self {
        Self::new(
            "three_charges",
            vec![
                Charge::micro(20.0, -1.5, 0.0),
                Charge::micro(-30.0, 0.0, 0.0),
                Charge::micro(40.0, 0.5, 0.0),
            ],
        )
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the probe point.
    #[must_use]
    pub fn with_probe(mut self, x: Scalar, y: Scalar) -> Self {
        self.probe = [x, y];
        self
    }

    /// Parses a scenario from TOML.
    pub fn from_toml_str(input: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads and parses a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Evaluates grid quantities, line sweeps, equilibrium points and the probe sample.
    pub fn run(&self) -> Result<ScenarioResult, FieldError> {
        let _span = info_span!("scenario", name = %self.name, charges = self.charges.len()).entered();
        if self.charges.is_empty() {
            return Err(ScenarioError::EmptyCharges(self.name.clone()).into());
        }
        self.config.validate()?;
        let k = self.config.coulomb_constant;

        let grid = Grid::from_config(&self.config);
        let field = grid.field(&self.charges, k)?;
        let potential = grid.potential(&self.charges, k)?;
        debug!(rows = grid.shape().0, cols = grid.shape().1, "grid evaluated");

        let field_sweep = self.config.line.with_mode(SampleMode::Field);
        let total_field_line = sample_1d(&self.charges, &field_sweep, k);
        let per_charge_lines = LineSample::per_charge(&self.charges, &field_sweep, k);
        let potential_line = sample_1d(&self.charges, &field_sweep.with_mode(SampleMode::Potential), k);

        let positions: Vec<Scalar> = self
            .charges
            .iter()
            .map(|c| c.axial_position(field_sweep.axis))
            .collect();
        let finder = EquilibriumFinder::new(self.config.equilibrium);
        let equilibrium_points =
            finder.find(&total_field_line.coords, &total_field_line.values, &positions)?;
        info!(count = equilibrium_points.len(), "equilibrium search complete");

        let probe_sample =
            FieldSample::evaluate(&self.charges, R2::new(self.probe[0], self.probe[1]), k);

        Ok(ScenarioResult {
            grid,
            field,
            potential,
            total_field_line,
            per_charge_lines,
            potential_line,
            equilibrium_points,
            probe_sample,
        })
    }
}
