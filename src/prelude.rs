//! Convenience re-exports for building electrostatics analyses.

pub use crate::config::{ConfigError, FieldConfig};
pub use crate::constants::*;
pub use crate::equilibrium::{
    format_equilibrium_points,
    interpolate_root,
    sign_changes,
    Crossing,
    CrossingKind,
    EquilibriumConfig,
    EquilibriumError,
    EquilibriumFinder,
};
pub use crate::errors::FieldError;
pub use crate::fields::{
    compute_field,
    compute_potential,
    field_at_point,
    potential_at_point,
    Charge,
    FieldGrid,
    FieldSample,
    Polarity,
};
pub use crate::grid::Grid;
pub use crate::io::{
    write_charges_csv,
    write_grid_csv,
    write_html_report,
    write_line_csv,
    write_vtk_structured_points,
    Report,
};
pub use crate::math::{angle_deg, gradient, Matrix, Scalar, R2};
pub use crate::scenario::{Scenario, ScenarioError, ScenarioResult};
pub use crate::sweep::{linspace, sample_1d, Axis, LineSample, LineSweep, SampleMode};
