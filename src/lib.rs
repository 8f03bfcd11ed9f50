#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and regularization parameters.
pub mod constants;
/// Shared mathematical utilities (vectors, matrices, derivatives).
pub mod math;
/// Point charges and superposed field/potential evaluation.
pub mod fields;
/// Rectangular evaluation grids.
pub mod grid;
/// Line sweeps of field and potential.
pub mod sweep;
/// Zero-crossing search for equilibrium points.
pub mod equilibrium;
/// Engine configuration.
pub mod config;
/// Scenario loading and orchestration.
pub mod scenario;
/// CSV, VTK and HTML export.
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
