//! I/O helpers for exporting field data to rendering and report tools.

pub mod csv;
pub mod report;
pub mod vtk;

pub use csv::*;
pub use report::*;
pub use vtk::*;
