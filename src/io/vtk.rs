//! VTK legacy ASCII export for ParaView and other VTK-based viewers.

use std::io::{self, Write};

use crate::fields::FieldGrid;
use crate::grid::Grid;
use crate::math::Matrix;

/// Writes the VTK legacy ASCII file header.
pub fn write_vtk_header<W: Write>(mut writer: W, title: &str) -> io::Result<()> {
    writeln!(writer, "# vtk DataFile Version 3.0")?;
    // The title line is limited to one line of text.
    writeln!(writer, "{}", title.lines().next().unwrap_or_default())?;
    writeln!(writer, "ASCII")?;
    writer.flush()?;
    Ok(())
}

/// Writes grid field and potential as a `STRUCTURED_POINTS` dataset.
///
/// The grid is assumed uniform (as built by [`Grid::new`]); spacing is taken
/// from the first two columns and rows. Point data carries vectors `E`
/// (z-component 0) and scalars `V`.
pub fn write_vtk_structured_points<W: Write>(
    mut writer: W,
    title: &str,
    grid: &Grid,
    field: &FieldGrid,
    potential: &Matrix,
) -> io::Result<()> {
    let (rows, cols) = grid.shape();
    let (x, y) = (grid.x(), grid.y());
    let dx = if cols > 1 { x[(0, 1)] - x[(0, 0)] } else { 1.0 };
    let dy = if rows > 1 { y[(1, 0)] - y[(0, 0)] } else { 1.0 };
    let (x0, y0) = if rows > 0 && cols > 0 { (x[(0, 0)], y[(0, 0)]) } else { (0.0, 0.0) };

    write_vtk_header(&mut writer, title)?;
    writeln!(writer, "DATASET STRUCTURED_POINTS")?;
    writeln!(writer, "DIMENSIONS {cols} {rows} 1")?;
    writeln!(writer, "ORIGIN {x0:e} {y0:e} 0")?;
    writeln!(writer, "SPACING {dx:e} {dy:e} 1")?;
    writeln!(writer, "POINT_DATA {}", rows * cols)?;

    // VTK orders points with x varying fastest.
    writeln!(writer, "VECTORS E double")?;
    for i in 0..rows {
        for j in 0..cols {
            writeln!(writer, "{:e} {:e} 0", field.ex[(i, j)], field.ey[(i, j)])?;
        }
    }
    writeln!(writer, "SCALARS V double 1")?;
    writeln!(writer, "LOOKUP_TABLE default")?;
    for i in 0..rows {
        for j in 0..cols {
            writeln!(writer, "{:e}", potential[(i, j)])?;
        }
    }
    writer.flush()?;
    Ok(())
}
