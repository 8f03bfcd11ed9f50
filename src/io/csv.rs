//! CSV export of grid, line and charge data.

use std::io::{self, Write};

use crate::fields::{Charge, FieldGrid};
use crate::grid::Grid;
use crate::math::{gradient, Matrix};
use crate::sweep::LineSample;

/// Writes one row per grid cell: `x,y,ex,ey,magnitude,potential`.
///
/// Rows are emitted with x varying fastest.
pub fn write_grid_csv<W: Write>(mut w: W, grid: &Grid, field: &FieldGrid, potential: &Matrix) -> io::Result<()> {
    writeln!(w, "x,y,ex,ey,magnitude,potential")?;
    let (rows, cols) = grid.shape();
    for i in 0..rows {
        for j in 0..cols {
            let (ex, ey) = (field.ex[(i, j)], field.ey[(i, j)]);
            writeln!(
                w,
                "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
                grid.x()[(i, j)],
                grid.y()[(i, j)],
                ex,
                ey,
                ex.hypot(ey),
                potential[(i, j)]
            )?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Writes a line sweep with its numerical derivative and optional per-charge columns.
///
/// Header: `coord,total,derivative,charge_1,...,charge_n`. Per-charge samples
/// must share the coordinates of `total`; shorter ones are padded with empty cells.
pub fn write_line_csv<W: Write>(mut w: W, total: &LineSample, per_charge: &[LineSample]) -> io::Result<()> {
    write!(w, "coord,total,derivative")?;
    for n in 1..=per_charge.len() {
        write!(w, ",charge_{n}")?;
    }
    writeln!(w)?;

    let spacing = match total.coords.as_slice() {
        [a, b, ..] => b - a,
        _ => 1.0,
    };
    let slope = gradient(&total.values, spacing);
    for (idx, (coord, value)) in total.coords.iter().zip(&total.values).enumerate() {
        write!(w, "{:.16e},{:.16e},{:.16e}", coord, value, slope[idx])?;
        for part in per_charge {
            match part.values.get(idx) {
                Some(v) => write!(w, ",{v:.16e}")?,
                None => write!(w, ",")?,
            }
        }
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}

/// Writes the charge list as `q,x,y,polarity` rows.
pub fn write_charges_csv<W: Write>(mut w: W, charges: &[Charge]) -> io::Result<()> {
    writeln!(w, "q,x,y,polarity")?;
    for c in charges {
        writeln!(w, "{:.16e},{:.16e},{:.16e},{:?}", c.q, c.x, c.y, c.polarity())?;
    }
    w.flush()?;
    Ok(())
}
