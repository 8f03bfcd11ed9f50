use electrofield::equilibrium::format_equilibrium_points;
use electrofield::scenario::Scenario;

fn main() -> Result<(), electrofield::errors::FieldError> {
    // +20 µC at -1.5 m, -30 µC at 0, +40 µC at 0.5 m on the x-axis.
    let scenario = Scenario::three_charge_demo();
    let result = scenario.run()?;

    println!("x(m), E_total(N/C), E_q1, E_q2, E_q3");
    for (i, x) in result.total_field_line.coords.iter().enumerate().step_by(100) {
        print!("{:.4}, {:.6e}", x, result.total_field_line.values[i]);
        for part in &result.per_charge_lines {
            print!(", {:.6e}", part.values[i]);
        }
        println!();
    }

    let points = format_equilibrium_points(&result.equilibrium_points);
    if points.is_empty() {
        println!("no equilibrium points on the x-axis");
    }
    for p in points {
        println!("equilibrium: {p}");
    }
    Ok(())
}
