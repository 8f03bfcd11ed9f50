//! Scenario orchestration and file export.

use std::fs;
use std::io::{self, Write};

use approx::assert_relative_eq;
use electrofield::prelude::*;
use tempfile::tempdir;

fn small_config() -> FieldConfig {
    FieldConfig { grid_size: 41, ..FieldConfig::default() }
}

#[test]
fn demo_scenario_produces_aligned_outputs() {
    let scenario = Scenario::three_charge_demo().with_config(small_config());
    let result = scenario.run().expect("demo runs");

    assert_eq!(result.grid.shape(), (41, 41));
    assert_eq!(result.field.shape(), (41, 41));
    assert_eq!(result.potential.shape(), (41, 41));
    assert_eq!(result.total_field_line.len(), 2000);
    assert_eq!(result.potential_line.len(), 2000);
    assert_eq!(result.per_charge_lines.len(), 3);
    assert!(result.equilibrium_points.is_empty());

    let k = scenario.config.coulomb_constant;
    let expected = field_at_point(&scenario.charges, R2::new(1.0, 1.0), k);
    assert_relative_eq!(result.probe_sample.ex, expected.x, max_relative = 1.0e-12);
    assert_relative_eq!(result.probe_sample.ey, expected.y, max_relative = 1.0e-12);
    assert_relative_eq!(result.probe_sample.magnitude, expected.norm(), max_relative = 1.0e-12);
}

#[test]
fn grid_values_stay_finite_with_charges_on_grid_nodes() {
    // x and y grids both contain 0.0, where the middle charge sits.
    let config = FieldConfig { grid_size: 5, ..FieldConfig::default() };
    let result = Scenario::three_charge_demo().with_config(config).run().unwrap();
    assert!(result.field.ex.iter().all(|v| v.is_finite()));
    assert!(result.field.ey.iter().all(|v| v.is_finite()));
    assert!(result.potential.iter().all(|v| v.is_finite()));
}

#[test]
fn scenario_file_round_trips_through_run() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pair.toml");
    fs::write(
        &path,
        r#"
        name = "pair"
        probe = [0.0, 1.0]

        [[charges]]
        q = 1.0e-6
        x = 0.0
        y = 0.0

        [[charges]]
        q = 4.0e-6
        x = 3.0
        y = 0.0

        [config]
        grid_size = 11

        [config.line]
        num_points = 2000
        "#,
    )
    .unwrap();

    let scenario = Scenario::load(&path).expect("loads");
    let result = scenario.run().expect("runs");
    assert_eq!(result.equilibrium_points.len(), 1);
    assert_relative_eq!(result.equilibrium_points[0], 1.0, epsilon = 1.0e-4);
    assert_eq!(result.probe_sample.position, [0.0, 1.0]);
}

#[test]
fn missing_scenario_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Scenario::load(&path).unwrap_err();
    assert!(matches!(err, ScenarioError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn exports_write_every_collaborator_file() {
    let scenario = Scenario::three_charge_demo().with_config(small_config());
    let result = scenario.run().unwrap();
    let dir = tempdir().unwrap();

    let grid_path = dir.path().join("grid.csv");
    write_grid_csv(fs::File::create(&grid_path).unwrap(), &result.grid, &result.field, &result.potential).unwrap();
    assert_eq!(fs::read_to_string(&grid_path).unwrap().lines().count(), 1 + 41 * 41);

    let line_path = dir.path().join("line.csv");
    write_line_csv(fs::File::create(&line_path).unwrap(), &result.total_field_line, &result.per_charge_lines)
        .unwrap();
    let line = fs::read_to_string(&line_path).unwrap();
    assert!(line.starts_with("coord,total,derivative,charge_1,charge_2,charge_3\n"));

    let vtk_path = dir.path().join("grid.vtk");
    write_vtk_structured_points(
        fs::File::create(&vtk_path).unwrap(),
        &scenario.name,
        &result.grid,
        &result.field,
        &result.potential,
    )
    .unwrap();
    assert!(fs::read_to_string(&vtk_path).unwrap().contains("DIMENSIONS 41 41 1"));

    let html_path = dir.path().join("report.html");
    let report = Report::from_run(&scenario, &result).with_figure("field.png");
    write_html_report(fs::File::create(&html_path).unwrap(), &report).unwrap();
    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("<h1>three_charges</h1>"));
    assert!(html.contains("No equilibrium points found"));
}

#[test]
fn vertical_sweep_excludes_charges_by_their_y_position() {
    let scenario = Scenario::from_toml_str(
        r#"
        name = "stacked"

        [[charges]]
        q = 1.0e-6
        x = 0.0
        y = -1.0

        [[charges]]
        q = 1.0e-6
        x = 0.0
        y = 1.0

        [config]
        grid_size = 11

        [config.line]
        axis = "y"
        fixed_coord = 0.0
        "#,
    )
    .expect("valid scenario");
    assert_eq!(scenario.config.line.axis, Axis::Y);

    let result = scenario.run().expect("runs");
    // Both charges share x = 0, so only their y positions can rule out the pole crossings.
    assert_eq!(result.equilibrium_points.len(), 1);
    assert_relative_eq!(result.equilibrium_points[0], 0.0, epsilon = 1.0e-6);
}

/// Accepts every write and fails on flush, like a full disk behind a buffer.
struct FailingFlush;

impl Write for FailingFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("disk full"))
    }
}

#[test]
fn exports_surface_flush_errors() {
    let scenario = Scenario::three_charge_demo().with_config(FieldConfig { grid_size: 5, ..small_config() });
    let result = scenario.run().unwrap();

    assert!(write_grid_csv(FailingFlush, &result.grid, &result.field, &result.potential).is_err());
    assert!(write_line_csv(FailingFlush, &result.total_field_line, &result.per_charge_lines).is_err());
    assert!(write_charges_csv(FailingFlush, &scenario.charges).is_err());
    assert!(write_vtk_structured_points(FailingFlush, "demo", &result.grid, &result.field, &result.potential).is_err());
    let err = write_html_report(FailingFlush, &Report::from_run(&scenario, &result)).unwrap_err();
    assert_eq!(err.to_string(), "disk full");
}
