use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Parser;
use electrofield::errors::FieldError;
use electrofield::io::{
    write_charges_csv, write_grid_csv, write_html_report, write_line_csv, write_vtk_structured_points, Report,
};
use electrofield::scenario::{Scenario, ScenarioResult};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Electrostatic field, potential and equilibrium analysis of planar point charges
#[derive(Parser)]
#[command(name = "electrofield", version)]
struct Cli {
    /// Scenario TOML file; the built-in three-charge demo runs when omitted
    scenario: Option<PathBuf>,

    /// Directory receiving CSV, VTK and HTML output
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Skip the VTK grid export
    #[arg(long)]
    no_vtk: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(verbosity: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::builder().with_default_directive(level.into()).from_env_lossy())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn create(dir: &Path, name: &str) -> Result<BufWriter<File>, FieldError> {
    Ok(BufWriter::new(File::create(dir.join(name))?))
}

fn export(scenario: &Scenario, result: &ScenarioResult, dir: &Path, vtk: bool) -> Result<(), FieldError> {
    fs::create_dir_all(dir)?;
    write_grid_csv(create(dir, "field_grid.csv")?, &result.grid, &result.field, &result.potential)?;
    write_line_csv(create(dir, "line_field.csv")?, &result.total_field_line, &result.per_charge_lines)?;
    write_line_csv(create(dir, "line_potential.csv")?, &result.potential_line, &[])?;
    write_charges_csv(create(dir, "charges.csv")?, &scenario.charges)?;
    if vtk {
        write_vtk_structured_points(
            create(dir, "field_grid.vtk")?,
            &scenario.name,
            &result.grid,
            &result.field,
            &result.potential,
        )?;
    }
    write_html_report(create(dir, "report.html")?, &Report::from_run(scenario, result))?;
    info!(dir = %dir.display(), "outputs written");
    Ok(())
}

fn run(cli: &Cli) -> Result<(), FieldError> {
    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::three_charge_demo(),
    };
    let result = scenario.run()?;
    export(&scenario, &result, &cli.out_dir, !cli.no_vtk)?;

    println!("{}", scenario.name);
    for c in &scenario.charges {
        println!("  {c}");
    }
    if result.equilibrium_points.is_empty() {
        println!("no equilibrium points on the sampled line");
    }
    for p in electrofield::equilibrium::format_equilibrium_points(&result.equilibrium_points) {
        println!("equilibrium: {p}");
    }
    let s = &result.probe_sample;
    println!(
        "E({:.3}, {:.3}) = ({:.4e}, {:.4e}) N/C, |E| = {:.4e} N/C at {:.2}°",
        s.position[0], s.position[1], s.ex, s.ey, s.magnitude, s.angle_deg
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
