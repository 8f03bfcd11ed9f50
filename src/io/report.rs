//! Self-contained HTML analysis report.
//!
//! Plot images are produced elsewhere; the report only links to them by file
//! name. Converting the page to PDF is left to external tooling.

use std::io::{self, Write};

use crate::constants::MICRO_COULOMB;
use crate::equilibrium::format_equilibrium_points;
use crate::fields::{Charge, FieldSample};
use crate::scenario::{Scenario, ScenarioResult};

/// Data rendered into the report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Page title.
    pub title: String,
    /// Charges of the analysed configuration.
    pub charges: Vec<Charge>,
    /// Pre-formatted equilibrium coordinates.
    pub equilibrium_points: Vec<String>,
    /// Probe sample.
    pub sample: FieldSample,
    /// Image files to embed, relative to the report.
    pub figures: Vec<String>,
}

impl Report {
    /// Collects report data from a finished scenario run.
    #[must_use]
    pub fn from_run(scenario: &Scenario, result: &ScenarioResult) -> Self {
        Self {
            title: scenario.name.clone(),
            charges: scenario.charges.clone(),
            equilibrium_points: format_equilibrium_points(&result.equilibrium_points),
            sample: result.probe_sample,
            figures: Vec::new(),
        }
    }

    /// Adds an image reference.
    #[must_use]
    pub fn with_figure(mut self, path: impl Into<String>) -> Self {
        self.figures.push(path.into());
        self
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders `report` as an HTML document.
pub fn write_html_report<W: Write>(mut w: W, report: &Report) -> io::Result<()> {
    let title = escape(&report.title);
    writeln!(w, "<!DOCTYPE html>")?;
    writeln!(w, "<html lang=\"en\">")?;
    writeln!(w, "<head><meta charset=\"utf-8\"><title>{title}</title></head>")?;
    writeln!(w, "<body>")?;
    writeln!(w, "<h1>{title}</h1>")?;

    writeln!(w, "<h2>Charges</h2>")?;
    writeln!(w, "<table>")?;
    writeln!(w, "<tr><th>#</th><th>q (µC)</th><th>x (m)</th><th>y (m)</th></tr>")?;
    for (n, c) in report.charges.iter().enumerate() {
        writeln!(
            w,
            "<tr><td>{}</td><td>{:+.2}</td><td>{:.3}</td><td>{:.3}</td></tr>",
            n + 1,
            c.q / MICRO_COULOMB,
            c.x,
            c.y
        )?;
    }
    writeln!(w, "</table>")?;

    writeln!(w, "<h2>Equilibrium points</h2>")?;
    if report.equilibrium_points.is_empty() {
        writeln!(w, "<p>No equilibrium points found on the sampled line.</p>")?;
    } else {
        writeln!(w, "<ul>")?;
        for p in &report.equilibrium_points {
            writeln!(w, "<li>{}</li>", escape(p))?;
        }
        writeln!(w, "</ul>")?;
    }

    let s = &report.sample;
    writeln!(w, "<h2>Field at ({:.3}, {:.3}) m</h2>", s.position[0], s.position[1])?;
    writeln!(w, "<ul>")?;
    writeln!(w, "<li>E<sub>x</sub> = {:.4e} N/C</li>", s.ex)?;
    writeln!(w, "<li>E<sub>y</sub> = {:.4e} N/C</li>", s.ey)?;
    writeln!(w, "<li>|E| = {:.4e} N/C</li>", s.magnitude)?;
    writeln!(w, "<li>angle = {:.2}°</li>", s.angle_deg)?;
    writeln!(w, "<li>V = {:.4e} V</li>", s.potential)?;
    writeln!(w, "</ul>")?;

    for fig in &report.figures {
        let src = escape(fig);
        writeln!(w, "<figure><img src=\"{src}\" alt=\"{src}\"></figure>")?;
    }
    writeln!(w, "</body>")?;
    writeln!(w, "</html>")?;
    w.flush()?;
    Ok(())
}
