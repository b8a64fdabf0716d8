//! Tarantula fault localization.
//!
//! Runs every numbered case of every configured program, collects which
//! source lines each case executed from gcov annotations, and colors the
//! source by how strongly running a line correlates with failing cases.
//!
//! ## Modules
//!
//! - `config`: TOML runner configuration and the historical default
//! - `runner`: the sequential prepare/run/coverage loop
//! - `gcov`: run-count column parsing
//! - `suspicion`: per-line tallies and hue
//! - `render`: ANSI and HTML listings

pub mod config;
pub mod gcov;
pub mod render;
pub mod runner;
pub mod suspicion;

pub use config::{ProgramSpec, TarantulaConfig};
pub use gcov::parse_executed_lines;
pub use render::{render_ansi, render_html, Band};
pub use runner::{CaseRun, Runner, RunSummary, Shell, SystemShell};
pub use suspicion::{LineCounts, LineTally, NEVER_RUN};

use serde::Serialize;

/// One source line in a machine-readable report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineReport {
    /// 1-based.
    pub number: usize,
    pub text: String,
    pub passed: u32,
    pub failed: u32,
    /// `None` for lines no case ran.
    pub hue: Option<f64>,
}

/// A run's outcome as written by `--format json`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TarantulaReport {
    pub passed_cases: u32,
    pub failed_cases: u32,
    pub failures: Vec<CaseRun>,
    pub lines: Vec<LineReport>,
}

impl TarantulaReport {
    #[must_use]
    pub fn new(source: &str, summary: &RunSummary) -> Self {
        let tally = &summary.tally;
        let lines = source
            .lines()
            .enumerate()
            .map(|(line, text)| {
                let counts = tally.counts(line);
                LineReport {
                    number: line + 1,
                    text: text.to_string(),
                    passed: counts.passed,
                    failed: counts.failed,
                    hue: counts.was_run().then(|| tally.hue(line)),
                }
            })
            .collect();
        Self {
            passed_cases: tally.passed_total(),
            failed_cases: tally.failed_total(),
            failures: summary.failures().cloned().collect(),
            lines,
        }
    }

    /// Executed lines from most to least suspicious. Ties keep source order.
    #[must_use]
    pub fn most_suspicious(&self, limit: usize) -> Vec<&LineReport> {
        let mut run: Vec<&LineReport> = self.lines.iter().filter(|l| l.hue.is_some()).collect();
        run.sort_by(|a, b| {
            let (a, b) = (a.hue.unwrap_or(1.0), b.hue.unwrap_or(1.0));
            a.total_cmp(&b)
        });
        run.truncate(limit);
        run
    }
}
