//! Sequential case runner.
//!
//! For every program and case, in order: the `prepare` commands, the case
//! command, the `coverage` commands, then the coverage file is read and added
//! to the tally. Only the case command's exit status matters. A failing
//! `prepare` or `coverage` command is logged and the run carries on.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::TarantulaError;

use super::config::{substitute, TarantulaConfig};
use super::gcov::read_executed_lines;
use super::suspicion::LineTally;

/// Runs one shell command line.
pub trait Shell {
    /// Whether the command exited with status 0.
    fn run(&mut self, command: &str, workdir: &Path) -> Result<bool, TarantulaError>;
}

/// `sh -c` through `std::process::Command`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn run(&mut self, command: &str, workdir: &Path) -> Result<bool, TarantulaError> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(workdir)
            .status()
            .map_err(|source| TarantulaError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;
        Ok(status.success())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRun {
    pub program: String,
    pub case: usize,
    pub passed: bool,
}

/// Everything a full run collected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub cases: Vec<CaseRun>,
    pub tally: LineTally,
}

impl RunSummary {
    pub fn failures(&self) -> impl Iterator<Item = &CaseRun> {
        self.cases.iter().filter(|case| !case.passed)
    }
}

pub struct Runner<S: Shell = SystemShell> {
    config: TarantulaConfig,
    shell: S,
}

impl Runner<SystemShell> {
    #[must_use]
    pub fn new(config: TarantulaConfig) -> Self {
        Self::with_shell(config, SystemShell)
    }
}

impl<S: Shell> Runner<S> {
    #[must_use]
    pub fn with_shell(config: TarantulaConfig, shell: S) -> Self {
        Self { config, shell }
    }

    #[must_use]
    pub fn config(&self) -> &TarantulaConfig {
        &self.config
    }

    pub fn run(&mut self) -> Result<RunSummary, TarantulaError> {
        self.config.validate()?;
        let workdir = self.config.workdir.clone();
        let coverage_path: PathBuf = self.config.coverage_path();
        let mut summary = RunSummary::default();

        info!(
            programs = self.config.programs.len(),
            cases = self.config.total_cases(),
            "starting tarantula run"
        );
        for program in &self.config.programs {
            info!(program = %program.name, cases = program.cases, "running program");
            for case in 1..=program.cases {
                for template in &self.config.prepare {
                    let command = substitute(template, &program.name, case);
                    if !self.shell.run(&command, &workdir)? {
                        warn!(%command, "prepare command failed");
                    }
                }

                let command = substitute(&program.command, &program.name, case);
                let passed = self.shell.run(&command, &workdir)?;

                for template in &self.config.coverage {
                    let command = substitute(template, &program.name, case);
                    if !self.shell.run(&command, &workdir)? {
                        warn!(%command, "coverage command failed");
                    }
                }

                let executed = read_executed_lines(&coverage_path)?;
                debug!(
                    program = %program.name,
                    case,
                    passed,
                    lines_run = executed.iter().filter(|&&ran| ran).count(),
                    "case finished"
                );
                summary.tally.record(passed, &executed);
                summary.cases.push(CaseRun {
                    program: program.name.clone(),
                    case,
                    passed,
                });
            }
        }
        info!(
            passed = summary.tally.passed_total(),
            failed = summary.tally.failed_total(),
            "tarantula run finished"
        );
        Ok(summary)
    }
}
