//! Per-line pass/fail tallies and the Tarantula hue.
//!
//! ## Hue
//!
//! For a line run by `passed` passing and `failed` failing cases, out of
//! `P` passing and `F` failing cases overall:
//!
//! ```text
//! hue = (passed / P) / (passed / P + failed / F)
//! ```
//!
//! 0.0 is most suspicious, 1.0 least. A line no case ran has hue
//! [`NEVER_RUN`]. With no passing cases every line that ran is 0.0; with no
//! failing cases every line that ran is 1.0.

use serde::{Deserialize, Serialize};

/// Hue of a line no case executed.
pub const NEVER_RUN: f64 = -1.0;

/// Cases that executed one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub passed: u32,
    pub failed: u32,
}

impl LineCounts {
    #[must_use]
    pub const fn was_run(self) -> bool {
        self.passed > 0 || self.failed > 0
    }
}

/// Accumulated coverage over all cases of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTally {
    passed_total: u32,
    failed_total: u32,
    lines: Vec<LineCounts>,
}

impl LineTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one case's outcome and the lines it executed.
    pub fn record(&mut self, passed: bool, executed: &[bool]) {
        if passed {
            self.passed_total += 1;
        } else {
            self.failed_total += 1;
        }
        if self.lines.len() < executed.len() {
            self.lines.resize(executed.len(), LineCounts::default());
        }
        for (counts, _) in self.lines.iter_mut().zip(executed).filter(|(_, &ran)| ran) {
            if passed {
                counts.passed += 1;
            } else {
                counts.failed += 1;
            }
        }
    }

    #[must_use]
    pub const fn passed_total(&self) -> u32 {
        self.passed_total
    }

    #[must_use]
    pub const fn failed_total(&self) -> u32 {
        self.failed_total
    }

    /// Longest coverage record seen.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Counts for a 0-based line. Lines past the longest record are unrun.
    #[must_use]
    pub fn counts(&self, line: usize) -> LineCounts {
        self.lines.get(line).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn hue(&self, line: usize) -> f64 {
        let counts = self.counts(line);
        if !counts.was_run() {
            return NEVER_RUN;
        }
        if self.passed_total == 0 {
            return 0.0;
        }
        if self.failed_total == 0 {
            return 1.0;
        }
        let pass_share = f64::from(counts.passed) / f64::from(self.passed_total);
        let fail_share = f64::from(counts.failed) / f64::from(self.failed_total);
        pass_share / (pass_share + fail_share)
    }

    /// Hue of every tallied line.
    #[must_use]
    pub fn hues(&self) -> Vec<f64> {
        (0..self.lines.len()).map(|line| self.hue(line)).collect()
    }
}
