//! PASS/FAIL check lists.
//!
//! Every harness check produces one line in the form
//! `PASS when checking <label> (<detail>)`. A `Report` keeps the lines in
//! order and decides the case result: it passes only if every check did.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One expectation and whether it held.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub passed: bool,
    pub label: String,
    pub detail: String,
}

impl Check {
    pub fn new(passed: bool, label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            passed,
            label: label.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "{verdict} when checking {}", self.label)?;
        if !self.detail.is_empty() {
            write!(f, " ({})", self.detail)?;
        }
        Ok(())
    }
}

/// Ordered checks for one test case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Context lines printed before the checks, e.g. the scenario name.
    pub notes: Vec<String>,
    pub checks: Vec<Check>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(&mut self, line: impl Into<String>) {
        self.notes.push(line.into());
    }

    pub fn push(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Record a boolean expectation. Returns `cond`.
    pub fn expect(&mut self, label: impl Into<String>, cond: bool) -> bool {
        self.push(Check::new(cond, label, String::new()));
        cond
    }

    /// Record an equality expectation with both values in the detail.
    pub fn expect_eq<T>(&mut self, label: impl Into<String>, expected: T, actual: T) -> bool
    where
        T: PartialEq + fmt::Debug,
    {
        let passed = expected == actual;
        let detail = format!("expected = {expected:?}, actual = {actual:?}");
        self.push(Check::new(passed, label, detail));
        passed
    }

    /// Append another report's notes and checks.
    pub fn merge(&mut self, other: Report) {
        self.notes.extend(other.notes);
        self.checks.extend(other.checks);
    }

    /// True when every check passed. An empty report passes.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in &self.notes {
            writeln!(f, "{note}")?;
        }
        for check in &self.checks {
            writeln!(f, "{check}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_display() {
        let pass = Check::new(true, "coins", "expected = 2, actual = 2");
        assert_eq!(
            pass.to_string(),
            "PASS when checking coins (expected = 2, actual = 2)"
        );
        let fail = Check::new(false, "hand unchanged", "");
        assert_eq!(fail.to_string(), "FAIL when checking hand unchanged");
    }

    #[test]
    fn test_report_verdict() {
        let mut report = Report::new();
        assert!(report.all_passed());
        assert!(report.expect_eq("buys", 1, 1));
        assert!(report.all_passed());
        assert!(!report.expect("deck grew", false));
        assert!(!report.all_passed());
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_report_display_order() {
        let mut report = Report::new();
        report.note("scenario 1");
        report.expect("first", true);
        report.expect("second", false);
        let text = report.to_string();
        assert_eq!(
            text,
            "scenario 1\nPASS when checking first\nFAIL when checking second\n"
        );
    }

    #[test]
    fn test_merge() {
        let mut a = Report::new();
        a.expect("a", true);
        let mut b = Report::new();
        b.note("b notes");
        b.expect("b", false);
        a.merge(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.notes.len(), 1);
        assert!(!a.all_passed());
    }
}
