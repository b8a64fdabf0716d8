//! Numbered-case test programs.
//!
//! Each `Suite` is a fixed list of cases over one engine operation or card.
//! A case is selected by its 1-based number and reports through
//! `CaseOutcome::exit_code`: 0 pass, 1 fail, 2 no such case. The Tarantula
//! runner drives these cases one process at a time.
//!
//! ## Suites
//!
//! | name                   | subject        | cases |
//! |------------------------|----------------|-------|
//! | `unittest1`            | `is_game_over` | 48    |
//! | `unittest2`            | `gain_card`    | 18    |
//! | `unittest3`            | `score_for`    | 49    |
//! | `unittest4`            | `update_coins` | 77    |
//! | `cardtest4`            | Embargo        | 4     |
//! | `randomtestadventurer` | Adventurer     | 50    |
//! | `randomtestcard1`      | Smithy         | 50    |
//! | `randomtestcard2`      | Remodel        | 50    |
//!
//! Random cases seed their RNG with the case number, so a failing case can
//! be rerun exactly.

mod coins;
mod embargo;
mod gain;
mod game_over;
mod random;
mod score;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::cards::Kingdom;
use crate::core::{GameConfig, GameState};
use crate::harness::{Check, Report};

/// Seed for the fixed-state suites.
const FIXTURE_SEED: u64 = 68;

/// One numbered-case program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suite {
    #[serde(rename = "unittest1")]
    GameOver,
    #[serde(rename = "unittest2")]
    GainCard,
    #[serde(rename = "unittest3")]
    Score,
    #[serde(rename = "unittest4")]
    Coins,
    #[serde(rename = "cardtest4")]
    Embargo,
    #[serde(rename = "randomtestadventurer")]
    RandomAdventurer,
    #[serde(rename = "randomtestcard1")]
    RandomSmithy,
    #[serde(rename = "randomtestcard2")]
    RandomRemodel,
}

impl Suite {
    pub const ALL: [Suite; 8] = [
        Suite::GameOver,
        Suite::GainCard,
        Suite::Score,
        Suite::Coins,
        Suite::Embargo,
        Suite::RandomAdventurer,
        Suite::RandomSmithy,
        Suite::RandomRemodel,
    ];

    /// Program name, as used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suite::GameOver => "unittest1",
            Suite::GainCard => "unittest2",
            Suite::Score => "unittest3",
            Suite::Coins => "unittest4",
            Suite::Embargo => "cardtest4",
            Suite::RandomAdventurer => "randomtestadventurer",
            Suite::RandomSmithy => "randomtestcard1",
            Suite::RandomRemodel => "randomtestcard2",
        }
    }

    /// What the suite exercises.
    #[must_use]
    pub const fn subject(self) -> &'static str {
        match self {
            Suite::GameOver => "is_game_over",
            Suite::GainCard => "gain_card",
            Suite::Score => "score_for",
            Suite::Coins => "update_coins",
            Suite::Embargo => "Embargo",
            Suite::RandomAdventurer => "Adventurer (random)",
            Suite::RandomSmithy => "Smithy (random)",
            Suite::RandomRemodel => "Remodel (random)",
        }
    }

    #[must_use]
    pub const fn case_count(self) -> usize {
        match self {
            Suite::GameOver => 48,
            Suite::GainCard => 18,
            Suite::Score => 49,
            Suite::Coins => 77,
            Suite::Embargo => 4,
            Suite::RandomAdventurer | Suite::RandomSmithy | Suite::RandomRemodel => 50,
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown suite `{0}`")]
pub struct UnknownSuite(pub String);

impl FromStr for Suite {
    type Err = UnknownSuite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suite::ALL
            .into_iter()
            .find(|suite| suite.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSuite(s.to_string()))
    }
}

/// Result of one numbered case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    Pass(Report),
    Fail(Report),
    OutOfRange,
}

impl CaseOutcome {
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            CaseOutcome::Pass(_) => 0,
            CaseOutcome::Fail(_) => 1,
            CaseOutcome::OutOfRange => 2,
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        match self {
            CaseOutcome::Pass(report) | CaseOutcome::Fail(report) => Some(report),
            CaseOutcome::OutOfRange => None,
        }
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self, CaseOutcome::Pass(_))
    }
}

/// Run case `case` (1-based) of `suite`.
pub fn run_case(suite: Suite, case: usize) -> CaseOutcome {
    if case == 0 || case > suite.case_count() {
        debug!(%suite, case, "case out of range");
        return CaseOutcome::OutOfRange;
    }
    let index = case - 1;
    let report = match suite {
        Suite::GameOver => game_over::run(index),
        Suite::GainCard => gain::run(index),
        Suite::Score => score::run(index),
        Suite::Coins => coins::run(index),
        Suite::Embargo => embargo::run(index),
        Suite::RandomAdventurer => random::adventurer(case),
        Suite::RandomSmithy => random::smithy(case),
        Suite::RandomRemodel => random::remodel(case),
    };
    let passed = report.all_passed();
    debug!(%suite, case, passed, checks = report.len(), "ran case");
    if passed {
        CaseOutcome::Pass(report)
    } else {
        CaseOutcome::Fail(report)
    }
}

/// Pass/fail totals for a whole suite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub suite: Suite,
    pub passed: usize,
    /// Numbers of the failing cases.
    pub failed: Vec<usize>,
}

impl SuiteSummary {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for SuiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} passed, {} failed",
            self.suite,
            self.passed,
            self.failed.len()
        )?;
        if !self.failed.is_empty() {
            let cases: Vec<String> = self.failed.iter().map(ToString::to_string).collect();
            write!(f, " (cases {})", cases.join(", "))?;
        }
        Ok(())
    }
}

/// Run every case of `suite`.
pub fn run_all(suite: Suite) -> SuiteSummary {
    let mut summary = SuiteSummary {
        suite,
        passed: 0,
        failed: Vec::new(),
    };
    for case in 1..=suite.case_count() {
        if run_case(suite, case).passed() {
            summary.passed += 1;
        } else {
            summary.failed.push(case);
        }
    }
    summary
}

/// Start a fixture game, or a failing report if setup is rejected.
fn start_game(players: usize, kingdom: Kingdom) -> Result<GameState, Report> {
    let config = GameConfig::new(players)
        .with_kingdom(kingdom)
        .with_seed(FIXTURE_SEED);
    GameState::initialize(&config).map_err(|err| {
        let mut report = Report::new();
        report.push(Check::new(
            false,
            "game initialization",
            err.to_string(),
        ));
        report
    })
}
