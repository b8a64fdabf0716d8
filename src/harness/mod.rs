//! Test-support library shared by the numbered suites, the integration
//! tests and the CLI.
//!
//! ## Modules
//!
//! - `pile`: render piles for diagnostics, unordered comparison, counting
//! - `diff`: before/after side-effect scans and byte-level identity
//! - `report`: PASS/FAIL check lists
//! - `oracle`: expected outcomes for Smithy, Adventurer, Remodel, Embargo
//! - `fuzz`: random game states bounded for each card under test
//! - `testme`: the random-input state machine quiz

pub mod diff;
pub mod fuzz;
pub mod oracle;
pub mod pile;
pub mod report;
pub mod testme;

pub use diff::{identical, Field, PileKind, SideEffects};
pub use oracle::{
    check_adventurer, check_embargo, check_remodel, check_smithy, AdventurerScenario,
    EmbargoOutcome, RemodelScenario, SmithyScenario,
};
pub use pile::{count_card, count_treasure, render_pile, same_multiset};
pub use report::{Check, Report};
