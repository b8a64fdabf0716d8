//! # dominion-check
//!
//! A small Dominion-style card game engine and the tooling that tests it.
//!
//! ## Design Principles
//!
//! 1. **Failed operations change nothing**: every engine operation that
//!    returns an error leaves the `GameState` exactly as it found it, down
//!    to the serialized bytes.
//!
//! 2. **Cheap snapshots**: piles are persistent `im::Vector`s, so tests clone
//!    a state before an operation and compare afterwards at no real cost.
//!
//! 3. **Seeded randomness**: shuffles and random test states come from a
//!    seeded ChaCha stream. A case number is enough to replay a random case.
//!
//! ## Modules
//!
//! - `cards`: card kinds, kingdoms, per-card maps
//! - `core`: players, RNG, configuration, the game state record
//! - `rules`: piles, setup, turn flow, scoring
//! - `effects`: `card_effect` and the per-card effects
//! - `harness`: diffing, oracles and random states for tests
//! - `suite`: the numbered-case test programs
//! - `tarantula`: coverage-based fault localization

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod harness;
pub mod rules;
pub mod suite;
pub mod tarantula;

// Re-export commonly used types
pub use crate::cards::{Card, CardMap, Kingdom, CARD_COUNT};
pub use crate::core::{GainTarget, GameConfig, GameRng, GameState, Phase, PlayerId};
pub use crate::effects::Choices;
pub use crate::error::{EngineError, Result, TarantulaError};
pub use crate::rules::GameResult;
pub use crate::suite::{run_case, CaseOutcome, Suite};
