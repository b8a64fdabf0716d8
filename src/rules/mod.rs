//! Game rules as operations on [`GameState`](crate::core::GameState).
//!
//! - `piles`: draw, shuffle, discard, gain, coin counting
//! - `setup`: new game initialization
//! - `engine`: play, buy, end of turn
//! - `scoring`: victory points, game end, winners

pub mod engine;
pub mod piles;
pub mod scoring;
pub mod setup;

pub use piles::hand_treasure;
pub use scoring::{GameResult, EMPTY_PILES_TO_END};
pub use setup::STARTING_DECK;
