//! Core engine types: players, RNG, configuration and the game state record.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS, OUTPOST_HAND_SIZE};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GainTarget, GameState, Phase};
