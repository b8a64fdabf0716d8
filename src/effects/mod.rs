//! Card effects for every action card.
//!
//! `GameState::card_effect` is the single entry point. Effects are grouped
//! by what they mostly do:
//! - `draw`: Adventurer, Smithy, Village, Great Hall, Council Room
//! - `gain`: Feast, Mine, Remodel, Treasure Map
//! - `attack`: Minion, Tribute, Ambassador, Cutpurse, Sea Hag
//! - `economy`: Baron, Steward, Embargo, Outpost, Salvager
//!
//! ## Atomicity
//!
//! An effect that returns `Err` leaves the state exactly as it was,
//! including the RNG position.

mod attack;
mod draw;
mod economy;
mod effect;
mod gain;
mod resolver;

pub use effect::{as_card, as_hand_pos, Choices, EffectContext};
