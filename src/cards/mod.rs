//! Card kinds, kingdoms and per-card storage.
//!
//! ## Key Types
//!
//! - `Card`: one of the 27 card kinds, with cost, types and values
//! - `Kingdom`: the ten kingdom cards in play
//! - `CardMap`: one value per card kind (supply counts, embargo tokens)
//! - `CardRegistry`: name lookup behind `Card::from_str`

pub mod definition;
pub mod kingdom;
pub mod registry;

pub use definition::{Card, CardKind, CARD_COUNT};
pub use kingdom::{Kingdom, KINGDOM_SIZE};
pub use registry::{CardMap, CardRegistry, UnknownCard};
