//! The closed set of card kinds and their printed attributes.
//!
//! Ordinals follow the classic table order: base cards first (curse, the
//! three victory cards, the three treasures), then the twenty kingdom
//! cards. Ordinals are stable and used as indices by [`CardMap`].
//!
//! [`CardMap`]: super::CardMap

use serde::{Deserialize, Serialize};

/// Number of distinct card kinds.
pub const CARD_COUNT: usize = 27;

/// A card kind. Piles hold plain `Card` values, not instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Card {
    Curse = 0,
    Estate,
    Duchy,
    Province,
    Copper,
    Silver,
    Gold,
    Adventurer,
    CouncilRoom,
    Feast,
    Gardens,
    Mine,
    Remodel,
    Smithy,
    Village,
    Baron,
    GreatHall,
    Minion,
    Steward,
    Tribute,
    Ambassador,
    Cutpurse,
    Embargo,
    Outpost,
    Salvager,
    SeaHag,
    TreasureMap,
}

/// Printed card types. A card may have several (Great Hall is both).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardKind {
    pub treasure: bool,
    pub victory: bool,
    pub action: bool,
    pub curse: bool,
}

impl Card {
    /// Every card in ordinal order.
    pub const ALL: [Card; CARD_COUNT] = [
        Card::Curse,
        Card::Estate,
        Card::Duchy,
        Card::Province,
        Card::Copper,
        Card::Silver,
        Card::Gold,
        Card::Adventurer,
        Card::CouncilRoom,
        Card::Feast,
        Card::Gardens,
        Card::Mine,
        Card::Remodel,
        Card::Smithy,
        Card::Village,
        Card::Baron,
        Card::GreatHall,
        Card::Minion,
        Card::Steward,
        Card::Tribute,
        Card::Ambassador,
        Card::Cutpurse,
        Card::Embargo,
        Card::Outpost,
        Card::Salvager,
        Card::SeaHag,
        Card::TreasureMap,
    ];

    /// The seven cards present in every game.
    pub const BASE: [Card; 7] = [
        Card::Curse,
        Card::Estate,
        Card::Duchy,
        Card::Province,
        Card::Copper,
        Card::Silver,
        Card::Gold,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Card> {
        Card::ALL.get(index).copied()
    }

    /// Kingdom cards are everything after Gold.
    #[must_use]
    pub fn is_kingdom(self) -> bool {
        self.index() > Card::Gold.index()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Curse => "Curse",
            Card::Estate => "Estate",
            Card::Duchy => "Duchy",
            Card::Province => "Province",
            Card::Copper => "Copper",
            Card::Silver => "Silver",
            Card::Gold => "Gold",
            Card::Adventurer => "Adventurer",
            Card::CouncilRoom => "Council Room",
            Card::Feast => "Feast",
            Card::Gardens => "Gardens",
            Card::Mine => "Mine",
            Card::Remodel => "Remodel",
            Card::Smithy => "Smithy",
            Card::Village => "Village",
            Card::Baron => "Baron",
            Card::GreatHall => "Great Hall",
            Card::Minion => "Minion",
            Card::Steward => "Steward",
            Card::Tribute => "Tribute",
            Card::Ambassador => "Ambassador",
            Card::Cutpurse => "Cutpurse",
            Card::Embargo => "Embargo",
            Card::Outpost => "Outpost",
            Card::Salvager => "Salvager",
            Card::SeaHag => "Sea Hag",
            Card::TreasureMap => "Treasure Map",
        }
    }

    /// Purchase cost in coins.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Card::Curse | Card::Copper => 0,
            Card::Estate | Card::Embargo => 2,
            Card::Silver | Card::Village | Card::GreatHall | Card::Steward | Card::Ambassador => 3,
            Card::Feast
            | Card::Gardens
            | Card::Remodel
            | Card::Smithy
            | Card::Baron
            | Card::Cutpurse
            | Card::Salvager
            | Card::SeaHag
            | Card::TreasureMap => 4,
            Card::Duchy
            | Card::CouncilRoom
            | Card::Mine
            | Card::Minion
            | Card::Tribute
            | Card::Outpost => 5,
            Card::Gold | Card::Adventurer => 6,
            Card::Province => 8,
        }
    }

    #[must_use]
    pub fn kind(self) -> CardKind {
        CardKind {
            treasure: self.is_treasure(),
            victory: self.is_victory(),
            action: self.is_action(),
            curse: self == Card::Curse,
        }
    }

    #[must_use]
    pub const fn is_treasure(self) -> bool {
        matches!(self, Card::Copper | Card::Silver | Card::Gold)
    }

    /// Victory cards are scored at the end. Curses are not victory cards.
    #[must_use]
    pub const fn is_victory(self) -> bool {
        matches!(
            self,
            Card::Estate | Card::Duchy | Card::Province | Card::Gardens | Card::GreatHall
        )
    }

    #[must_use]
    pub const fn is_action(self) -> bool {
        (self as u8) >= (Card::Adventurer as u8) && !matches!(self, Card::Gardens)
    }

    /// Coins produced while in hand.
    #[must_use]
    pub const fn treasure_value(self) -> u32 {
        match self {
            Card::Copper => 1,
            Card::Silver => 2,
            Card::Gold => 3,
            _ => 0,
        }
    }

    /// Fixed victory points. Gardens scores by deck size and returns 0 here.
    #[must_use]
    pub const fn victory_points(self) -> i32 {
        match self {
            Card::Curse => -1,
            Card::Estate | Card::GreatHall => 1,
            Card::Duchy => 3,
            Card::Province => 6,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
