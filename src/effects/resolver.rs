//! Card effect dispatch.
//!
//! `card_effect` resolves one action card for the current player. The
//! effect runs against a scratch copy of the state that replaces the real
//! one only on success, so a failed effect never leaves a half-applied
//! change behind. Cloning is O(1) thanks to the persistent piles.

use tracing::debug;

use crate::cards::Card;
use crate::core::GameState;
use crate::error::{EngineError, Result};

use super::effect::{Choices, EffectContext};
use super::{attack, draw, economy, gain};

impl GameState {
    /// Resolve `card`, which sits at `hand_pos` in the current player's hand.
    ///
    /// The played card ends in the discard pile (or the trash, for cards
    /// that trash themselves). Nothing touches the played pile.
    pub fn card_effect(&mut self, card: Card, choices: Choices, hand_pos: usize) -> Result<()> {
        let player = self.whose_turn;
        self.check_player(player)?;
        let len = self.hands[player].len();
        match self.hands[player].get(hand_pos) {
            None => return Err(EngineError::InvalidHandPosition { pos: hand_pos, len }),
            Some(&found) if found != card => {
                return Err(EngineError::CardNotInHand {
                    expected: card,
                    found,
                    pos: hand_pos,
                })
            }
            Some(_) => {}
        }

        let ctx = EffectContext {
            player,
            hand_pos,
            choices,
        };
        let mut scratch = self.clone();
        let outcome = resolve(&mut scratch, card, &ctx);
        match outcome {
            Ok(()) => {
                *self = scratch;
                debug!(%player, %card, ?choices, "resolved card effect");
                Ok(())
            }
            Err(err) => {
                debug!(%player, %card, ?choices, error = %err, "card effect rejected");
                Err(err)
            }
        }
    }
}

fn resolve(state: &mut GameState, card: Card, ctx: &EffectContext) -> Result<()> {
    match card {
        Card::Adventurer => draw::adventurer(state, ctx),
        Card::Smithy => draw::smithy(state, ctx),
        Card::Village => draw::village(state, ctx),
        Card::GreatHall => draw::great_hall(state, ctx),
        Card::CouncilRoom => draw::council_room(state, ctx),
        Card::Feast => gain::feast(state, ctx),
        Card::Mine => gain::mine(state, ctx),
        Card::Remodel => gain::remodel(state, ctx),
        Card::TreasureMap => gain::treasure_map(state, ctx),
        Card::Minion => attack::minion(state, ctx),
        Card::Tribute => attack::tribute(state, ctx),
        Card::Ambassador => attack::ambassador(state, ctx),
        Card::Cutpurse => attack::cutpurse(state, ctx),
        Card::SeaHag => attack::sea_hag(state, ctx),
        Card::Baron => economy::baron(state, ctx),
        Card::Steward => economy::steward(state, ctx),
        Card::Embargo => economy::embargo(state, ctx),
        Card::Outpost => economy::outpost(state, ctx),
        Card::Salvager => economy::salvager(state, ctx),
        Card::Curse
        | Card::Estate
        | Card::Duchy
        | Card::Province
        | Card::Copper
        | Card::Silver
        | Card::Gold
        | Card::Gardens => Err(EngineError::NotAnAction(card)),
    }
}

/// Put the played card in the discard pile.
pub(super) fn discard_played(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    state.discard_card(ctx.hand_pos, ctx.player, false)?;
    Ok(())
}
