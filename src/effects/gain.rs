//! Actions that trash and gain cards.

use tracing::trace;

use crate::cards::Card;
use crate::core::{GainTarget, GameState};
use crate::error::{EngineError, Result};

use super::effect::{as_card, as_hand_pos, EffectContext};
use super::resolver::discard_played;

/// Most a Feast gain may cost.
const FEAST_LIMIT: u32 = 5;

/// How much more than the trashed card a Remodel gain may cost.
const REMODEL_BONUS: u32 = 2;

/// How much more than the trashed treasure a Mine gain may cost.
const MINE_BONUS: u32 = 3;

/// Golds gained by a pair of Treasure Maps.
const TREASURE_MAP_GOLDS: usize = 4;

/// Fail unless `card` can be taken from the supply and costs at most `limit`.
fn check_gain(state: &GameState, card: Card, limit: u32) -> Result<()> {
    if card.cost() > limit {
        return Err(EngineError::TooExpensive {
            card,
            cost: card.cost(),
            limit,
        });
    }
    match state.supply[card] {
        None => Err(EngineError::NotInGame(card)),
        Some(0) => Err(EngineError::SupplyEmpty(card)),
        Some(_) => Ok(()),
    }
}

/// Read choice1 as a hand position other than the played card's.
fn target_position(state: &GameState, ctx: &EffectContext) -> Result<usize> {
    let pos = as_hand_pos(ctx.choices.choice1)?;
    if pos == ctx.hand_pos {
        return Err(EngineError::CannotTrashSelf);
    }
    let len = state.hands[ctx.player].len();
    if pos >= len {
        return Err(EngineError::InvalidHandPosition { pos, len });
    }
    Ok(pos)
}

/// Trash this card, gain a card costing up to 5 (choice1).
pub(super) fn feast(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    let wanted = as_card(ctx.choices.choice1)?;
    check_gain(state, wanted, FEAST_LIMIT)?;

    state.discard_card(ctx.hand_pos, ctx.player, true)?;
    state.gain_card(wanted, ctx.player, GainTarget::Discard)
}

/// Trash a treasure from hand (choice1), gain a treasure (choice2) costing
/// up to 3 more into hand.
pub(super) fn mine(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    let pos = target_position(state, ctx)?;
    let trashed = state.hands[ctx.player][pos];
    if !trashed.is_treasure() {
        return Err(EngineError::InvalidChoice(format!("{trashed} is not a treasure")));
    }
    let wanted = as_card(ctx.choices.choice2)?;
    if !wanted.is_treasure() {
        return Err(EngineError::InvalidChoice(format!("{wanted} is not a treasure")));
    }
    check_gain(state, wanted, trashed.cost() + MINE_BONUS)?;

    let taken = state.take_from_hand(ctx.player, &[pos, ctx.hand_pos])?;
    state.trash.push_back(taken[0]);
    state.discards[ctx.player].push_back(taken[1]);
    state.gain_card(wanted, ctx.player, GainTarget::Hand)
}

/// Trash a card from hand (choice1), gain a card (choice2) costing up to 2
/// more to the discard pile.
///
/// With Remodel as the only card in hand there is nothing to trash: Remodel
/// is discarded and nothing is gained.
pub(super) fn remodel(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    if state.hands[ctx.player].len() == 1 {
        trace!(player = %ctx.player, "remodel with empty hand");
        return discard_played(state, ctx);
    }

    let pos = target_position(state, ctx)?;
    let trashed = state.hands[ctx.player][pos];
    let wanted = as_card(ctx.choices.choice2)?;
    check_gain(state, wanted, trashed.cost() + REMODEL_BONUS)?;

    state.gain_card(wanted, ctx.player, GainTarget::Discard)?;
    let taken = state.take_from_hand(ctx.player, &[pos, ctx.hand_pos])?;
    state.trash.push_back(taken[0]);
    state.discards[ctx.player].push_back(taken[1]);
    Ok(())
}

/// With a second Treasure Map in hand, trash both and put up to four Golds
/// on top of the deck.
pub(super) fn treasure_map(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    let other = state.hands[ctx.player]
        .iter()
        .enumerate()
        .position(|(i, &c)| i != ctx.hand_pos && c == Card::TreasureMap)
        .ok_or(EngineError::NoMatchingCard(Card::TreasureMap))?;

    let taken = state.take_from_hand(ctx.player, &[ctx.hand_pos, other])?;
    state.trash.extend(taken);
    for _ in 0..TREASURE_MAP_GOLDS {
        if state.gain_card(Card::Gold, ctx.player, GainTarget::Deck).is_err() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cards::Card;
    use crate::core::{GameState, PlayerId};
    use crate::effects::Choices;
    use crate::error::EngineError;

    fn p0() -> PlayerId {
        PlayerId::new(0)
    }

    fn supplied(cards: &[(Card, u32)]) -> GameState {
        let mut state = GameState::empty(2, 1);
        for &(card, n) in cards {
            state.supply[card] = Some(n);
        }
        state
    }

    #[test]
    fn test_feast_gains_and_trashes_itself() {
        let mut state = supplied(&[(Card::Duchy, 8)]);
        state.set_hand(p0(), &[Card::Feast]);

        state
            .card_effect(Card::Feast, Choices::card(Card::Duchy), 0)
            .unwrap();
        assert!(state.hand(p0()).is_empty());
        assert_eq!(state.discard(p0()).back(), Some(&Card::Duchy));
        assert_eq!(state.trash.back(), Some(&Card::Feast));
        assert_eq!(state.supply[Card::Duchy], Some(7));
    }

    #[test]
    fn test_feast_rejects_expensive_gain() {
        let mut state = supplied(&[(Card::Gold, 30)]);
        state.set_hand(p0(), &[Card::Feast]);
        let before = state.clone();

        assert!(matches!(
            state.card_effect(Card::Feast, Choices::card(Card::Gold), 0),
            Err(EngineError::TooExpensive { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_mine_upgrades_into_hand() {
        let mut state = supplied(&[(Card::Silver, 40)]);
        state.set_hand(p0(), &[Card::Mine, Card::Estate, Card::Copper]);

        state
            .card_effect(Card::Mine, Choices::trash_and_gain(2, Card::Silver), 0)
            .unwrap();
        let hand: Vec<_> = state.hand(p0()).iter().copied().collect();
        assert_eq!(hand, vec![Card::Estate, Card::Silver]);
        assert_eq!(state.trash.back(), Some(&Card::Copper));
        assert_eq!(state.discard(p0()).back(), Some(&Card::Mine));
    }

    #[test]
    fn test_mine_rejects_non_treasure() {
        let mut state = supplied(&[(Card::Silver, 40)]);
        state.set_hand(p0(), &[Card::Mine, Card::Estate]);
        assert!(matches!(
            state.card_effect(Card::Mine, Choices::trash_and_gain(1, Card::Silver), 0),
            Err(EngineError::InvalidChoice(_))
        ));
    }

    #[test]
    fn test_remodel_alone_in_hand() {
        let mut state = supplied(&[]);
        state.set_hand(p0(), &[Card::Remodel]);

        state
            .card_effect(Card::Remodel, Choices::trash_and_gain(0, Card::Gold), 0)
            .unwrap();
        assert!(state.hand(p0()).is_empty());
        assert_eq!(
            state.discard(p0()).iter().copied().collect::<Vec<_>>(),
            vec![Card::Remodel]
        );
    }

    #[test]
    fn test_remodel_success() {
        let mut state = supplied(&[(Card::Silver, 40)]);
        state.set_hand(p0(), &[Card::Copper, Card::Remodel, Card::Estate]);

        state
            .card_effect(Card::Remodel, Choices::trash_and_gain(2, Card::Silver), 1)
            .unwrap();
        assert_eq!(
            state.hand(p0()).iter().copied().collect::<Vec<_>>(),
            vec![Card::Copper]
        );
        assert_eq!(
            state.discard(p0()).iter().copied().collect::<Vec<_>>(),
            vec![Card::Silver, Card::Remodel]
        );
        assert_eq!(state.trash.back(), Some(&Card::Estate));
        assert_eq!(state.supply[Card::Silver], Some(39));
    }

    #[test]
    fn test_remodel_failures() {
        let mut state = supplied(&[(Card::Gold, 30), (Card::Smithy, 0)]);
        state.set_hand(p0(), &[Card::Copper, Card::Remodel, Card::Gold]);
        let before = state.clone();

        assert_eq!(
            state.card_effect(Card::Remodel, Choices::trash_and_gain(1, Card::Copper), 1),
            Err(EngineError::CannotTrashSelf)
        );
        assert!(matches!(
            state.card_effect(Card::Remodel, Choices::trash_and_gain(0, Card::Gold), 1),
            Err(EngineError::TooExpensive { .. })
        ));
        assert_eq!(
            state.card_effect(Card::Remodel, Choices::trash_and_gain(2, Card::Smithy), 1),
            Err(EngineError::SupplyEmpty(Card::Smithy))
        );
        assert_eq!(
            state.card_effect(Card::Remodel, Choices::trash_and_gain(2, Card::Minion), 1),
            Err(EngineError::NotInGame(Card::Minion))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_treasure_map_pair() {
        let mut state = supplied(&[(Card::Gold, 3)]);
        state.set_hand(p0(), &[Card::TreasureMap, Card::Copper, Card::TreasureMap]);

        state
            .card_effect(Card::TreasureMap, Choices::default(), 2)
            .unwrap();
        assert_eq!(
            state.hand(p0()).iter().copied().collect::<Vec<_>>(),
            vec![Card::Copper]
        );
        assert_eq!(state.trash.len(), 2);
        assert_eq!(state.deck(p0()).len(), 3);
        assert_eq!(state.supply[Card::Gold], Some(0));
    }

    #[test]
    fn test_treasure_map_alone_fails() {
        let mut state = supplied(&[(Card::Gold, 30)]);
        state.set_hand(p0(), &[Card::TreasureMap, Card::Copper]);
        assert_eq!(
            state.card_effect(Card::TreasureMap, Choices::default(), 0),
            Err(EngineError::NoMatchingCard(Card::TreasureMap))
        );
    }
}
