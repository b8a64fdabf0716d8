//! Actions that adjust coins, buys, and turn flow.

use crate::cards::Card;
use crate::core::{GainTarget, GameState};
use crate::error::{EngineError, Result};

use super::effect::{as_card, as_hand_pos, EffectContext};
use super::resolver::discard_played;

const BARON_ESTATE_BONUS: u32 = 4;

/// Steward modes read from choice1.
const STEWARD_DRAW: i32 = 1;
const STEWARD_COINS: i32 = 2;

/// +1 buy. With choice1 > 0 and an Estate in hand, discard it for +4
/// coins. Otherwise gain an Estate if the pile has one.
pub(super) fn baron(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    state.num_buys += 1;
    discard_played(state, ctx)?;

    let estate = state.hands[ctx.player]
        .iter()
        .position(|&c| c == Card::Estate);
    match estate {
        Some(pos) if ctx.choices.choice1 > 0 => {
            state.discard_card(pos, ctx.player, false)?;
            state.coins += BARON_ESTATE_BONUS;
        }
        _ => {
            if matches!(state.supply[Card::Estate], Some(n) if n > 0) {
                state.gain_card(Card::Estate, ctx.player, GainTarget::Discard)?;
            }
        }
    }
    Ok(())
}

/// choice1 = 1: +2 cards. choice1 = 2: +2 coins. Anything else: trash the
/// two cards at choice2 and choice3.
pub(super) fn steward(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    match ctx.choices.choice1 {
        STEWARD_DRAW => {
            state.draw_cards(ctx.player, 2)?;
            discard_played(state, ctx)
        }
        STEWARD_COINS => {
            state.coins += 2;
            discard_played(state, ctx)
        }
        _ => {
            let first = as_hand_pos(ctx.choices.choice2)?;
            let second = as_hand_pos(ctx.choices.choice3)?;
            if first == ctx.hand_pos || second == ctx.hand_pos {
                return Err(EngineError::CannotTrashSelf);
            }
            let taken = state.take_from_hand(ctx.player, &[first, second, ctx.hand_pos])?;
            state.trash.push_back(taken[0]);
            state.trash.push_back(taken[1]);
            state.discards[ctx.player].push_back(taken[2]);
            Ok(())
        }
    }
}

/// +2 coins, trash this card, and place an embargo token on the supply
/// pile named by choice1.
pub(super) fn embargo(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    let target = as_card(ctx.choices.choice1)?;
    if state.supply[target].is_none() {
        return Err(EngineError::NotInGame(target));
    }

    state.coins += 2;
    state.embargo_tokens[target] += 1;
    state.discard_card(ctx.hand_pos, ctx.player, true)?;
    Ok(())
}

/// Take an extra three-card turn after this one.
pub(super) fn outpost(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    state.outpost_played = true;
    discard_played(state, ctx)
}

/// +1 buy. Trash a card from hand (choice1) for coins equal to its cost.
pub(super) fn salvager(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    let pos = as_hand_pos(ctx.choices.choice1)?;
    if pos == ctx.hand_pos {
        return Err(EngineError::CannotTrashSelf);
    }
    let taken = state.take_from_hand(ctx.player, &[pos, ctx.hand_pos])?;
    state.num_buys += 1;
    state.coins += taken[0].cost();
    state.trash.push_back(taken[0]);
    state.discards[ctx.player].push_back(taken[1]);
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

    fn hand_of(state: &GameState) -> Vec<Card> {
        state.hand(p0()).iter().copied().collect()
    }

    #[test]
    fn test_baron_discards_estate() {
        let mut state = GameState::empty(2, 1);
        state.supply[Card::Estate] = Some(8);
        state.set_hand(p0(), &[Card::Baron, Card::Estate, Card::Copper]);

        state
            .card_effect(Card::Baron, Choices::new(1, 0, 0), 0)
            .unwrap();
        assert_eq!(state.coins, 4);
        assert_eq!(state.num_buys, 2);
        assert_eq!(hand_of(&state), vec![Card::Copper]);
        assert_eq!(state.supply[Card::Estate], Some(8));
    }

    #[test]
    fn test_baron_gains_estate() {
        let mut state = GameState::empty(2, 1);
        state.supply[Card::Estate] = Some(8);
        state.set_hand(p0(), &[Card::Baron, Card::Copper]);

        state
            .card_effect(Card::Baron, Choices::new(1, 0, 0), 0)
            .unwrap();
        assert_eq!(state.coins, 0);
        assert_eq!(state.supply[Card::Estate], Some(7));
        assert_eq!(state.discard(p0()).back(), Some(&Card::Estate));
    }

    #[test]
    fn test_baron_with_no_estates_left() {
        let mut state = GameState::empty(2, 1);
        state.supply[Card::Estate] = Some(0);
        state.set_hand(p0(), &[Card::Baron]);

        state
            .card_effect(Card::Baron, Choices::default(), 0)
            .unwrap();
        assert_eq!(state.num_buys, 2);
        assert_eq!(state.discard(p0()).len(), 1);
    }

    #[test]
    fn test_steward_modes() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Steward, Card::Steward]);
        state.set_deck(p0(), &[Card::Copper, Card::Silver]);

        state
            .card_effect(Card::Steward, Choices::new(1, 0, 0), 0)
            .unwrap();
        assert_eq!(
            hand_of(&state),
            vec![Card::Steward, Card::Silver, Card::Copper]
        );

        state
            .card_effect(Card::Steward, Choices::new(2, 0, 0), 0)
            .unwrap();
        assert_eq!(state.coins, 2);
        assert_eq!(hand_of(&state), vec![Card::Silver, Card::Copper]);
    }

    #[test]
    fn test_steward_trashes_two() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Estate, Card::Steward, Card::Curse, Card::Gold]);

        state
            .card_effect(Card::Steward, Choices::new(3, 0, 2), 1)
            .unwrap();
        assert_eq!(hand_of(&state), vec![Card::Gold]);
        assert_eq!(state.trash.len(), 2);
        assert_eq!(state.discard(p0()).back(), Some(&Card::Steward));
    }

    #[test]
    fn test_steward_rejects_bad_positions() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Estate, Card::Steward]);
        let before = state.clone();

        assert_eq!(
            state.card_effect(Card::Steward, Choices::new(0, 0, 1), 1),
            Err(EngineError::CannotTrashSelf)
        );
        assert!(state.card_effect(Card::Steward, Choices::new(0, 0, 0), 1).is_err());
        assert!(state.card_effect(Card::Steward, Choices::new(0, 0, 5), 1).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_embargo_places_token() {
        let mut state = GameState::empty(2, 1);
        state.supply[Card::Province] = Some(8);
        state.set_hand(p0(), &[Card::Embargo]);

        state
            .card_effect(Card::Embargo, Choices::card(Card::Province), 0)
            .unwrap();
        assert_eq!(state.coins, 2);
        assert_eq!(state.embargo_tokens[Card::Province], 1);
        assert_eq!(state.trash.back(), Some(&Card::Embargo));
        assert!(state.discard(p0()).is_empty());
    }

    #[test]
    fn test_embargo_rejects_missing_pile() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Embargo]);
        let before = state.clone();

        assert_eq!(
            state.card_effect(Card::Embargo, Choices::card(Card::SeaHag), 0),
            Err(EngineError::NotInGame(Card::SeaHag))
        );
        assert!(matches!(
            state.card_effect(Card::Embargo, Choices::new(99, 0, 0), 0),
            Err(EngineError::InvalidChoice(_))
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_outpost_sets_flag() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Outpost]);
        state
            .card_effect(Card::Outpost, Choices::default(), 0)
            .unwrap();
        assert!(state.outpost_played);
        assert_eq!(state.discard(p0()).back(), Some(&Card::Outpost));
    }

    #[test]
    fn test_salvager() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Salvager, Card::Province]);

        state
            .card_effect(Card::Salvager, Choices::new(1, 0, 0), 0)
            .unwrap();
        assert_eq!(state.coins, 8);
        assert_eq!(state.num_buys, 2);
        assert_eq!(state.trash.back(), Some(&Card::Province));
        assert!(state.hand(p0()).is_empty());
    }
}
