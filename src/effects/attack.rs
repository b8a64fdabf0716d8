//! Actions that reach into other players' piles.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{GainTarget, GameState, PlayerId};
use crate::error::{EngineError, Result};

use super::effect::{as_hand_pos, EffectContext};
use super::resolver::discard_played;

/// Hand size at which Minion's attack hits another player.
const MINION_ATTACK_THRESHOLD: usize = 5;

/// Cards drawn after a Minion discard.
const MINION_REDRAW: usize = 4;

/// Most copies Ambassador can return.
const AMBASSADOR_MAX_RETURN: i32 = 2;

/// Discard a player's whole hand and draw four.
fn cycle_hand(state: &mut GameState, player: PlayerId) -> Result<()> {
    let hand = std::mem::take(&mut state.hands[player]);
    state.discards[player].append(hand);
    state.draw_cards(player, MINION_REDRAW)?;
    Ok(())
}

/// +1 action. choice1 > 0: +2 coins. Otherwise choice2 > 0: discard your
/// hand and draw four, and each other player with five or more cards in
/// hand does the same.
pub(super) fn minion(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    state.num_actions += 1;
    discard_played(state, ctx)?;

    if ctx.choices.choice1 > 0 {
        state.coins += 2;
    } else if ctx.choices.choice2 > 0 {
        cycle_hand(state, ctx.player)?;
        for other in ctx.player.others(state.num_players()) {
            if state.hands[other].len() >= MINION_ATTACK_THRESHOLD {
                cycle_hand(state, other)?;
            }
        }
    }
    Ok(())
}

/// The player to the left reveals and discards the top two cards of their
/// deck. Each differently named revealed card gives a bonus: treasure +2
/// coins, victory +2 cards, action +2 actions.
pub(super) fn tribute(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    let left = ctx.player.next(state.num_players());
    let mut revealed: SmallVec<[Card; 2]> = SmallVec::new();
    for _ in 0..2 {
        if let Some(card) = state.take_top_of_deck(left) {
            revealed.push(card);
        }
    }
    state.discards[left].extend(revealed.iter().copied());
    if revealed.len() == 2 && revealed[0] == revealed[1] {
        revealed.pop();
    }

    for card in revealed {
        if card.is_treasure() {
            state.coins += 2;
        }
        if card.is_victory() {
            state.draw_cards(ctx.player, 2)?;
        }
        if card.is_action() {
            state.num_actions += 2;
        }
    }
    discard_played(state, ctx)
}

/// Reveal a card from hand (choice1) and return choice2 copies of it (0 to
/// 2) to its supply. Each other player then gains a copy if any remain.
pub(super) fn ambassador(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    let pos = as_hand_pos(ctx.choices.choice1)?;
    if pos == ctx.hand_pos {
        return Err(EngineError::CannotTrashSelf);
    }
    let hand = &state.hands[ctx.player];
    let revealed = *hand.get(pos).ok_or(EngineError::InvalidHandPosition {
        pos,
        len: hand.len(),
    })?;
    let returning = ctx.choices.choice2;
    if !(0..=AMBASSADOR_MAX_RETURN).contains(&returning) {
        return Err(EngineError::InvalidChoice(format!(
            "cannot return {returning} copies"
        )));
    }
    let supply = state.supply[revealed].ok_or(EngineError::NotInGame(revealed))?;

    // the revealed copy goes first, then others left to right
    let mut positions: SmallVec<[usize; 3]> = SmallVec::new();
    positions.push(pos);
    positions.extend(
        hand.iter()
            .enumerate()
            .filter(|&(i, &c)| i != pos && i != ctx.hand_pos && c == revealed)
            .map(|(i, _)| i),
    );
    let returning = returning as usize;
    if positions.len() < returning {
        return Err(EngineError::NoMatchingCard(revealed));
    }
    positions.truncate(returning);
    positions.push(ctx.hand_pos);

    let taken = state.take_from_hand(ctx.player, &positions)?;
    state.supply[revealed] = Some(supply + returning as u32);
    if let Some(&played) = taken.last() {
        state.discards[ctx.player].push_back(played);
    }

    for other in ctx.player.others(state.num_players()) {
        if state.gain_card(revealed, other, GainTarget::Discard).is_err() {
            break;
        }
    }
    Ok(())
}

/// +2 coins. Each other player discards a Copper if they have one.
pub(super) fn cutpurse(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    state.coins += 2;
    for other in ctx.player.others(state.num_players()) {
        if let Some(pos) = state.hands[other].iter().position(|&c| c == Card::Copper) {
            state.discard_card(pos, other, false)?;
        }
    }
    discard_played(state, ctx)
}

/// Each other player discards the top card of their deck, then gains a
/// Curse on top of it.
pub(super) fn sea_hag(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    for other in ctx.player.others(state.num_players()) {
        if let Some(card) = state.take_top_of_deck(other) {
            state.discards[other].push_back(card);
        }
        // an empty curse pile only skips the gain
        let _ = state.gain_card(Card::Curse, other, GainTarget::Deck);
    }
    discard_played(state, ctx)
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

    fn p1() -> PlayerId {
        PlayerId::new(1)
    }

    #[test]
    fn test_minion_coins() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Minion, Card::Estate]);

        state
            .card_effect(Card::Minion, Choices::new(1, 0, 0), 0)
            .unwrap();
        assert_eq!(state.coins, 2);
        assert_eq!(state.num_actions, 2);
        assert_eq!(state.hand(p0()).len(), 1);
    }

    #[test]
    fn test_minion_attack() {
        let mut state = GameState::empty(3, 1);
        state.set_hand(p0(), &[Card::Minion, Card::Estate]);
        state.set_deck(p0(), &[Card::Copper; 6]);
        state.set_hand(p1(), &[Card::Copper; 5]);
        state.set_deck(p1(), &[Card::Silver; 4]);
        state.set_hand(PlayerId::new(2), &[Card::Copper; 4]);

        state
            .card_effect(Card::Minion, Choices::new(0, 1, 0), 0)
            .unwrap();
        assert_eq!(state.hand(p0()).len(), 4);
        assert_eq!(state.discard(p0()).len(), 2);
        assert!(state.hand(p1()).iter().all(|&c| c == Card::Silver));
        assert_eq!(state.discard(p1()).len(), 5);
        assert_eq!(state.hand(PlayerId::new(2)).len(), 4);
        assert!(state.discard(PlayerId::new(2)).is_empty());
    }

    #[test]
    fn test_tribute_bonuses() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Tribute]);
        state.set_deck(p0(), &[Card::Copper, Card::Copper]);
        state.set_deck(p1(), &[Card::GreatHall, Card::Silver]);

        state
            .card_effect(Card::Tribute, Choices::default(), 0)
            .unwrap();
        assert_eq!(state.coins, 2);
        assert_eq!(state.num_actions, 3);
        assert_eq!(state.hand(p0()).len(), 2);
        assert_eq!(state.discard(p1()).len(), 2);
        assert!(state.deck(p1()).is_empty());
    }

    #[test]
    fn test_tribute_duplicates_count_once() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Tribute]);
        state.set_deck(p1(), &[Card::Gold, Card::Gold]);

        state
            .card_effect(Card::Tribute, Choices::default(), 0)
            .unwrap();
        assert_eq!(state.coins, 2);
    }

    #[test]
    fn test_ambassador_returns_and_gives() {
        let mut state = GameState::empty(3, 1);
        state.supply[Card::Estate] = Some(1);
        state.set_hand(p0(), &[Card::Estate, Card::Ambassador, Card::Copper, Card::Estate]);

        state
            .card_effect(Card::Ambassador, Choices::new(0, 2, 0), 1)
            .unwrap();
        assert_eq!(
            state.hand(p0()).iter().copied().collect::<Vec<_>>(),
            vec![Card::Copper]
        );
        assert_eq!(state.discard(p0()).back(), Some(&Card::Ambassador));
        assert_eq!(state.supply[Card::Estate], Some(1));
        assert_eq!(state.discard(p1()).back(), Some(&Card::Estate));
        assert_eq!(state.discard(PlayerId::new(2)).back(), Some(&Card::Estate));
    }

    #[test]
    fn test_ambassador_not_enough_copies() {
        let mut state = GameState::empty(2, 1);
        state.supply[Card::Estate] = Some(8);
        state.set_hand(p0(), &[Card::Estate, Card::Ambassador]);
        let before = state.clone();

        assert_eq!(
            state.card_effect(Card::Ambassador, Choices::new(0, 2, 0), 1),
            Err(EngineError::NoMatchingCard(Card::Estate))
        );
        assert!(state.card_effect(Card::Ambassador, Choices::new(0, 3, 0), 1).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_cutpurse() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Cutpurse]);
        state.set_hand(p1(), &[Card::Estate, Card::Copper, Card::Copper]);

        state
            .card_effect(Card::Cutpurse, Choices::default(), 0)
            .unwrap();
        assert_eq!(state.coins, 2);
        assert_eq!(state.hand(p1()).len(), 2);
        assert_eq!(state.discard(p1()).back(), Some(&Card::Copper));
    }

    #[test]
    fn test_sea_hag() {
        let mut state = GameState::empty(2, 1);
        state.supply[Card::Curse] = Some(10);
        state.set_hand(p0(), &[Card::SeaHag]);
        state.set_deck(p1(), &[Card::Copper, Card::Gold]);

        state
            .card_effect(Card::SeaHag, Choices::default(), 0)
            .unwrap();
        assert_eq!(state.discard(p1()).back(), Some(&Card::Gold));
        assert_eq!(state.deck(p1()).back(), Some(&Card::Curse));
        assert_eq!(state.deck(p1()).len(), 2);
        assert_eq!(state.supply[Card::Curse], Some(9));
    }
}
