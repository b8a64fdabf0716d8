//! Pile rendering and counting helpers for diagnostics.

use crate::cards::Card;

/// Render a pile as `[Copper][Silver]`, or `[]` when empty.
pub fn render_pile<'a>(pile: impl IntoIterator<Item = &'a Card>) -> String {
    let rendered: String = pile.into_iter().map(|card| format!("[{card}]")).collect();
    if rendered.is_empty() {
        "[]".to_string()
    } else {
        rendered
    }
}

/// True when both piles hold the same cards, ignoring order.
pub fn same_multiset<'a, 'b>(
    a: impl IntoIterator<Item = &'a Card>,
    b: impl IntoIterator<Item = &'b Card>,
) -> bool {
    let mut a: Vec<Card> = a.into_iter().copied().collect();
    let mut b: Vec<Card> = b.into_iter().copied().collect();
    if a.len() != b.len() {
        return false;
    }
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Copies of `card` in a pile.
pub fn count_card<'a>(pile: impl IntoIterator<Item = &'a Card>, card: Card) -> usize {
    pile.into_iter().filter(|&&c| c == card).count()
}

/// Treasure cards in a pile.
pub fn count_treasure<'a>(pile: impl IntoIterator<Item = &'a Card>) -> usize {
    pile.into_iter().filter(|c| c.is_treasure()).count()
}
