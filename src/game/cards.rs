use crate::models::{GameCard, Skin};
use rand::prelude::*;

/// Deal a shuffled deck of matching pairs from the first `pair_count` skins.
///
/// Each selected skin backs exactly two cards. Card ids are assigned before
/// the shuffle and are kept afterwards, so they form a permutation of
/// `0..2 * pairs` rather than matching list positions.
pub fn build_cards<R: Rng + ?Sized>(skins: &[Skin], pair_count: usize, rng: &mut R) -> Vec<GameCard> {
    let selected = &skins[..pair_count.min(skins.len())];

    let mut cards: Vec<GameCard> = selected
        .iter()
        .chain(selected.iter())
        .enumerate()
        .map(|(id, skin)| GameCard::new(id, skin))
        .collect();

    cards.shuffle(rng);
    cards
}
