use serde::{Deserialize, Serialize};

use super::skin::Skin;

// ---------------------------------------------------------------------------
// GameCard — One face-down tile on the memory board
// ---------------------------------------------------------------------------

/// A card dealt for one round of the memory game.
///
/// `id` is the card's index before the deck was shuffled, so it does not
/// match the card's position in the dealt list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCard {
    pub id: usize,
    pub value: String,
    pub image: String,
    pub skin: Skin,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl GameCard {
    pub fn new(id: usize, skin: &Skin) -> Self {
        Self {
            id,
            value: skin.name.clone(),
            image: skin.image.clone(),
            skin: skin.clone(),
            is_flipped: false,
            is_matched: false,
        }
    }
}
