//! Round setup for the memory game: choosing skins and dealing cards.

pub mod cards;
pub mod sampler;

pub use cards::build_cards;
pub use sampler::sample_diverse;
