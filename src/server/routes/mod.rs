pub mod cache;
pub mod skins;
