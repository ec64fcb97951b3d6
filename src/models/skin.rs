use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Skin — One cosmetic item from the upstream skins.json catalog
// ---------------------------------------------------------------------------

/// A weapon skin as published in the public CSGO-API catalog.
///
/// Only `id`, `name` and `weapon` are required. Everything else tolerates
/// being absent or `null`, since the catalog is a third-party file and a
/// single sparse record must not invalidate the whole download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Grouping key for the diversity sampler.
    pub weapon: NamedRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: NamedRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pattern: NamedRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_float: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_float: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rarity: Rarity,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stattrak: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub souvenir: bool,
    /// Empty when the catalog has no artwork; such skins are never dealt.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default)]
    pub team: Option<NamedRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crates: Vec<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collections: Vec<ImageRef>,
}

impl Skin {
    /// Whether the skin has artwork and can be placed on a card.
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Sub-records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rarity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

/// A crate or collection the skin drops from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
