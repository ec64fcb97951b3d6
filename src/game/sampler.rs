//! Weapon-diverse random sampling of skins.
//!
//! Picks at most one skin per weapon before any weapon is allowed to repeat,
//! so a round of N pairs shows N different guns whenever the catalog has
//! enough of them.

use crate::models::Skin;
use rand::prelude::*;
use std::collections::{HashMap, HashSet};

/// Select up to `count` skins, preferring distinct `weapon.id`s.
///
/// Skins without an image are never selected. The result has
/// `min(count, usable skins)` entries. When `count` does not exceed the
/// number of distinct weapons among usable skins, no two results share a
/// weapon.
pub fn sample_diverse<R: Rng + ?Sized>(skins: &[Skin], count: usize, rng: &mut R) -> Vec<Skin> {
    if count == 0 {
        return Vec::new();
    }

    let usable: Vec<&Skin> = skins.iter().filter(|s| s.has_image()).collect();
    if usable.is_empty() {
        return Vec::new();
    }

    // Indices into `usable`, grouped by weapon
    let mut by_weapon: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, skin) in usable.iter().enumerate() {
        by_weapon
            .entry(skin.weapon.id.as_str())
            .or_default()
            .push(idx);
    }

    // HashMap iteration order is itself random; sort first so a seeded rng
    // reproduces the same draw.
    let mut weapon_ids: Vec<&str> = by_weapon.keys().copied().collect();
    weapon_ids.sort_unstable();
    weapon_ids.shuffle(rng);

    let mut picked: Vec<usize> = Vec::with_capacity(count.min(usable.len()));
    for weapon_id in weapon_ids {
        if picked.len() >= count {
            break;
        }
        if let Some(&idx) = by_weapon.get(weapon_id).and_then(|group| group.choose(rng)) {
            picked.push(idx);
        }
    }

    // Not enough distinct weapons: top up with any skins not yet picked.
    if picked.len() < count {
        let taken: HashSet<usize> = picked.iter().copied().collect();
        let mut remaining: Vec<usize> = (0..usable.len()).filter(|i| !taken.contains(i)).collect();
        remaining.shuffle(rng);
        let missing = count - picked.len();
        picked.extend(remaining.into_iter().take(missing));
    }

    picked.truncate(count);
    picked.into_iter().map(|idx| usable[idx].clone()).collect()
}
