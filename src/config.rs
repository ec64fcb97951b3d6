use std::time::Duration;

pub const CSGO_API_BASE: &str = "https://bymykel.github.io/CSGO-API/api/en";
pub const SKINS_FILE: &str = "skins.json";

/// The single logical slot the full catalog is cached under.
pub const ALL_SKINS_CACHE_KEY: &str = "all_skins";

pub const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

pub const DEFAULT_SKIN_COUNT: i64 = 10;
pub const DEFAULT_PAIR_COUNT: usize = 8;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

pub const FETCH_ERROR_LABEL: &str = "Failed to fetch CS:GO skins";

/// Full URL of the catalog file under `base`.
pub fn skins_url(base: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), SKINS_FILE)
}
