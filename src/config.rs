pub const DEFAULT_ADDRESS: &str = "0.0.0.0:80";
pub const DEFAULT_POKEAPI_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_INDEX_LIMIT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub address: String,
    pub is_debug_on: bool,
    pub pokeapi_url: String,
    pub index_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.into(),
            is_debug_on: false,
            pokeapi_url: DEFAULT_POKEAPI_URL.into(),
            index_limit: DEFAULT_INDEX_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let index_limit = match lookup("index_limit") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring invalid index_limit '{}', using {}",
                    raw,
                    DEFAULT_INDEX_LIMIT
                );
                DEFAULT_INDEX_LIMIT
            }),
            None => defaults.index_limit,
        };

        Self {
            address: lookup("address").unwrap_or(defaults.address),
            is_debug_on: lookup("debug").is_some_and(|val| val == "1"),
            pokeapi_url: lookup("pokeapi_url").unwrap_or(defaults.pokeapi_url),
            index_limit,
        }
    }
}
