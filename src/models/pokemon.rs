use super::remote_api::{ApiPokemon, ApiPokemonListItem};

pub type PokemonSummary = ApiPokemonListItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonDetail {
    pub name: String,
    /// Empty when the remote has no default sprite.
    pub sprite_url: String,
    pub abilities: Vec<String>,
}

impl From<ApiPokemon> for PokemonDetail {
    fn from(value: ApiPokemon) -> Self {
        Self {
            name: value.name,
            sprite_url: value.sprites.front_default.unwrap_or_default(),
            abilities: value
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
        }
    }
}
