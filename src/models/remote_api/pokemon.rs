use serde::Deserialize;

use super::{ApiAbilitySlot, ApiPokemonSprites};

#[derive(Deserialize, Debug)]
pub struct ApiPokemon {
    pub name: String,
    pub sprites: ApiPokemonSprites,
    #[serde(default)]
    pub abilities: Vec<ApiAbilitySlot>,
}
