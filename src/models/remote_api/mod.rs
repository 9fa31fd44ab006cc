mod pokemon;
mod pokemon_abilities;
mod pokemon_list;
mod pokemon_sprites;

pub use pokemon::ApiPokemon;
pub use pokemon_abilities::ApiAbilitySlot;
pub use pokemon_list::{ApiPokemonList, ApiPokemonListItem};
pub use pokemon_sprites::ApiPokemonSprites;
