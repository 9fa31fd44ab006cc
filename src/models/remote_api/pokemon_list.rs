use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ApiPokemonList {
    pub results: Vec<ApiPokemonListItem>,
}

/// One index entry; `url` points at the detail resource.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiPokemonListItem {
    pub name: String,
    pub url: String,
}
