use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiPokemonSprites {
    pub front_default: Option<String>,
}
