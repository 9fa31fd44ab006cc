use crate::{
    config::Config,
    error::Result,
    models::{
        pokemon::{PokemonDetail, PokemonSummary},
        remote_api::{ApiPokemon, ApiPokemonList},
    },
    req_util,
};

/// Where the search page gets its pokemon from.
#[allow(async_fn_in_trait)]
pub trait PokemonSource {
    /// The full name/url index. One request.
    async fn fetch_index(&self) -> Result<Vec<PokemonSummary>>;

    async fn fetch_detail(&self, summary: &PokemonSummary) -> Result<PokemonDetail>;
}

#[derive(Clone)]
pub struct PokeApi {
    req_client: reqwest::Client,
    index_url: String,
}

impl PokeApi {
    pub fn new(req_client: reqwest::Client, config: &Config) -> Self {
        Self {
            req_client,
            index_url: format!(
                "{}/pokemon/?limit={}",
                config.pokeapi_url.trim_end_matches('/'),
                config.index_limit
            ),
        }
    }

    pub fn index_url(&self) -> &str {
        &self.index_url
    }
}

impl PokemonSource for PokeApi {
    async fn fetch_index(&self) -> Result<Vec<PokemonSummary>> {
        let list = req_util::get_json::<ApiPokemonList>(&self.req_client, &self.index_url).await?;
        Ok(list.results)
    }

    async fn fetch_detail(&self, summary: &PokemonSummary) -> Result<PokemonDetail> {
        let pokemon = req_util::get_json::<ApiPokemon>(&self.req_client, &summary.url).await?;
        Ok(pokemon.into())
    }
}
