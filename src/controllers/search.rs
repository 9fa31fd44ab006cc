use futures::future::try_join_all;

use super::{Navigation, ABILITIES_PAGE};
use crate::{
    error::Result,
    models::{
        pokemon::{PokemonDetail, PokemonSummary},
        view_state,
    },
    source::PokemonSource,
};

#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Results(Vec<PokemonDetail>),
    NoResults,
    Failed,
}

pub struct SearchController<S> {
    source: S,
}

impl<S: PokemonSource> SearchController<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Runs one search. Every failure is logged and collapsed into
    /// [`SearchOutcome::Failed`].
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let query = query.to_lowercase();

        match self.find_matches(&query).await {
            Ok(details) if details.is_empty() => {
                tracing::info!("No pokemon matched '{}'", query);
                SearchOutcome::NoResults
            }
            Ok(details) => {
                tracing::info!("{} pokemon matched '{}'", details.len(), query);
                SearchOutcome::Results(details)
            }
            Err(e) => {
                tracing::error!("Search for '{}' failed: {}", query, e);
                SearchOutcome::Failed
            }
        }
    }

    /// Index fetch, filter, then every detail fetch at once. The first
    /// failing detail fails the whole batch.
    async fn find_matches(&self, query: &str) -> Result<Vec<PokemonDetail>> {
        let index = self.source.fetch_index().await?;
        let matches = filter_by_name(index, query);
        if matches.is_empty() {
            return Ok(Vec::new());
        }

        try_join_all(
            matches
                .iter()
                .map(|summary| self.source.fetch_detail(summary)),
        )
        .await
    }

    pub fn request_abilities(&self, name: &str, image: &str, abilities: &[String]) -> Navigation {
        let query = view_state::encode(name, image, abilities);
        Navigation::to(ABILITIES_PAGE, Some(&query))
    }
}

/// Case-insensitive substring match on the name, index order kept.
pub fn filter_by_name(index: Vec<PokemonSummary>, query: &str) -> Vec<PokemonSummary> {
    let query = query.to_lowercase();
    index
        .into_iter()
        .filter(|pokemon| pokemon.name.to_lowercase().contains(&query))
        .collect()
}
