use super::{Navigation, SEARCH_PAGE};
use crate::models::view_state::AbilitiesViewState;

#[derive(Debug, PartialEq, Eq)]
pub enum AbilitiesOutcome {
    Rendered(AbilitiesViewState),
    Errored,
}

#[derive(Default)]
pub struct AbilitiesController;

impl AbilitiesController {
    pub fn new() -> Self {
        Self
    }

    /// Rebuilds the view state from the page's query string. Nothing is
    /// rendered from a partially decoded state.
    pub fn load(&self, query: &str) -> AbilitiesOutcome {
        match AbilitiesViewState::decode(query) {
            Ok(state) => {
                tracing::info!("Showing {} abilities of '{}'", state.abilities.len(), state.name);
                AbilitiesOutcome::Rendered(state)
            }
            Err(e) => {
                tracing::error!("Could not load abilities from '{}': {}", query, e);
                AbilitiesOutcome::Errored
            }
        }
    }

    pub fn go_back(&self) -> Navigation {
        Navigation::to(SEARCH_PAGE, None)
    }
}
