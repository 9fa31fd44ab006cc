pub mod abilities;
pub mod search;

pub use abilities::{AbilitiesController, AbilitiesOutcome};
pub use search::{SearchController, SearchOutcome};

pub const SEARCH_PAGE: &str = "/";
pub const ABILITIES_PAGE: &str = "/abilities";

/// Where the browser should go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation(String);

impl Navigation {
    pub fn to(path: &str, query: Option<&str>) -> Self {
        match query {
            Some(query) => Self(format!("{path}?{query}")),
            None => Self(path.to_string()),
        }
    }

    pub fn location(&self) -> &str {
        &self.0
    }
}
