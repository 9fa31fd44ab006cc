use serde::{Deserialize, Serialize};

/// `{ "ability": { "name": ... } }`, the shape PokeAPI uses for ability
/// slots and the shape carried in the `abilities` query parameter.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiAbilitySlot {
    pub ability: ApiNamedResource,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiNamedResource {
    pub name: String,
}

impl From<&str> for ApiAbilitySlot {
    fn from(name: &str) -> Self {
        Self {
            ability: ApiNamedResource { name: name.into() },
        }
    }
}
