//! View state handed from the search page to the abilities page.
//!
//! The query string is the only transport: `name`, `image` and `abilities`
//! are form-urlencoded once, `abilities` holding a JSON array of
//! `{ "ability": { "name": ... } }`.

use serde::{Deserialize, Serialize};

use super::remote_api::ApiAbilitySlot;
use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilitiesViewState {
    pub name: String,
    pub image: String,
    pub abilities: Vec<String>,
}

#[derive(Serialize)]
struct EncodedViewState<'a> {
    name: &'a str,
    image: &'a str,
    abilities: String,
}

#[derive(Deserialize)]
struct RawViewState {
    name: Option<String>,
    image: Option<String>,
    abilities: Option<String>,
}

impl AbilitiesViewState {
    pub fn decode(query: &str) -> Result<Self, ParseError> {
        if !percent_decodes_to_utf8(query) {
            return Err(ParseError::InvalidUtf8);
        }
        let raw: RawViewState = serde_urlencoded::from_str(query)?;
        let name = raw.name.ok_or(ParseError::MissingParameter("name"))?;
        let image = raw.image.ok_or(ParseError::MissingParameter("image"))?;
        let abilities = raw
            .abilities
            .ok_or(ParseError::MissingParameter("abilities"))?;

        let slots: Vec<ApiAbilitySlot> = serde_json::from_str(&abilities)?;
        Ok(Self {
            name,
            image,
            abilities: slots.into_iter().map(|slot| slot.ability.name).collect(),
        })
    }
}

/// `serde_urlencoded` swaps undecodable bytes for U+FFFD; the query is
/// checked first so those are rejected instead.
fn percent_decodes_to_utf8(query: &str) -> bool {
    let bytes = query.as_bytes();
    let hex = |i: usize| bytes.get(i).and_then(|b| (*b as char).to_digit(16));

    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match (bytes[i], hex(i + 1), hex(i + 2)) {
            (b'%', Some(hi), Some(lo)) => {
                decoded.push((hi * 16 + lo) as u8);
                i += 3;
            }
            (byte, _, _) => {
                decoded.push(byte);
                i += 1;
            }
        }
    }
    std::str::from_utf8(&decoded).is_ok()
}

/// Builds the query string (without the leading `?`) for the abilities page.
pub fn encode(name: &str, image: &str, abilities: &[String]) -> String {
    let slots = abilities
        .iter()
        .map(|ability| ApiAbilitySlot::from(ability.as_str()))
        .collect::<Vec<_>>();
    // a Vec of plain string structs always serializes
    let abilities = serde_json::to_string(&slots).unwrap_or_else(|_| "[]".into());

    let encoded = EncodedViewState {
        name,
        image,
        abilities,
    };
    serde_urlencoded::to_string(&encoded).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn encoded(state: &AbilitiesViewState) -> String {
        encode(&state.name, &state.image, &state.abilities)
    }

    fn pikachu() -> AbilitiesViewState {
        AbilitiesViewState {
            name: "pikachu".into(),
            image: "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
                .into(),
            abilities: vec!["static".into(), "lightning-rod".into()],
        }
    }

    #[test]
    fn decode_reverses_encode() {
        let state = pikachu();
        assert_eq!(AbilitiesViewState::decode(&encoded(&state)).unwrap(), state);
    }

    #[test]
    fn reserved_characters_survive_the_trip() {
        let state = AbilitiesViewState {
            name: "mr. mime & co=\"?\"".into(),
            image: "https://img.example/a b.png?x=1&y=2#frag".into(),
            abilities: vec!["z-last".into(), "a+first".into(), "z-last".into(), "ünïcode %".into()],
        };
        assert_eq!(AbilitiesViewState::decode(&encoded(&state)).unwrap(), state);
    }

    #[test]
    fn abilities_travel_as_json_slots() {
        let query = encode("ditto", "", &["limber".into()]);
        let (_, abilities) = serde_urlencoded::from_str::<Vec<(String, String)>>(&query)
            .unwrap()
            .into_iter()
            .find(|(key, _)| key == "abilities")
            .unwrap();
        assert_eq!(abilities, r#"[{"ability":{"name":"limber"}}]"#);
    }

    #[test]
    fn empty_ability_list_round_trips() {
        let state = AbilitiesViewState {
            abilities: vec![],
            ..pikachu()
        };
        assert_eq!(AbilitiesViewState::decode(&encoded(&state)).unwrap(), state);
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = AbilitiesViewState::decode("name=pikachu&image=x&abilities=%7Bnot+json")
            .unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn wrong_json_shape_is_rejected() {
        let err = AbilitiesViewState::decode("name=pikachu&image=x&abilities=%5B%22static%22%5D")
            .unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = AbilitiesViewState::decode("name=%FF&image=x&abilities=%5B%5D").unwrap_err();
        assert!(matches!(err, ParseError::InvalidUtf8));

        let err = AbilitiesViewState::decode("name=a&image=x&abilities=%5B%7B%22ability%22%3A%7B%22name%22%3A%22%C3%22%7D%7D%5D")
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidUtf8));
    }

    #[test]
    fn encoded_replacement_character_is_kept() {
        let state = AbilitiesViewState {
            name: "\u{FFFD}mon".into(),
            ..pikachu()
        };
        assert_eq!(AbilitiesViewState::decode(&encoded(&state)).unwrap(), state);
        assert_eq!(
            AbilitiesViewState::decode("name=%EF%BF%BD&image=&abilities=%5B%5D")
                .unwrap()
                .name,
            "\u{FFFD}"
        );
    }

    #[test]
    fn stray_percent_is_not_an_escape() {
        let state = AbilitiesViewState::decode("name=100%&image=&abilities=%5B%5D").unwrap();
        assert_eq!(state.name, "100%");
    }

    #[test]
    fn missing_parameter_is_named() {
        let err = AbilitiesViewState::decode("name=pikachu&abilities=%5B%5D").unwrap_err();
        assert!(matches!(err, ParseError::MissingParameter("image")));
        let err = AbilitiesViewState::decode("").unwrap_err();
        assert!(matches!(err, ParseError::MissingParameter("name")));
    }
}
