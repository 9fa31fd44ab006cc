use crate::{
    controllers::Navigation,
    models::{pokemon::PokemonDetail, view_state::AbilitiesViewState},
};

pub const NO_RESULTS: &str = "No Pokémon found.";
pub const SEARCH_ERROR: &str = "Error searching for Pokémon.";
pub const LOAD_ERROR: &str = "Error loading the Pokémon's abilities.";

const STYLE: &str = "  <style>\n    body { font-family: ui-sans-serif, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 24px; }\n    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-top: 16px; }\n    .card { border: 1px solid #ccc; border-radius: 10px; padding: 14px; text-align: center; }\n    .card h2 { text-transform: capitalize; }\n    a.button { display: inline-block; padding: 6px 12px; border: 1px solid #888; border-radius: 6px; text-decoration: none; color: inherit; }\n  </style>\n";

fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

fn page(title: &str, body: &str) -> String {
    let mut html = String::new();
    html.push_str(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!("  <title>{}</title>\n", html_escape(title)));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

pub fn message(text: &str) -> String {
    format!("<p class=\"message\">{}</p>\n", html_escape(text))
}

/// Search form followed by `results`, which is already html.
pub fn search_page(query: &str, results: &str) -> String {
    let mut body = String::new();
    body.push_str("<h1>Pokédex</h1>\n");
    body.push_str(&format!(
        "<form method=\"get\" action=\"/\">\n  <input id=\"pokemonInput\" type=\"text\" name=\"q\" value=\"{}\" placeholder=\"Pokémon name\">\n  <button id=\"searchBtn\" type=\"submit\">Search</button>\n</form>\n",
        html_escape(query)
    ));
    body.push_str("<div id=\"results\">\n");
    body.push_str(results);
    body.push_str("</div>\n");
    page("Pokédex", &body)
}

pub fn result_cards(cards: &[(&PokemonDetail, Navigation)]) -> String {
    let mut html = String::from("<div class=\"grid\">\n");
    for (pokemon, show_abilities) in cards {
        html.push_str("<div class=\"card\">\n");
        html.push_str(&format!("  <h2>{}</h2>\n", html_escape(&pokemon.name)));
        if !pokemon.sprite_url.is_empty() {
            html.push_str(&format!(
                "  <img src=\"{}\" alt=\"{}\">\n",
                html_escape(&pokemon.sprite_url),
                html_escape(&pokemon.name)
            ));
        }
        html.push_str(&format!(
            "  <a class=\"button\" href=\"{}\">Show abilities</a>\n",
            html_escape(show_abilities.location())
        ));
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    html
}

pub fn abilities_content(state: &AbilitiesViewState) -> String {
    let mut html = format!("<h2>{}</h2>\n", html_escape(&state.name));
    if !state.image.is_empty() {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            html_escape(&state.image),
            html_escape(&state.name)
        ));
    }
    html.push_str("<h3>Abilities:</h3>\n<ul>\n");
    for ability in &state.abilities {
        html.push_str(&format!("  <li>{}</li>\n", html_escape(ability)));
    }
    html.push_str("</ul>\n");
    html
}

/// `content` is already html.
pub fn abilities_page(content: &str, back: &Navigation) -> String {
    let body = format!(
        "<div id=\"abilities\">\n{}</div>\n<a id=\"backBtn\" class=\"button\" href=\"{}\">Back</a>\n",
        content,
        html_escape(back.location())
    );
    page("Pokémon abilities", &body)
}
