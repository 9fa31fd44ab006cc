use actix_web::{
    web::{self, Data},
    HttpResponse,
};
use serde::Deserialize;

use crate::{
    controllers::{SearchController, SearchOutcome},
    macros::{resp_200_Ok_html, resp_502_BadGateway_html},
    source::PokemonSource,
    views,
};

#[derive(Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// `GET /` shows the form; `GET /?q=...` also runs the search.
pub async fn search_page<S: PokemonSource + 'static>(
    params: web::Query<SearchParams>,
    controller: Data<SearchController<S>>,
) -> HttpResponse {
    let Some(query) = params.into_inner().q else {
        return resp_200_Ok_html!(views::search_page("", ""));
    };

    match controller.search(&query).await {
        SearchOutcome::Results(details) => {
            let cards = details
                .iter()
                .map(|pokemon| {
                    let show_abilities = controller.request_abilities(
                        &pokemon.name,
                        &pokemon.sprite_url,
                        &pokemon.abilities,
                    );
                    (pokemon, show_abilities)
                })
                .collect::<Vec<_>>();
            resp_200_Ok_html!(views::search_page(&query, &views::result_cards(&cards)))
        }
        SearchOutcome::NoResults => {
            resp_200_Ok_html!(views::search_page(&query, &views::message(views::NO_RESULTS)))
        }
        SearchOutcome::Failed => resp_502_BadGateway_html!(views::search_page(
            &query,
            &views::message(views::SEARCH_ERROR)
        )),
    }
}
