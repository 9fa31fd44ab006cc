mod abilities_page;
mod search_page;

use actix_web::web::{self, ServiceConfig};

use crate::{
    controllers::{ABILITIES_PAGE, SEARCH_PAGE},
    source::PokemonSource,
};

pub fn configure<S: PokemonSource + 'static>(cfg: &mut ServiceConfig) {
    cfg.route(SEARCH_PAGE, web::get().to(search_page::search_page::<S>))
        .route(ABILITIES_PAGE, web::get().to(abilities_page::abilities_page));
}
