use actix_web::{
    middleware::{Compress, Logger, NormalizePath, TrailingSlash},
    web::{self, Data, QueryConfig},
    App, HttpServer,
};

use config::Config;
use controllers::{AbilitiesController, SearchController};
use source::PokeApi;

mod config;
mod controllers;
mod error;
mod logging;
mod macros;
mod models;
mod page_error;
mod paths;
mod req_util;
mod source;
#[cfg(test)]
mod testing;
mod views;

async fn default_handler_debug(req: actix_web::HttpRequest) -> impl actix_web::Responder {
    actix_web::HttpResponse::NotFound().body(format!("{:#?}", req))
}
async fn default_handler() -> impl actix_web::Responder {
    macros::resp_404_NotFound!()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    logging::init();

    let config = Config::from_env();
    tracing::info!(
        "Debug is {}",
        if config.is_debug_on { "enabled" } else { "disabled" }
    );
    tracing::info!(
        "Using PokeAPI at {} (index limit {})",
        config.pokeapi_url,
        config.index_limit
    );

    let req_client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36")
        .build()
        .map_err(std::io::Error::other)?;

    let source = PokeApi::new(req_client, &config);
    tracing::info!("Searching the index at {}", source.index_url());

    let bind_address = config.address.clone();
    tracing::info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        let search = SearchController::new(source.clone());

        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Logger::default())
            .wrap(Compress::default())
            .app_data(QueryConfig::default().error_handler(page_error::query_config_error_handler))
            .app_data(Data::new(search))
            .app_data(Data::new(AbilitiesController::new()))
            .configure(paths::configure::<PokeApi>)
            .default_service(if config.is_debug_on {
                web::to(default_handler_debug)
            } else {
                web::to(default_handler)
            })
    })
    .bind(bind_address)?
    .run()
    .await
}
