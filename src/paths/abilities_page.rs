use actix_web::{web::Data, HttpRequest, HttpResponse};

use crate::{
    controllers::{AbilitiesController, AbilitiesOutcome},
    macros::{resp_200_Ok_html, resp_400_BadRequest_html},
    views,
};

/// `GET /abilities?name=...&image=...&abilities=...`
pub async fn abilities_page(
    req: HttpRequest,
    controller: Data<AbilitiesController>,
) -> HttpResponse {
    let back = controller.go_back();

    match controller.load(req.query_string()) {
        AbilitiesOutcome::Rendered(state) => resp_200_Ok_html!(views::abilities_page(
            &views::abilities_content(&state),
            &back
        )),
        AbilitiesOutcome::Errored => resp_400_BadRequest_html!(views::abilities_page(
            &views::message(views::LOAD_ERROR),
            &back
        )),
    }
}
