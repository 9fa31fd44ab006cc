use std::fmt::{Debug, Display};

use actix_web::{
    body::BoxBody, http::header::ContentType, http::StatusCode, HttpRequest, HttpResponse,
    HttpResponseBuilder, ResponseError,
};

use crate::views;

/// Extractor failures rendered as the search page with its generic error
/// message. The underlying error only reaches the log.
#[derive(Debug)]
pub struct PageError {
    status_code: StatusCode,
}

impl Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageError")
            .field("status_code", &self.status_code)
            .finish()
    }
}

impl From<&dyn actix_web::ResponseError> for PageError {
    fn from(value: &dyn actix_web::ResponseError) -> Self {
        Self {
            status_code: value.status_code(),
        }
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponseBuilder::new(self.status_code)
            .insert_header(ContentType::html())
            .body(views::search_page("", &views::message(views::SEARCH_ERROR)))
    }
}

pub fn query_config_error_handler<Err: actix_web::ResponseError + 'static>(
    err: Err,
    req: &HttpRequest,
) -> actix_web::Error {
    tracing::error!("Rejected query '{}': {}", req.query_string(), err);
    PageError::from(&err as &dyn actix_web::ResponseError).into()
}
