use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde::Serialize;

/// Uniform response envelope for the backoffice and registry endpoints.
/// The scrape and login endpoints keep their own flat wire shapes.
#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T>
where
    T: Serialize,
{
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: Serialize,
{
    fn default() -> Self {
        Self {
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn envelope(self, status: &str, code: StatusCode, message: String) -> JsonResponse<T> {
        JsonResponse {
            status: status.to_string(),
            message,
            code: code.as_u16() as u32,
            item: self.item,
            list: self.list,
        }
    }

    pub fn ok(self, message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(self.envelope("OK", StatusCode::OK, message.into()))
    }

    fn error(self, code: StatusCode, message: impl Into<String>, fallback: &str) -> Error {
        let message = message.into();
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };

        let response =
            HttpResponse::build(code).json(self.envelope("Error", code, message.clone()));
        InternalError::from_response(message, response).into()
    }

    pub fn bad_request(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::BAD_REQUEST, message, "Bad request")
    }

    pub fn form_error(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::BAD_REQUEST, message, "Validation error")
    }

    pub fn not_found(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::NOT_FOUND, message, "Object not found")
    }

    pub fn internal_server_error(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message, "Internal error")
    }
}
