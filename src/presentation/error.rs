// Mapping of domain errors onto HTTP responses
use crate::domain::error::DeckError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

impl DeckError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeckError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DeckError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for DeckError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
