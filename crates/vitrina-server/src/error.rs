use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use vitrina_core::CatalogError;

#[derive(Debug)]
pub enum AppError {
    /// Item no encontrado
    NotFound(String),

    /// Parametros o payload invalidos
    BadRequest(String),

    /// Error interno
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(message) => Self::BadRequest(message),
            err @ CatalogError::InvalidSortField(_) => Self::BadRequest(err.to_string()),
            CatalogError::NotFound(name) => Self::NotFound(name),
            CatalogError::Store(reason) => Self::Internal(reason),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::NotFound(name) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("Item not found: {}", name),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                msg,
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_map_to_http_kinds() {
        assert!(matches!(
            AppError::from(CatalogError::validation("bad")),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(CatalogError::invalid_sort_field("bogus")),
            AppError::BadRequest(msg) if msg == "Invalid sort field: bogus"
        ));
        assert!(matches!(
            AppError::from(CatalogError::not_found("Apple")),
            AppError::NotFound(name) if name == "Apple"
        ));
        assert!(matches!(
            AppError::from(CatalogError::store("down")),
            AppError::Internal(_)
        ));
    }
}
