use axum::{http::StatusCode, response::IntoResponse, Json};
use crate::api::models::ErrorResponse;
use crate::errors::SolverError;

impl IntoResponse for SolverError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            SolverError::InvalidThreshold(_) | SolverError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            SolverError::Config(_) => StatusCode::BAD_REQUEST,
            SolverError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            SolverError::Corpus(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SolverError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
