//! Error types for the record store and its HTTP surface.
//!
//! | Error | HTTP status |
//! |-------|-------------|
//! | `ApiError::Validation` | 400 |
//! | `ApiError::NotFound`, `ApiError::InvalidId` | 404 |
//! | `ApiError::Persistence` | 500 |

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use diesel::r2d2::PoolError;
use serde_json::json;
use thiserror::Error;

/// Failures raised by the persistence gateway.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("database error: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("database task did not complete: {0}")]
    Blocking(#[from] BlockingError),
}

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// The path segment is not a record identifier at all.
    #[error("no record with identifier `{0}`")]
    InvalidId(String),

    #[error(transparent)]
    Persistence(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::NotFound { entity, id },
            other => ApiError::Persistence(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::InvalidId(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{self}");
        }
        HttpResponse::build(status).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_becomes_client_not_found() {
        let err: ApiError = StoreError::NotFound {
            entity: "Patient",
            id: 42,
        }
        .into();
        assert!(matches!(err, ApiError::NotFound { entity: "Patient", id: 42 }));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Patient 42 not found");
    }

    #[test]
    fn query_failures_are_server_errors() {
        let err: ApiError = StoreError::Query(diesel::result::Error::RollbackTransaction).into();
        assert!(matches!(err, ApiError::Persistence(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_is_a_bad_request() {
        let err = ApiError::Validation("missing field `email`".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }
}
