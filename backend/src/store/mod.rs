//! Persistence for the two collaborator services: a filesystem object store
//! standing in for the document bucket, and SQLite for application rows.
//!
//! - `objects`: bucket/key validation and create-only object writes.
//! - `database`: schema bootstrap and application inserts.
//! - `state`: the shared `AppState` handed to every handler.

pub mod database;
pub mod objects;
pub mod state;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use common::requests::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("The resource already exists")]
    AlreadyExists,

    #[error("Object not found")]
    ObjectNotFound,

    #[error("Payload exceeds the maximum allowed size of {0} bytes")]
    TooLarge(usize),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::BucketNotFound(_)
            | StoreError::TableNotFound(_)
            | StoreError::ObjectNotFound => StatusCode::NOT_FOUND,
            StoreError::InvalidKey(_) | StoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            StoreError::AlreadyExists => StatusCode::CONFLICT,
            StoreError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            StoreError::Io(_) | StoreError::Database(_) | StoreError::Task(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }

    /// JSON error response with the matching status.
    pub fn to_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorResponse {
            message: self.to_string(),
        })
    }
}
