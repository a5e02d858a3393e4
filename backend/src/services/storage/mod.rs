//! # Storage Service Module
//!
//! Object storage for supporting documents, exposed with the same paths as
//! the managed storage API the form was written against.
//!
//! ## Sub-modules:
//! - `upload`: receives a multipart upload and stores it under `{bucket}/{key}`.
//! - `public`: serves a stored object to anyone holding its public URL.

mod public;
mod upload;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all storage endpoints.
const API_PATH: &str = "/storage/v1/object";

/// Configures and returns the Actix `Scope` for storage routes.
///
/// # Registered Routes:
///
/// *   **`POST /{bucket}/{key}`**:
///     - **Handler**: `upload::process`
///     - **Description**: Stores the multipart `file` part under `key`. Keys are
///       never overwritten; a second upload to the same key is rejected with
///       `409 Conflict`. Responds with `{ "Key": "<bucket>/<key>", "ETag": "<md5>" }`.
///
/// *   **`GET /public/{bucket}/{key}`**:
///     - **Handler**: `public::process`
///     - **Description**: Returns the stored object with a content type guessed
///       from its key.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/public/{bucket}/{key}", get().to(public::process))
        .route("/{bucket}/{key}", post().to(upload::process))
}
