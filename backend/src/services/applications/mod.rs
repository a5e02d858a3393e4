//! # Applications Service Module
//!
//! Row inserts for submitted scholarship applications, exposed on the same
//! path shape as the managed REST data API (`/rest/v1/{table}`).

mod insert;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/rest/v1";

/// Configures and returns the Actix `Scope` for table routes.
///
/// *   **`POST /{table}`**: inserts one record or an array of records into
///     `table`. Only `scholarship_applications` exists. Responds `201 Created`
///     with an empty body.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{table}", post().to(insert::process))
}
