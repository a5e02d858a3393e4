use crate::store::state::AppState;
use crate::store::StoreError;
use actix_web::{web, HttpResponse, Responder};
use common::model::application::ApplicationRecord;
use log::{info, warn};
use serde::Deserialize;

/// Insert bodies may carry a single record or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum InsertPayload {
    Many(Vec<ApplicationRecord>),
    One(ApplicationRecord),
}

impl InsertPayload {
    fn into_records(self) -> Vec<ApplicationRecord> {
        match self {
            InsertPayload::Many(records) => records,
            InsertPayload::One(record) => vec![record],
        }
    }
}

/// Actix web handler for `POST /rest/v1/{table}`.
///
/// # Returns
/// - `201 Created` once every record is stored.
/// - `404 Not Found` for an unknown table, `400 Bad Request` for a body that is
///   not a record or an array of records, `503 Service Unavailable` when the
///   database cannot be written.
pub async fn process(
    table: web::Path<String>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> impl Responder {
    match insert_records(&state, &table, &body).await {
        Ok(ids) => {
            info!("Inserted {} row(s) into {}: {:?}", ids.len(), table, ids);
            HttpResponse::Created().finish()
        }
        Err(e) => {
            warn!("Insert into {} failed: {}", table, e);
            e.to_response()
        }
    }
}

async fn insert_records(
    state: &AppState,
    table: &str,
    body: &[u8],
) -> Result<Vec<String>, StoreError> {
    if !state.database.has_table(table) {
        return Err(StoreError::TableNotFound(table.to_string()));
    }

    let records = serde_json::from_slice::<InsertPayload>(body)
        .map_err(|e| StoreError::BadRequest(e.to_string()))?
        .into_records();
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let database = state.database.clone();
    tokio::task::spawn_blocking(move || database.insert_applications(&records))
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
}
