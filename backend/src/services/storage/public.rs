use crate::store::state::AppState;
use crate::store::StoreError;
use actix_files::NamedFile;
use actix_web::{web, HttpRequest, HttpResponse};

/// Actix web handler for `GET /storage/v1/object/public/{bucket}/{key}`.
///
/// # Returns
/// - `200 OK` with the object bytes and a content type guessed from the key.
/// - `404 Not Found` for an unknown bucket or object, `400` for a malformed key.
pub async fn process(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let (bucket, key) = path.into_inner();
    match open_object(&state, &bucket, &key).await {
        Ok(file) => file.into_response(&req),
        Err(e) => e.to_response(),
    }
}

async fn open_object(state: &AppState, bucket: &str, key: &str) -> Result<NamedFile, StoreError> {
    let path = state.objects.existing(bucket, key)?;
    Ok(NamedFile::open_async(path).await?)
}
