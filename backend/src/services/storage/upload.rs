use crate::store::state::AppState;
use crate::store::StoreError;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::requests::UploadResponse;
use futures_util::StreamExt;
use log::{info, warn};

/// HTTP handler wrapper for `POST /storage/v1/object/{bucket}/{key}`.
///
/// - On success: `200 OK` with an `UploadResponse` body.
/// - On failure: the status of the `StoreError` with a JSON message.
pub async fn process(
    path: web::Path<(String, String)>,
    payload: Multipart,
    state: web::Data<AppState>,
) -> impl Responder {
    let (bucket, key) = path.into_inner();
    match upload_object(&state, &bucket, &key, payload).await {
        Ok(etag) => {
            info!("Stored object {}/{}", bucket, key);
            HttpResponse::Ok().json(UploadResponse {
                key: format!("{}/{}", bucket, key),
                etag,
            })
        }
        Err(e) => {
            warn!("Upload of {}/{} rejected: {}", bucket, key, e);
            e.to_response()
        }
    }
}

/// Streams the first file part of `payload` into the object store.
///
/// The part is taken from the field named `file`, or failing that from the
/// first field carrying a filename. Other fields are drained and ignored.
pub async fn upload_object(
    state: &AppState,
    bucket: &str,
    key: &str,
    mut payload: Multipart,
) -> Result<String, StoreError> {
    // Reject bad bucket/key before reading the body.
    state.objects.object_path(bucket, key)?;

    let mut etag: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| StoreError::BadRequest(e.to_string()))?;
        let is_file = field.content_disposition().is_some_and(|cd| {
            cd.get_name() == Some("file") || cd.get_filename().is_some()
        });

        if !is_file || etag.is_some() {
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| StoreError::BadRequest(e.to_string()))?;
            }
            continue;
        }

        let mut writer = state.objects.create(bucket, key)?;
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| StoreError::BadRequest(e.to_string()))?;
            writer.write_chunk(&chunk)?;
        }
        etag = Some(writer.finish()?);
    }

    etag.ok_or_else(|| StoreError::BadRequest("Missing file".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::configure_routes;
    use crate::store::database::Database;
    use crate::store::objects::ObjectStore;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::application::DOCUMENTS_BUCKET;
    use common::requests::ErrorResponse;

    const BOUNDARY: &str = "----scholarship-test-boundary";

    fn state(dir: &tempfile::TempDir, max_bytes: usize) -> AppState {
        let state = AppState {
            objects: ObjectStore::new(dir.path().join("storage"), max_bytes),
            database: Database::new(dir.path().join("db.sqlite")),
        };
        state.objects.init().unwrap();
        state.database.init().unwrap();
        state
    }

    fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn upload_request(uri: &str, body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn upload_then_fetch_public_object() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(&dir, 1024)))
                .service(configure_routes()),
        )
        .await;

        let uri = format!("/storage/v1/object/{}/1700000000000.pdf", DOCUMENTS_BUCKET);
        let req = upload_request(&uri, multipart_body("file", "proof.pdf", b"%PDF-1.4 demo"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: UploadResponse = test::read_body_json(resp).await;
        assert_eq!(body.key, format!("{}/1700000000000.pdf", DOCUMENTS_BUCKET));
        assert_eq!(body.etag, format!("{:x}", md5::compute(b"%PDF-1.4 demo")));

        let req = test::TestRequest::get()
            .uri(&format!(
                "/storage/v1/object/public/{}/1700000000000.pdf",
                DOCUMENTS_BUCKET
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/pdf"
        );
        let bytes = test::read_body(resp).await;
        assert_eq!(&bytes[..], b"%PDF-1.4 demo");
    }

    #[actix_web::test]
    async fn duplicate_key_is_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(&dir, 1024)))
                .service(configure_routes()),
        )
        .await;
        let uri = format!("/storage/v1/object/{}/42.png", DOCUMENTS_BUCKET);

        let first = test::call_service(
            &app,
            upload_request(&uri, multipart_body("file", "a.png", b"one")).to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = test::call_service(
            &app,
            upload_request(&uri, multipart_body("file", "b.png", b"two")).to_request(),
        )
        .await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let body: ErrorResponse = test::read_body_json(second).await;
        assert_eq!(body.message, "The resource already exists");
    }

    #[actix_web::test]
    async fn rejects_unknown_bucket_bad_key_and_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(&dir, 8)))
                .service(configure_routes()),
        )
        .await;

        let resp = test::call_service(
            &app,
            upload_request(
                "/storage/v1/object/avatars/1.png",
                multipart_body("file", "1.png", b"x"),
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(
            &app,
            upload_request(
                &format!("/storage/v1/object/{}/.env", DOCUMENTS_BUCKET),
                multipart_body("file", ".env", b"x"),
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(
            &app,
            upload_request(
                &format!("/storage/v1/object/{}/big.bin", DOCUMENTS_BUCKET),
                multipart_body("file", "big.bin", b"0123456789"),
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let req = test::TestRequest::get()
            .uri(&format!("/storage/v1/object/public/{}/big.bin", DOCUMENTS_BUCKET))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn missing_file_part_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(&dir, 1024)))
                .service(configure_routes()),
        )
        .await;

        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"cacheControl\"\r\n\r\n");
        body.extend_from_slice(b"3600");
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        let resp = test::call_service(
            &app,
            upload_request(&format!("/storage/v1/object/{}/7.pdf", DOCUMENTS_BUCKET), body)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
