//! HTTP implementation of the form's collaborators.
//!
//! Talks to the storage and REST endpoints served by the backend:
//! - `POST {base}/storage/v1/object/{bucket}/{key}` with a multipart `file` part.
//! - `{base}/storage/v1/object/public/{bucket}/{key}` as the public URL.
//! - `POST {base}/rest/v1/{table}` with a JSON array holding one record.
//!
//! Object keys are percent-encoded as a single path segment.

use async_trait::async_trait;
use common::form::{Clock, RepositoryError, SubmissionRepository};
use common::model::application::ApplicationRecord;
use common::requests::{ErrorResponse, UploadResponse};
use gloo_net::http::{Request, Response};
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::FormData;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRepository {
    base_url: String,
}

impl HttpRepository {
    /// Uses `base_url` when given, otherwise the origin of the current page.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(page_origin);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            bucket,
            urlencoding::encode(key)
        )
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

fn js_error(err: JsValue) -> RepositoryError {
    RepositoryError::Transport(format!("{:?}", err))
}

fn transport(err: gloo_net::Error) -> RepositoryError {
    RepositoryError::Transport(err.to_string())
}

/// Turns a non-2xx response into `RepositoryError::Status`, preferring the
/// backend's JSON `message` over the status text.
async fn ensure_success(response: &Response) -> Result<(), RepositoryError> {
    if response.ok() {
        return Ok(());
    }
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => response.status_text(),
    };
    Err(RepositoryError::Status {
        status: response.status(),
        message,
    })
}

#[async_trait(?Send)]
impl SubmissionRepository for HttpRepository {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        content: &[u8],
    ) -> Result<(), RepositoryError> {
        let blob = gloo_file::Blob::new(content);
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", blob.as_ref(), key)
            .map_err(js_error)?;

        let response = Request::post(&self.object_url(bucket, key))
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_success(&response).await?;

        let stored = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| RepositoryError::Decode(e.to_string()))?;
        debug!("Uploaded {} (etag {})", stored.key, stored.etag);
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            bucket,
            urlencoding::encode(key)
        )
    }

    async fn insert(
        &self,
        table: &str,
        record: &ApplicationRecord,
    ) -> Result<(), RepositoryError> {
        let response = Request::post(&self.table_url(table))
            .json(&[record])
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_success(&response).await
    }
}

/// Millisecond clock backed by `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
