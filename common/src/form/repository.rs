use crate::model::application::ApplicationRecord;
use async_trait::async_trait;
use std::time::{SystemTime, UNIX_EPOCH};

/// Failure reported by a storage or data-store collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request rejected with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// The two remote services a submission depends on.
///
/// Futures are not required to be `Send` so browser implementations, whose
/// futures hold JS handles, can implement the trait directly.
#[async_trait(?Send)]
pub trait SubmissionRepository {
    /// Stores `content` under `key` in `bucket`.
    async fn upload(&self, bucket: &str, key: &str, content: &[u8])
        -> Result<(), RepositoryError>;

    /// Public URL of an object that was uploaded successfully.
    fn public_url(&self, bucket: &str, key: &str) -> String;

    /// Inserts exactly one record into `table`.
    async fn insert(&self, table: &str, record: &ApplicationRecord)
        -> Result<(), RepositoryError>;
}

/// Source of the millisecond timestamp used to name uploaded documents.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall clock for native targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_reports_epoch_millis() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
