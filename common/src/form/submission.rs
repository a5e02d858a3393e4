use super::fields::{parse_leading_int, FormFields, SelectedFile};
use super::repository::{Clock, RepositoryError, SubmissionRepository};
use crate::model::application::{ApplicationRecord, APPLICATIONS_TABLE, DOCUMENTS_BUCKET};
use log::{error, info};

/// Shown when the consent checkbox is not ticked.
pub const CONFIRMATION_REQUIRED_MESSAGE: &str =
    "Please confirm that the information provided is true.";

/// Shown for every failure after the submission has started.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "There was an error submitting your application. Please try again.";

/// Why a submit did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission not confirmed")]
    NotConfirmed,

    #[error("failed to insert application: {0}")]
    Insert(#[source] RepositoryError),
}

impl SubmitError {
    /// The blocking message the UI shows for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::NotConfirmed => CONFIRMATION_REQUIRED_MESSAGE,
            SubmitError::Insert(_) => SUBMISSION_FAILED_MESSAGE,
        }
    }
}

/// Storage key for a document: `<millis>.<extension>`.
pub fn storage_key(timestamp_ms: u64, file: &SelectedFile) -> String {
    format!("{}.{}", timestamp_ms, file.extension())
}

/// Snapshot of a confirmed form, taken when the submit starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    fields: FormFields,
    file: Option<SelectedFile>,
}

impl PendingSubmission {
    pub(crate) fn new(fields: FormFields, file: Option<SelectedFile>) -> Self {
        Self { fields, file }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Uploads the optional document, then inserts one record.
    ///
    /// A failed upload is logged and the record is inserted without a
    /// document URL. A failed insert fails the whole submission.
    pub async fn execute<R, C>(
        &self,
        repository: &R,
        clock: &C,
    ) -> Result<ApplicationRecord, SubmitError>
    where
        R: SubmissionRepository + ?Sized,
        C: Clock + ?Sized,
    {
        let document_url = match &self.file {
            Some(file) => upload_document(repository, clock, file).await,
            None => None,
        };

        let record = self.to_record(document_url);
        repository
            .insert(APPLICATIONS_TABLE, &record)
            .await
            .map_err(|e| {
                error!("Error submitting form: {}", e);
                SubmitError::Insert(e)
            })?;

        info!(
            "Application from {} recorded (document attached: {})",
            record.organization_name,
            record.document_url.is_some()
        );
        Ok(record)
    }

    fn to_record(&self, document_url: Option<String>) -> ApplicationRecord {
        let fields = &self.fields;
        ApplicationRecord {
            organization_name: fields.organization_name.clone(),
            contact_person: fields.contact_person.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            num_students: parse_leading_int(&fields.num_students),
            grade_level: fields.grade_level.clone(),
            reason: fields.reason.clone(),
            document_url,
            confirmed: fields.confirmed,
        }
    }
}

async fn upload_document<R, C>(repository: &R, clock: &C, file: &SelectedFile) -> Option<String>
where
    R: SubmissionRepository + ?Sized,
    C: Clock + ?Sized,
{
    let key = storage_key(clock.now_millis(), file);
    match repository.upload(DOCUMENTS_BUCKET, &key, &file.content).await {
        Ok(()) => Some(repository.public_url(DOCUMENTS_BUCKET, &key)),
        Err(e) => {
            error!("File upload error: {}", e);
            None
        }
    }
}
