//! Form state and submission workflow for a scholarship application.
//!
//! The UI owns a [`FormController`] and forwards every edit to it. Submitting
//! runs in three steps so a UI can keep the controller across an `await`
//! point it does not own:
//!
//! 1. [`FormController::begin_submit`] checks consent and snapshots the form.
//! 2. [`PendingSubmission::execute`] uploads the optional document and
//!    inserts the record through a [`SubmissionRepository`].
//! 3. [`FormController::finish_submit`] applies the outcome.
//!
//! [`FormController::submit`] chains the three for callers that can hold
//! `&mut self` across the whole sequence.

mod controller;
mod fields;
mod repository;
mod submission;

pub use controller::{FormController, Phase, SUBMIT_LABEL, SUBMITTING_LABEL};
pub use fields::{parse_leading_int, FormField, FormFields, SelectedFile};
pub use repository::{Clock, RepositoryError, SubmissionRepository, SystemClock};
pub use submission::{
    storage_key, PendingSubmission, SubmitError, CONFIRMATION_REQUIRED_MESSAGE,
    SUBMISSION_FAILED_MESSAGE,
};
