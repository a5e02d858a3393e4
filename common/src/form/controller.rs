use super::fields::{FormField, FormFields, SelectedFile};
use super::repository::{Clock, SubmissionRepository};
use super::submission::{PendingSubmission, SubmitError};
use log::warn;

/// Submit button text while idle.
pub const SUBMIT_LABEL: &str = "Continue with AHS Today";

/// Submit button text while a submission is in flight.
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Where the form is in its lifecycle.
///
/// `Editing` and `Submitting` both render the form; `Submitting` disables the
/// submit control. `Succeeded` renders the confirmation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

/// Owns the form values, the selected document and the current [`Phase`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    fields: FormFields,
    file: Option<SelectedFile>,
    phase: Phase,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        self.phase == Phase::Succeeded
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Overwrites one text field. Values are not validated here.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.fields.confirmed = confirmed;
    }

    /// Replaces the selected document. Earlier selections are dropped.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    /// Drops the selected document, if any.
    pub fn clear_file(&mut self) {
        self.file = None;
    }

    /// Starts a submission.
    ///
    /// Fails with [`SubmitError::NotConfirmed`] without touching any state
    /// when consent is missing. Otherwise enters [`Phase::Submitting`] and
    /// returns a snapshot to run against the collaborators.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if !self.fields.confirmed {
            warn!("Submit attempted without confirmation");
            return Err(SubmitError::NotConfirmed);
        }
        self.phase = Phase::Submitting;
        Ok(PendingSubmission::new(self.fields.clone(), self.file.clone()))
    }

    /// Applies the outcome of a submission started with [`begin_submit`].
    ///
    /// On success the form is cleared and the confirmation panel shown. On
    /// failure the entered values stay so the user can retry.
    ///
    /// [`begin_submit`]: FormController::begin_submit
    pub fn finish_submit<T>(&mut self, result: Result<T, SubmitError>) -> Result<T, SubmitError> {
        let next = match &result {
            Ok(_) => {
                self.fields = FormFields::default();
                self.file = None;
                Phase::Succeeded
            }
            Err(_) => Phase::Editing,
        };
        self.phase = next;
        result
    }

    /// Runs the full submission while holding the controller.
    pub async fn submit<R, C>(&mut self, repository: &R, clock: &C) -> Result<(), SubmitError>
    where
        R: SubmissionRepository + ?Sized,
        C: Clock + ?Sized,
    {
        let pending = self.begin_submit()?;
        let result = pending.execute(repository, clock).await.map(|_| ());
        self.finish_submit(result)
    }

    /// Leaves the confirmation panel for a blank form.
    pub fn submit_another(&mut self) {
        if self.phase == Phase::Succeeded {
            self.phase = Phase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::repository::RepositoryError;

    fn confirmed_controller() -> FormController {
        let mut controller = FormController::new();
        controller.set_field(FormField::OrganizationName, "Hill School");
        controller.set_confirmed(true);
        controller
    }

    #[test]
    fn starts_blank_in_editing() {
        let controller = FormController::new();
        assert_eq!(controller.phase(), Phase::Editing);
        assert_eq!(controller.fields(), &FormFields::default());
        assert!(controller.selected_file().is_none());
        assert_eq!(controller.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn unconfirmed_begin_leaves_state_alone() {
        let mut controller = FormController::new();
        controller.set_field(FormField::Reason, "need");
        let before = controller.clone();

        assert_eq!(controller.begin_submit(), Err(SubmitError::NotConfirmed));
        assert_eq!(controller, before);
    }

    #[test]
    fn begin_enters_submitting() {
        let mut controller = confirmed_controller();
        let pending = controller.begin_submit().unwrap();

        assert!(controller.is_submitting());
        assert_eq!(controller.submit_label(), SUBMITTING_LABEL);
        assert_eq!(pending.fields().organization_name, "Hill School");
        assert!(pending.file().is_none());
    }

    #[test]
    fn failed_finish_returns_to_editing_with_values() {
        let mut controller = confirmed_controller();
        controller.select_file(SelectedFile::new("a.pdf", vec![1]));
        controller.begin_submit().unwrap();

        let err = SubmitError::Insert(RepositoryError::Status {
            status: 500,
            message: "boom".into(),
        });
        assert!(controller.finish_submit::<()>(Err(err)).is_err());

        assert_eq!(controller.phase(), Phase::Editing);
        assert_eq!(controller.fields().organization_name, "Hill School");
        assert!(controller.fields().confirmed);
        assert!(controller.selected_file().is_some());
    }

    #[test]
    fn successful_finish_clears_and_submit_another_reopens() {
        let mut controller = confirmed_controller();
        controller.select_file(SelectedFile::new("a.pdf", vec![1]));
        controller.begin_submit().unwrap();
        controller.finish_submit(Ok(())).unwrap();

        assert!(controller.is_succeeded());
        assert_eq!(controller.fields(), &FormFields::default());
        assert!(controller.selected_file().is_none());

        controller.submit_another();
        assert_eq!(controller, FormController::new());
    }

    #[test]
    fn clear_file_drops_selection_only() {
        let mut controller = confirmed_controller();
        controller.select_file(SelectedFile::new("a.pdf", vec![1]));
        controller.clear_file();

        assert!(controller.selected_file().is_none());
        assert_eq!(controller.fields().organization_name, "Hill School");
        let pending = controller.begin_submit().unwrap();
        assert!(pending.file().is_none());
    }

    #[test]
    fn submit_another_is_ignored_outside_success() {
        let mut controller = confirmed_controller();
        controller.begin_submit().unwrap();
        controller.submit_another();
        assert!(controller.is_submitting());
    }
}
