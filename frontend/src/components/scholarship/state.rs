//! Component state for the scholarship form.

use std::rc::Rc;
use yew::NodeRef;

use common::form::{FormController, SelectedFile};

use crate::repository::HttpRepository;

/// State container for the `ScholarshipForm` component.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct ScholarshipForm {
    /// Field values, selected document and submission phase.
    pub controller: FormController,

    /// Collaborator client shared with in-flight submissions.
    pub repository: Rc<HttpRepository>,

    /// Incremented on every pick so a slow read of an older file cannot
    /// replace a newer selection.
    pub file_generation: u64,

    /// Name of a picked file whose bytes are still being read.
    pub pending_file_name: Option<String>,

    /// Reference to the hidden `<input type="file">`.
    pub file_input_ref: NodeRef,
}

impl ScholarshipForm {
    pub fn new(api_base: Option<String>) -> Self {
        Self {
            controller: FormController::new(),
            repository: Rc::new(HttpRepository::new(api_base)),
            file_generation: 0,
            pending_file_name: None,
            file_input_ref: NodeRef::default(),
        }
    }

    /// File name shown in the upload area, if any.
    pub fn file_label(&self) -> Option<&str> {
        self.pending_file_name
            .as_deref()
            .or_else(|| self.controller.selected_file().map(|f| f.name.as_str()))
    }

    /// Whether a picked file is still being read.
    pub fn is_reading_file(&self) -> bool {
        self.pending_file_name.is_some()
    }

    /// The submit control is disabled while a submission is in flight or a
    /// picked file has not finished loading.
    pub fn submit_disabled(&self) -> bool {
        self.controller.is_submitting() || self.is_reading_file()
    }

    /// Records a new pick and returns its generation. The previous selection
    /// is dropped at once, before the new bytes arrive.
    pub fn start_file_pick(&mut self, name: String) -> u64 {
        self.file_generation += 1;
        self.pending_file_name = Some(name);
        self.controller.clear_file();
        self.file_generation
    }

    /// Attaches loaded bytes if they belong to the latest pick.
    pub fn finish_file_pick(&mut self, generation: u64, file: SelectedFile) -> bool {
        if generation != self.file_generation {
            return false;
        }
        self.pending_file_name = None;
        self.controller.select_file(file);
        true
    }

    /// Abandons the latest pick after a failed read. Nothing stays attached.
    pub fn fail_file_pick(&mut self, generation: u64) -> bool {
        if generation != self.file_generation {
            return false;
        }
        self.pending_file_name = None;
        self.controller.clear_file();
        true
    }

    /// Invalidates reads started before the form was reset.
    pub fn forget_file_picks(&mut self) {
        self.file_generation += 1;
        self.pending_file_name = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ScholarshipForm {
        ScholarshipForm::new(Some("http://localhost:8080".into()))
    }

    #[test]
    fn new_pick_drops_previous_file_immediately() {
        let mut form = form();
        let first = form.start_file_pick("a.pdf".into());
        assert!(form.finish_file_pick(first, SelectedFile::new("a.pdf", vec![1])));

        form.start_file_pick("b.png".into());

        assert!(form.controller.selected_file().is_none());
        assert_eq!(form.file_label(), Some("b.png"));
        assert!(form.submit_disabled());
    }

    #[test]
    fn stale_read_is_ignored() {
        let mut form = form();
        let first = form.start_file_pick("a.pdf".into());
        let second = form.start_file_pick("b.png".into());

        assert!(!form.finish_file_pick(first, SelectedFile::new("a.pdf", vec![1])));
        assert!(form.controller.selected_file().is_none());

        assert!(form.finish_file_pick(second, SelectedFile::new("b.png", vec![2])));
        assert_eq!(form.controller.selected_file().unwrap().name, "b.png");
        assert!(!form.submit_disabled());
    }

    #[test]
    fn failed_read_leaves_nothing_attached() {
        let mut form = form();
        let first = form.start_file_pick("a.pdf".into());
        form.finish_file_pick(first, SelectedFile::new("a.pdf", vec![1]));

        let second = form.start_file_pick("b.png".into());
        assert!(form.fail_file_pick(second));

        assert!(form.controller.selected_file().is_none());
        assert_eq!(form.file_label(), None);
        assert!(!form.is_reading_file());
    }

    #[test]
    fn reads_started_before_reset_are_dropped() {
        let mut form = form();
        let pick = form.start_file_pick("late.pdf".into());

        form.forget_file_picks();

        assert!(!form.finish_file_pick(pick, SelectedFile::new("late.pdf", vec![3])));
        assert!(form.controller.selected_file().is_none());
        assert_eq!(form.file_label(), None);
    }
}
