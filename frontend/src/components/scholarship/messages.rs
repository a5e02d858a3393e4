use common::form::{FormField, SelectedFile, SubmitError};

#[derive(Clone)]
pub enum Msg {
    FieldChanged(FormField, String),
    ConfirmedChanged(bool),
    /// A file was picked; its bytes are read asynchronously.
    FileChosen(web_sys::File),
    /// Bytes of the pick identified by `generation` are available.
    FileLoaded { generation: u64, file: SelectedFile },
    FileReadFailed { generation: u64, error: String },
    Submit,
    SubmitFinished(Result<(), SubmitError>),
    SubmitAnother,
}
