//! Update function for the scholarship form component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Field edits are stored as typed, without validation.
//! - A picked file is read into memory; only the latest pick is kept and
//!   submit waits until it has loaded.
//! - Submit checks consent synchronously, then runs the upload and insert on
//!   `spawn_local` and reports back with `Msg::SubmitFinished`.
//! - Failures surface as a blocking alert; the form keeps its values.

use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use log::{error, info};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::form::SelectedFile;

use crate::repository::BrowserClock;

use super::helpers::{reset_file_input, show_alert};
use super::messages::Msg;
use super::state::ScholarshipForm;

/// Central update function for the component.
pub fn update(component: &mut ScholarshipForm, ctx: &Context<ScholarshipForm>, msg: Msg) -> bool {
    match msg {
        Msg::FieldChanged(field, value) => {
            component.controller.set_field(field, value);
            true
        }
        Msg::ConfirmedChanged(confirmed) => {
            component.controller.set_confirmed(confirmed);
            true
        }
        Msg::FileChosen(file) => {
            let name = file.name();
            let generation = component.start_file_pick(name.clone());

            let link = ctx.link().clone();
            spawn_local(async move {
                let blob = Blob::from(file);
                match read_as_bytes(&blob).await {
                    Ok(bytes) => link.send_message(Msg::FileLoaded {
                        generation,
                        file: SelectedFile::new(name, bytes),
                    }),
                    Err(err) => link.send_message(Msg::FileReadFailed {
                        generation,
                        error: err.to_string(),
                    }),
                }
            });
            true
        }
        Msg::FileLoaded { generation, file } => component.finish_file_pick(generation, file),
        Msg::FileReadFailed { generation, error } => {
            if !component.fail_file_pick(generation) {
                return false;
            }
            error!("Could not read selected file: {}", error);
            true
        }
        Msg::Submit => {
            if component.is_reading_file() {
                return false;
            }
            let pending = match component.controller.begin_submit() {
                Ok(pending) => pending,
                Err(err) => {
                    show_alert(err.user_message());
                    return false;
                }
            };

            let repository = component.repository.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = pending
                    .execute(repository.as_ref(), &BrowserClock)
                    .await
                    .map(|_| ());
                link.send_message(Msg::SubmitFinished(result));
            });
            true
        }
        Msg::SubmitFinished(result) => {
            match component.controller.finish_submit(result) {
                Ok(()) => {
                    info!("Scholarship application submitted");
                    component.forget_file_picks();
                    reset_file_input(component.file_input_ref.cast());
                }
                Err(err) => show_alert(err.user_message()),
            }
            true
        }
        Msg::SubmitAnother => {
            component.controller.submit_another();
            true
        }
    }
}
