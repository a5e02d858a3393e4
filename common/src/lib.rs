//! Shared types and form logic for the scholarship application workspace.
//!
//! - `model`: the persisted application record and its fixed collaborator names.
//! - `form`: the form controller state machine and the submission workflow.
//! - `requests`: small payloads exchanged between the frontend and the backend.

pub mod form;
pub mod model;
pub mod requests;
