pub mod async_handler;
pub mod auth;
pub mod complaints;
pub mod navigation;
pub mod office;
pub mod realestate;
pub mod services;
pub mod verification;

use super::super::state::{AppState, UiState};
use super::action::Action;
use super::command::Command;
use crate::domain::FieldErrors;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Navigation(action) => navigation::reduce(state, action),
        Action::Auth(action) => auth::reduce(state, action),
        Action::Office(action) => office::reduce(state, action),
        Action::Verification(action) => verification::reduce(state, action),
        Action::Services(action) => services::reduce(state, action),
        Action::RealEstate(action) => realestate::reduce(state, action),
        Action::Complaints(action) => complaints::reduce(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}

/// Submit a form: on client-side errors record them and send nothing.
fn validated<T>(
    ui: &mut UiState,
    checked: Result<T, FieldErrors>,
    command: impl FnOnce(T) -> Command,
) -> Vec<Command> {
    match checked {
        Ok(value) => {
            ui.form_errors = FieldErrors::new();
            vec![command(value)]
        }
        Err(errors) => {
            log::debug!("form rejected with {} field error(s)", errors.len());
            ui.form_errors = errors;
            Vec::new()
        }
    }
}
