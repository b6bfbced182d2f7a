use super::super::super::state::AppState;
use super::super::action::OfficeAction;
use super::super::command::Command;
use super::validated;
use crate::domain::{ErrorPayload, OfficeRequest, RecordId};

pub fn reduce(state: &mut AppState, action: OfficeAction) -> Vec<Command> {
    match action {
        OfficeAction::DeleteOffice(id) => vec![Command::DeleteOffice { id }],
        OfficeAction::FetchRequests => vec![Command::FetchOfficeRequests],
        OfficeAction::SendRequest(form) => validated(&mut state.ui, form.validate(), |()| {
            Command::SendOfficeRequest(form)
        }),
        OfficeAction::DeleteRequest(id) => vec![Command::DeleteOfficeRequest { id }],
    }
}

pub(super) fn requests_loaded(
    state: &mut AppState,
    result: Result<Vec<OfficeRequest>, ErrorPayload>,
) -> Vec<Command> {
    if let Some(requests) = state.office.request.settle(result) {
        state.office.requests.replace_all(requests);
    }
    Vec::new()
}

pub(super) fn request_sent(
    state: &mut AppState,
    result: Result<OfficeRequest, ErrorPayload>,
) -> Vec<Command> {
    if let Some(request) = state.office.request.settle(result) {
        state.office.requests.push(request);
        state.ui.success = Some("Request sent successfully.".to_string());
    }
    Vec::new()
}

pub(super) fn request_deleted(
    state: &mut AppState,
    id: RecordId,
    result: Result<(), ErrorPayload>,
) -> Vec<Command> {
    if state.office.request.settle(result).is_some() {
        state.office.requests.remove_by_id(id);
    }
    Vec::new()
}
