use super::super::super::state::AppState;
use super::super::action::VerificationAction;
use super::super::command::Command;
use super::super::pagination::{Pagination, page_from_link};
use super::validated;
use crate::domain::{ErrorPayload, Page, RecordId, Verification, VerificationEdit};

pub fn reduce(state: &mut AppState, action: VerificationAction) -> Vec<Command> {
    let pagination = state.verification.pagination;
    match action {
        VerificationAction::Fetch { page } => vec![Command::FetchVerifications {
            page: page.max(1),
        }],
        VerificationAction::GoToPage(page) => fetch_page(pagination.accept(page), page),
        VerificationAction::NextPage => {
            fetch_page(pagination.next(), pagination.current_page.saturating_add(1))
        }
        VerificationAction::PreviousPage => {
            fetch_page(pagination.previous(), pagination.current_page.saturating_sub(1))
        }
        VerificationAction::FollowLink(url) => match page_from_link(&url) {
            Some(page) => fetch_page(pagination.accept(page), page),
            None => {
                log::debug!("paginator link without a page number: {url}");
                Vec::new()
            }
        },
        VerificationAction::Create(form) => validated(&mut state.ui, form.validate(), |()| {
            Command::CreateVerification(form)
        }),
        VerificationAction::BeginEdit(id) => {
            state.verification.editing = state
                .verification
                .items
                .get_by_id(id)
                .and_then(VerificationEdit::from_record);
            state.ui.clear_messages();
            Vec::new()
        }
        VerificationAction::UpdateDraft(edit) => {
            if state.verification.editing.is_some() {
                state.verification.editing = Some(edit);
            }
            Vec::new()
        }
        VerificationAction::CancelEdit => {
            state.verification.editing = None;
            state.ui.clear_messages();
            Vec::new()
        }
        VerificationAction::SubmitEdit => match state.verification.editing.clone() {
            Some(edit) => validated(&mut state.ui, edit.validate(), |()| {
                Command::UpdateVerification(edit)
            }),
            None => Vec::new(),
        },
        VerificationAction::Delete(id) => vec![Command::DeleteVerification { id }],
    }
}

fn fetch_page(accepted: Option<u32>, requested: u32) -> Vec<Command> {
    match accepted {
        Some(page) => vec![Command::FetchVerifications { page }],
        None => {
            log::debug!("verification page {requested} is out of range");
            Vec::new()
        }
    }
}

pub(super) fn created(
    state: &mut AppState,
    result: Result<Option<Verification>, ErrorPayload>,
) -> Vec<Command> {
    if let Some(created) = state.verification.request.settle(result) {
        if let Some(verification) = created {
            state.verification.items.push(verification);
        }
        state.ui.success = Some("Verification request sent successfully.".to_string());
    }
    Vec::new()
}

pub(super) fn updated(
    state: &mut AppState,
    id: RecordId,
    result: Result<Option<Verification>, ErrorPayload>,
) -> Vec<Command> {
    let Some(updated) = state.verification.request.settle(result) else {
        return Vec::new();
    };
    if let Some(verification) = updated
        && !state.verification.items.replace_in_place(verification)
    {
        log::debug!("updated verification {id} is not on the current page");
    }
    if state
        .verification
        .editing
        .as_ref()
        .is_some_and(|edit| edit.id == id)
    {
        state.verification.editing = None;
    }
    state.ui.success = Some("Verification updated successfully.".to_string());
    vec![Command::FetchVerifications {
        page: state.verification.pagination.current_page,
    }]
}

pub(super) fn loaded(
    state: &mut AppState,
    result: Result<Page<Verification>, ErrorPayload>,
) -> Vec<Command> {
    if let Some(page) = state.verification.request.settle(result) {
        state.verification.pagination = Pagination::from_page(&page);
        state.verification.items.replace_all(page.data);
    }
    Vec::new()
}

pub(super) fn deleted(
    state: &mut AppState,
    id: RecordId,
    result: Result<(), ErrorPayload>,
) -> Vec<Command> {
    if state.verification.request.settle(result).is_none() {
        return Vec::new();
    }
    state.verification.items.remove_by_id(id);
    vec![Command::FetchVerifications {
        page: state.verification.pagination.current_page,
    }]
}
