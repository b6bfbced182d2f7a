use super::super::super::AdminApp;
use super::super::action::Outcome;
use super::super::requests::{Operation, RequestKey};
use super::spawn_request;
use crate::domain::{RecordId, VerificationEdit, VerificationForm};

pub fn create(app: &mut AdminApp, form: VerificationForm) {
    spawn_request(
        app,
        RequestKey::new(Operation::CreateVerification, None),
        move |api| async move { api.create_verification(&form).await },
        Outcome::VerificationCreated,
    );
}

pub fn update(app: &mut AdminApp, edit: VerificationEdit) {
    let id = edit.id;
    spawn_request(
        app,
        RequestKey::new(Operation::UpdateVerification, Some(id)),
        move |api| async move { api.update_verification(&edit).await },
        move |result| Outcome::VerificationUpdated { id, result },
    );
}

pub fn fetch_page(app: &mut AdminApp, page: u32) {
    spawn_request(
        app,
        RequestKey::new(Operation::FetchVerifications, None),
        move |api| async move { api.list_verifications(page).await },
        Outcome::VerificationsLoaded,
    );
}

pub fn delete(app: &mut AdminApp, id: RecordId) {
    spawn_request(
        app,
        RequestKey::new(Operation::DeleteVerification, Some(id)),
        move |api| async move { api.delete_verification(id).await },
        move |result| Outcome::VerificationDeleted { id, result },
    );
}
