use super::super::super::AdminApp;
use super::super::action::Outcome;
use super::super::requests::{Operation, RequestKey};
use super::spawn_request;
use crate::domain::{OfficeRequestForm, RecordId};

pub fn delete_office(app: &mut AdminApp, id: RecordId) {
    spawn_request(
        app,
        RequestKey::new(Operation::DeleteOffice, Some(id)),
        move |api| async move { api.delete_office(id).await },
        move |result| Outcome::OfficeDeleted { id, result },
    );
}

pub fn fetch_requests(app: &mut AdminApp) {
    spawn_request(
        app,
        RequestKey::new(Operation::FetchOfficeRequests, None),
        |api| async move { api.list_office_requests().await },
        Outcome::OfficeRequestsLoaded,
    );
}

pub fn send_request(app: &mut AdminApp, form: OfficeRequestForm) {
    spawn_request(
        app,
        RequestKey::new(Operation::SendOfficeRequest, None),
        move |api| async move { api.send_office_request(&form).await },
        Outcome::OfficeRequestSent,
    );
}

pub fn delete_request(app: &mut AdminApp, id: RecordId) {
    spawn_request(
        app,
        RequestKey::new(Operation::DeleteOfficeRequest, Some(id)),
        move |api| async move { api.delete_office_request(id).await },
        move |result| Outcome::OfficeRequestDeleted { id, result },
    );
}
