use super::super::super::AdminApp;
use super::super::action::Outcome;
use super::super::requests::{Operation, RequestKey};
use super::spawn_request;
use crate::domain::RecordId;

pub fn fetch_types(app: &mut AdminApp) {
    spawn_request(
        app,
        RequestKey::new(Operation::FetchServiceTypes, None),
        |api| async move { api.list_service_types().await },
        Outcome::ServiceTypesLoaded,
    );
}

pub fn fetch_info(app: &mut AdminApp, service_type_id: RecordId) {
    spawn_request(
        app,
        RequestKey::new(Operation::FetchServiceInfo, Some(service_type_id)),
        move |api| async move { api.service_info(service_type_id).await },
        move |result| Outcome::ServiceInfoLoaded {
            service_type_id,
            result,
        },
    );
}

pub fn delete_service(app: &mut AdminApp, id: RecordId) {
    spawn_request(
        app,
        RequestKey::new(Operation::DeleteService, Some(id)),
        move |api| async move { api.delete_service(id).await },
        move |result| Outcome::ServiceDeleted { id, result },
    );
}

pub fn delete_type(app: &mut AdminApp, id: RecordId) {
    spawn_request(
        app,
        RequestKey::new(Operation::DeleteServiceType, Some(id)),
        move |api| async move { api.delete_service_type(id).await },
        move |result| Outcome::ServiceTypeDeleted { id, result },
    );
}

pub fn create_type(app: &mut AdminApp, name: String) {
    spawn_request(
        app,
        RequestKey::new(Operation::CreateServiceType, None),
        move |api| async move { api.create_service_type(&name).await },
        Outcome::ServiceTypeCreated,
    );
}
