use super::super::super::state::{AppState, AppView};
use super::super::action::ServicesAction;
use super::super::command::Command;
use super::validated;
use crate::domain::{ErrorPayload, RecordId, ServiceInfo, ServiceType};

pub fn reduce(state: &mut AppState, action: ServicesAction) -> Vec<Command> {
    match action {
        ServicesAction::FetchTypes => vec![Command::FetchServiceTypes],
        ServicesAction::Select(id) => {
            state.services.selected_id = Some(id);
            state.services.selected_info.clear();
            vec![Command::FetchServiceInfo {
                service_type_id: id,
            }]
        }
        ServicesAction::DeleteService(id) => vec![Command::DeleteService { id }],
        ServicesAction::DeleteType(id) => vec![Command::DeleteServiceType { id }],
        ServicesAction::CreateType(form) => {
            validated(&mut state.ui, form.validate(), |name| {
                Command::CreateServiceType { name }
            })
        }
    }
}

pub(super) fn types_loaded(
    state: &mut AppState,
    result: Result<Vec<ServiceType>, ErrorPayload>,
) -> Vec<Command> {
    if let Some(types) = state.services.request.settle(result) {
        state.services.service_types.replace_all(types);
    }
    Vec::new()
}

pub(super) fn info_loaded(
    state: &mut AppState,
    service_type_id: RecordId,
    result: Result<Vec<ServiceInfo>, ErrorPayload>,
) -> Vec<Command> {
    let Some(info) = state.services.request.settle(result) else {
        return Vec::new();
    };
    if state.services.selected_id == Some(service_type_id) {
        state.services.selected_info.replace_all(info);
    } else {
        log::debug!("service type {service_type_id} is no longer selected, dropping its info");
    }
    Vec::new()
}

pub(super) fn service_deleted(
    state: &mut AppState,
    id: RecordId,
    result: Result<(), ErrorPayload>,
) -> Vec<Command> {
    if state.services.request.settle(result).is_none() {
        return Vec::new();
    }
    state.services.selected_info.remove_by_id(id);
    match state.ui.current_view {
        AppView::Profile(user_id) => vec![Command::FetchProfile { user_id }],
        _ => Vec::new(),
    }
}

pub(super) fn type_deleted(
    state: &mut AppState,
    id: RecordId,
    result: Result<(), ErrorPayload>,
) -> Vec<Command> {
    if state.services.request.settle(result).is_none() {
        return Vec::new();
    }
    state.services.service_types.remove_by_id(id);
    if state.services.selected_id == Some(id) {
        state.services.selected_id = None;
        state.services.selected_info.clear();
    }
    Vec::new()
}

pub(super) fn type_created(
    state: &mut AppState,
    result: Result<ServiceType, ErrorPayload>,
) -> Vec<Command> {
    if let Some(service_type) = state.services.request.settle(result) {
        state.services.service_types.push(service_type);
        state.ui.success = Some("Service type created successfully.".to_string());
    }
    Vec::new()
}
