use super::super::super::state::{AppState, AppView};
use super::super::action::RealEstateAction;
use super::super::command::Command;
use super::super::pagination::Pagination;
use super::validated;
use crate::domain::{
    ErrorPayload, FieldErrors, Location, Page, Property, PropertyStats, RecordId,
};

pub fn reduce(state: &mut AppState, action: RealEstateAction) -> Vec<Command> {
    match action {
        RealEstateAction::FetchLocations => vec![Command::FetchLocations],
        RealEstateAction::AddLocation(form) => {
            validated(&mut state.ui, form.validate(), |()| Command::AddLocation(form))
        }
        RealEstateAction::DeleteLocation(id) => vec![Command::DeleteLocation { id }],
        RealEstateAction::FetchStats => vec![Command::FetchPropertyStats],
        RealEstateAction::FetchProperties { page } => vec![fetch_properties(state, page.max(1))],
        RealEstateAction::GoToPage(page) => match state.real_estate.pagination.accept(page) {
            Some(page) => vec![fetch_properties(state, page)],
            None => {
                log::debug!("property page {page} is out of range");
                Vec::new()
            }
        },
        RealEstateAction::ApplyFilter(filter) => match filter.validate() {
            Ok(()) => {
                state.ui.form_errors = FieldErrors::new();
                state.real_estate.filter = Some(filter);
                vec![fetch_properties(state, 1)]
            }
            Err(errors) => {
                state.ui.form_errors = errors;
                Vec::new()
            }
        },
        RealEstateAction::ClearFilter => {
            state.real_estate.filter = None;
            vec![fetch_properties(state, 1)]
        }
        RealEstateAction::DeleteProperty(id) => vec![Command::DeleteProperty { id }],
    }
}

fn fetch_properties(state: &AppState, page: u32) -> Command {
    Command::FetchProperties {
        page,
        filter: state.real_estate.filter.clone(),
    }
}

pub(super) fn locations_loaded(
    state: &mut AppState,
    result: Result<Vec<Location>, ErrorPayload>,
) -> Vec<Command> {
    if let Some(locations) = state.real_estate.request.settle(result) {
        state.real_estate.locations.replace_all(locations);
    }
    Vec::new()
}

pub(super) fn location_added(
    state: &mut AppState,
    result: Result<Location, ErrorPayload>,
) -> Vec<Command> {
    if let Some(location) = state.real_estate.request.settle(result) {
        state.real_estate.locations.push(location);
        state.ui.success = Some("Location added successfully.".to_string());
    }
    Vec::new()
}

pub(super) fn location_deleted(
    state: &mut AppState,
    id: RecordId,
    result: Result<(), ErrorPayload>,
) -> Vec<Command> {
    if state.real_estate.request.settle(result).is_some() {
        state.real_estate.locations.remove_by_id(id);
    }
    Vec::new()
}

pub(super) fn stats_loaded(
    state: &mut AppState,
    result: Result<PropertyStats, ErrorPayload>,
) -> Vec<Command> {
    if let Some(stats) = state.real_estate.request.settle(result) {
        state.real_estate.stats = Some(stats);
    }
    Vec::new()
}

pub(super) fn properties_loaded(
    state: &mut AppState,
    result: Result<Page<Property>, ErrorPayload>,
) -> Vec<Command> {
    if let Some(page) = state.real_estate.request.settle(result) {
        state.real_estate.pagination = Pagination::from_page(&page);
        state.real_estate.properties.replace_all(page.data);
    }
    Vec::new()
}

/// The listing and the profile page both show properties; whichever is open
/// is refetched.
pub(super) fn property_deleted(
    state: &mut AppState,
    id: RecordId,
    result: Result<(), ErrorPayload>,
) -> Vec<Command> {
    if state.real_estate.request.settle(result).is_none() {
        return Vec::new();
    }
    state.real_estate.properties.remove_by_id(id);
    if state
        .auth
        .property_details
        .as_ref()
        .is_some_and(|p| p.id == Some(id))
    {
        state.auth.property_details = None;
    }
    match state.ui.current_view {
        AppView::Profile(user_id) => vec![Command::FetchProfile { user_id }],
        AppView::Properties => vec![fetch_properties(
            state,
            state.real_estate.pagination.current_page,
        )],
        _ => Vec::new(),
    }
}
