use super::super::super::AdminApp;
use super::super::action::Outcome;
use super::super::requests::{Operation, RequestKey};
use super::spawn_request;
use crate::domain::{LocationForm, PropertyFilter, RecordId};

pub fn fetch_locations(app: &mut AdminApp) {
    spawn_request(
        app,
        RequestKey::new(Operation::FetchLocations, None),
        |api| async move { api.list_locations().await },
        Outcome::LocationsLoaded,
    );
}

pub fn add_location(app: &mut AdminApp, form: LocationForm) {
    spawn_request(
        app,
        RequestKey::new(Operation::AddLocation, None),
        move |api| async move { api.add_location(&form).await },
        Outcome::LocationAdded,
    );
}

pub fn delete_location(app: &mut AdminApp, id: RecordId) {
    spawn_request(
        app,
        RequestKey::new(Operation::DeleteLocation, Some(id)),
        move |api| async move { api.delete_location(id).await },
        move |result| Outcome::LocationDeleted { id, result },
    );
}

pub fn fetch_stats(app: &mut AdminApp) {
    spawn_request(
        app,
        RequestKey::new(Operation::FetchPropertyStats, None),
        |api| async move { api.property_stats().await },
        Outcome::PropertyStatsLoaded,
    );
}

pub fn fetch_properties(app: &mut AdminApp, page: u32, filter: Option<PropertyFilter>) {
    spawn_request(
        app,
        RequestKey::new(Operation::FetchProperties, None),
        move |api| async move { api.list_properties(page, filter.as_ref()).await },
        Outcome::PropertiesLoaded,
    );
}

pub fn delete_property(app: &mut AdminApp, id: RecordId) {
    spawn_request(
        app,
        RequestKey::new(Operation::DeleteProperty, Some(id)),
        move |api| async move { api.delete_property(id).await },
        move |result| Outcome::PropertyDeleted { id, result },
    );
}
