use super::super::super::state::AppState;
use super::super::action::{AsyncAction, Outcome};
use super::super::command::Command;
use super::{auth, office, realestate, services, verification};

pub fn reduce(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::Started(ticket) => {
            log::debug!("{ticket} started");
            state.requests.begin(ticket);
            state.request_state_mut(ticket.operation().slice()).start();
            Vec::new()
        }
        AsyncAction::Finished { ticket, outcome } => {
            if !state.requests.finish(&ticket) {
                log::debug!("discarding stale response for {ticket}");
                return Vec::new();
            }
            let slice = ticket.operation().slice();
            let commands = apply(state, outcome);
            if state.requests.pending_in(slice) {
                state.request_state_mut(slice).loading = true;
            }
            commands
        }
    }
}

fn apply(state: &mut AppState, outcome: Outcome) -> Vec<Command> {
    match outcome {
        Outcome::LoggedIn(result) => auth::logged_in(state, result),
        Outcome::AdminRegistered(result) => auth::admin_registered(state, result),
        Outcome::UsersLoaded(result) => auth::users_loaded(state, result),
        Outcome::ProfileLoaded(result) => auth::profile_loaded(state, result),
        Outcome::PropertyDetailsLoaded(result) => auth::property_details_loaded(state, result),
        Outcome::OfficeDeleted { id, result } => auth::office_deleted(state, id, result),
        Outcome::OfficeRequestsLoaded(result) => office::requests_loaded(state, result),
        Outcome::OfficeRequestSent(result) => office::request_sent(state, result),
        Outcome::OfficeRequestDeleted { id, result } => office::request_deleted(state, id, result),
        Outcome::VerificationCreated(result) => verification::created(state, result),
        Outcome::VerificationUpdated { id, result } => verification::updated(state, id, result),
        Outcome::VerificationsLoaded(result) => verification::loaded(state, result),
        Outcome::VerificationDeleted { id, result } => verification::deleted(state, id, result),
        Outcome::ServiceTypesLoaded(result) => services::types_loaded(state, result),
        Outcome::ServiceInfoLoaded {
            service_type_id,
            result,
        } => services::info_loaded(state, service_type_id, result),
        Outcome::ServiceDeleted { id, result } => services::service_deleted(state, id, result),
        Outcome::ServiceTypeDeleted { id, result } => services::type_deleted(state, id, result),
        Outcome::ServiceTypeCreated(result) => services::type_created(state, result),
        Outcome::LocationsLoaded(result) => realestate::locations_loaded(state, result),
        Outcome::LocationAdded(result) => realestate::location_added(state, result),
        Outcome::LocationDeleted { id, result } => {
            realestate::location_deleted(state, id, result)
        }
        Outcome::PropertyStatsLoaded(result) => realestate::stats_loaded(state, result),
        Outcome::PropertiesLoaded(result) => realestate::properties_loaded(state, result),
        Outcome::PropertyDeleted { id, result } => {
            realestate::property_deleted(state, id, result)
        }
    }
}
