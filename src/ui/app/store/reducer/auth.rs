use super::super::super::state::{
    AppState, AppView, AuthSlice, OfficeSlice, RealEstateSlice, ServicesSlice, VerificationSlice,
};
use super::super::action::AuthAction;
use super::super::command::Command;
use super::super::requests::RequestTracker;
use super::{navigation, validated};
use crate::domain::{AuthSession, ErrorPayload, Profile, Property, RecordId, UserAccount};
use crate::infra::storage::PersistedAuth;

pub fn reduce(state: &mut AppState, action: AuthAction) -> Vec<Command> {
    match action {
        AuthAction::Restore(persisted) => {
            state.auth.token = persisted.token.filter(|t| !t.trim().is_empty());
            state.auth.user = persisted.user;
            Vec::new()
        }
        AuthAction::Login(form) => {
            validated(&mut state.ui, form.validate(), |()| Command::Login(form))
        }
        AuthAction::Logout => {
            if let Some(user) = &state.auth.user {
                log::info!("logging out {}", user.name);
            }
            // Backend data goes with the session. Dropping the tracker turns
            // every response still on its way into a stale one.
            state.auth = AuthSlice::default();
            state.office = OfficeSlice::default();
            state.verification = VerificationSlice::default();
            state.services = ServicesSlice::default();
            state.real_estate = RealEstateSlice::default();
            state.requests = RequestTracker::default();
            state.ui.clear_messages();
            state.ui.current_view = AppView::Login;
            vec![Command::ClearPersistedAuth]
        }
        AuthAction::RegisterAdmin(form) => {
            validated(&mut state.ui, form.validate(), |()| Command::RegisterAdmin(form))
        }
        AuthAction::FetchUsers => vec![Command::FetchUsers],
        AuthAction::FetchProfile(user_id) => vec![Command::FetchProfile { user_id }],
        AuthAction::FetchPropertyDetails(id) => vec![Command::FetchPropertyDetails { id }],
    }
}

pub(super) fn logged_in(
    state: &mut AppState,
    result: Result<AuthSession, ErrorPayload>,
) -> Vec<Command> {
    let Some(session) = state.auth.request.settle(result) else {
        return Vec::new();
    };
    log::info!("logged in as {}", session.user.name);
    state.auth.token = Some(session.token.clone());
    state.auth.user = Some(session.user.clone());

    let mut commands = vec![Command::PersistAuth(PersistedAuth {
        token: Some(session.token),
        user: Some(session.user),
    })];
    commands.extend(navigation::enter(state, AppView::Dashboard));
    commands
}

pub(super) fn admin_registered(
    state: &mut AppState,
    result: Result<(), ErrorPayload>,
) -> Vec<Command> {
    if state.auth.request.settle(result).is_none() {
        return Vec::new();
    }
    let commands = if state.auth.is_authenticated() {
        navigation::enter(state, AppView::Dashboard)
    } else {
        Vec::new()
    };
    state.ui.success = Some("Admin registered successfully!".to_string());
    commands
}

pub(super) fn users_loaded(
    state: &mut AppState,
    result: Result<Vec<UserAccount>, ErrorPayload>,
) -> Vec<Command> {
    if let Some(users) = state.auth.request.settle(result) {
        state.auth.users.replace_all(users);
    }
    Vec::new()
}

pub(super) fn profile_loaded(
    state: &mut AppState,
    result: Result<Profile, ErrorPayload>,
) -> Vec<Command> {
    if let Some(profile) = state.auth.request.settle(result) {
        state.auth.profile = Some(profile);
    }
    Vec::new()
}

pub(super) fn property_details_loaded(
    state: &mut AppState,
    result: Result<Property, ErrorPayload>,
) -> Vec<Command> {
    if let Some(property) = state.auth.request.settle(result) {
        state.auth.property_details = Some(property);
    }
    Vec::new()
}

pub(super) fn office_deleted(
    state: &mut AppState,
    id: RecordId,
    result: Result<(), ErrorPayload>,
) -> Vec<Command> {
    if state.auth.request.settle(result).is_none() {
        return Vec::new();
    }
    state.auth.users.remove_by_id(id);
    state.ui.success = Some("Office deleted successfully.".to_string());
    vec![Command::FetchUsers]
}
