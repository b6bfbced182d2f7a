use super::super::super::AdminApp;
use super::super::action::Outcome;
use super::super::requests::{Operation, RequestKey};
use super::spawn_request;
use crate::domain::{LoginForm, RecordId, RegisterAdminForm};
use crate::infra::storage::PersistedAuth;

pub fn login(app: &mut AdminApp, form: LoginForm) {
    spawn_request(
        app,
        RequestKey::new(Operation::Login, None),
        move |api| async move { api.login(&form).await },
        Outcome::LoggedIn,
    );
}

pub fn register_admin(app: &mut AdminApp, form: RegisterAdminForm) {
    spawn_request(
        app,
        RequestKey::new(Operation::RegisterAdmin, None),
        move |api| async move { api.register_admin(&form).await },
        Outcome::AdminRegistered,
    );
}

pub fn fetch_users(app: &mut AdminApp) {
    spawn_request(
        app,
        RequestKey::new(Operation::FetchUsers, None),
        |api| async move { api.list_users().await },
        Outcome::UsersLoaded,
    );
}

pub fn fetch_profile(app: &mut AdminApp, user_id: RecordId) {
    spawn_request(
        app,
        RequestKey::new(Operation::FetchProfile, Some(user_id)),
        move |api| async move { api.profile(user_id).await },
        Outcome::ProfileLoaded,
    );
}

pub fn fetch_property_details(app: &mut AdminApp, id: RecordId) {
    spawn_request(
        app,
        RequestKey::new(Operation::FetchPropertyDetails, Some(id)),
        move |api| async move { api.property_details(id).await },
        Outcome::PropertyDetailsLoaded,
    );
}

pub fn persist(app: &mut AdminApp, persisted: PersistedAuth) {
    if let Err(err) = app.storage.save_auth(&persisted) {
        log::error!("Failed to persist session: {err}");
    }
}

pub fn clear_persisted(app: &mut AdminApp) {
    if let Err(err) = app.storage.clear_auth() {
        log::error!("Failed to clear persisted session: {err}");
    }
}
