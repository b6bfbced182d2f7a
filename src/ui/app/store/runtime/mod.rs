pub mod auth;
pub mod office;
pub mod realestate;
pub mod services;
pub mod verification;


use std::future::Future;
use std::sync::Arc;

use super::super::AdminApp;
use super::action::{Action, AsyncAction, Outcome};
use super::command::Command;
use super::requests::RequestKey;
use crate::domain::ErrorPayload;
use crate::infra::api::{AdminApi, ApiError};

pub fn run(app: &mut AdminApp, command: Command) {
    match command {
        Command::Login(form) => auth::login(app, form),
        Command::RegisterAdmin(form) => auth::register_admin(app, form),
        Command::FetchUsers => auth::fetch_users(app),
        Command::FetchProfile { user_id } => auth::fetch_profile(app, user_id),
        Command::FetchPropertyDetails { id } => auth::fetch_property_details(app, id),
        Command::PersistAuth(persisted) => auth::persist(app, persisted),
        Command::ClearPersistedAuth => auth::clear_persisted(app),
        Command::DeleteOffice { id } => office::delete_office(app, id),
        Command::FetchOfficeRequests => office::fetch_requests(app),
        Command::SendOfficeRequest(form) => office::send_request(app, form),
        Command::DeleteOfficeRequest { id } => office::delete_request(app, id),
        Command::CreateVerification(form) => verification::create(app, form),
        Command::UpdateVerification(edit) => verification::update(app, edit),
        Command::FetchVerifications { page } => verification::fetch_page(app, page),
        Command::DeleteVerification { id } => verification::delete(app, id),
        Command::FetchServiceTypes => services::fetch_types(app),
        Command::FetchServiceInfo { service_type_id } => {
            services::fetch_info(app, service_type_id)
        }
        Command::DeleteService { id } => services::delete_service(app, id),
        Command::DeleteServiceType { id } => services::delete_type(app, id),
        Command::CreateServiceType { name } => services::create_type(app, name),
        Command::FetchLocations => realestate::fetch_locations(app),
        Command::AddLocation(form) => realestate::add_location(app, form),
        Command::DeleteLocation { id } => realestate::delete_location(app, id),
        Command::FetchPropertyStats => realestate::fetch_stats(app),
        Command::FetchProperties { page, filter } => {
            realestate::fetch_properties(app, page, filter)
        }
        Command::DeleteProperty { id } => realestate::delete_property(app, id),
    }
}

/// Issue one backend call on a tokio task.
///
/// The request is registered with the app first (which supersedes and
/// cancels any older request under the same key), then its outcome is posted
/// back as `AsyncAction::Finished`. A cancelled request posts nothing.
pub(super) fn spawn_request<T, Call, Fut>(
    app: &mut AdminApp,
    key: RequestKey,
    call: Call,
    wrap: impl FnOnce(Result<T, ErrorPayload>) -> Outcome + Send + 'static,
) where
    Call: FnOnce(Arc<dyn AdminApi>) -> Fut,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    T: Send + 'static,
{
    let (ticket, cancel) = app.begin_request(key);
    let request = call(app.api.clone());
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("{ticket} cancelled");
                return;
            }
            result = request => result,
        };
        let result = result.map_err(|err| {
            log::debug!("{ticket} failed: {err}");
            ErrorPayload::from(err)
        });
        let _ = action_tx
            .send(Action::Async(AsyncAction::Finished {
                ticket,
                outcome: wrap(result),
            }))
            .await;
    });
}
