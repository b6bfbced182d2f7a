use super::super::super::state::{AppState, AppView};
use super::super::action::NavigationAction;
use super::super::command::Command;

pub fn reduce(state: &mut AppState, action: NavigationAction) -> Vec<Command> {
    match action {
        NavigationAction::SwitchTo(view) => {
            state.ui.clear_messages();
            enter(state, view)
        }
        NavigationAction::DismissMessages => {
            state.ui.clear_messages();
            Vec::new()
        }
    }
}

/// Make `view` current, applying the session guard, and return the fetches
/// the page needs on mount.
pub(super) fn enter(state: &mut AppState, view: AppView) -> Vec<Command> {
    let view = match view {
        view if view.requires_auth() && !state.auth.is_authenticated() => {
            log::debug!("{} needs a session, redirecting to login", view.title());
            AppView::Login
        }
        AppView::Login if state.auth.is_authenticated() => AppView::Dashboard,
        view => view,
    };

    if view != AppView::VerificationList {
        state.verification.editing = None;
    }
    state.ui.current_view = view;
    on_mount(state, view)
}

fn on_mount(state: &AppState, view: AppView) -> Vec<Command> {
    match view {
        AppView::Dashboard => vec![
            Command::FetchUsers,
            Command::FetchLocations,
            Command::FetchPropertyStats,
        ],
        AppView::OfficeManagement => vec![Command::FetchUsers, Command::FetchOfficeRequests],
        AppView::LocationManagement => vec![Command::FetchLocations],
        AppView::ServicesManagement => {
            let mut commands = vec![Command::FetchServiceTypes];
            if let Some(service_type_id) = state.services.selected_id {
                commands.push(Command::FetchServiceInfo { service_type_id });
            }
            commands
        }
        AppView::VerificationForm => vec![Command::FetchUsers],
        AppView::VerificationList => vec![Command::FetchVerifications { page: 1 }],
        AppView::Profile(user_id) => vec![Command::FetchProfile { user_id }],
        AppView::PropertyDetails(id) => vec![Command::FetchPropertyDetails { id }],
        AppView::Properties => vec![
            Command::FetchLocations,
            Command::FetchProperties {
                page: 1,
                filter: state.real_estate.filter.clone(),
            },
        ],
        AppView::Login | AppView::RegisterAdmin | AppView::Complaints => Vec::new(),
    }
}
