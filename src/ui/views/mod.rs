//! One text view per page. Each builds a [`Screen`] from the current state;
//! nothing here mutates state.

pub mod complaints;
pub mod dashboard;
pub mod locations;
pub mod login;
pub mod offices;
pub mod profile;
pub mod properties;
pub mod services;
pub mod verifications;

use crate::ui::app::{AppState, AppView, RequestState};
use crate::ui::components::{Screen, Table};

/// Screen for whatever view is current.
pub fn render(state: &AppState) -> Screen {
    match state.ui.current_view {
        AppView::Dashboard => dashboard::screen(state),
        AppView::Login => login::login_screen(state),
        AppView::RegisterAdmin => login::register_screen(state),
        AppView::OfficeManagement => offices::screen(state),
        AppView::LocationManagement => locations::screen(state),
        AppView::ServicesManagement => services::screen(state),
        AppView::VerificationForm => verifications::form_screen(state),
        AppView::VerificationList => verifications::list_screen(state),
        AppView::Profile(_) => profile::screen(state),
        AppView::PropertyDetails(_) => properties::details_screen(state),
        AppView::Properties => properties::listing_screen(state),
        AppView::Complaints => complaints::screen(state),
    }
}

/// A list body: rows, or the empty message once the request settled cleanly.
/// While loading or after an error the banners speak instead.
fn list_section(screen: &mut Screen, request: &RequestState, table: Table, empty: &str) {
    if table.rows.is_empty() && (request.loading || request.error.is_some()) {
        return;
    }
    screen.table_or_empty(table, empty);
}

fn or_na(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("N/A")
        .to_string()
}

fn id_cell(id: Option<crate::domain::RecordId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}
