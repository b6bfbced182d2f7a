use super::{id_cell, list_section, or_na};
use crate::ui::app::{AppState, UiState};
use crate::ui::components::{Banner, Screen, Table, banners};

pub fn screen(state: &AppState) -> Screen {
    let mut all_banners = banners(&state.ui, Some(&state.auth.request));
    all_banners.extend(
        banners(&UiState::default(), Some(&state.office.request))
            .into_iter()
            .filter(|b| !matches!(b, Banner::Loading) || !state.auth.request.loading),
    );
    let mut screen = Screen::new("Office Management", all_banners);

    let mut offices = Table::new(vec!["ID", "Name", "Email", "Phone", "WhatsApp", "Address"]);
    for user in state.auth.users.iter() {
        offices.row(vec![
            id_cell(user.id),
            user.name.clone(),
            or_na(user.email.as_deref()),
            or_na(user.phone.as_deref()),
            or_na(user.whatsapp.as_deref()),
            or_na(user.address.as_deref()),
        ]);
    }
    screen.heading("Offices");
    list_section(&mut screen, &state.auth.request, offices, "No offices found.");

    let mut requests = Table::new(vec!["ID", "Details"]);
    for request in state.office.requests.iter() {
        let details = request
            .fields
            .iter()
            .map(|(k, v)| match v.as_str() {
                Some(s) => format!("{k}={s}"),
                None => format!("{k}={v}"),
            })
            .collect::<Vec<_>>()
            .join(", ");
        requests.row(vec![id_cell(request.id), details]);
    }
    screen.heading("Sent requests");
    list_section(
        &mut screen,
        &state.office.request,
        requests,
        "No requests sent.",
    );
    screen.field_errors(&state.ui.form_errors);
    screen
}
