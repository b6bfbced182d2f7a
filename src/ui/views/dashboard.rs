use super::{id_cell, list_section, or_na};
use crate::ui::app::AppState;
use crate::ui::components::{Screen, Table, banners};

pub fn screen(state: &AppState) -> Screen {
    let mut screen = Screen::new("Dashboard", banners(&state.ui, Some(&state.auth.request)));

    let mut summary = vec![
        format!("Offices: {}", state.auth.users.len()),
        format!("Locations: {}", state.real_estate.locations.len()),
    ];
    if let Some(stats) = &state.real_estate.stats {
        for key in stats.counts.keys() {
            if let Some(count) = stats.count(key) {
                summary.push(format!("{key}: {count}"));
            }
        }
    }
    screen.heading("Summary").lines(summary);

    let mut table = Table::new(vec!["ID", "Name", "Email", "Status"]);
    for user in state.auth.users.iter() {
        table.row(vec![
            id_cell(user.id),
            user.name.clone(),
            or_na(user.email.as_deref()),
            or_na(user.status.as_deref()),
        ]);
    }
    screen.heading("Offices");
    list_section(&mut screen, &state.auth.request, table, "No offices found.");
    screen
}
