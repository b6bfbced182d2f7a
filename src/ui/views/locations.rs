use super::{id_cell, list_section};
use crate::ui::app::AppState;
use crate::ui::components::{Screen, Table, banners};

pub fn screen(state: &AppState) -> Screen {
    let mut screen = Screen::new(
        "Location Management",
        banners(&state.ui, Some(&state.real_estate.request)),
    );
    screen.field_errors(&state.ui.form_errors);

    let mut table = Table::new(vec!["ID", "City", "District"]);
    for location in state.real_estate.locations.iter() {
        table.row(vec![
            id_cell(location.id),
            location.city.clone(),
            location.district.clone(),
        ]);
    }
    list_section(
        &mut screen,
        &state.real_estate.request,
        table,
        "No locations found.",
    );
    screen
}
