use super::{id_cell, list_section, or_na};
use crate::ui::app::AppState;
use crate::ui::components::{Screen, Table, banners};

pub fn screen(state: &AppState) -> Screen {
    let services = &state.services;
    let mut screen = Screen::new(
        "Services Management",
        banners(&state.ui, Some(&services.request)),
    );
    screen.field_errors(&state.ui.form_errors);

    let mut types = Table::new(vec!["", "ID", "Name"]);
    for service_type in services.service_types.iter() {
        let selected = service_type.id.is_some() && service_type.id == services.selected_id;
        types.row(vec![
            if selected { "*" } else { "" }.to_string(),
            id_cell(service_type.id),
            service_type.name.clone(),
        ]);
    }
    screen.heading("Service types");
    list_section(&mut screen, &services.request, types, "No service types found.");

    let Some(selected) = services.selected_id else {
        screen.lines(vec!["Select a service type to see its services.".to_string()]);
        return screen;
    };
    let mut info = Table::new(vec!["ID", "Title", "Description", "Office"]);
    for service in services.selected_info.iter() {
        info.row(vec![
            id_cell(service.id),
            service.title.clone(),
            or_na(service.description.as_deref()),
            or_na(service.users_info.as_ref().and_then(|u| u.name.as_deref())),
        ]);
    }
    screen.heading(format!("Services for type {selected}"));
    list_section(
        &mut screen,
        &services.request,
        info,
        "No services for this type.",
    );
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordId, ServiceType};

    #[test]
    fn selected_type_is_marked() {
        let mut state = AppState::default();
        state.services.service_types.replace_all(vec![
            ServiceType {
                id: Some(RecordId(1)),
                name: "Cleaning".into(),
            },
            ServiceType {
                id: Some(RecordId(2)),
                name: "Moving".into(),
            },
        ]);
        state.services.selected_id = Some(RecordId(2));

        let screen = screen(&state);
        let types = screen.tables().next().unwrap();
        assert_eq!(types.rows[0][0], "");
        assert_eq!(types.rows[1][0], "*");
        assert!(screen.to_string().contains("No services for this type."));
    }
}
