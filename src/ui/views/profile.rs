use super::{id_cell, or_na};
use crate::domain::Profile;
use crate::ui::app::{AppState, AppView};
use crate::ui::components::{Screen, Table, banners};

pub fn screen(state: &AppState) -> Screen {
    let mut screen = Screen::new("Office Profile", banners(&state.ui, Some(&state.auth.request)));
    let wanted = match state.ui.current_view {
        AppView::Profile(id) => Some(id),
        _ => None,
    };
    // A profile left over from another office is not shown.
    let Some(profile) = state
        .auth
        .profile
        .as_ref()
        .filter(|p| wanted.is_none() || p.user.id == wanted)
    else {
        return screen;
    };
    details(&mut screen, profile);
    screen
}

fn details(screen: &mut Screen, profile: &Profile) {
    let user = &profile.user;
    screen.heading(user.name.clone()).lines(vec![
        format!("Email: {}", or_na(user.email.as_deref())),
        format!("Status: {}", or_na(user.status.as_deref())),
    ]);

    let contact = profile.contact.as_ref();
    screen.heading("Contact").lines(vec![
        format!(
            "Phone: {}",
            or_na(contact.and_then(|c| c.phone.as_deref()).or(user.phone.as_deref()))
        ),
        format!("Telegram: {}", or_na(contact.and_then(|c| c.telegram.as_deref()))),
        format!("WhatsApp: {}", or_na(user.whatsapp.as_deref())),
        format!(
            "Address: {}",
            or_na(
                profile
                    .address
                    .as_ref()
                    .and_then(|a| a.full_address.as_deref())
                    .or(user.address.as_deref())
            )
        ),
    ]);

    let mut properties = Table::new(vec!["ID", "Type", "Kind", "Price", "Location"]);
    for property in &profile.real_estate {
        properties.row(vec![
            id_cell(property.id),
            property
                .listing_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            or_na(property.kind.as_deref()),
            property
                .price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            property.place(),
        ]);
    }
    screen
        .heading("Properties")
        .table_or_empty(properties, "No properties listed.");

    let mut services = Table::new(vec!["ID", "Title", "Description"]);
    for service in &profile.services {
        services.row(vec![
            id_cell(service.id),
            service.title.clone(),
            or_na(service.description.as_deref()),
        ]);
    }
    screen
        .heading("Services")
        .table_or_empty(services, "No services offered.");
}
