use super::{id_cell, list_section, or_na};
use crate::domain::Property;
use crate::ui::app::{AppState, AppView};
use crate::ui::components::{PaginationControls, Screen, Section, Table, banners};

fn price(property: &Property) -> String {
    property
        .price
        .map(|p| p.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn listing(property: &Property) -> String {
    property
        .listing_type
        .map(|t| t.as_str().to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn listing_screen(state: &AppState) -> Screen {
    let slice = &state.real_estate;
    let mut screen = Screen::new("Properties", banners(&state.ui, Some(&slice.request)));
    screen.field_errors(&state.ui.form_errors);

    if let Some(filter) = &slice.filter {
        let active = filter
            .form_fields()
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        screen.lines(vec![format!("Filter: {active}")]);
    }

    let mut table = Table::new(vec!["ID", "Type", "Kind", "Price", "Location", "Office"]);
    for property in slice.properties.iter() {
        table.row(vec![
            id_cell(property.id),
            listing(property),
            or_na(property.kind.as_deref()),
            price(property),
            property.place(),
            or_na(property.user.as_ref().and_then(|u| u.name.as_deref())),
        ]);
    }
    list_section(&mut screen, &slice.request, table, "No properties found.");
    if slice.pagination.last_page > 1 {
        screen.push(Section::Pagination(PaginationControls::from(
            slice.pagination,
        )));
    }
    screen
}

pub fn details_screen(state: &AppState) -> Screen {
    let mut screen = Screen::new(
        "Property Details",
        banners(&state.ui, Some(&state.auth.request)),
    );
    let wanted = match state.ui.current_view {
        AppView::PropertyDetails(id) => Some(id),
        _ => None,
    };
    let Some(property) = state
        .auth
        .property_details
        .as_ref()
        .filter(|p| wanted.is_none() || p.id == wanted)
    else {
        return screen;
    };

    let mut lines = vec![
        format!("ID: {}", id_cell(property.id)),
        format!("Type: {}", listing(property)),
        format!("Kind: {}", or_na(property.kind.as_deref())),
        format!("Price: {}", price(property)),
        format!("Location: {}", property.place()),
        format!(
            "Office: {}",
            or_na(property.user.as_ref().and_then(|u| u.name.as_deref()))
        ),
    ];
    for (key, value) in &property.extra {
        let value = match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        };
        lines.push(format!("{key}: {value}"));
    }
    screen.lines(lines);

    let images = property
        .images
        .iter()
        .map(|image| format!("/storage/{}", image.name.trim_start_matches('/')))
        .collect::<Vec<_>>();
    if !images.is_empty() {
        screen.heading("Images").lines(images);
    }
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ListingType, Location, PropertyFilter, RecordId};
    use crate::ui::app::ListCollection;

    fn property(id: u64) -> Property {
        Property {
            id: Some(RecordId(id)),
            listing_type: Some(ListingType::Rent),
            kind: Some("flat".into()),
            price: Some(1200.0),
            location: Some(Location {
                id: Some(RecordId(1)),
                city: "Damascus".into(),
                district: "Mazzeh".into(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn active_filter_is_summarised() {
        let mut state = AppState::default();
        state.real_estate.properties = ListCollection::from(vec![property(1)]);
        state.real_estate.filter = Some(PropertyFilter {
            listing_type: ListingType::Rent,
            kind: String::new(),
            max_price: "1500".into(),
            location: String::new(),
        });

        let screen = listing_screen(&state);
        let text = screen.to_string();
        assert!(text.contains("max_price=1500"));
        assert!(!text.contains("kind="));
        let table = screen.tables().next().unwrap();
        assert_eq!(table.rows[0][4], "Damascus - Mazzeh");
    }

    #[test]
    fn details_list_extra_fields() {
        let mut state = AppState::default();
        let mut details = property(9);
        details
            .extra
            .insert("space".into(), serde_json::Value::from(90));
        state.auth.property_details = Some(details);
        state.ui.current_view = AppView::PropertyDetails(RecordId(9));

        let text = details_screen(&state).to_string();
        assert!(text.contains("space: 90"));
        assert!(text.contains("Price: 1200"));
    }
}
