use super::{id_cell, list_section, or_na};
use crate::domain::VerificationEdit;
use crate::ui::app::AppState;
use crate::ui::components::{PaginationControls, Screen, Section, Table, banners};

/// Uploaded files are served from the backend's public storage folder.
fn storage_path(file: Option<&str>) -> String {
    match file.filter(|f| !f.is_empty()) {
        Some(file) => format!("/storage/{}", file.trim_start_matches('/')),
        None => "N/A".to_string(),
    }
}

pub fn form_screen(state: &AppState) -> Screen {
    let mut screen = Screen::new(
        "Create Verification",
        banners(&state.ui, Some(&state.verification.request)),
    );
    screen.field_errors(&state.ui.form_errors);

    // Offices the verification can be attached to.
    let mut offices = Table::new(vec!["User ID", "Name"]);
    for user in state.auth.users.iter() {
        offices.row(vec![id_cell(user.id), user.name.clone()]);
    }
    screen.heading("Offices");
    list_section(&mut screen, &state.auth.request, offices, "No offices found.");
    screen
}

pub fn list_screen(state: &AppState) -> Screen {
    let slice = &state.verification;
    let mut screen = Screen::new("Verifications", banners(&state.ui, Some(&slice.request)));

    let mut table = Table::new(vec![
        "ID",
        "National No",
        "Identity No",
        "Status",
        "Office",
        "Identity Image",
        "Contract Image",
    ]);
    for item in slice.items.iter() {
        table.row(vec![
            id_cell(item.id),
            item.national_no.clone(),
            item.identity_no.clone(),
            item.activation.to_string(),
            item.owner_name().to_string(),
            storage_path(item.identity_image.as_deref()),
            storage_path(item.contract_image.as_deref()),
        ]);
    }
    list_section(&mut screen, &slice.request, table, "No verifications found.");
    if slice.pagination.last_page > 1 {
        screen.push(Section::Pagination(PaginationControls::from(
            slice.pagination,
        )));
    }

    if let Some(edit) = &slice.editing {
        edit_dialog(&mut screen, edit);
        screen.field_errors(&state.ui.form_errors);
    }
    screen
}

fn edit_dialog(screen: &mut Screen, edit: &VerificationEdit) {
    let file = |path: &Option<std::path::PathBuf>| match path {
        Some(path) => path.display().to_string(),
        None => "(unchanged)".to_string(),
    };
    screen.heading(format!("Edit verification {}", edit.id));
    screen.lines(vec![
        format!("National No: {}", edit.national_no),
        format!("Identity No: {}", edit.identity_no),
        format!(
            "User ID: {}",
            or_na(edit.user_id.map(|id| id.to_string()).as_deref())
        ),
        format!("Status: {}", edit.activation),
        format!("Identity Image: {}", file(&edit.identity_image)),
        format!("Contract Image: {}", file(&edit.contract_image)),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activation, RecordId, UserSummary, Verification};
    use crate::ui::app::{ListCollection, Pagination};

    fn verification(id: u64, owner: Option<&str>) -> Verification {
        Verification {
            id: Some(RecordId(id)),
            national_no: format!("N{id}"),
            identity_no: format!("I{id}"),
            user_id: Some(RecordId(7)),
            activation: if id % 2 == 0 {
                Activation::Active
            } else {
                Activation::Inactive
            },
            identity_image: Some("ids/a.png".into()),
            contract_image: None,
            users_info: owner.map(|name| UserSummary {
                id: Some(RecordId(7)),
                name: Some(name.into()),
            }),
        }
    }

    #[test]
    fn rows_show_status_owner_and_image_paths() {
        let mut state = AppState::default();
        state.verification.items =
            ListCollection::from(vec![verification(1, None), verification(2, Some("Dar"))]);

        let screen = list_screen(&state);
        let table = screen.tables().next().unwrap();
        assert_eq!(table.rows[0][3], "Inactive");
        assert_eq!(table.rows[0][4], "N/A");
        assert_eq!(table.rows[0][5], "/storage/ids/a.png");
        assert_eq!(table.rows[1][3], "Active");
        assert_eq!(table.rows[1][4], "Dar");
    }

    #[test]
    fn loading_hides_the_empty_message() {
        let mut state = AppState::default();
        state.verification.request.loading = true;
        let screen = list_screen(&state);
        assert!(!screen.is_empty_state());
        assert!(screen.to_string().contains("Loading..."));
    }

    #[test]
    fn pagination_only_with_several_pages() {
        let mut state = AppState::default();
        state.verification.items = ListCollection::from(vec![verification(1, None)]);
        state.verification.pagination = Pagination {
            current_page: 1,
            last_page: 3,
        };
        let screen = list_screen(&state);
        assert!(
            screen
                .sections
                .iter()
                .any(|s| matches!(s, Section::Pagination(c) if c.next_enabled && !c.previous_enabled))
        );
    }

    #[test]
    fn open_editor_is_listed_below_the_table() {
        let mut state = AppState::default();
        let record = verification(4, None);
        state.verification.items = ListCollection::from(vec![record.clone()]);
        state.verification.editing = VerificationEdit::from_record(&record);

        let text = list_screen(&state).to_string();
        assert!(text.contains("Edit verification 4"));
        assert!(text.contains("Identity Image: (unchanged)"));
    }
}
