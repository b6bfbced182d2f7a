use crate::domain::ComplaintStatus;
use crate::ui::app::AppState;
use crate::ui::components::{Screen, Table, banners};

pub fn screen(state: &AppState) -> Screen {
    let mut screen = Screen::new("Complaints", banners(&state.ui, None));
    let mut table = Table::new(vec!["ID", "Name", "Phone", "Complaint", "Status"]);
    for complaint in state.complaints.items.iter() {
        let status = match complaint.status {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::Resolved => "Resolved",
        };
        table.row(vec![
            complaint.id.to_string(),
            complaint.name.clone(),
            complaint.phone.clone(),
            complaint.complaint.clone(),
            status.to_string(),
        ]);
    }
    screen.table_or_empty(table, "No complaints.");
    screen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_inbox_is_listed() {
        let screen = screen(&AppState::default());
        let table = screen.tables().next().unwrap();
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[2][4], "Resolved");
    }
}
