use super::super::super::state::AppState;
use super::super::action::ComplaintsAction;
use super::super::command::Command;
use crate::domain::ComplaintStatus;

pub fn reduce(state: &mut AppState, action: ComplaintsAction) -> Vec<Command> {
    match action {
        ComplaintsAction::MarkResolved(id) => {
            match state.complaints.items.get_by_id_mut(id) {
                Some(complaint) => complaint.status = ComplaintStatus::Resolved,
                None => log::debug!("no complaint {id} to resolve"),
            }
            Vec::new()
        }
    }
}
