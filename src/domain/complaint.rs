use serde::{Deserialize, Serialize};

use super::ids::{Identified, RecordId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Resolved,
}

/// A user complaint. The inbox is local-only: there is no backend endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub complaint: String,
    pub status: ComplaintStatus,
}

impl Identified for Complaint {
    fn record_id(&self) -> Option<RecordId> {
        Some(self.id)
    }
}

/// Inbox contents the complaints page opens with.
pub fn seed_complaints() -> Vec<Complaint> {
    let rows = [
        (1, "Ali Hassan", "0987654321", "There's a bug in the property page.", ComplaintStatus::Pending),
        (2, "Lina Ahmad", "0933224567", "Unable to contact office.", ComplaintStatus::Pending),
        (3, "Mohammed Said", "0912345678", "Office contact details are incorrect.", ComplaintStatus::Resolved),
        (4, "Fatima Omar", "0998765432", "Property images are not loading.", ComplaintStatus::Pending),
    ];
    rows.into_iter()
        .map(|(id, name, phone, complaint, status)| Complaint {
            id: RecordId(id),
            name: name.to_string(),
            phone: phone.to_string(),
            complaint: complaint.to_string(),
            status,
        })
        .collect()
}
