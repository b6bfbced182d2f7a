use crate::domain::{
    LocationForm, LoginForm, OfficeRequestForm, PropertyFilter, RecordId, RegisterAdminForm,
    VerificationEdit, VerificationForm,
};
use crate::infra::storage::PersistedAuth;

use super::requests::{Operation, RequestKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login(LoginForm),
    RegisterAdmin(RegisterAdminForm),
    FetchUsers,
    FetchProfile {
        user_id: RecordId,
    },
    FetchPropertyDetails {
        id: RecordId,
    },
    DeleteOffice {
        id: RecordId,
    },
    FetchOfficeRequests,
    SendOfficeRequest(OfficeRequestForm),
    DeleteOfficeRequest {
        id: RecordId,
    },
    CreateVerification(VerificationForm),
    UpdateVerification(VerificationEdit),
    FetchVerifications {
        page: u32,
    },
    DeleteVerification {
        id: RecordId,
    },
    FetchServiceTypes,
    FetchServiceInfo {
        service_type_id: RecordId,
    },
    DeleteService {
        id: RecordId,
    },
    DeleteServiceType {
        id: RecordId,
    },
    CreateServiceType {
        name: String,
    },
    FetchLocations,
    AddLocation(LocationForm),
    DeleteLocation {
        id: RecordId,
    },
    FetchPropertyStats,
    FetchProperties {
        page: u32,
        filter: Option<PropertyFilter>,
    },
    DeleteProperty {
        id: RecordId,
    },
    PersistAuth(PersistedAuth),
    ClearPersistedAuth,
}

impl Command {
    /// Key of the network request this command issues; `None` for local work.
    pub fn request_key(&self) -> Option<RequestKey> {
        let (operation, record) = match self {
            Self::Login(_) => (Operation::Login, None),
            Self::RegisterAdmin(_) => (Operation::RegisterAdmin, None),
            Self::FetchUsers => (Operation::FetchUsers, None),
            Self::FetchProfile { user_id } => (Operation::FetchProfile, Some(*user_id)),
            Self::FetchPropertyDetails { id } => (Operation::FetchPropertyDetails, Some(*id)),
            Self::DeleteOffice { id } => (Operation::DeleteOffice, Some(*id)),
            Self::FetchOfficeRequests => (Operation::FetchOfficeRequests, None),
            Self::SendOfficeRequest(_) => (Operation::SendOfficeRequest, None),
            Self::DeleteOfficeRequest { id } => (Operation::DeleteOfficeRequest, Some(*id)),
            Self::CreateVerification(_) => (Operation::CreateVerification, None),
            Self::UpdateVerification(edit) => (Operation::UpdateVerification, Some(edit.id)),
            Self::FetchVerifications { .. } => (Operation::FetchVerifications, None),
            Self::DeleteVerification { id } => (Operation::DeleteVerification, Some(*id)),
            Self::FetchServiceTypes => (Operation::FetchServiceTypes, None),
            Self::FetchServiceInfo { service_type_id } => {
                (Operation::FetchServiceInfo, Some(*service_type_id))
            }
            Self::DeleteService { id } => (Operation::DeleteService, Some(*id)),
            Self::DeleteServiceType { id } => (Operation::DeleteServiceType, Some(*id)),
            Self::CreateServiceType { .. } => (Operation::CreateServiceType, None),
            Self::FetchLocations => (Operation::FetchLocations, None),
            Self::AddLocation(_) => (Operation::AddLocation, None),
            Self::DeleteLocation { id } => (Operation::DeleteLocation, Some(*id)),
            Self::FetchPropertyStats => (Operation::FetchPropertyStats, None),
            Self::FetchProperties { .. } => (Operation::FetchProperties, None),
            Self::DeleteProperty { id } => (Operation::DeleteProperty, Some(*id)),
            Self::PersistAuth(_) | Self::ClearPersistedAuth => return None,
        };
        Some(RequestKey::new(operation, record))
    }
}
