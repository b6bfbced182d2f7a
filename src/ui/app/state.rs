use crate::domain::{
    Complaint, FieldErrors, Location, OfficeRequest, Profile, Property, PropertyFilter,
    PropertyStats, RecordId, ServiceInfo, ServiceType, UserAccount, Verification,
    VerificationEdit, seed_complaints,
};

use super::store::{ListCollection, Pagination, RequestState, RequestTracker, SliceId};

/// Which page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Dashboard,
    Login,
    RegisterAdmin,
    OfficeManagement,
    LocationManagement,
    ServicesManagement,
    VerificationForm,
    VerificationList,
    Profile(RecordId),
    PropertyDetails(RecordId),
    Properties,
    Complaints,
}

impl AppView {
    /// Login and admin registration are reachable without a session.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Login | Self::RegisterAdmin)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Login => "Admin Login",
            Self::RegisterAdmin => "Register Admin",
            Self::OfficeManagement => "Office Management",
            Self::LocationManagement => "Location Management",
            Self::ServicesManagement => "Services Management",
            Self::VerificationForm => "Verification Form",
            Self::VerificationList => "Verifications",
            Self::Profile(_) => "Profile",
            Self::PropertyDetails(_) => "Property Details",
            Self::Properties => "Real Estate",
            Self::Complaints => "Complaints",
        }
    }
}

/// Page-local state: the active view, the current form's client-side errors
/// and the last success message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub current_view: AppView,
    pub form_errors: FieldErrors,
    pub success: Option<String>,
}

impl UiState {
    pub fn clear_messages(&mut self) {
        self.form_errors = FieldErrors::new();
        self.success = None;
    }
}

/// Session, the office/user list, and the single-record pages (profile and
/// property details).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSlice {
    pub request: RequestState,
    pub user: Option<UserAccount>,
    pub token: Option<String>,
    pub users: ListCollection<UserAccount>,
    pub profile: Option<Profile>,
    pub property_details: Option<Property>,
}

impl AuthSlice {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfficeSlice {
    pub request: RequestState,
    pub requests: ListCollection<OfficeRequest>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationSlice {
    pub request: RequestState,
    pub items: ListCollection<Verification>,
    pub pagination: Pagination,
    /// Open edit dialog, if any.
    pub editing: Option<VerificationEdit>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicesSlice {
    pub request: RequestState,
    pub service_types: ListCollection<ServiceType>,
    pub selected_id: Option<RecordId>,
    pub selected_info: ListCollection<ServiceInfo>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealEstateSlice {
    pub request: RequestState,
    pub locations: ListCollection<Location>,
    pub properties: ListCollection<Property>,
    pub pagination: Pagination,
    /// Filter applied to the listing; kept across page changes.
    pub filter: Option<PropertyFilter>,
    pub stats: Option<PropertyStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintsSlice {
    pub items: ListCollection<Complaint>,
}

impl Default for ComplaintsSlice {
    fn default() -> Self {
        Self {
            items: seed_complaints().into(),
        }
    }
}

/// All app state in one struct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub ui: UiState,
    pub auth: AuthSlice,
    pub office: OfficeSlice,
    pub verification: VerificationSlice,
    pub services: ServicesSlice,
    pub real_estate: RealEstateSlice,
    pub complaints: ComplaintsSlice,
    pub requests: RequestTracker,
}

impl AppState {
    pub fn request_state(&self, slice: SliceId) -> &RequestState {
        match slice {
            SliceId::Auth => &self.auth.request,
            SliceId::Office => &self.office.request,
            SliceId::Verification => &self.verification.request,
            SliceId::Services => &self.services.request,
            SliceId::RealEstate => &self.real_estate.request,
        }
    }

    pub fn request_state_mut(&mut self, slice: SliceId) -> &mut RequestState {
        match slice {
            SliceId::Auth => &mut self.auth.request,
            SliceId::Office => &mut self.office.request,
            SliceId::Verification => &mut self.verification.request,
            SliceId::Services => &mut self.services.request,
            SliceId::RealEstate => &mut self.real_estate.request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_login_and_registration_are_public() {
        assert!(!AppView::Login.requires_auth());
        assert!(!AppView::RegisterAdmin.requires_auth());
        assert!(AppView::Dashboard.requires_auth());
        assert!(AppView::Profile(RecordId(3)).requires_auth());
    }

    #[test]
    fn blank_token_is_not_a_session() {
        let auth = AuthSlice {
            token: Some(String::new()),
            ..Default::default()
        };
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn complaints_open_with_seed_rows() {
        assert_eq!(ComplaintsSlice::default().items.len(), 4);
    }
}
