use crate::domain::{
    AuthSession, ErrorPayload, Location, LocationForm, LoginForm, OfficeRequest,
    OfficeRequestForm, Page, Profile, Property, PropertyFilter, PropertyStats, RecordId,
    RegisterAdminForm, ServiceInfo, ServiceType, ServiceTypeForm, UserAccount, Verification,
    VerificationEdit, VerificationForm,
};
use crate::infra::storage::PersistedAuth;
use crate::ui::app::state::AppView;

use super::requests::Ticket;

#[derive(Debug)]
pub enum Action {
    Navigation(NavigationAction),
    Auth(AuthAction),
    Office(OfficeAction),
    Verification(VerificationAction),
    Services(ServicesAction),
    RealEstate(RealEstateAction),
    Complaints(ComplaintsAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum NavigationAction {
    SwitchTo(AppView),
    DismissMessages,
}

#[derive(Debug)]
pub enum AuthAction {
    /// Session read back from persisted storage at startup.
    Restore(PersistedAuth),
    Login(LoginForm),
    Logout,
    RegisterAdmin(RegisterAdminForm),
    FetchUsers,
    FetchProfile(RecordId),
    FetchPropertyDetails(RecordId),
}

#[derive(Debug)]
pub enum OfficeAction {
    DeleteOffice(RecordId),
    FetchRequests,
    SendRequest(OfficeRequestForm),
    DeleteRequest(RecordId),
}

#[derive(Debug)]
pub enum VerificationAction {
    Fetch { page: u32 },
    GoToPage(u32),
    NextPage,
    PreviousPage,
    /// Paginator link, e.g. `...?page=3`.
    FollowLink(String),
    Create(VerificationForm),
    BeginEdit(RecordId),
    UpdateDraft(VerificationEdit),
    CancelEdit,
    SubmitEdit,
    Delete(RecordId),
}

#[derive(Debug)]
pub enum ServicesAction {
    FetchTypes,
    Select(RecordId),
    DeleteService(RecordId),
    DeleteType(RecordId),
    CreateType(ServiceTypeForm),
}

#[derive(Debug)]
pub enum RealEstateAction {
    FetchLocations,
    AddLocation(LocationForm),
    DeleteLocation(RecordId),
    FetchStats,
    FetchProperties { page: u32 },
    GoToPage(u32),
    ApplyFilter(PropertyFilter),
    ClearFilter,
    DeleteProperty(RecordId),
}

#[derive(Debug)]
pub enum ComplaintsAction {
    MarkResolved(RecordId),
}

/// Lifecycle events posted back by the runtime.
#[derive(Debug)]
pub enum AsyncAction {
    Started(Ticket),
    Finished { ticket: Ticket, outcome: Outcome },
}

impl AsyncAction {
    pub fn ticket(&self) -> &Ticket {
        match self {
            Self::Started(ticket) | Self::Finished { ticket, .. } => ticket,
        }
    }
}

/// What a finished request produced, one variant per operation.
#[derive(Debug)]
pub enum Outcome {
    LoggedIn(Result<AuthSession, ErrorPayload>),
    AdminRegistered(Result<(), ErrorPayload>),
    UsersLoaded(Result<Vec<UserAccount>, ErrorPayload>),
    ProfileLoaded(Result<Profile, ErrorPayload>),
    PropertyDetailsLoaded(Result<Property, ErrorPayload>),
    OfficeDeleted {
        id: RecordId,
        result: Result<(), ErrorPayload>,
    },
    OfficeRequestsLoaded(Result<Vec<OfficeRequest>, ErrorPayload>),
    OfficeRequestSent(Result<OfficeRequest, ErrorPayload>),
    OfficeRequestDeleted {
        id: RecordId,
        result: Result<(), ErrorPayload>,
    },
    VerificationCreated(Result<Option<Verification>, ErrorPayload>),
    VerificationUpdated {
        id: RecordId,
        result: Result<Option<Verification>, ErrorPayload>,
    },
    VerificationsLoaded(Result<Page<Verification>, ErrorPayload>),
    VerificationDeleted {
        id: RecordId,
        result: Result<(), ErrorPayload>,
    },
    ServiceTypesLoaded(Result<Vec<ServiceType>, ErrorPayload>),
    ServiceInfoLoaded {
        service_type_id: RecordId,
        result: Result<Vec<ServiceInfo>, ErrorPayload>,
    },
    ServiceDeleted {
        id: RecordId,
        result: Result<(), ErrorPayload>,
    },
    ServiceTypeDeleted {
        id: RecordId,
        result: Result<(), ErrorPayload>,
    },
    ServiceTypeCreated(Result<ServiceType, ErrorPayload>),
    LocationsLoaded(Result<Vec<Location>, ErrorPayload>),
    LocationAdded(Result<Location, ErrorPayload>),
    LocationDeleted {
        id: RecordId,
        result: Result<(), ErrorPayload>,
    },
    PropertyStatsLoaded(Result<PropertyStats, ErrorPayload>),
    PropertiesLoaded(Result<Page<Property>, ErrorPayload>),
    PropertyDeleted {
        id: RecordId,
        result: Result<(), ErrorPayload>,
    },
}
