use async_trait::async_trait;

use super::error::ApiError;
use crate::domain::{
    AuthSession, Location, LocationForm, LoginForm, OfficeRequest, OfficeRequestForm, Page,
    Profile, Property, PropertyFilter, PropertyStats, RecordId, RegisterAdminForm, ServiceInfo,
    ServiceType, UserAccount, Verification, VerificationEdit, VerificationForm,
};

/// The backend as the store sees it: one method per REST call.
///
/// Each call is exactly one HTTP request. Implementations never retry.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn login(&self, form: &LoginForm) -> Result<AuthSession, ApiError>;
    async fn register_admin(&self, form: &RegisterAdminForm) -> Result<(), ApiError>;
    async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError>;
    async fn profile(&self, user_id: RecordId) -> Result<Profile, ApiError>;
    async fn property_details(&self, id: RecordId) -> Result<Property, ApiError>;

    async fn delete_office(&self, id: RecordId) -> Result<(), ApiError>;
    async fn list_office_requests(&self) -> Result<Vec<OfficeRequest>, ApiError>;
    async fn send_office_request(
        &self,
        form: &OfficeRequestForm,
    ) -> Result<OfficeRequest, ApiError>;
    async fn delete_office_request(&self, id: RecordId) -> Result<(), ApiError>;

    async fn create_verification(
        &self,
        form: &VerificationForm,
    ) -> Result<Option<Verification>, ApiError>;
    async fn update_verification(
        &self,
        edit: &VerificationEdit,
    ) -> Result<Option<Verification>, ApiError>;
    async fn list_verifications(&self, page: u32) -> Result<Page<Verification>, ApiError>;
    async fn delete_verification(&self, id: RecordId) -> Result<(), ApiError>;

    async fn list_service_types(&self) -> Result<Vec<ServiceType>, ApiError>;
    async fn service_info(&self, service_type_id: RecordId) -> Result<Vec<ServiceInfo>, ApiError>;
    async fn delete_service(&self, id: RecordId) -> Result<(), ApiError>;
    async fn delete_service_type(&self, id: RecordId) -> Result<(), ApiError>;
    async fn create_service_type(&self, name: &str) -> Result<ServiceType, ApiError>;

    async fn list_locations(&self) -> Result<Vec<Location>, ApiError>;
    async fn add_location(&self, form: &LocationForm) -> Result<Location, ApiError>;
    async fn delete_location(&self, id: RecordId) -> Result<(), ApiError>;

    async fn property_stats(&self) -> Result<PropertyStats, ApiError>;
    async fn list_properties(
        &self,
        page: u32,
        filter: Option<&PropertyFilter>,
    ) -> Result<Page<Property>, ApiError>;
    async fn delete_property(&self, id: RecordId) -> Result<(), ApiError>;
}
