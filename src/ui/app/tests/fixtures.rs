use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tempfile::TempDir;

use crate::domain::*;
use crate::infra::api::{AdminApi, ApiError};
use crate::infra::storage::{PersistedAuth, PersistedStorage};
use crate::ui::app::AdminApp;

pub const PER_PAGE: usize = 2;

/// In-memory backend. Records every call; lists behave like the real
/// endpoints (deletes remove, creates assign the next id).
#[derive(Default)]
pub struct FakeApi {
    pub calls: Mutex<Vec<String>>,
    pub users: Mutex<Vec<UserAccount>>,
    pub verifications: Mutex<Vec<Verification>>,
    pub service_types: Mutex<Vec<ServiceType>>,
    pub service_info: Mutex<HashMap<RecordId, Vec<ServiceInfo>>>,
    pub locations: Mutex<Vec<Location>>,
    pub properties: Mutex<Vec<Property>>,
    /// Calls (by method name) that answer with this payload instead.
    pub failures: Mutex<HashMap<&'static str, ErrorPayload>>,
    next_id: Mutex<u64>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn fail(&self, method: &'static str, payload: ErrorPayload) {
        self.failures.lock().insert(method, payload);
    }

    fn record(&self, method: &'static str, detail: String) -> Result<(), ApiError> {
        self.calls.lock().push(format!("{method}{detail}"));
        match self.failures.lock().get(method) {
            Some(payload) => Err(ApiError::Status {
                status: 422,
                payload: payload.clone(),
            }),
            None => Ok(()),
        }
    }

    fn allocate_id(&self) -> RecordId {
        let mut next = self.next_id.lock();
        *next += 1;
        RecordId(1000 + *next)
    }
}

fn paged<T: Clone>(items: &[T], page: u32) -> Page<T> {
    let last_page = items.len().div_ceil(PER_PAGE).max(1) as u32;
    let start = (page.saturating_sub(1) as usize) * PER_PAGE;
    Page {
        data: items.iter().skip(start).take(PER_PAGE).cloned().collect(),
        current_page: page,
        last_page,
        links: vec![],
    }
}

pub fn user(id: u64, name: &str) -> UserAccount {
    UserAccount {
        id: Some(RecordId(id)),
        name: name.to_string(),
        ..Default::default()
    }
}

pub fn verification(id: u64) -> Verification {
    Verification {
        id: Some(RecordId(id)),
        national_no: format!("NAT-{id}"),
        identity_no: format!("ID-{id}"),
        user_id: Some(RecordId(100 + id)),
        ..Default::default()
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn login(&self, form: &LoginForm) -> Result<AuthSession, ApiError> {
        self.record("login", format!("({})", form.email))?;
        Ok(AuthSession {
            token: "fake-token".into(),
            user: user(1, "Admin"),
        })
    }

    async fn register_admin(&self, form: &RegisterAdminForm) -> Result<(), ApiError> {
        self.record("register_admin", format!("({})", form.email))
    }

    async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.record("list_users", String::new())?;
        Ok(self.users.lock().clone())
    }

    async fn profile(&self, user_id: RecordId) -> Result<Profile, ApiError> {
        self.record("profile", format!("({user_id})"))?;
        let owned = self
            .properties
            .lock()
            .iter()
            .filter(|p| p.user.as_ref().and_then(|u| u.id) == Some(user_id))
            .cloned()
            .collect();
        Ok(Profile {
            user: user(user_id.get(), "Owner"),
            real_estate: owned,
            ..Default::default()
        })
    }

    async fn property_details(&self, id: RecordId) -> Result<Property, ApiError> {
        self.record("property_details", format!("({id})"))?;
        self.properties
            .lock()
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                payload: ErrorPayload::message("Not found"),
            })
    }

    async fn delete_office(&self, id: RecordId) -> Result<(), ApiError> {
        self.record("delete_office", format!("({id})"))?;
        self.users.lock().retain(|u| u.id != Some(id));
        Ok(())
    }

    async fn list_office_requests(&self) -> Result<Vec<OfficeRequest>, ApiError> {
        self.record("list_office_requests", String::new())?;
        Ok(vec![])
    }

    async fn send_office_request(
        &self,
        form: &OfficeRequestForm,
    ) -> Result<OfficeRequest, ApiError> {
        self.record("send_office_request", String::new())?;
        Ok(OfficeRequest {
            id: Some(self.allocate_id()),
            fields: form
                .fields
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        })
    }

    async fn delete_office_request(&self, id: RecordId) -> Result<(), ApiError> {
        self.record("delete_office_request", format!("({id})"))
    }

    async fn create_verification(
        &self,
        form: &VerificationForm,
    ) -> Result<Option<Verification>, ApiError> {
        self.record("create_verification", String::new())?;
        let created = Verification {
            id: Some(self.allocate_id()),
            national_no: form.national_no.clone(),
            identity_no: form.identity_no.clone(),
            user_id: form.user_id,
            ..Default::default()
        };
        self.verifications.lock().push(created.clone());
        Ok(Some(created))
    }

    async fn update_verification(
        &self,
        edit: &VerificationEdit,
    ) -> Result<Option<Verification>, ApiError> {
        self.record("update_verification", format!("({})", edit.id))?;
        let mut rows = self.verifications.lock();
        let Some(row) = rows.iter_mut().find(|v| v.id == Some(edit.id)) else {
            return Ok(None);
        };
        row.national_no = edit.national_no.clone();
        row.identity_no = edit.identity_no.clone();
        row.user_id = edit.user_id;
        row.activation = edit.activation;
        Ok(Some(row.clone()))
    }

    async fn list_verifications(&self, page: u32) -> Result<Page<Verification>, ApiError> {
        self.record("list_verifications", format!("({page})"))?;
        Ok(paged(&self.verifications.lock(), page))
    }

    async fn delete_verification(&self, id: RecordId) -> Result<(), ApiError> {
        self.record("delete_verification", format!("({id})"))?;
        self.verifications.lock().retain(|v| v.id != Some(id));
        Ok(())
    }

    async fn list_service_types(&self) -> Result<Vec<ServiceType>, ApiError> {
        self.record("list_service_types", String::new())?;
        Ok(self.service_types.lock().clone())
    }

    async fn service_info(&self, service_type_id: RecordId) -> Result<Vec<ServiceInfo>, ApiError> {
        self.record("service_info", format!("({service_type_id})"))?;
        Ok(self
            .service_info
            .lock()
            .get(&service_type_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_service(&self, id: RecordId) -> Result<(), ApiError> {
        self.record("delete_service", format!("({id})"))?;
        for infos in self.service_info.lock().values_mut() {
            infos.retain(|info| info.id != Some(id));
        }
        Ok(())
    }

    async fn delete_service_type(&self, id: RecordId) -> Result<(), ApiError> {
        self.record("delete_service_type", format!("({id})"))?;
        self.service_types.lock().retain(|t| t.id != Some(id));
        Ok(())
    }

    async fn create_service_type(&self, name: &str) -> Result<ServiceType, ApiError> {
        self.record("create_service_type", format!("({name})"))?;
        let created = ServiceType {
            id: Some(self.allocate_id()),
            name: name.to_string(),
        };
        self.service_types.lock().push(created.clone());
        Ok(created)
    }

    async fn list_locations(&self) -> Result<Vec<Location>, ApiError> {
        self.record("list_locations", String::new())?;
        Ok(self.locations.lock().clone())
    }

    async fn add_location(&self, form: &LocationForm) -> Result<Location, ApiError> {
        self.record("add_location", format!("({}/{})", form.city, form.district))?;
        let created = Location {
            id: Some(self.allocate_id()),
            city: form.city.clone(),
            district: form.district.clone(),
        };
        self.locations.lock().push(created.clone());
        Ok(created)
    }

    async fn delete_location(&self, id: RecordId) -> Result<(), ApiError> {
        self.record("delete_location", format!("({id})"))?;
        self.locations.lock().retain(|l| l.id != Some(id));
        Ok(())
    }

    async fn property_stats(&self) -> Result<PropertyStats, ApiError> {
        self.record("property_stats", String::new())?;
        let mut stats = PropertyStats::default();
        stats.counts.insert(
            "total".into(),
            serde_json::json!(self.properties.lock().len()),
        );
        Ok(stats)
    }

    async fn list_properties(
        &self,
        page: u32,
        filter: Option<&PropertyFilter>,
    ) -> Result<Page<Property>, ApiError> {
        let kind = filter.map(|f| f.kind.clone()).unwrap_or_default();
        self.record("list_properties", format!("({page},{kind})"))?;
        let rows: Vec<Property> = self
            .properties
            .lock()
            .iter()
            .filter(|p| kind.is_empty() || p.kind.as_deref() == Some(kind.as_str()))
            .cloned()
            .collect();
        Ok(paged(&rows, page))
    }

    async fn delete_property(&self, id: RecordId) -> Result<(), ApiError> {
        self.record("delete_property", format!("({id})"))?;
        self.properties.lock().retain(|p| p.id != Some(id));
        Ok(())
    }
}

/// An app over `api` with storage in a temp dir. The dir must outlive the app.
pub fn app_with(api: Arc<FakeApi>, signed_in: bool) -> (AdminApp, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let storage = Arc::new(PersistedStorage::new(dir.path().join("storage.json")));
    if signed_in {
        storage
            .save_auth(&PersistedAuth {
                token: Some("fake-token".into()),
                user: Some(user(1, "Admin")),
            })
            .expect("seed session");
    }
    (AdminApp::new(api, storage), dir)
}
