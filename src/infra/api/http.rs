//! REST client for the marketplace backend.
//!
//! Wraps the backend HTTP API with [`reqwest`]. Every request re-reads the
//! bearer token from [`PersistedStorage`], so a login or logout in another
//! process is picked up without rebuilding the client.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

use super::error::ApiError;
use super::traits::AdminApi;
use crate::domain::{
    AuthSession, Envelope, ErrorPayload, Location, LocationForm, LoginForm, OfficeRequest,
    OfficeRequestForm, Page, Profile, Property, PropertyFilter, PropertyStats, RecordId,
    RegisterAdminForm, ServiceInfo, ServiceType, ServiceTypeDetails, UserAccount, Verification,
    VerificationEdit, VerificationForm,
};
use crate::infra::storage::PersistedStorage;

/// `data` is either a bare list or a paginator depending on the endpoint
/// version; both flatten to the rows.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ListOrPage<T> {
    List(Vec<T>),
    Page(Page<T>),
}

impl<T> ListOrPage<T> {
    fn into_rows(self) -> Vec<T> {
        match self {
            Self::List(rows) => rows,
            Self::Page(page) => page.data,
        }
    }
}

pub struct HttpAdminApi {
    client: reqwest::Client,
    base_url: String,
    storage: Arc<PersistedStorage>,
}

impl HttpAdminApi {
    /// * `base_url` - e.g. `http://localhost:8000/api`; a trailing slash is ignored.
    pub fn new(base_url: impl Into<String>, storage: Arc<PersistedStorage>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, storage)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        storage: Arc<PersistedStorage>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            storage,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");
        match self.storage.read_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`ApiError::Status`] carrying the
    /// decoded error body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.bytes().await.unwrap_or_default();
        let fallback = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        Err(ApiError::Status {
            status: status.as_u16(),
            payload: ErrorPayload::from_body(&body, fallback),
        })
    }

    async fn send_value(builder: RequestBuilder) -> Result<serde_json::Value, ApiError> {
        let response = Self::ensure_success(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Decode the `data` member of the envelope.
    async fn send_data<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let value = Self::send_value(builder).await?;
        let envelope: Envelope<T> = serde_json::from_value(value)?;
        Ok(envelope.data)
    }

    /// Like [`Self::send_data`] but tolerates a missing or unrecognised `data`.
    async fn send_optional<T: DeserializeOwned>(
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let value = Self::send_value(builder).await?;
        Ok(value
            .get("data")
            .cloned()
            .and_then(|data| serde_json::from_value(data).ok()))
    }

    async fn send_unit(builder: RequestBuilder) -> Result<(), ApiError> {
        Self::ensure_success(builder.send().await?).await?;
        Ok(())
    }

    async fn attachment(path: &Path) -> Result<Part, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ApiError::Attachment {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        let part = Part::bytes(bytes).file_name(file_name);
        match image_mime(path) {
            Some(mime) => Ok(part.mime_str(mime)?),
            None => Ok(part),
        }
    }
}

fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

fn optional_id(id: Option<RecordId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn login(&self, form: &LoginForm) -> Result<AuthSession, ApiError> {
        Self::send_data(self.request(Method::POST, "/login").json(form)).await
    }

    async fn register_admin(&self, form: &RegisterAdminForm) -> Result<(), ApiError> {
        let body = Form::new()
            .text("name", form.name.trim().to_string())
            .text("email", form.email.trim().to_string())
            .text("password", form.password.clone())
            .text("role", RegisterAdminForm::ADMIN_ROLE);
        Self::send_unit(
            self.request(Method::POST, "/admin/registerAdmin")
                .multipart(body),
        )
        .await
    }

    async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        Self::send_data(self.request(Method::GET, "/admin/users")).await
    }

    async fn profile(&self, user_id: RecordId) -> Result<Profile, ApiError> {
        Self::send_data(self.request(Method::GET, &format!("/profile/{user_id}"))).await
    }

    async fn property_details(&self, id: RecordId) -> Result<Property, ApiError> {
        Self::send_data(self.request(Method::GET, &format!("/RealEstate/getDetails/{id}"))).await
    }

    async fn delete_office(&self, id: RecordId) -> Result<(), ApiError> {
        Self::send_unit(self.request(Method::POST, &format!("/admin/delete/{id}"))).await
    }

    async fn list_office_requests(&self) -> Result<Vec<OfficeRequest>, ApiError> {
        let rows: ListOrPage<OfficeRequest> =
            Self::send_data(self.request(Method::GET, "/office/indexSent")).await?;
        Ok(rows.into_rows())
    }

    async fn send_office_request(
        &self,
        form: &OfficeRequestForm,
    ) -> Result<OfficeRequest, ApiError> {
        Self::send_data(self.request(Method::POST, "/office/send-request").json(form)).await
    }

    async fn delete_office_request(&self, id: RecordId) -> Result<(), ApiError> {
        Self::send_unit(self.request(Method::POST, &format!("/office/delete/{id}"))).await
    }

    async fn create_verification(
        &self,
        form: &VerificationForm,
    ) -> Result<Option<Verification>, ApiError> {
        let mut body = Form::new()
            .text("national_no", form.national_no.trim().to_string())
            .text("identity_no", form.identity_no.trim().to_string())
            .text("user_id", optional_id(form.user_id));
        if let Some(path) = &form.identity_image {
            body = body.part("identity_image", Self::attachment(path).await?);
        }
        if let Some(path) = &form.contract_image {
            body = body.part("contract_image", Self::attachment(path).await?);
        }
        Self::send_optional(
            self.request(Method::POST, "/admin/verifications/create")
                .multipart(body),
        )
        .await
    }

    async fn update_verification(
        &self,
        edit: &VerificationEdit,
    ) -> Result<Option<Verification>, ApiError> {
        let mut body = Form::new()
            .text("national_no", edit.national_no.trim().to_string())
            .text("identity_no", edit.identity_no.trim().to_string())
            .text("user_id", optional_id(edit.user_id))
            .text("activation", edit.activation.as_form_value());
        if let Some(path) = &edit.identity_image {
            body = body.part("identity_image", Self::attachment(path).await?);
        }
        if let Some(path) = &edit.contract_image {
            body = body.part("contract_image", Self::attachment(path).await?);
        }
        Self::send_optional(
            self.request(Method::POST, &format!("/ver/update/{}", edit.id))
                .multipart(body),
        )
        .await
    }

    async fn list_verifications(&self, page: u32) -> Result<Page<Verification>, ApiError> {
        Self::send_data(
            self.request(Method::GET, "/admin/verifications")
                .query(&[("page", page)]),
        )
        .await
    }

    async fn delete_verification(&self, id: RecordId) -> Result<(), ApiError> {
        Self::send_unit(self.request(
            Method::POST,
            &format!("/admin/verifications/delete/{id}"),
        ))
        .await
    }

    async fn list_service_types(&self) -> Result<Vec<ServiceType>, ApiError> {
        Self::send_data(self.request(Method::GET, "/services/servicesType/")).await
    }

    async fn service_info(&self, service_type_id: RecordId) -> Result<Vec<ServiceInfo>, ApiError> {
        let details: ServiceTypeDetails = Self::send_data(self.request(
            Method::GET,
            &format!("/services/servicesType/{service_type_id}"),
        ))
        .await?;
        Ok(details.services_info)
    }

    async fn delete_service(&self, id: RecordId) -> Result<(), ApiError> {
        Self::send_unit(self.request(Method::POST, &format!("/services/delete/{id}"))).await
    }

    async fn delete_service_type(&self, id: RecordId) -> Result<(), ApiError> {
        Self::send_unit(self.request(Method::POST, &format!("/admin/serviceTypes/{id}"))).await
    }

    async fn create_service_type(&self, name: &str) -> Result<ServiceType, ApiError> {
        Self::send_data(
            self.request(Method::POST, "/admin/serviceTypes")
                .json(&serde_json::json!({ "type": name })),
        )
        .await
    }

    async fn list_locations(&self) -> Result<Vec<Location>, ApiError> {
        let rows: ListOrPage<Location> =
            Self::send_data(self.request(Method::GET, "/location/index")).await?;
        Ok(rows.into_rows())
    }

    async fn add_location(&self, form: &LocationForm) -> Result<Location, ApiError> {
        let body = LocationForm {
            city: form.city.trim().to_string(),
            district: form.district.trim().to_string(),
        };
        Self::send_data(self.request(Method::POST, "/location/store").json(&body)).await
    }

    async fn delete_location(&self, id: RecordId) -> Result<(), ApiError> {
        Self::send_unit(self.request(Method::POST, &format!("/location/delete/{id}"))).await
    }

    async fn property_stats(&self) -> Result<PropertyStats, ApiError> {
        Self::send_data(self.request(Method::GET, "/RealEstate/status")).await
    }

    async fn list_properties(
        &self,
        page: u32,
        filter: Option<&PropertyFilter>,
    ) -> Result<Page<Property>, ApiError> {
        let mut builder = self
            .request(Method::POST, "/RealEstate/index")
            .query(&[("page", page)]);
        if let Some(filter) = filter {
            let body = filter
                .form_fields()
                .into_iter()
                .fold(Form::new(), |form, (name, value)| form.text(name, value));
            builder = builder.multipart(body);
        }
        Self::send_data(builder).await
    }

    async fn delete_property(&self, id: RecordId) -> Result<(), ApiError> {
        Self::send_unit(self.request(Method::POST, &format!("/RealEstate/delete/{id}"))).await
    }
}
