use serde::{Deserialize, Serialize};

use super::ids::{Identified, RecordId};
use super::realestate::Property;
use super::service::ServiceInfo;

/// An admin or office account as `/admin/users` lists it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Identified for UserAccount {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

/// What a successful login hands back: the account plus its bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(flatten)]
    pub user: UserAccount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub full_address: Option<String>,
}

/// `/profile/{id}`: an account with the listings and services it owns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub user: UserAccount,
    #[serde(default, rename = "realEstate")]
    pub real_estate: Vec<Property>,
    #[serde(default, rename = "service")]
    pub services: Vec<ServiceInfo>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// A request an office sent to the administration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficeRequest {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Identified for OfficeRequest {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_payload_splits_token_from_account() {
        let session: AuthSession = serde_json::from_str(
            r#"{"id":7,"name":"Admin","email":"a@b.c","token":"tok","role":1}"#,
        )
        .unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.user.id, Some(RecordId(7)));
        assert_eq!(session.user.extra.get("role"), Some(&serde_json::json!(1)));
        assert!(!session.user.extra.contains_key("token"));
    }

    #[test]
    fn profile_reads_backend_keys() {
        let profile: Profile = serde_json::from_str(
            r#"{"user":{"id":"3","name":"Office"},"realEstate":[{"id":9,"price":100}],"service":[]}"#,
        )
        .unwrap();
        assert_eq!(profile.user.id, Some(RecordId(3)));
        assert_eq!(profile.real_estate.len(), 1);
        assert!(profile.services.is_empty());
    }
}
