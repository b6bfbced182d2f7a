use serde::{Deserialize, Serialize};

use super::ids::{Identified, RecordId};
use super::verification::UserSummary;

/// A main service category, e.g. "Plumbing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(rename = "type", default)]
    pub name: String,
}

impl Identified for ServiceType {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

/// A service published by an office under a main type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub users_info: Option<UserSummary>,
}

impl Identified for ServiceInfo {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

/// `/services/servicesType/{id}` body under `data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceTypeDetails {
    #[serde(default)]
    pub services_info: Vec<ServiceInfo>,
}
