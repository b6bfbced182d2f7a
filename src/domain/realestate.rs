use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::{Identified, RecordId};
use super::verification::UserSummary;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
}

impl Identified for Location {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

/// Listing kind as the search form names it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[default]
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Rent => "rent",
        }
    }
}

impl std::str::FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sale" | "buy" => Ok(Self::Sale),
            "rent" => Ok(Self::Rent),
            other => Err(format!("unknown listing type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyImage {
    #[serde(default)]
    pub name: String,
}

/// A real-estate listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(rename = "type", default)]
    pub listing_type: Option<ListingType>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Property {
    pub fn place(&self) -> String {
        match &self.location {
            Some(loc) => format!("{} - {}", loc.city, loc.district),
            None => "N/A".to_string(),
        }
    }
}

impl Identified for Property {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

/// Dashboard counters; the backend picks the keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyStats {
    pub counts: BTreeMap<String, serde_json::Value>,
}

impl PropertyStats {
    pub fn count(&self, key: &str) -> Option<u64> {
        self.counts.get(key).and_then(|v| match v {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        })
    }
}
