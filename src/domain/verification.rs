use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ids::{Identified, RecordId};

/// Whether a verified office is switched on. The backend writes it as the
/// strings `"1"` / `"0"` but older rows carry plain integers or booleans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Activation {
    Active,
    #[default]
    Inactive,
}

impl Activation {
    pub fn as_form_value(self) -> &'static str {
        match self {
            Self::Active => "1",
            Self::Inactive => "0",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}

impl std::str::FromStr for Activation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "active" => Ok(Self::Active),
            "0" | "false" | "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown activation value: {other}")),
        }
    }
}

impl Serialize for Activation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_form_value())
    }
}

impl<'de> Deserialize<'de> for Activation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let active = match &value {
            serde_json::Value::String(s) => s.parse::<Activation>().map_err(serde::de::Error::custom)?
                == Activation::Active,
            serde_json::Value::Number(n) => n.as_u64() == Some(1),
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Null => false,
            other => {
                return Err(serde::de::Error::custom(format!(
                    "unexpected activation value: {other}"
                )));
            }
        };
        Ok(if active { Self::Active } else { Self::Inactive })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
}

/// An identity verification request filed for an office account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub national_no: String,
    #[serde(default)]
    pub identity_no: String,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub activation: Activation,
    /// Storage-relative path of the uploaded identity image.
    #[serde(default)]
    pub identity_image: Option<String>,
    #[serde(default)]
    pub contract_image: Option<String>,
    #[serde(default)]
    pub users_info: Option<UserSummary>,
}

impl Verification {
    pub fn owner_name(&self) -> &str {
        self.users_info
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .unwrap_or("N/A")
    }
}

impl Identified for Verification {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_accepts_every_backend_spelling() {
        for raw in [r#""1""#, "1", "true"] {
            let v: Activation = serde_json::from_str(raw).unwrap();
            assert_eq!(v, Activation::Active, "{raw}");
        }
        for raw in [r#""0""#, "0", "false", "null"] {
            let v: Activation = serde_json::from_str(raw).unwrap();
            assert_eq!(v, Activation::Inactive, "{raw}");
        }
        assert!(serde_json::from_str::<Activation>(r#""maybe""#).is_err());
    }

    #[test]
    fn verification_without_owner_reads_na() {
        let v: Verification =
            serde_json::from_str(r#"{"id":1,"national_no":"123","identity_no":"9"}"#).unwrap();
        assert_eq!(v.owner_name(), "N/A");
        assert_eq!(v.activation, Activation::Inactive);
    }
}
