use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Backend record identifier.
///
/// The backend sends ids as JSON numbers on most endpoints and as numeric
/// strings on a few (form echoes, multipart responses). Both decode to the same
/// value here so list filtering and selection clearing compare like with like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

struct RecordIdVisitor;

impl Visitor<'_> for RecordIdVisitor {
    type Value = RecordId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer id or a numeric string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RecordId, E> {
        Ok(RecordId(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RecordId, E> {
        u64::try_from(v)
            .map(RecordId)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RecordId, E> {
        log::debug!("record id {v:?} arrived as a string");
        v.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecordIdVisitor)
    }
}

/// Anything kept in a [`crate::ui::app::store::ListCollection`].
///
/// `None` means the backend returned the record without an id; such records
/// are still listed but never match a delete or an in-place update.
pub trait Identified {
    fn record_id(&self) -> Option<RecordId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numbers_and_numeric_strings_alike() {
        let from_number: RecordId = serde_json::from_str("42").unwrap();
        let from_string: RecordId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(serde_json::from_str::<RecordId>("\"abc\"").is_err());
        assert!(serde_json::from_str::<RecordId>("-3").is_err());
    }
}
