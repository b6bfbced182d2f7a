//! Error shapes shared by the store and the views.
//!
//! Two families live here: [`ErrorPayload`], which is whatever the backend
//! said went wrong and is stored verbatim in a slice, and [`FieldErrors`],
//! produced by client-side form checks before any request leaves.

use std::collections::BTreeMap;
use std::fmt;

/// Failure detail attached to a rejected request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPayload {
    /// Backend validation failure: field name → messages.
    Validation {
        message: Option<String>,
        errors: BTreeMap<String, Vec<String>>,
    },
    /// Anything else: a backend `message`, or a fallback when the body was
    /// unusable or the request never got a response.
    Message(String),
}

impl ErrorPayload {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// Decode an error response body, falling back to `fallback` when the body
    /// carries neither `errors` nor `message`.
    pub fn from_body(body: &[u8], fallback: impl Into<String>) -> Self {
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
            return Self::Message(fallback.into());
        };
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        let errors = value
            .get("errors")
            .and_then(serde_json::Value::as_object)
            .map(field_errors)
            .unwrap_or_default();
        match (message, errors.is_empty()) {
            (message, false) => Self::Validation { message, errors },
            (Some(message), true) => Self::Message(message),
            (None, true) => Self::Message(fallback.into()),
        }
    }

    /// The single line a banner shows: first field message if any, otherwise
    /// the message.
    pub fn headline(&self) -> String {
        match self {
            Self::Validation { message, errors } => errors
                .values()
                .flat_map(|messages| messages.first())
                .next()
                .cloned()
                .or_else(|| message.clone())
                .unwrap_or_else(|| "Validation failed".to_string()),
            Self::Message(message) => message.clone(),
        }
    }

    pub fn field_messages(&self, field: &str) -> &[String] {
        match self {
            Self::Validation { errors, .. } => {
                errors.get(field).map(Vec::as_slice).unwrap_or_default()
            }
            Self::Message(_) => &[],
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline())
    }
}

/// Field messages out of an `errors` object. Each field is normally a list of
/// strings; a bare string is taken as a single message and anything else is
/// kept as its JSON text.
fn field_errors(
    raw: &serde_json::Map<String, serde_json::Value>,
) -> BTreeMap<String, Vec<String>> {
    let text = |value: &serde_json::Value| match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    };
    raw.iter()
        .filter_map(|(field, value)| {
            let messages: Vec<String> = match value {
                serde_json::Value::Array(items) => items.iter().map(text).collect(),
                serde_json::Value::Null => Vec::new(),
                other => vec![text(other)],
            };
            (!messages.is_empty()).then(|| (field.clone(), messages))
        })
        .collect()
}

/// Client-side validation result: field name → message shown beside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_body_keeps_every_field() {
        let body = br#"{"message":"The given data was invalid.","errors":{"email":["The email has already been taken."],"name":["Too short"]}}"#;
        let payload = ErrorPayload::from_body(body, "Request failed");

        assert_eq!(payload.field_messages("name"), ["Too short".to_string()]);
        assert_eq!(payload.headline(), "The email has already been taken.");
    }

    #[test]
    fn message_body_and_garbage_body() {
        let payload = ErrorPayload::from_body(br#"{"message":"Unauthenticated."}"#, "x");
        assert_eq!(payload, ErrorPayload::message("Unauthenticated."));

        let payload = ErrorPayload::from_body(b"<html>502</html>", "Bad Gateway");
        assert_eq!(payload, ErrorPayload::message("Bad Gateway"));
    }

    #[test]
    fn odd_errors_shape_keeps_the_message() {
        let payload = ErrorPayload::from_body(
            br#"{"message":"The email has already been taken.","errors":{"email":"taken","code":[422]}}"#,
            "Unprocessable Content",
        );
        assert_eq!(payload.field_messages("email"), ["taken".to_string()]);
        assert_eq!(payload.field_messages("code"), ["422".to_string()]);

        let payload = ErrorPayload::from_body(
            br#"{"message":"Server Error","errors":"boom"}"#,
            "Internal Server Error",
        );
        assert_eq!(payload, ErrorPayload::message("Server Error"));
    }

    #[test]
    fn empty_errors_map_falls_back_to_message() {
        let payload = ErrorPayload::from_body(br#"{"message":"nope","errors":{}}"#, "x");
        assert_eq!(payload, ErrorPayload::message("nope"));
    }

    #[test]
    fn first_recorded_field_message_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("password", "This field is required.");
        errors.insert("password", "ignored");
        assert_eq!(errors.get("password"), Some("This field is required."));
        assert!(errors.into_result(()).is_err());
    }
}
