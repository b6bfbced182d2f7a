//! Form inputs and the checks run on them before anything is sent.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::error::FieldErrors;
use super::ids::RecordId;
use super::realestate::ListingType;
use super::verification::Activation;

pub const REQUIRED: &str = "This field is required.";
pub const IMAGE_REQUIRED: &str = "Image is required.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const INVALID_NUMBER: &str = "Must be a valid number.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const LOCATION_REQUIRED: &str = "Both city and district fields are required.";

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex");
}

fn require(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, REQUIRED);
    }
}

fn require_email(errors: &mut FieldErrors, field: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, REQUIRED);
    } else if !EMAIL_RE.is_match(value) {
        errors.insert(field, INVALID_EMAIL);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_email(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.insert("password", REQUIRED);
        }
        errors.into_result(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterAdminForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterAdminForm {
    /// Role value the backend uses for administrators.
    pub const ADMIN_ROLE: &'static str = "1";

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require_email(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.insert("password", REQUIRED);
        } else if self.password.chars().count() < 8 {
            errors.insert("password", PASSWORD_TOO_SHORT);
        }
        errors.into_result(())
    }
}

/// New verification request; both images are mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationForm {
    pub national_no: String,
    pub identity_no: String,
    pub user_id: Option<RecordId>,
    pub identity_image: Option<PathBuf>,
    pub contract_image: Option<PathBuf>,
}

impl VerificationForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "national_no", &self.national_no);
        require(&mut errors, "identity_no", &self.identity_no);
        if self.user_id.is_none() {
            errors.insert("user_id", REQUIRED);
        }
        if self.identity_image.is_none() {
            errors.insert("identity_image", IMAGE_REQUIRED);
        }
        if self.contract_image.is_none() {
            errors.insert("contract_image", IMAGE_REQUIRED);
        }
        errors.into_result(())
    }
}

/// Edit of an existing verification. Images are only uploaded when replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEdit {
    pub id: RecordId,
    pub national_no: String,
    pub identity_no: String,
    pub user_id: Option<RecordId>,
    pub activation: Activation,
    pub identity_image: Option<PathBuf>,
    pub contract_image: Option<PathBuf>,
}

impl VerificationEdit {
    pub fn from_record(record: &super::verification::Verification) -> Option<Self> {
        Some(Self {
            id: record.id?,
            national_no: record.national_no.clone(),
            identity_no: record.identity_no.clone(),
            user_id: record.user_id,
            activation: record.activation,
            identity_image: None,
            contract_image: None,
        })
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "national_no", &self.national_no);
        require(&mut errors, "identity_no", &self.identity_no);
        if self.user_id.is_none() {
            errors.insert("user_id", REQUIRED);
        }
        errors.into_result(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationForm {
    pub city: String,
    pub district: String,
}

impl LocationForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.city.trim().is_empty() || self.district.trim().is_empty() {
            errors.insert("city", LOCATION_REQUIRED);
            errors.insert("district", LOCATION_REQUIRED);
        }
        errors.into_result(())
    }
}

/// New main service type. The name is sent trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceTypeForm {
    pub name: String,
}

impl ServiceTypeForm {
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let name = self.name.trim();
        let mut errors = FieldErrors::new();
        if name.is_empty() {
            errors.insert("type", REQUIRED);
        }
        errors.into_result(name.to_string())
    }
}

/// Free-form request an office sends to the administration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OfficeRequestForm {
    pub fields: BTreeMap<String, String>,
}

impl OfficeRequestForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.fields.is_empty() {
            errors.insert("request", REQUIRED);
        }
        for (name, value) in &self.fields {
            require(&mut errors, name, value);
        }
        errors.into_result(())
    }
}

/// Property search filter. Blank fields are sent blank, which the backend
/// treats as "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFilter {
    pub listing_type: ListingType,
    pub kind: String,
    pub max_price: String,
    pub location: String,
}

impl PropertyFilter {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let max_price = self.max_price.trim();
        if !max_price.is_empty() && max_price.parse::<f64>().map_or(true, |p| p < 0.0) {
            errors.insert("max_price", INVALID_NUMBER);
        }
        errors.into_result(())
    }

    pub fn form_fields(&self) -> [(&'static str, String); 4] {
        [
            ("type", self.listing_type.as_str().to_string()),
            ("kind", self.kind.trim().to_string()),
            ("max_price", self.max_price.trim().to_string()),
            ("location", self.location.trim().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_with_empty_password_is_rejected() {
        let form = LoginForm {
            email: "admin@example.com".into(),
            password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("password"), Some(REQUIRED));
        assert_eq!(errors.get("email"), None);
    }

    #[test]
    fn login_rejects_malformed_email() {
        let form = LoginForm {
            email: "admin-at-example".into(),
            password: "secret".into(),
        };
        assert_eq!(form.validate().unwrap_err().get("email"), Some(INVALID_EMAIL));
    }

    #[test]
    fn verification_form_requires_both_images() {
        let form = VerificationForm {
            national_no: "1234".into(),
            identity_no: "5678".into(),
            user_id: Some(RecordId(3)),
            identity_image: Some("id.png".into()),
            contract_image: None,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("contract_image"), Some(IMAGE_REQUIRED));
    }

    #[test]
    fn edit_starts_from_a_saved_record_only() {
        let mut record = crate::domain::Verification {
            national_no: "N1".into(),
            identity_no: "I1".into(),
            identity_image: Some("storage/id.png".into()),
            ..Default::default()
        };
        assert_eq!(VerificationEdit::from_record(&record), None);

        record.id = Some(RecordId(4));
        let edit = VerificationEdit::from_record(&record).unwrap();
        assert_eq!(edit.id, RecordId(4));
        assert_eq!(edit.identity_image, None);
        assert_eq!(edit.validate().unwrap_err().get("user_id"), Some(REQUIRED));
    }

    #[test]
    fn blank_city_flags_both_location_fields() {
        let form = LocationForm {
            city: "   ".into(),
            district: "Mazzeh".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("city"), Some(LOCATION_REQUIRED));
        assert_eq!(errors.get("district"), Some(LOCATION_REQUIRED));
    }

    #[test]
    fn service_type_name_is_trimmed() {
        let form = ServiceTypeForm {
            name: "  Plumbing ".into(),
        };
        assert_eq!(form.validate().unwrap(), "Plumbing");
        assert!(ServiceTypeForm::default().validate().is_err());
    }

    #[test]
    fn filter_price_must_be_a_number() {
        let mut filter = PropertyFilter {
            max_price: "cheap".into(),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
        filter.max_price = "150000".into();
        assert!(filter.validate().is_ok());
        filter.max_price = String::new();
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn register_admin_checks_password_length() {
        let form = RegisterAdminForm {
            name: "Root".into(),
            email: "root@example.com".into(),
            password: "short".into(),
        };
        assert_eq!(
            form.validate().unwrap_err().get("password"),
            Some(PASSWORD_TOO_SHORT)
        );
    }
}
