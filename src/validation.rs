//! Form field validation.
//!
//! Each function checks one field value and returns the first problem
//! found. Callers re-run them on every edit and keep the result as view
//! state; nothing here holds state between calls.

use std::fmt;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Must match the `max` of the `length` rules on [`AddressForm`].
const MAX_FIELD_LEN: usize = 100;
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Required { field: &'static str },
    TooLong { field: &'static str, max: usize },
    InvalidEmail,
    InvalidPhone,
    InvalidPostcode,
    InvalidCardHolder,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{field} is required"),
            Self::TooLong { field, max } => {
                write!(f, "{field} must be at most {max} characters")
            }
            Self::InvalidEmail => write!(f, "enter a valid email address"),
            Self::InvalidPhone => write!(f, "enter a valid phone number"),
            Self::InvalidPostcode => write!(f, "enter a valid postcode"),
            Self::InvalidCardHolder => write!(f, "enter the name shown on the card"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Address entry form as typed by the member.
///
/// `line2` and `phone` are optional; a phone that is present must be valid.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressForm {
    #[validate(length(min = 1, max = 100))]
    pub line1: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub line2: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(custom = "postcode_rule")]
    pub postcode: String,
    #[serde(default)]
    #[validate(custom = "optional_phone_rule")]
    pub phone: String,
}

impl AddressForm {
    fn trimmed(&self) -> Self {
        Self {
            line1: self.line1.trim().to_string(),
            line2: self.line2.trim().to_string(),
            city: self.city.trim().to_string(),
            postcode: self.postcode.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn phone_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule_error("required", "Phone number is required"));
    }
    let body = value.strip_prefix('+').unwrap_or(value);
    let mut digits = 0;
    for ch in body.chars() {
        match ch {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(rule_error("phone", "Phone number has invalid characters")),
        }
    }
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(rule_error("phone", "Phone number must have 7 to 15 digits"));
    }
    Ok(())
}

fn optional_phone_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Ok(())
    } else {
        phone_rule(value)
    }
}

fn postcode_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule_error("required", "Postcode is required"));
    }
    let len = value.chars().count();
    let allowed = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == ' ');
    let has_digit = value.chars().any(|ch| ch.is_ascii_digit());
    if !(5..=8).contains(&len) || !allowed || !has_digit {
        return Err(rule_error("postcode", "Postcode is not valid"));
    }
    Ok(())
}

fn card_holder_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule_error("required", "Card holder is required"));
    }
    let letters = value.chars().filter(|ch| ch.is_alphabetic()).count();
    let allowed = value
        .chars()
        .all(|ch| ch.is_alphabetic() || matches!(ch, ' ' | '-' | '\'' | '.'));
    if letters < 2 || !allowed {
        return Err(rule_error("card_holder", "Card holder name is not valid"));
    }
    Ok(())
}

/// Maps a rule failure to a field error: `required` becomes
/// [`FieldError::Required`], anything else becomes `invalid`.
fn from_rule(
    field: &'static str,
    result: Result<(), ValidationError>,
    invalid: FieldError,
) -> Result<(), FieldError> {
    result.map_err(|err| match &*err.code {
        "required" => FieldError::Required { field },
        _ => invalid,
    })
}

/// Non-blank and within the length limit.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required { field });
    }
    if !validator::validate_length(trimmed, None, Some(MAX_FIELD_LEN as u64), None) {
        return Err(FieldError::TooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}

/// RFC 5322-style address with a valid domain (HTML5 email rules).
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required { field: "email" });
    }
    if !validator::validate_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// 7 to 15 digits once spaces, dashes, brackets and a leading `+` are removed.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    from_rule("phone", phone_rule(value.trim()), FieldError::InvalidPhone)
}

/// 5 to 8 letters, digits and spaces, with at least one digit.
pub fn validate_postcode(value: &str) -> Result<(), FieldError> {
    from_rule(
        "postcode",
        postcode_rule(value.trim()),
        FieldError::InvalidPostcode,
    )
}

/// At least two letters; letters, spaces, hyphens, apostrophes and dots only.
pub fn validate_card_holder(value: &str) -> Result<(), FieldError> {
    from_rule(
        "card holder",
        card_holder_rule(value.trim()),
        FieldError::InvalidCardHolder,
    )
}

/// Every problem in an address form, in field order.
pub fn validate_address(form: &AddressForm) -> Vec<FieldError> {
    let form = form.trimmed();
    match form.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => address_errors(&form, &errors),
    }
}

fn address_errors(form: &AddressForm, errors: &ValidationErrors) -> Vec<FieldError> {
    let fields: [(&'static str, &'static str, &str); 5] = [
        ("line1", "address line 1", form.line1.as_str()),
        ("line2", "address line 2", form.line2.as_str()),
        ("city", "city", form.city.as_str()),
        ("postcode", "postcode", form.postcode.as_str()),
        ("phone", "phone", form.phone.as_str()),
    ];
    let by_field = errors.field_errors();

    let mut out = Vec::new();
    for (name, label, value) in fields {
        let Some(field_errors) = by_field.get(name) else {
            continue;
        };
        for err in field_errors.iter() {
            out.push(match (&*err.code, name) {
                ("length", _) if value.is_empty() => FieldError::Required { field: label },
                ("length", _) => FieldError::TooLong {
                    field: label,
                    max: MAX_FIELD_LEN,
                },
                ("required", _) => FieldError::Required { field: label },
                (_, "phone") => FieldError::InvalidPhone,
                _ => FieldError::InvalidPostcode,
            });
        }
    }
    out
}
