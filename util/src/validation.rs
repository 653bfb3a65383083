//! Shared input validation helpers.
//!
//! Group numbers are written in three places (groups, class schedules and
//! weekly schedules), so the pattern lives here and is reused by the
//! `validator` derives in the service layer.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

/// Two uppercase letters, two digits, two digits. Cyrillic or Latin, e.g. `АС-22-04`.
pub static GROUP_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[А-ЯЁA-Z]{2}-[0-9]{2}-[0-9]{2}$").expect("valid group regex"));

pub fn is_valid_group_number(value: &str) -> bool {
    GROUP_NUMBER_RE.is_match(value)
}

/// Custom validator for `#[validate(custom(function = "validate_group_number"))]`.
pub fn validate_group_number(value: &str) -> Result<(), ValidationError> {
    if is_valid_group_number(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("group_number");
        err.message = Some("Group number must look like АС-22-04".into());
        Err(err)
    }
}

/// Rejects strings that are empty once trimmed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Flattens `validator` errors into a single `"; "`-separated message.
///
/// Errors without a custom message fall back to `"<field> is invalid"`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
