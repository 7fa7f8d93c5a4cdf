//! Field-level checks shared by the storefront forms.
//!
//! Every form validates its fields in display order and stops at the first
//! failure, so the UI shows one field-specific message at a time.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// A validation failure tied to one form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Trimmed `value`, or an error naming `label` when blank.
///
/// # Errors
///
/// Returns a [`FieldError`] for `field` when `value` is blank.
pub fn required(field: &'static str, label: &str, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{label} is required.")));
    }
    Ok(trimmed.to_owned())
}

/// Trimmed email that is present and contains `@`.
///
/// # Errors
///
/// Returns a [`FieldError`] for `field` when blank or missing `@`.
pub fn email(field: &'static str, value: &str) -> Result<String, FieldError> {
    let trimmed = required(field, "Email", value)?;
    if !trimmed.contains('@') {
        return Err(FieldError::new(field, "Enter a valid email address."));
    }
    Ok(trimmed)
}

/// Quantity parsed as an integer of at least 1.
///
/// # Errors
///
/// Returns a [`FieldError`] for `field` when not a positive integer.
pub fn quantity(field: &'static str, value: &str) -> Result<u32, FieldError> {
    match value.trim().parse::<u32>() {
        Ok(q) if q >= 1 => Ok(q),
        _ => Err(FieldError::new(field, "Quantity must be a whole number of at least 1.")),
    }
}

/// Trimmed value, or `None` when blank.
#[must_use]
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
