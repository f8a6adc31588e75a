//! Sign-up form validation

use super::registration::RegisterForm;
use super::submission::SubmissionPayload;
use thiserror::Error;

/// Why a sign-up form was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Data must be inputted")]
    MissingFields,
    #[error("Password and confirmation password do not match.")]
    PasswordMismatch,
}

/// Outcome of validating a sign-up form
pub type ValidationResult = Result<SubmissionPayload, ValidationError>;

/// Validate the form and assemble its payload.
///
/// The presence check runs before the password comparison, so a form that
/// is both incomplete and mismatched reports `MissingFields`. Country and
/// date are never required.
pub fn validate(form: &RegisterForm) -> ValidationResult {
    let required = [
        &form.name,
        &form.email,
        &form.address,
        &form.phone_number,
        &form.password,
        &form.confirm_password,
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    if form.password.as_text() != form.confirm_password.as_text() {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(SubmissionPayload::assemble(form))
}
