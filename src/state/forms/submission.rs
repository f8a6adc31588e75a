//! Submission payload and the handler boundary it is delivered through

use super::registration::RegisterForm;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Snapshot of a validated sign-up form, without the password confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub date: NaiveDate,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub password: String,
    pub selected_country: Option<String>,
}

impl SubmissionPayload {
    /// Project the form into a payload.
    ///
    /// Callers are expected to validate first; see [`super::validate`].
    pub fn assemble(form: &RegisterForm) -> Self {
        Self {
            date: form.date,
            name: form.name.as_text().to_string(),
            email: form.email.as_text().to_string(),
            address: form.address.as_text().to_string(),
            phone_number: form.phone_number.as_text().to_string(),
            password: form.password.as_text().to_string(),
            selected_country: form.selected_country.clone(),
        }
    }
}

/// Receives payloads that passed validation
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionHandler {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<()>;
}

/// Default handler: writes the payload to the log with the password redacted
#[derive(Debug, Default)]
pub struct TracingSubmissionHandler;

impl SubmissionHandler for TracingSubmissionHandler {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<()> {
        tracing::info!(
            date = %payload.date,
            name = %payload.name,
            email = %payload.email,
            address = %payload.address,
            phone_number = %payload.phone_number,
            selected_country = payload.selected_country.as_deref().unwrap_or("-"),
            "Registration data ready to send"
        );
        Ok(())
    }
}
