//! Form domain layer
//!
//! Sign-up form state, its validation, and the payload handed on after a
//! successful submit.

mod country;
mod field;
mod registration;
mod submission;
mod validation;

pub use country::{Country, COUNTRIES};
pub use field::FormField;
pub use registration::{Form, RegisterField, RegisterForm};
#[cfg(test)]
pub use submission::MockSubmissionHandler;
pub use submission::{SubmissionHandler, SubmissionPayload, TracingSubmissionHandler};
pub use validation::validate;
