//! Turning a valid form into a stored RSVP.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use super::{validate, FormField, RsvpForm, Validation};
use crate::models::RsvpRecord;
use crate::store::RsvpStore;

/// Banner shown under the form when the write fails.
pub const SUBMIT_FAILED_MESSAGE: &str =
    "There was an error submitting your RSVP. Please try again or contact us directly.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent; show the field errors.
    Invalid(Validation),
    /// Write accepted (or, for opaque writes, not known to have failed).
    Submitted(RsvpRecord),
    /// Write failed; the form keeps the entered values.
    Failed(String),
}

/// Guest submission command.
#[derive(Clone)]
pub struct SubmissionFlow {
    store: Arc<dyn RsvpStore>,
}

impl SubmissionFlow {
    pub fn new(store: Arc<dyn RsvpStore>) -> Self {
        Self { store }
    }

    pub async fn submit(&self, form: &RsvpForm) -> SubmitOutcome {
        let validation = validate(form);
        if !validation.is_valid() {
            tracing::debug!(
                fields = ?validation.errors().keys().map(FormField::as_str).collect::<Vec<_>>(),
                "RSVP rejected by validation"
            );
            return SubmitOutcome::Invalid(validation);
        }
        let Some(record) = build_record(form, Utc::now()) else {
            return SubmitOutcome::Invalid(validation);
        };

        match self.store.submit(&record).await {
            Ok(()) => {
                tracing::info!(
                    attending = record.attending.map(|a| a.as_str()).unwrap_or("-"),
                    guests = record.guests.as_deref().unwrap_or("-"),
                    "RSVP submitted"
                );
                SubmitOutcome::Submitted(record)
            }
            Err(e) => {
                tracing::error!("Submission error: {}", e);
                SubmitOutcome::Failed(SUBMIT_FAILED_MESSAGE.to_string())
            }
        }
    }
}

/// Record sent to the endpoint. `None` when attendance is not selected.
pub fn build_record(form: &RsvpForm, submitted_at: DateTime<Utc>) -> Option<RsvpRecord> {
    let attending = form.attendance()?;

    Some(RsvpRecord {
        id: None,
        name: Some(form.name.trim().to_string()),
        email: Some(form.email.trim().to_string()),
        phone: Some(form.phone.trim().to_string()),
        attending: Some(attending),
        guests: Some(form.guests.clone()),
        dietary: Some(form.dietary.trim().to_string()),
        message: Some(form.message.trim().to_string()),
        timestamp: Some(submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    })
}
