//! Dashboard view model built from a listing.

use chrono::{DateTime, Utc};

use super::RsvpStats;
use crate::models::{Attendance, RsvpRecord};

/// Text shown for absent values.
pub const PLACEHOLDER: &str = "-";

/// Fallback banner when a failed listing carries no message.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load RSVPs. Please check your configuration.";

/// One table row, with display text already resolved. Values are raw text;
/// the template escapes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpRow {
    pub row_id: String,
    /// `row_id` fell back to the display position.
    pub positional: bool,
    pub submitted: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub attending: Option<Attendance>,
    pub guests: String,
    pub dietary: String,
    pub message: String,
    /// Email named in the delete confirmation, if any.
    pub contact_email: Option<String>,
}

impl RsvpRow {
    pub fn from_record(record: &RsvpRecord, position: usize) -> Self {
        let guests = if record.is_attending() {
            non_empty(record.guests.as_deref())
                .unwrap_or("1")
                .to_string()
        } else {
            PLACEHOLDER.to_string()
        };

        Self {
            row_id: record.row_id(position),
            positional: !record.has_explicit_id(),
            submitted: format_timestamp(record.timestamp.as_deref()),
            name: or_placeholder(record.name.as_deref()),
            email: or_placeholder(record.email.as_deref()),
            phone: or_placeholder(record.phone.as_deref()),
            attending: record.attending,
            guests,
            dietary: or_placeholder(record.dietary.as_deref()),
            message: or_placeholder(record.message.as_deref()),
            contact_email: non_empty(record.email.as_deref()).map(String::from),
        }
    }
}

impl RsvpRow {
    pub fn status_class(&self) -> &'static str {
        match self.attending {
            Some(Attendance::Yes) => "rsvp-table__status--yes",
            Some(Attendance::No) => "rsvp-table__status--no",
            None => "",
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self.attending {
            Some(Attendance::Yes) => "Yes",
            Some(Attendance::No) => "No",
            None => PLACEHOLDER,
        }
    }

    /// Email carried to the confirmation page, empty when unknown.
    pub fn contact(&self) -> &str {
        self.contact_email.as_deref().unwrap_or_default()
    }
}

/// What the dashboard shows after a listing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// `None` renders the counters as placeholders.
    pub stats: Option<RsvpStats>,
    pub rows: Vec<RsvpRow>,
    pub error: Option<String>,
}

impl Dashboard {
    pub fn loaded(records: &[RsvpRecord]) -> Self {
        Self {
            stats: Some(RsvpStats::from_records(records)),
            rows: records
                .iter()
                .enumerate()
                .map(|(position, record)| RsvpRow::from_record(record, position))
                .collect(),
            error: None,
        }
    }

    /// Failed listing: no stale rows, counters blanked.
    pub fn failed(message: &str) -> Self {
        let message = if message.is_empty() {
            LOAD_FAILED_MESSAGE
        } else {
            message
        };

        Self {
            stats: None,
            rows: Vec::new(),
            error: Some(message.to_string()),
        }
    }

    /// Loaded successfully but nothing to list.
    pub fn is_empty_state(&self) -> bool {
        self.error.is_none() && self.rows.is_empty()
    }
}

/// Render a submission time as e.g. `May 18, 2026, 5:00 PM` (UTC).
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    let Some(raw) = non_empty(timestamp) else {
        return PLACEHOLDER.to_string();
    };

    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format("%b %-d, %Y, %-I:%M %p")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_placeholder(value: Option<&str>) -> String {
    non_empty(value).unwrap_or(PLACEHOLDER).to_string()
}
