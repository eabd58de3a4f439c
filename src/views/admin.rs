//! Admin login, dashboard and delete pages.

use askama::Template;

use crate::admin::{Dashboard, DeleteTarget, RsvpRow, PLACEHOLDER};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub error: Option<&'a str>,
}

/// Counters, table and status panels for one listing attempt.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    /// Success banner shown above the counters.
    pub notice: Option<&'a str>,
    pub error: Option<&'a str>,
    pub total_responses: String,
    pub attending: String,
    pub not_attending: String,
    pub total_guests: String,
    pub rows: &'a [RsvpRow],
    pub empty: bool,
}

impl<'a> DashboardTemplate<'a> {
    pub fn new(dashboard: &'a Dashboard, notice: Option<&'a str>) -> Self {
        let counter = |value: Option<String>| value.unwrap_or_else(|| PLACEHOLDER.to_string());
        let stats = dashboard.stats;

        Self {
            notice,
            error: dashboard.error.as_deref(),
            total_responses: counter(stats.map(|s| s.total_responses.to_string())),
            attending: counter(stats.map(|s| s.attending.to_string())),
            not_attending: counter(stats.map(|s| s.not_attending.to_string())),
            total_guests: counter(stats.map(|s| s.total_guests.to_string())),
            rows: &dashboard.rows,
            empty: dashboard.is_empty_state(),
        }
    }
}

/// Ask the admin to confirm a delete.
#[derive(Template)]
#[template(path = "confirm_delete.html")]
pub struct ConfirmDeleteTemplate<'a> {
    pub prompt: String,
    pub row_id: &'a str,
    pub email: &'a str,
    pub positional: bool,
}

impl<'a> ConfirmDeleteTemplate<'a> {
    pub fn new(target: &'a DeleteTarget) -> Self {
        Self {
            prompt: target.prompt(),
            row_id: &target.row_id,
            email: target.email.as_deref().unwrap_or_default(),
            positional: target.positional,
        }
    }
}

/// Delete refused by the endpoint; the table is left as it was.
#[derive(Template)]
#[template(path = "delete_failed.html")]
pub struct DeleteFailedTemplate<'a> {
    pub message: &'a str,
}
