//! Admin retrieval and moderation flow.
//!
//! Commands take the caller's [`AdminSession`] explicitly and leave it in the
//! state the endpoint's reply implies. Any reply of `Invalid password` ends
//! the session.

mod dashboard;
mod session;
mod stats;

pub use dashboard::*;
pub use session::*;
pub use stats::*;

use std::sync::Arc;

use crate::errors::AppError;
use crate::store::RsvpStore;

pub const EMPTY_PASSWORD_MESSAGE: &str = "Please enter a password.";
pub const INVALID_PASSWORD_PROMPT: &str = "Invalid password. Please try again.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Error connecting to server. Please try again.";
pub const DELETE_SUCCESS_MESSAGE: &str = "RSVP deleted successfully";
const DELETE_REMEDIATION: &str =
    "Make sure the RSVP endpoint script is redeployed with delete support.";

/// Interactive yes/no confirmation supplied by the UI adapter.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Row chosen for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub row_id: String,
    pub email: Option<String>,
    /// `row_id` is the record's position in the listing, not an endpoint id.
    pub positional: bool,
}

impl DeleteTarget {
    /// Question put to the admin before deleting.
    pub fn prompt(&self) -> String {
        let who = self
            .email
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or("this guest");
        format!("Are you sure you want to delete the RSVP for \"{}\"?", who)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(Dashboard),
    /// Login refused; the message is shown on the login form and the
    /// password field is cleared.
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    Listed(Dashboard),
    /// Session is (now) logged out; show the login view.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Admin declined; nothing was sent.
    Cancelled,
    /// Row removed, followed by a fresh listing.
    Deleted(ListOutcome),
    /// Delete refused; the message includes remediation guidance.
    Failed(String),
    Expired,
}

/// Admin commands against the store.
#[derive(Clone)]
pub struct AdminFlow {
    store: Arc<dyn RsvpStore>,
}

impl AdminFlow {
    pub fn new(store: Arc<dyn RsvpStore>) -> Self {
        Self { store }
    }

    /// LoggedOut -> LoggedIn. The password is verified by reading the
    /// listing with it; the records from that read are shown right away.
    pub async fn login(&self, session: &mut AdminSession, password: &str) -> LoginOutcome {
        if password.is_empty() {
            return LoginOutcome::Rejected(EMPTY_PASSWORD_MESSAGE.to_string());
        }

        match self.store.fetch(password).await {
            Ok(records) => {
                session.establish(password.to_string());
                tracing::info!("Admin logged in, {} RSVPs loaded", records.len());
                LoginOutcome::LoggedIn(Dashboard::loaded(&records))
            }
            Err(AppError::InvalidPassword) => {
                tracing::warn!("Admin login rejected: invalid password");
                LoginOutcome::Rejected(INVALID_PASSWORD_PROMPT.to_string())
            }
            Err(e) => {
                tracing::error!("Admin login failed: {}", e);
                LoginOutcome::Rejected(CONNECTION_ERROR_MESSAGE.to_string())
            }
        }
    }

    /// LoggedIn -> LoggedOut.
    pub fn logout(&self, session: &mut AdminSession) {
        session.clear();
        tracing::info!("Admin logged out");
    }

    /// Re-read the listing, replacing whatever was displayed.
    pub async fn load_rsvps(&self, session: &mut AdminSession) -> ListOutcome {
        let Some(password) = session.password().map(str::to_string) else {
            return ListOutcome::Expired;
        };

        match self.store.fetch(&password).await {
            Ok(records) => ListOutcome::Listed(Dashboard::loaded(&records)),
            Err(AppError::InvalidPassword) => {
                tracing::warn!("Cached admin password rejected, ending session");
                session.clear();
                ListOutcome::Expired
            }
            Err(e) => {
                tracing::error!("Error loading RSVPs: {}", e);
                ListOutcome::Listed(Dashboard::failed(&e.message()))
            }
        }
    }

    /// Confirm, delete remotely, then reload the listing from the endpoint.
    pub async fn delete(
        &self,
        session: &mut AdminSession,
        target: &DeleteTarget,
        confirm: &dyn Confirm,
    ) -> DeleteOutcome {
        if !confirm.confirm(&target.prompt()) {
            return DeleteOutcome::Cancelled;
        }

        let Some(password) = session.password().map(str::to_string) else {
            return DeleteOutcome::Expired;
        };

        if target.positional {
            tracing::warn!(
                "Record has no id, deleting by display position {}",
                target.row_id
            );
        }

        match self.store.delete(&password, &target.row_id).await {
            Ok(()) => {
                tracing::info!("Deleted RSVP row {}", target.row_id);
                DeleteOutcome::Deleted(self.load_rsvps(session).await)
            }
            Err(AppError::InvalidPassword) => {
                tracing::warn!("Cached admin password rejected on delete, ending session");
                session.clear();
                DeleteOutcome::Expired
            }
            Err(e) => {
                tracing::error!("Delete error for row {}: {}", target.row_id, e);
                let message = e.message();
                let message = if message.is_empty() {
                    "Unknown error".to_string()
                } else {
                    message
                };
                DeleteOutcome::Failed(format!(
                    "Failed to delete RSVP: {}\n\n{}",
                    message, DELETE_REMEDIATION
                ))
            }
        }
    }
}
