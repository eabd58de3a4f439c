//! Access to the spreadsheet-backed RSVP store endpoint.
//!
//! Both flows talk to the endpoint only through [`RsvpStore`], so the write
//! contract (opaque or checked) and demo mode can be swapped by configuration.

mod demo;
mod http;

pub use demo::*;
pub use http::*;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::RsvpRecord;

/// Operations the endpoint supports.
#[async_trait]
pub trait RsvpStore: Send + Sync {
    /// Persist a new RSVP.
    async fn submit(&self, record: &RsvpRecord) -> Result<(), AppError>;

    /// Read all RSVPs, authenticating with `password`.
    async fn fetch(&self, password: &str) -> Result<Vec<RsvpRecord>, AppError>;

    /// Remove the row identified by `row_id`, authenticating with `password`.
    async fn delete(&self, password: &str, row_id: &str) -> Result<(), AppError>;
}

/// Build the store selected by configuration.
pub fn build_store(config: &Config) -> Result<Arc<dyn RsvpStore>, AppError> {
    if config.is_demo() {
        tracing::warn!("No RSVP endpoint configured (RSVP_SCRIPT_URL). Running in demo mode!");
        if config.admin_password.is_none() {
            tracing::warn!("No admin password configured (RSVP_ADMIN_PASSWORD). Admin login is disabled in demo mode!");
        }
        return Ok(Arc::new(DemoStore::new(
            config.admin_password.clone(),
            config.demo_delay,
        )));
    }

    Ok(Arc::new(HttpStore::new(
        config.endpoint_url.clone(),
        config.write_mode,
    )?))
}
