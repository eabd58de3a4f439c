//! Server-rendered HTML for the guest form and the admin dashboard.
//!
//! One askama template per page under `templates/`; askama escapes every
//! interpolated value, including text that came from guests or the endpoint.

mod admin;
mod rsvp;

pub use admin::*;
pub use rsvp::*;

use askama::Template;
use axum::response::Html;

use crate::errors::AppError;

/// Render a page template into an HTML response body.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}
