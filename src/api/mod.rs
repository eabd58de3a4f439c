//! HTTP handlers.
//!
//! Thin adapter: each handler turns a browser request into one flow command
//! and renders the resulting state.

mod admin;
mod rsvp;

pub use admin::*;
pub use rsvp::*;

use axum::response::{IntoResponse, Redirect, Response};

/// GET / - the landing route goes straight to the form.
pub async fn index() -> Response {
    Redirect::to("/rsvp").into_response()
}
