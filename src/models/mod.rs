//! Data models shared by the submission and admin flows.
//!
//! These match the JSON the spreadsheet endpoint reads and writes.

mod endpoint;
mod rsvp;

pub use endpoint::*;
pub use rsvp::*;
