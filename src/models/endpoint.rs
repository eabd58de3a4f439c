//! Reply shapes of the RSVP store endpoint.

use serde::Deserialize;

use super::RsvpRecord;
use crate::errors::AppError;

/// Body returned by the endpoint for reads, deletes and checked writes.
///
/// Success carries `rsvps`; failure carries `error`. Both are optional so a
/// bare `{}` or `{ "success": true }` decodes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointReply {
    #[serde(default)]
    pub rsvps: Option<Vec<RsvpRecord>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl EndpointReply {
    /// Split the reply into records or the endpoint's error.
    ///
    /// Only a non-empty string counts as an error.
    pub fn into_result(self) -> Result<Vec<RsvpRecord>, AppError> {
        match self.error {
            Some(serde_json::Value::String(message)) if !message.is_empty() => {
                Err(AppError::from_endpoint_message(&message))
            }
            _ => Ok(self.rsvps.unwrap_or_default()),
        }
    }
}
