//! RSVP record model, the unit exchanged with the store endpoint.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;

/// Whether the guest will attend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Yes,
    No,
}

impl Attendance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attendance::Yes => "yes",
            Attendance::No => "no",
        }
    }
}

impl FromStr for Attendance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Attendance::Yes),
            "no" => Ok(Attendance::No),
            other => Err(AppError::BadRequest(format!(
                "Invalid attendance '{}': expected 'yes' or 'no'",
                other
            ))),
        }
    }
}

/// One guest's response.
///
/// Every field is optional on the way in: spreadsheet rows may be sparse and
/// absent values render as a placeholder rather than failing the listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RsvpRecord {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_attendance",
        skip_serializing_if = "Option::is_none"
    )]
    pub attending: Option<Attendance>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub guests: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dietary: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
}

impl RsvpRecord {
    pub fn is_attending(&self) -> bool {
        self.attending == Some(Attendance::Yes)
    }

    pub fn is_declined(&self) -> bool {
        self.attending == Some(Attendance::No)
    }

    /// Number of guests this record stands for. Unparseable, absent or zero
    /// values count as one.
    pub fn guest_count(&self) -> i64 {
        self.guests
            .as_deref()
            .and_then(parse_int_prefix)
            .filter(|n| *n != 0)
            .unwrap_or(1)
    }

    /// Identifier used to target this row for deletion.
    ///
    /// Falls back to the display position when the endpoint supplied no id.
    /// The position can shift if the sheet changes between list and delete.
    pub fn row_id(&self, position: usize) -> String {
        match self.explicit_id() {
            Some(id) => id.to_string(),
            None => position.to_string(),
        }
    }

    pub fn has_explicit_id(&self) -> bool {
        self.explicit_id().is_some()
    }

    fn explicit_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Parse a leading integer the way form inputs are read: optional leading
/// whitespace, optional sign, then digits. Trailing text is ignored.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Accept strings, numbers and booleans; map null to `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Ids that are falsy on the wire (`0`, `""`, `false`, null) count as absent.
/// The string `"0"` is a real id.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(serde_json::Value::String(s)) if s.is_empty() => None,
        Some(serde_json::Value::Bool(false)) => None,
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Bool(true)) => Some(true.to_string()),
        None | Some(serde_json::Value::Null) => None,
        Some(other) => Some(other.to_string()),
    })
}

/// Values other than `yes`/`no` are treated as absent.
fn lenient_attendance<'de, D>(deserializer: D) -> Result<Option<Attendance>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = lenient_text(deserializer)?;
    Ok(text.as_deref().and_then(|t| t.trim().parse().ok()))
}
