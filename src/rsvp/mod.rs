//! Guest-facing RSVP form: validation and submission.

mod submission;

pub use submission::*;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::models::Attendance;

/// Simple `local@domain.tld` shape.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Fields that carry validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Attending,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Attending => "attending",
        }
    }
}

/// Raw form values as entered by the guest.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RsvpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub attending: Option<String>,
    pub guests: String,
    pub dietary: String,
    pub message: String,
}

impl RsvpForm {
    /// Selected attendance, if it is one of the two allowed values.
    pub fn attendance(&self) -> Option<Attendance> {
        self.attending.as_deref().and_then(|a| a.parse().ok())
    }
}

/// Per-field validation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    errors: BTreeMap<FormField, &'static str>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &BTreeMap<FormField, &'static str> {
        &self.errors
    }
}

/// Check every field; all failures are reported together.
pub fn validate(form: &RsvpForm) -> Validation {
    let mut errors = BTreeMap::new();

    if form.name.trim().is_empty() {
        errors.insert(FormField::Name, "Please enter your name");
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert(FormField::Email, "Please enter your email address");
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.insert(FormField::Email, "Please enter a valid email address");
    }

    if form.phone.trim().is_empty() {
        errors.insert(FormField::Phone, "Please enter your phone number");
    }

    if form.attendance().is_none() {
        errors.insert(FormField::Attending, "Please select your attendance");
    }

    Validation { errors }
}

/// Form values together with the errors currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub form: RsvpForm,
    pub validation: Validation,
}

impl FormState {
    pub fn new(form: RsvpForm) -> Self {
        Self {
            form,
            validation: Validation::default(),
        }
    }
}
