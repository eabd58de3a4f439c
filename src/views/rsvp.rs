//! Guest RSVP form pages.

use askama::Template;

use crate::rsvp::{FormField, FormState, RsvpForm};

/// Form with current values, inline errors and an optional retry banner.
#[derive(Template)]
#[template(path = "rsvp_form.html")]
pub struct RsvpFormTemplate<'a> {
    pub form: &'a RsvpForm,
    pub name_error: Option<&'static str>,
    pub email_error: Option<&'static str>,
    pub phone_error: Option<&'static str>,
    pub attending_error: Option<&'static str>,
    pub attending_yes: bool,
    /// Also hides the guests and dietary groups.
    pub attending_no: bool,
    pub guests: &'a str,
    pub banner: Option<&'a str>,
}

impl<'a> RsvpFormTemplate<'a> {
    pub fn new(state: &'a FormState, banner: Option<&'a str>) -> Self {
        let form = &state.form;
        let error = |field| state.validation.error(field);
        let attending = form.attending.as_deref();

        Self {
            form,
            name_error: error(FormField::Name),
            email_error: error(FormField::Email),
            phone_error: error(FormField::Phone),
            attending_error: error(FormField::Attending),
            attending_yes: attending == Some("yes"),
            attending_no: attending == Some("no"),
            guests: if form.guests.is_empty() {
                "1"
            } else {
                form.guests.as_str()
            },
            banner,
        }
    }
}

/// Panel shown once the RSVP has been sent.
#[derive(Template)]
#[template(path = "rsvp_success.html")]
pub struct RsvpSuccessTemplate;
