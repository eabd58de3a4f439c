//! Guest RSVP endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};

use crate::errors::AppError;
use crate::rsvp::{FormState, RsvpForm, SubmitOutcome};
use crate::views::{self, RsvpFormTemplate, RsvpSuccessTemplate};
use crate::AppState;

/// GET /rsvp - Empty form.
pub async fn rsvp_form() -> Result<Response, AppError> {
    let state = FormState::default();
    Ok(views::render(&RsvpFormTemplate::new(&state, None))?.into_response())
}

/// POST /rsvp - Validate and submit.
pub async fn submit_rsvp(
    State(state): State<AppState>,
    Form(form): Form<RsvpForm>,
) -> Result<Response, AppError> {
    let response = match state.submission.submit(&form).await {
        SubmitOutcome::Submitted(_) => views::render(&RsvpSuccessTemplate)?.into_response(),
        SubmitOutcome::Invalid(validation) => {
            let form_state = FormState { form, validation };
            let page = views::render(&RsvpFormTemplate::new(&form_state, None))?;
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
        SubmitOutcome::Failed(message) => {
            // Entered values are kept so the guest can retry
            let form_state = FormState::new(form);
            let page = views::render(&RsvpFormTemplate::new(
                &form_state,
                Some(message.as_str()),
            ))?;
            (StatusCode::BAD_GATEWAY, page).into_response()
        }
    };

    Ok(response)
}
