//! Admin endpoints: login, dashboard, logout and delete.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::admin::{DeleteOutcome, DeleteTarget, ListOutcome, LoginOutcome, DELETE_SUCCESS_MESSAGE};
use crate::errors::AppError;
use crate::views::{
    self, ConfirmDeleteTemplate, DashboardTemplate, DeleteFailedTemplate, LoginTemplate,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Row selection posted by the dashboard and the confirmation page.
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub row_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub positional: bool,
    #[serde(default)]
    pub confirm: Option<String>,
}

impl DeleteForm {
    fn target(&self) -> Result<DeleteTarget, AppError> {
        let row_id = self
            .row_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing row_id".to_string()))?;

        Ok(DeleteTarget {
            row_id: row_id.to_string(),
            email: self.email.clone().filter(|e| !e.is_empty()),
            positional: self.positional,
        })
    }

    fn confirmed(&self) -> bool {
        self.confirm.as_deref() == Some("yes")
    }
}

fn login_view(jar: CookieJar) -> Result<Response, AppError> {
    let page = views::render(&LoginTemplate { error: None })?;
    Ok((jar, page).into_response())
}

/// GET /admin - Login view, or the dashboard with a fresh listing.
pub async fn admin_home(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let mut loaded = state.sessions.load(&jar).await;
    if !loaded.session.is_logged_in() {
        return login_view(jar);
    }

    let outcome = state.admin.load_rsvps(&mut loaded.session).await;
    let jar = state.sessions.save(jar, loaded).await;

    match outcome {
        ListOutcome::Listed(dashboard) => {
            let page = views::render(&DashboardTemplate::new(&dashboard, None))?;
            Ok((jar, page).into_response())
        }
        ListOutcome::Expired => login_view(jar),
    }
}

/// POST /admin/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let mut loaded = state.sessions.load(&jar).await;

    match state.admin.login(&mut loaded.session, &form.password).await {
        LoginOutcome::LoggedIn(dashboard) => {
            let jar = state.sessions.save(jar, loaded).await;
            let page = views::render(&DashboardTemplate::new(&dashboard, None))?;
            Ok((jar, page).into_response())
        }
        LoginOutcome::Rejected(message) => {
            let page = views::render(&LoginTemplate {
                error: Some(message.as_str()),
            })?;
            Ok((StatusCode::UNAUTHORIZED, page).into_response())
        }
    }
}

/// POST /admin/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let mut loaded = state.sessions.load(&jar).await;
    state.admin.logout(&mut loaded.session);
    let jar = state.sessions.save(jar, loaded).await;

    (jar, Redirect::to("/admin")).into_response()
}

/// GET /admin/delete - Ask for confirmation.
pub async fn confirm_delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(form): Query<DeleteForm>,
) -> Result<Response, AppError> {
    let loaded = state.sessions.load(&jar).await;
    if !loaded.session.is_logged_in() {
        return Ok(Redirect::to("/admin").into_response());
    }

    let target = form.target()?;
    Ok(views::render(&ConfirmDeleteTemplate::new(&target))?.into_response())
}

/// POST /admin/delete - Delete if confirmed, then show the reloaded listing.
pub async fn delete_rsvp(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<DeleteForm>,
) -> Result<Response, AppError> {
    let target = form.target()?;
    let confirmed = form.confirmed();

    let mut loaded = state.sessions.load(&jar).await;
    let outcome = state
        .admin
        .delete(&mut loaded.session, &target, &move |_: &str| confirmed)
        .await;
    let jar = state.sessions.save(jar, loaded).await;

    match outcome {
        DeleteOutcome::Cancelled => Ok((jar, Redirect::to("/admin")).into_response()),
        DeleteOutcome::Deleted(ListOutcome::Listed(dashboard)) => {
            let page = views::render(&DashboardTemplate::new(
                &dashboard,
                Some(DELETE_SUCCESS_MESSAGE),
            ))?;
            Ok((jar, page).into_response())
        }
        DeleteOutcome::Deleted(ListOutcome::Expired) | DeleteOutcome::Expired => login_view(jar),
        DeleteOutcome::Failed(message) => {
            let page = views::render(&DeleteFailedTemplate { message: &message })?;
            Ok((StatusCode::BAD_GATEWAY, jar, page).into_response())
        }
    }
}
