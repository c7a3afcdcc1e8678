//! HTTP handlers for the registration page.
//! Both methods on `/` go through the same dispatch and render path.

use axum::{
    extract::{rejection::FormRejection, Form, Query},
    response::{Html, IntoResponse, Response},
    Extension,
};
use handlebars::Handlebars;
use http::{Method, StatusCode};
use log::{debug, error, info};
use std::{collections::HashMap, sync::Arc};

use crate::backend::dispatch::{dispatch, Outcome, RequestContext};
use crate::backend::page::{render, PageView};
use crate::registration::Validator;
use crate::repository::{NewUser, UserRepository};
use crate::utils::error_messages::{INTERNAL_ERROR, REGISTRATION_ERROR};

/// Shared, read-only application state
pub struct AppState {
    pub hbs: Handlebars<'static>,
    pub validator: Validator,
    pub repository: Arc<dyn UserRepository>,
}

/// Renders the page, echoing `?username=` when present
pub async fn index(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    respond(
        state,
        RequestContext {
            method: Method::GET,
            query,
            ..Default::default()
        },
    )
    .await
}

/// Handles a form submission. A body that is not a urlencoded form counts
/// as an empty form.
pub async fn submit(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(e) => {
            debug!("Ignoring unreadable form body: {}", e);
            HashMap::new()
        }
    };

    respond(
        state,
        RequestContext {
            method: Method::POST,
            form,
            query,
        },
    )
    .await
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

async fn respond(state: Arc<AppState>, ctx: RequestContext) -> Response {
    // Hashing is CPU bound, keep it off the async workers
    let worker = Arc::clone(&state);
    let outcome = match tokio::task::spawn_blocking(move || dispatch(&ctx, &worker.validator)).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => {
            error!("Password hashing failed: {}", e);
            return internal_error(REGISTRATION_ERROR);
        }
        Err(e) => {
            error!("Dispatch task failed: {}", e);
            return internal_error(INTERNAL_ERROR);
        }
    };

    if let Outcome::Registration { username, email, result } = &outcome {
        if let Some(hash) = result.password_hash() {
            let user = NewUser {
                username: username.clone(),
                email: email.clone(),
                password_hash: hash.clone(),
            };
            if let Err(e) = state.repository.save(&user) {
                error!("Could not store registration for {}: {}", username, e);
                return internal_error(REGISTRATION_ERROR);
            }
            info!("Registered user {}", username);
        }
    }

    match render(&state.hbs, &PageView::from(&outcome)) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!("Template rendering failed: {}", e);
            internal_error(INTERNAL_ERROR)
        }
    }
}

fn internal_error(message: &'static str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("<h1>{}</h1>", message))).into_response()
}
