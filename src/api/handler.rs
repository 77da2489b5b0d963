//! API Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - Request decoding (method, path, body)
//! - Listing routes (delegated to `listing`)
//! - Form submissions (delegated to `submissions`)
//! - Named pages and static assets (delegated to `pages`)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::parsing::HttpRequest;
use super::submissions::{SubmissionRoute, handle_submission};
use super::{helpers, listing, pages};
use crate::core::models::{EntityKind, NewAnswer, NewEmail, NewQuery, NewQuestion, Submission};
use crate::core::state::AppState;

pub use self::function_handler as handler;

const QUERY_ROUTE: SubmissionRoute = SubmissionRoute {
    redirect_to: "/",
    failure_message: "Error submitting query.",
};

const QUESTION_ROUTE: SubmissionRoute = SubmissionRoute {
    redirect_to: "/nn.html",
    failure_message: "Error submitting question.",
};

const EMAIL_ROUTE: SubmissionRoute = SubmissionRoute {
    redirect_to: "/about",
    failure_message: "Error submitting email.",
};

const ANSWER_ROUTE: SubmissionRoute = SubmissionRoute {
    redirect_to: "/",
    failure_message: "Error submitting answer.",
};

/// Lambda handler for the HTTP entrypoint.
///
/// # Errors
///
/// Never fails at the Lambda level: malformed events are answered with a
/// 400 response payload.
#[tracing::instrument(level = "info", skip(state, event))]
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let request = match HttpRequest::from_event(&event.payload) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to decode request event: {}", e);
            return Ok(helpers::text_response(400, &format!("Bad Request: {e}")));
        }
    };

    Ok(route(state, &request).await)
}

/// Dispatches a decoded request to the matching route.
///
/// `HEAD` is answered like `GET` without a body.
pub async fn route(state: &AppState, request: &HttpRequest) -> Value {
    info!(method = %request.method, path = %request.path, "Request received");

    match request.method.as_str() {
        "HEAD" => helpers::without_body(dispatch(state, "GET", request).await),
        method => dispatch(state, method, request).await,
    }
}

async fn dispatch(state: &AppState, method: &str, request: &HttpRequest) -> Value {
    match (method, request.path.as_str()) {
        ("GET", "/questions") => listing::handle_list(state, EntityKind::Question).await,
        ("GET", "/answers") => listing::handle_list(state, EntityKind::Answer).await,

        ("POST", "/submitQuery") => submit::<NewQuery>(state, request, QUERY_ROUTE).await,
        ("POST", "/submitQuestion") => submit::<NewQuestion>(state, request, QUESTION_ROUTE).await,
        ("POST", "/submitEmail") => submit::<NewEmail>(state, request, EMAIL_ROUTE).await,
        ("POST", "/submitAnswer") => submit::<NewAnswer>(state, request, ANSWER_ROUTE).await,

        ("GET", path) => pages::serve_get(&state.config, path).await,

        (method, path) => helpers::not_found(method, path),
    }
}

async fn submit<S: Submission>(
    state: &AppState,
    request: &HttpRequest,
    route: SubmissionRoute,
) -> Value {
    match request.form() {
        Ok(form) => handle_submission::<S>(state, &form, route).await,
        Err(e) => {
            error!(path = %request.path, "Invalid submission body: {}", e);
            helpers::text_response(400, "Invalid request body.")
        }
    }
}
