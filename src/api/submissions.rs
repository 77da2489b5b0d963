//! Form submission endpoints: store one record, notify, redirect.

use serde_json::Value;
use tracing::{error, info};

use super::helpers::{redirect, text_response};
use crate::core::models::{FormFields, Submission};
use crate::core::state::AppState;

/// Where a successful submission redirects and what a failed one says.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionRoute {
    pub redirect_to: &'static str,
    pub failure_message: &'static str,
}

/// Stores the submission, then publishes its summary.
///
/// A storage failure answers 500 and skips the notification. The
/// notification outcome never changes the response.
pub async fn handle_submission<S: Submission>(
    state: &AppState,
    form: &FormFields,
    route: SubmissionRoute,
) -> Value {
    let kind = S::KIND;
    let submission = S::from_form(form);
    let table = state.storage.table_for(kind).to_string();

    match state.storage.insert(kind, submission.attributes()).await {
        Ok(id) => {
            info!(kind = %kind, table = %table, id = %id, "Submission stored");
            state.notifier.publish(&submission.summary()).await;
            redirect(route.redirect_to)
        }
        Err(e) => {
            error!(kind = %kind, table = %table, error = %e, "Error storing submission");
            text_response(500, route.failure_message)
        }
    }
}
