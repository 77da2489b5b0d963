use serde_json::Value;
use tracing::error;

use super::helpers::json_response;
use crate::core::models::EntityKind;
use crate::core::state::AppState;

/// Lists every stored item of `kind` as a JSON array, attributes untouched.
///
/// Read failures are logged and answered with an empty array.
pub async fn handle_list(state: &AppState, kind: EntityKind) -> Value {
    let items = match state.storage.scan_all(kind).await {
        Ok(items) => items,
        Err(e) => {
            error!(kind = %kind, error = %e, "Error fetching records, returning empty list");
            Vec::new()
        }
    };
    json_response(200, &items)
}
