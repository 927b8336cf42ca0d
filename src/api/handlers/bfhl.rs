//! Array processing handler.

use axum::Json;
use axum::extract::State;
use tracing::debug;

use crate::api::extractors::JsonBody;
use crate::api::state::AppState;
use crate::domain::{BfhlRequest, BfhlResponse};
use crate::error::Result;
use crate::service::classify;

/// Process an input array: partition tokens, sum numerics, and build the
/// concatenation string.
pub async fn process(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<BfhlRequest>,
) -> Result<Json<BfhlResponse>> {
    debug!(tokens = request.data.len(), "Processing array");

    let classification = classify(&request.data);

    Ok(Json(BfhlResponse::new(
        &state.config.identity,
        classification,
    )))
}
