use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use pokedex_core::errors::{ApplicationError, InterfaceError};
use pokedex_skill::{PokedexSkill, SkillAdapter};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

#[derive(Clone)]
pub struct SkillState {
    adapter: Arc<SkillAdapter<PokedexSkill>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub detail: String,
    pub correlation_id: String,
}

pub fn router(adapter: Arc<SkillAdapter<PokedexSkill>>) -> Router {
    Router::new().route("/skill", post(handle_skill_request)).with_state(SkillState { adapter })
}

pub async fn handle_skill_request(State(state): State<SkillState>, body: Bytes) -> Response {
    match state.adapter.handle_slice(&body) {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(error) => {
            let interface = ApplicationError::from(error).into_interface(request_id_hint(&body));
            warn!(
                event_name = "skill.request.rejected",
                correlation_id = %interface.correlation_id(),
                error_class = interface.error_class(),
                error = %interface,
                "skill request rejected"
            );
            error_response(&interface)
        }
    }
}

fn error_response(error: &InterfaceError) -> Response {
    let status = match error {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::Forbidden { .. } => StatusCode::FORBIDDEN,
    };
    let body = ErrorBody {
        error: error.error_class(),
        message: error.user_message().to_string(),
        detail: error.message().to_string(),
        correlation_id: error.correlation_id().to_string(),
    };
    (status, Json(body)).into_response()
}

/// Best-effort request id for error correlation when the envelope did not validate.
fn request_id_hint(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.pointer("/request/requestId")?.as_str().map(str::to_owned))
        .unwrap_or_else(|| "unassigned".to_owned())
}
