use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use pokedex_core::dictionary::MonsterDictionary;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    dictionary: Arc<MonsterDictionary>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub dictionary: HealthCheck,
    pub checked_at: String,
}

pub fn router(dictionary: Arc<MonsterDictionary>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { dictionary })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let dictionary = dictionary_check(&state.dictionary);
    let ready = dictionary.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "pokedex-server runtime initialized".to_string(),
        },
        dictionary,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn dictionary_check(dictionary: &MonsterDictionary) -> HealthCheck {
    if dictionary.is_empty() {
        HealthCheck { status: "degraded", detail: "dictionary has no entries".to_string() }
    } else {
        HealthCheck {
            status: "ready",
            detail: format!("{} monsters loaded", dictionary.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, Json};
    use pokedex_core::dictionary::MonsterDictionary;

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_returns_ready_when_dictionary_has_entries() {
        let dictionary = MonsterDictionary::from_entries([("mew", "Mew is a Psychic-type Pokémon.")])
            .expect("dictionary");

        let (status, Json(payload)) =
            health(State(HealthState { dictionary: Arc::new(dictionary) })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.dictionary.detail, "1 monsters loaded");
        assert_eq!(payload.service.status, "ready");
    }

    #[tokio::test]
    async fn health_returns_service_unavailable_when_dictionary_is_empty() {
        let (status, Json(payload)) =
            health(State(HealthState { dictionary: Arc::new(MonsterDictionary::default()) })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.dictionary.status, "degraded");
        assert_eq!(payload.service.status, "ready");
    }
}
