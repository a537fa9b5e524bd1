use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;
use tracing::{instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    business::dto::BusinessProfilePayload,
    error::ApiError,
    recommendations::{
        client::{MlRequest, RecommendationClient},
        fallback::fallback_set,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/recommendations", post(get_recommendations))
}

/// Proxy to the ML service. Upstream responses pass through verbatim;
/// any upstream failure degrades to the static fallback set.
pub async fn fetch_or_fallback(client: &dyn RecommendationClient, request: &MlRequest) -> Value {
    match client.fetch(request).await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "ml service unavailable, serving fallback recommendations");
            fallback_set()
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn get_recommendations(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<BusinessProfilePayload>,
) -> Result<Json<Value>, ApiError> {
    let request = MlRequest::new(user.id, payload);
    Ok(Json(fetch_or_fallback(state.ml.as_ref(), &request).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use uuid::Uuid;

    struct FailingClient;

    #[async_trait]
    impl RecommendationClient for FailingClient {
        async fn fetch(&self, _request: &MlRequest) -> anyhow::Result<Value> {
            anyhow::bail!("connection refused")
        }
    }

    struct CannedClient(Value);

    #[async_trait]
    impl RecommendationClient for CannedClient {
        async fn fetch(&self, _request: &MlRequest) -> anyhow::Result<Value> {
            Ok(self.0.clone())
        }
    }

    fn request() -> MlRequest {
        MlRequest::new(Uuid::new_v4(), BusinessProfilePayload::default())
    }

    #[tokio::test]
    async fn upstream_failure_degrades_to_fallback() {
        let body = fetch_or_fallback(&FailingClient, &request()).await;
        assert_eq!(body["dark_horse"]["platform"], "reddit");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn upstream_response_passes_through_verbatim() {
        let upstream = json!({
            "recommendations": [{"platform": "tiktok", "success_probability": 0.9}],
            "dark_horse": null,
            "budget_allocation": {"tiktok": 1200}
        });
        let body = fetch_or_fallback(&CannedClient(upstream.clone()), &request()).await;
        assert_eq!(body, upstream);
    }

    #[test]
    fn ml_request_matches_the_collaborator_contract() {
        let req = request();
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(wire["include_dark_horse"], true);
        assert_eq!(wire["num_recommendations"], 10);
        assert!(wire["user_id"].is_string());
        assert!(wire["business_profile"].is_object());
    }
}
