pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::history::handlers::handle_history;
use crate::prediction::handlers::handle_predict;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/predict", post(handle_predict))
        .route("/api/history", get(handle_history))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt; // for `oneshot`

    use super::*;
    use crate::history::memory::{FailingPredictionStore, InMemoryPredictionStore};
    use crate::history::PredictionStore;
    use crate::prediction::model_repository::ModelArtifact;
    use crate::prediction::service::PredictionService;

    fn app_with(store: Arc<dyn PredictionStore>) -> Router {
        let predictions = Arc::new(PredictionService::new(
            None,
            store.clone(),
            Duration::from_secs(5),
        ));
        build_router(AppState { predictions, store })
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn extract_json(body: Body) -> Value {
        let bytes = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Should read body");
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    }

    #[tokio::test]
    async fn test_health_reports_fallback_mode() {
        let app = app_with(Arc::new(InMemoryPredictionStore::default()));
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = extract_json(response.into_body()).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["inference"], "fallback");
    }

    #[tokio::test]
    async fn test_predict_returns_full_contract() {
        let app = app_with(Arc::new(InMemoryPredictionStore::default()));
        let input = json!({
            "cgpa": 7.0,
            "internships": 0,
            "projects": 4,
            "skillLevel": 8,
            "communicationScore": 6
        });

        let response = app.oneshot(post_json("/api/predict", &input)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = extract_json(response.into_body()).await;
        // 10.5 + 0 + 6 + 8 + 4.8 = 29.3 → 0.6511
        assert_eq!(body["placed"], true);
        assert_eq!(body["confidence"], "Medium");
        assert_eq!(
            body["recommendations"],
            json!([
                "Improve CGPA to 8+.",
                "Get at least one internship.",
                "Improve communication skills."
            ])
        );
        assert_eq!(body["roadmap"].as_array().unwrap().len(), 5);
        assert_eq!(body["roadmap"][0]["task"], "Academic Excellence (CGPA 8+)");
        assert_eq!(body["roadmap"][0]["status"], "pending");
        assert_eq!(body["roadmap"][2]["status"], "complete");
        assert_eq!(body["input"]["skillLevel"], 8);
        assert_eq!(body["input"]["communicationScore"], 6);
    }

    #[tokio::test]
    async fn test_predict_rejects_out_of_range_field() {
        let app = app_with(Arc::new(InMemoryPredictionStore::default()));
        let input = json!({
            "cgpa": 11,
            "internships": 1,
            "projects": 3,
            "skillLevel": 7,
            "communicationScore": 7
        });

        let response = app.oneshot(post_json("/api/predict", &input)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = extract_json(response.into_body()).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["fields"][0]["field"], "cgpa");
    }

    #[tokio::test]
    async fn test_predict_rejects_wrong_json_type() {
        let app = app_with(Arc::new(InMemoryPredictionStore::default()));
        let input = json!({ "cgpa": "high" });

        let response = app.oneshot(post_json("/api/predict", &input)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = extract_json(response.into_body()).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_predict_with_overflowing_model_is_opaque_500() {
        let store: Arc<dyn PredictionStore> = Arc::new(InMemoryPredictionStore::default());
        let model = ModelArtifact::new(0.0, [1e308, -1e308, 0.0, 0.0, 0.0], vec![0, 1]);
        let predictions = Arc::new(PredictionService::new(
            Some(model),
            store.clone(),
            Duration::from_secs(5),
        ));
        let app = build_router(AppState { predictions, store });
        let input = json!({
            "cgpa": 10,
            "internships": 10,
            "projects": 0,
            "skillLevel": 1,
            "communicationScore": 1
        });

        let response = app.oneshot(post_json("/api/predict", &input)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = extract_json(response.into_body()).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(body.get("probability").is_none());
    }

    #[tokio::test]
    async fn test_predict_succeeds_when_store_fails() {
        let app = app_with(Arc::new(FailingPredictionStore));
        let input = json!({
            "cgpa": 9.0,
            "internships": 2,
            "projects": 5,
            "skillLevel": 9,
            "communicationScore": 9
        });

        let response = app.oneshot(post_json("/api/predict", &input)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = extract_json(response.into_body()).await;
        assert_eq!(body["recommendations"], json!([]));
    }

    #[tokio::test]
    async fn test_history_lists_stored_predictions() {
        let store = Arc::new(InMemoryPredictionStore::default());
        let app = app_with(store.clone());
        let input = json!({
            "cgpa": 6.0,
            "internships": 1,
            "projects": 2,
            "skillLevel": 5,
            "communicationScore": 5
        });

        let response = app
            .clone()
            .oneshot(post_json("/api/predict", &input))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/api/history")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = extract_json(response.into_body()).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["skillLevel"], 5);
        assert_eq!(items[0]["prediction"], false);
        assert_eq!(items[0]["confidence"], "Medium");
        assert!(items[0]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_history_store_failure_is_opaque_500() {
        let app = app_with(Arc::new(FailingPredictionStore));
        let response = app.oneshot(get_request("/api/history")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = extract_json(response.into_body()).await;
        assert_eq!(body["error"]["message"], "A database error occurred");
    }
}
