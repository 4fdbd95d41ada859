pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::guidance::handlers::handle_skill_guidance;
use crate::matching::handlers::handle_skill_match;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ai/skill-match", post(handle_skill_match))
        .route("/api/ai/skill-guidance", post(handle_skill_guidance))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::guidance::parser::fallback_guidance;
    use crate::guidance::tests::StubSource;

    fn app(canned: Option<&'static str>) -> Router {
        build_router(AppState {
            guidance: Arc::new(StubSource(canned)),
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "talentbridge-api");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let request = Request::builder().uri("/api/jobs").body(Body::empty()).unwrap();
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_skill_match_is_routed() {
        let request = post_json(
            "/api/ai/skill-match",
            json!({ "candidateSkills": ["react"], "jobSkills": ["java", "python", "sql", "aws"] }),
        );
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchPercentage"], 0);
        assert_eq!(
            body["suggestion"],
            "Low match. Focus on learning key skills like: java"
        );
    }

    #[tokio::test]
    async fn test_guidance_uses_llm_output() {
        let canned = r#"{"importance": "Queues decouple services.", "matchIncrease": 30}"#;
        let request = post_json(
            "/api/ai/skill-guidance",
            json!({ "skill": "Kafka", "currentMatchScore": 55 }),
        );
        let (status, body) = send(app(Some(canned)), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill"], "Kafka");
        assert_eq!(body["importance"], "Queues decouple services.");
        assert_eq!(body["matchIncrease"], 25);
        assert_eq!(body["priority"], "Medium");
    }

    #[tokio::test]
    async fn test_guidance_falls_back_when_llm_fails() {
        let request = post_json(
            "/api/ai/skill-guidance",
            json!({ "skill": "Kafka", "currentMatchScore": 55 }),
        );
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::to_value(fallback_guidance("Kafka")).unwrap());
    }

    #[tokio::test]
    async fn test_guidance_rejects_blank_skill() {
        let request = post_json(
            "/api/ai/skill-guidance",
            json!({ "skill": "  ", "currentMatchScore": 55 }),
        );
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_guidance_rejects_null_or_missing_skill() {
        for body in [
            json!({ "skill": null, "currentMatchScore": 50 }),
            json!({ "currentMatchScore": 50 }),
        ] {
            let (status, body) = send(app(None), post_json("/api/ai/skill-guidance", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_guidance_rejects_out_of_range_score() {
        for score in [-1, 101] {
            let request = post_json(
                "/api/ai/skill-guidance",
                json!({ "skill": "Kafka", "currentMatchScore": score }),
            );
            let (status, _) = send(app(None), request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }
}
