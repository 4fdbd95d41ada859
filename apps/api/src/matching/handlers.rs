//! Axum route handlers for the Skill Match API.

use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::matching::engine::{compute_match, MatchResult};

/// Either list, or any entry in it, may be `null` or absent; those are dropped.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatchRequest {
    #[serde(default)]
    pub candidate_skills: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub job_skills: Option<Vec<Option<String>>>,
}

/// POST /api/ai/skill-match
///
/// Scores the candidate's skills against the job's required skills.
/// Never fails once the body deserializes.
pub async fn handle_skill_match(Json(request): Json<SkillMatchRequest>) -> Json<MatchResult> {
    let candidate = request.candidate_skills.unwrap_or_default();
    let job = request.job_skills.unwrap_or_default();

    let result = compute_match(candidate.into_iter().flatten(), job.into_iter().flatten());

    debug!(
        "Skill match computed: {}% ({} matched, {} missing)",
        result.match_percentage,
        result.matched_skills.len(),
        result.missing_skills.len()
    );

    Json(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::post,
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_match(body: Value) -> (StatusCode, Value) {
        let app = Router::new().route("/api/ai/skill-match", post(handle_skill_match));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ai/skill-match")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_skill_match_returns_camel_case_result() {
        let (status, body) = post_match(json!({
            "candidateSkills": ["Java", "Spring"],
            "jobSkills": ["Java", "Spring", "SQL"]
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchPercentage"], 81);
        assert_eq!(body["matchedSkills"], json!(["java", "spring"]));
        assert_eq!(body["missingSkills"], json!(["sql"]));
        assert_eq!(
            body["suggestion"],
            "Excellent match! You are a strong candidate."
        );
    }

    #[tokio::test]
    async fn test_skill_match_drops_null_entries() {
        let (status, body) = post_match(json!({
            "candidateSkills": [null, " python ", ""],
            "jobSkills": ["Python", null]
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchPercentage"], 100);
        assert_eq!(body["matchedSkills"], json!(["python"]));
    }

    #[tokio::test]
    async fn test_skill_match_accepts_null_and_missing_lists() {
        let (status, body) = post_match(json!({ "candidateSkills": null })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchPercentage"], 100);
        assert_eq!(
            body["suggestion"],
            "No specific skills required for this job."
        );
    }
}
