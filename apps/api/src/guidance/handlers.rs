//! Axum route handlers for the Skill Guidance API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::guidance::get_skill_guidance;
use crate::guidance::parser::SkillGuidance;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGuidanceRequest {
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub current_match_score: i64,
}

/// POST /api/ai/skill-guidance
///
/// Returns learning guidance for one missing skill. LLM failures are absorbed
/// into fallback guidance; only malformed requests are rejected.
pub async fn handle_skill_guidance(
    State(state): State<AppState>,
    Json(request): Json<SkillGuidanceRequest>,
) -> Result<Json<SkillGuidance>, AppError> {
    let skill = request
        .skill
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation("skill cannot be empty".to_string()))?;

    let score = u8::try_from(request.current_match_score)
        .ok()
        .filter(|s| *s <= 100)
        .ok_or_else(|| {
            AppError::Validation("currentMatchScore must be between 0 and 100".to_string())
        })?;

    info!("Generating guidance for '{}' at {}% match", skill, score);

    let guidance = get_skill_guidance(state.guidance.as_ref(), &skill, score).await;

    Ok(Json(guidance))
}
