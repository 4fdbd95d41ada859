//! Skill Guidance: learning advice for a missing skill, generated by the LLM.
//!
//! `AppState` holds an `Arc<dyn GuidanceSource>`; the default backend is
//! `LlmGuidanceSource`. Whatever the backend does, [`get_skill_guidance`] always
//! returns complete guidance: backend failures and unparseable output fall back
//! to a fixed template.

pub mod handlers;
pub mod parser;
pub mod prompts;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::guidance::parser::{fallback_guidance, parse_guidance, SkillGuidance};
use crate::guidance::prompts::build_guidance_prompt;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

/// Produces raw guidance text (expected to be a JSON object) for a skill.
#[async_trait]
pub trait GuidanceSource: Send + Sync {
    async fn generate(&self, skill: &str, current_match_score: u8) -> Result<String, LlmError>;
}

/// Guidance generated by the Groq-hosted model.
pub struct LlmGuidanceSource(pub LlmClient);

#[async_trait]
impl GuidanceSource for LlmGuidanceSource {
    async fn generate(&self, skill: &str, current_match_score: u8) -> Result<String, LlmError> {
        let prompt = build_guidance_prompt(skill, current_match_score);
        self.0.complete(&prompt, JSON_ONLY_SYSTEM).await
    }
}

/// Returns guidance for `skill`. Never fails.
pub async fn get_skill_guidance(
    source: &dyn GuidanceSource,
    skill: &str,
    current_match_score: u8,
) -> SkillGuidance {
    let raw = match source.generate(skill, current_match_score).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Guidance generation failed for '{skill}', using fallback: {e}");
            return fallback_guidance(skill);
        }
    };

    match parse_guidance(&raw, skill) {
        Ok(guidance) => {
            debug!("Guidance generated for '{skill}'");
            guidance
        }
        Err(e) => {
            warn!("Guidance for '{skill}' was not a JSON object, using fallback: {e}");
            fallback_guidance(skill)
        }
    }
}
