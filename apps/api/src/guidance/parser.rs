//! Turns raw LLM output into a complete `SkillGuidance`.
//!
//! The LLM is asked for a JSON object but nothing it returns is trusted:
//! - not a JSON object at all → caller falls back to [`fallback_guidance`]
//! - a field missing, blank or of the wrong type → that field's default
//! - `matchIncrease` outside 5–25 → clamped

use serde::Serialize;
use serde_json::{Map, Value};

use crate::llm_client::strip_json_fences;

const MATCH_INCREASE_MIN: i64 = 5;
const MATCH_INCREASE_MAX: i64 = 25;

const DEFAULT_IMPORTANCE: &str = "This skill is important for career growth and job opportunities.";
const DEFAULT_ROADMAP: [&str; 3] = [
    "Learn fundamentals",
    "Practice with projects",
    "Apply in real scenarios",
];
const DEFAULT_MINI_TASK: &str = "Create a simple project demonstrating this skill.";
const DEFAULT_ESTIMATED_TIME: &str = "2-4 weeks";
const DEFAULT_PRIORITY: &str = "Medium";
const DEFAULT_MATCH_INCREASE: u8 = 10;
const DEFAULT_INTERVIEW_TIPS: [&str; 2] = [
    "Be ready to explain your experience with this skill",
    "Prepare examples of projects using this skill",
];
const DEFAULT_RESUME_TIP: &str =
    "Mention this skill in your skills section and provide examples in your experience.";

/// Learning guidance for a single missing skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGuidance {
    pub skill: String,
    pub importance: String,
    pub learning_roadmap: Vec<String>,
    pub mini_task: String,
    pub estimated_time: String,
    pub priority: String,
    pub match_increase: u8, // 5 – 25
    pub interview_tips: Vec<String>,
    pub resume_tip: String,
}

/// Parses LLM text into guidance for `skill`, filling in any field the model got wrong.
/// Fails only when the text is not a JSON object.
pub fn parse_guidance(raw: &str, skill: &str) -> Result<SkillGuidance, serde_json::Error> {
    let fields: Map<String, Value> = serde_json::from_str(strip_json_fences(raw))?;

    Ok(SkillGuidance {
        skill: skill.to_string(),
        importance: string_field(&fields, "importance", DEFAULT_IMPORTANCE),
        learning_roadmap: list_field(&fields, "learningRoadmap", &DEFAULT_ROADMAP),
        mini_task: string_field(&fields, "miniTask", DEFAULT_MINI_TASK),
        estimated_time: string_field(&fields, "estimatedTime", DEFAULT_ESTIMATED_TIME),
        priority: string_field(&fields, "priority", DEFAULT_PRIORITY),
        match_increase: match_increase_field(&fields),
        interview_tips: list_field(&fields, "interviewTips", &DEFAULT_INTERVIEW_TIPS),
        resume_tip: string_field(&fields, "resumeTip", DEFAULT_RESUME_TIP),
    })
}

/// Guidance used when the LLM is unreachable or its output is unusable.
pub fn fallback_guidance(skill: &str) -> SkillGuidance {
    SkillGuidance {
        skill: skill.to_string(),
        importance: "This skill is essential for modern development roles and will significantly improve your job prospects.".to_string(),
        learning_roadmap: vec![
            "Master the fundamentals and core concepts".to_string(),
            "Build practical projects to gain hands-on experience".to_string(),
            "Learn best practices and advanced techniques".to_string(),
        ],
        mini_task: format!(
            "Create a portfolio project that showcases your {skill} skills with real-world application."
        ),
        estimated_time: "3-4 weeks".to_string(),
        priority: "High".to_string(),
        match_increase: 15,
        interview_tips: vec![
            format!("Explain your experience with {skill} in previous projects"),
            "Demonstrate problem-solving using this technology".to_string(),
        ],
        resume_tip: format!(
            "Add {skill} to your skills section and mention specific projects where you used it."
        ),
    }
}

fn string_field(fields: &Map<String, Value>, key: &str, default: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

fn list_field(fields: &Map<String, Value>, key: &str, default: &[&str]) -> Vec<String> {
    let items: Vec<String> = match fields.get(key) {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect(),
        _ => vec![],
    };

    if items.is_empty() {
        default.iter().map(|s| s.to_string()).collect()
    } else {
        items
    }
}

/// Numbers are truncated toward zero then clamped; anything else gets the default.
fn match_increase_field(fields: &Map<String, Value>) -> u8 {
    let Some(Value::Number(n)) = fields.get("matchIncrease") else {
        return DEFAULT_MATCH_INCREASE;
    };

    let value = match n.as_i64() {
        Some(i) => i,
        None => n.as_f64().map(|f| f.trunc() as i64).unwrap_or(i64::MAX),
    };

    value.clamp(MATCH_INCREASE_MIN, MATCH_INCREASE_MAX) as u8
}
