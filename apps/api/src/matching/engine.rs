//! Skill Match Engine: scores a candidate's skills against a job's required skills.
//!
//! Pure and synchronous: no I/O, no shared state. Handlers call [`compute_match`]
//! directly; nothing here needs an `await`.
//!
//! Algorithm:
//! 1. Normalize both lists (trim, lowercase, drop blanks, dedup keeping first occurrence)
//! 2. Job list empty → 100%, no matched/missing, fixed suggestion
//! 3. Otherwise cosine similarity of binary presence vectors over the union vocabulary
//! 4. Percentage = similarity × 100, truncated (79.9 → 79)
//! 5. Suggestion from a fixed (score, missing) decision table

use std::collections::HashSet;

use serde::Serialize;

const NO_SKILLS_REQUIRED: &str = "No specific skills required for this job.";

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// A normalized, deduplicated list of skill labels in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: Vec<String>,
    index: HashSet<String>,
}

impl SkillSet {
    /// Normalizes raw skill labels. Blank entries are dropped, case and surrounding
    /// whitespace variants collapse to one entry.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = SkillSet::default();
        for skill in raw {
            let normalized = normalize_skill(skill.as_ref());
            if normalized.is_empty() || set.index.contains(&normalized) {
                continue;
            }
            set.index.insert(normalized.clone());
            set.skills.push(normalized);
        }
        set
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.index.contains(skill)
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }
}

/// Output of one match computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_percentage: u8, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestion: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

fn normalize_skill(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Scores `candidate_skills` against `job_skills`. Total over its inputs.
pub fn compute_match<C, J, S, T>(candidate_skills: C, job_skills: J) -> MatchResult
where
    C: IntoIterator<Item = S>,
    J: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let candidate = SkillSet::from_raw(candidate_skills);
    let job = SkillSet::from_raw(job_skills);

    if job.is_empty() {
        return MatchResult {
            match_percentage: 100,
            matched_skills: vec![],
            missing_skills: vec![],
            suggestion: NO_SKILLS_REQUIRED.to_string(),
        };
    }

    let matched_skills: Vec<String> = candidate
        .iter()
        .filter(|s| job.contains(s))
        .map(str::to_string)
        .collect();

    let missing_skills: Vec<String> = job
        .iter()
        .filter(|s| !candidate.contains(s))
        .map(str::to_string)
        .collect();

    let match_percentage = to_percentage(cosine_similarity(&candidate, &job));
    let suggestion = build_suggestion(match_percentage, &missing_skills);

    MatchResult {
        match_percentage,
        matched_skills,
        missing_skills,
        suggestion,
    }
}

/// Cosine similarity of the binary presence vectors of two skill sets.
///
/// Each vector component is 0 or 1, so the dot product is the intersection size
/// and each magnitude is the square root of the set size. Returns 0.0 when either
/// set is empty.
pub fn cosine_similarity(a: &SkillSet, b: &SkillSet) -> f64 {
    let vocabulary: HashSet<&str> = a.iter().chain(b.iter()).collect();
    if vocabulary.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for term in &vocabulary {
        let x = if a.contains(term) { 1.0 } else { 0.0 };
        let y = if b.contains(term) { 1.0 } else { 0.0 };
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // One sqrt over the product keeps identical sets at exactly 1.0
    // (sqrt(2) * sqrt(2) would give 2.0000000000000004 and truncate to 99).
    dot / (norm_a * norm_b).sqrt()
}

/// Truncates (never rounds) a similarity in [0, 1] to an integer percentage.
fn to_percentage(similarity: f64) -> u8 {
    (similarity * 100.0).trunc().clamp(0.0, 100.0) as u8
}

/// Builds the user-facing suggestion from the score and the missing skills.
fn build_suggestion(percentage: u8, missing: &[String]) -> String {
    if percentage == 100 {
        "Perfect match! You have all the required skills.".to_string()
    } else if percentage >= 80 {
        "Excellent match! You are a strong candidate.".to_string()
    } else if percentage >= 50 {
        if missing.is_empty() {
            return "Good match!".to_string();
        }
        let top_missing = if missing.len() > 2 {
            format!("{} and others", format_list(&missing[..2]))
        } else {
            format_list(missing)
        };
        format!("Good match. Learning {top_missing} would improve your chances.")
    } else {
        match missing.first() {
            Some(first) => format!("Low match. Focus on learning key skills like: {first}"),
            None => "Low match.".to_string(),
        }
    }
}

/// Renders skills as `[a, b]`.
fn format_list(skills: &[String]) -> String {
    format!("[{}]", skills.join(", "))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
