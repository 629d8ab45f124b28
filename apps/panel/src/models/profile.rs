use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Skills extracted from one uploaded resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub filename: String,
    /// Order of the backend response; duplicates are kept.
    pub skills: Vec<String>,
    pub text_length: u64,
    pub skills_count: u64,
    pub processing_time: DateTime<Utc>,
    /// Chart placeholder scores, attached on demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_scores: Option<Vec<SkillScore>>,
}

/// Placeholder 1–10 chart score. Not an assessment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillScore {
    pub name: String,
    pub score: u8,
}
