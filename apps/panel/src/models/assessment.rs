#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result reported by the assessment collaborator once a quiz is finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub skill: String,
    /// 0 – 100
    pub score: u8,
    #[serde(default)]
    pub results: AssessmentDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentDetails {
    #[serde(default)]
    pub weak_skills: Vec<String>,
    /// Anything else the collaborator reports, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What the assessment collaborator hands back to the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentEvent {
    Completed(AssessmentResult),
    Closed,
}
