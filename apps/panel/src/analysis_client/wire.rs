//! Request and response bodies of the analysis backend.
//!
//! Every response field is optional on the wire and kept as a raw `Value`. The upstream
//! service is loosely typed, so validation happens here rather than in serde: a field
//! counts as present only when it is truthy (not `null`, `false`, `0` or `""`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::PanelError;

/// `POST /analyze_resume` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub filename: Option<Value>,
    /// Array, JSON-encoded string or free-form string. See `skills::normalize_skills`.
    #[serde(default)]
    pub skills: Option<Value>,
    #[serde(default)]
    pub text_length: Option<Value>,
    #[serde(default)]
    pub skills_count: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl AnalyzeResponse {
    pub fn backend_error(&self) -> Option<String> {
        truthy(&self.error).map(message)
    }

    /// Non-empty string filename, if the backend sent one.
    pub fn filename(&self) -> Option<&str> {
        truthy(&self.filename).and_then(Value::as_str)
    }

    pub fn text_length(&self) -> Option<u64> {
        truthy(&self.text_length).and_then(as_count)
    }

    pub fn skills_count(&self) -> Option<u64> {
        truthy(&self.skills_count).and_then(as_count)
    }
}

/// Body shared by both assessment-generation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub skills: Vec<String>,
    pub difficulty: String,
}

/// One entry of the bulk endpoint's `assessments` array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedAssessment {
    pub skill: Option<String>,
    pub assessment_id: Option<Value>,
}

impl GeneratedAssessment {
    fn from_value(entry: &Value) -> Self {
        Self {
            skill: entry.get("skill").and_then(Value::as_str).map(str::to_string),
            assessment_id: entry.get("assessment_id").and_then(|id| truthy_value(id).cloned()),
        }
    }
}

/// `POST /generate_all_skill_assessments` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkAssessmentResponse {
    #[serde(default)]
    pub success: Option<Value>,
    #[serde(default)]
    pub assessments: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl BulkAssessmentResponse {
    /// Backend `error` wins over a missing `success`/`assessments` pair.
    pub fn into_assessments(self) -> Result<Vec<GeneratedAssessment>, PanelError> {
        if let Some(err) = truthy(&self.error) {
            return Err(PanelError::Backend(message(err)));
        }
        if truthy(&self.success).is_none() {
            return Err(PanelError::Malformed("Failed to generate assessments"));
        }
        match truthy(&self.assessments) {
            Some(Value::Array(entries)) => {
                Ok(entries.iter().map(GeneratedAssessment::from_value).collect())
            }
            _ => Err(PanelError::Malformed("Failed to generate assessments")),
        }
    }
}

/// `POST /generate_skill_assessment` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SingleAssessmentResponse {
    #[serde(default)]
    pub success: Option<Value>,
    #[serde(default)]
    pub assessment: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl SingleAssessmentResponse {
    pub fn into_assessment(self) -> Result<Value, PanelError> {
        if let Some(err) = truthy(&self.error) {
            return Err(PanelError::Backend(message(err)));
        }
        if truthy(&self.success).is_none() || truthy(&self.assessment).is_none() {
            return Err(PanelError::Malformed("Failed to generate assessment"));
        }
        Ok(self.assessment.unwrap_or_default())
    }
}

fn truthy_value(value: &Value) -> Option<&Value> {
    let keep = match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    keep.then_some(value)
}

fn truthy(field: &Option<Value>) -> Option<&Value> {
    field.as_ref().and_then(truthy_value)
}

/// Whole, non-negative counts; fractional values are truncated.
fn as_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f.trunc() as u64)
    })
}

/// String errors verbatim; anything else as its JSON text.
fn message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
