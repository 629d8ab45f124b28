//! Normalizes the analysis backend's `skills` field.
//!
//! The field arrives in several shapes depending on the backend version. Resolution
//! order, first match wins:
//! 1. JSON array: keep non-blank string entries as-is, in order.
//! 2. String holding a JSON array: same as (1) on the parsed array.
//! 3. Any other non-empty string: strip `[ ] " '`, split on commas and newlines,
//!    trim, drop empty pieces.
//! 4. Anything else (absent, null, number, bool, object): no skills.

use serde_json::Value;
use tracing::debug;

pub fn normalize_skills(raw: Option<&Value>) -> Vec<String> {
    match raw {
        Some(Value::Array(items)) => from_array(items),
        Some(Value::String(text)) if !text.is_empty() => from_text(text),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            debug!("Ignoring skills field of unexpected shape: {}", other);
            Vec::new()
        }
    }
}

fn from_array(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .filter(|skill| !skill.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn from_text(text: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => from_array(&items),
        _ => {
            debug!("skills is not a JSON array, splitting as plain text");
            split_skill_list(text)
        }
    }
}

/// Last-resort splitter for free-form skill strings like `"[Python, 'Go']"`.
pub fn split_skill_list(text: &str) -> Vec<String> {
    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '\''))
        .collect();

    stripped
        .split([',', '\n'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_drops_blank_entries_and_keeps_order() {
        let raw = json!(["Rust", "", "  ", "Go", "Rust"]);
        assert_eq!(normalize_skills(Some(&raw)), vec!["Rust", "Go", "Rust"]);
    }

    #[test]
    fn test_array_entries_are_not_trimmed() {
        let raw = json!([" Docker "]);
        assert_eq!(normalize_skills(Some(&raw)), vec![" Docker "]);
    }

    #[test]
    fn test_array_skips_non_string_entries() {
        let raw = json!(["SQL", 3, null, {"name": "Go"}, "Python"]);
        assert_eq!(normalize_skills(Some(&raw)), vec!["SQL", "Python"]);
    }

    #[test]
    fn test_json_encoded_array_matches_direct_array() {
        let direct = json!(["Python", "", "Machine Learning", "AWS"]);
        let encoded = Value::String(direct.to_string());
        assert_eq!(
            normalize_skills(Some(&encoded)),
            normalize_skills(Some(&direct))
        );
        assert_eq!(
            normalize_skills(Some(&encoded)),
            vec!["Python", "Machine Learning", "AWS"]
        );
    }

    #[test]
    fn test_plain_string_is_split() {
        let raw = json!("Python, Go, \"Rust\"");
        assert_eq!(normalize_skills(Some(&raw)), vec!["Python", "Go", "Rust"]);
    }

    #[test]
    fn test_newlines_and_brackets_are_split() {
        let raw = json!("[Kubernetes\n'Terraform',\n\n CI/CD ]");
        assert_eq!(
            normalize_skills(Some(&raw)),
            vec!["Kubernetes", "Terraform", "CI/CD"]
        );
    }

    #[test]
    fn test_malformed_json_array_falls_back_to_split() {
        let raw = json!("['Java', 'Spring Boot',]");
        assert_eq!(normalize_skills(Some(&raw)), vec!["Java", "Spring Boot"]);
    }

    #[test]
    fn test_json_scalar_string_is_split_not_parsed() {
        let raw = json!("\"Rust\"");
        assert_eq!(normalize_skills(Some(&raw)), vec!["Rust"]);
        let raw = json!("42");
        assert_eq!(normalize_skills(Some(&raw)), vec!["42"]);
    }

    #[test]
    fn test_missing_or_unusable_field_is_empty() {
        assert!(normalize_skills(None).is_empty());
        assert!(normalize_skills(Some(&Value::Null)).is_empty());
        assert!(normalize_skills(Some(&json!(""))).is_empty());
        assert!(normalize_skills(Some(&json!(7))).is_empty());
        assert!(normalize_skills(Some(&json!(true))).is_empty());
        assert!(normalize_skills(Some(&json!({"skills": ["Go"]}))).is_empty());
    }

    #[test]
    fn test_split_only_separators_yields_nothing() {
        assert!(split_skill_list(" , \n ,[]").is_empty());
    }
}
