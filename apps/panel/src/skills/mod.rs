//! Skill list handling: normalizing the backend's `skills` field and merging
//! skills across profiles.

pub mod normalize;

use std::collections::HashSet;

use crate::models::Profile;

pub use normalize::normalize_skills;

/// Union of every profile's skills, in first-seen order.
pub fn unique_skills(profiles: &[Profile]) -> Vec<String> {
    let mut seen = HashSet::new();
    profiles
        .iter()
        .flat_map(|p| p.skills.iter())
        .filter(|skill| seen.insert(skill.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile(skills: &[&str]) -> Profile {
        Profile {
            filename: "cv.pdf".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            text_length: 0,
            skills_count: skills.len() as u64,
            processing_time: Utc::now(),
            skill_scores: None,
        }
    }

    #[test]
    fn test_unique_skills_keeps_first_seen_order() {
        let profiles = vec![
            profile(&["Rust", "SQL", "Rust"]),
            profile(&["Go", "SQL", "Python"]),
        ];
        assert_eq!(unique_skills(&profiles), vec!["Rust", "SQL", "Go", "Python"]);
    }

    #[test]
    fn test_unique_skills_is_case_sensitive() {
        let profiles = vec![profile(&["sql"]), profile(&["SQL"])];
        assert_eq!(unique_skills(&profiles), vec!["sql", "SQL"]);
    }

    #[test]
    fn test_unique_skills_empty() {
        assert!(unique_skills(&[]).is_empty());
        assert!(unique_skills(&[profile(&[])]).is_empty());
    }
}
