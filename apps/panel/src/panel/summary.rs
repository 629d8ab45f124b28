use serde::Serialize;

use super::ResumeSkillPanel;
use crate::models::AssessmentResult;

/// Colour band of an assessment score in the results summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// ≥ 80
    Strong,
    /// 60 – 79
    Moderate,
    /// < 60
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Strong,
            60..=79 => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub skill: String,
    pub score: u8,
    pub band: ScoreBand,
    pub note: String,
}

impl SummaryEntry {
    pub fn from_result(result: &AssessmentResult) -> Self {
        Self {
            skill: result.skill.clone(),
            score: result.score,
            band: ScoreBand::from_score(result.score),
            note: improvement_note(&result.results.weak_skills),
        }
    }
}

fn improvement_note(weak_skills: &[String]) -> String {
    if weak_skills.is_empty() {
        "Strong performance".to_string()
    } else {
        format!("{} areas to improve", weak_skills.len())
    }
}

impl ResumeSkillPanel {
    /// One entry per assessed skill, in the order skills were first assessed.
    pub fn summary(&self) -> Vec<SummaryEntry> {
        self.assessment_results
            .iter()
            .map(SummaryEntry::from_result)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssessmentDetails;
    use crate::panel::testing::{panel_with, FakeBackend};

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Weak);
    }

    #[test]
    fn test_summary_notes() {
        let mut panel = panel_with(FakeBackend::new());
        panel.handle_assessment_complete(AssessmentResult {
            skill: "SQL".to_string(),
            score: 92,
            results: AssessmentDetails::default(),
        });
        panel.handle_assessment_complete(AssessmentResult {
            skill: "Go".to_string(),
            score: 45,
            results: AssessmentDetails {
                weak_skills: vec!["goroutines".to_string(), "generics".to_string()],
                ..AssessmentDetails::default()
            },
        });

        let summary = panel.summary();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].skill, "SQL");
        assert_eq!(summary[0].band, ScoreBand::Strong);
        assert_eq!(summary[0].note, "Strong performance");
        assert_eq!(summary[1].band, ScoreBand::Weak);
        assert_eq!(summary[1].note, "2 areas to improve");
    }
}
