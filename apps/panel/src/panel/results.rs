//! Result aggregator and the hand-off to the assessment collaborator.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ResumeSkillPanel;
use crate::errors::PanelError;
use crate::models::{AssessmentEvent, AssessmentResult};

/// Runs the quiz for one skill and reports how it ended.
#[async_trait]
pub trait AssessmentCollaborator: Send + Sync {
    async fn run(&self, skill: &str) -> AssessmentEvent;
}

/// Collaborator that replays previously recorded results instead of running a quiz.
/// A skill with no recorded result is reported as closed.
#[derive(Debug, Clone, Default)]
pub struct RecordedResults {
    results: Vec<AssessmentResult>,
}

impl RecordedResults {
    pub fn new(results: Vec<AssessmentResult>) -> Self {
        Self { results }
    }

    /// Reads a JSON array of results, e.g. `[{"skill": "SQL", "score": 92}]`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, PanelError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| PanelError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        let results: Vec<AssessmentResult> =
            serde_json::from_slice(&bytes).map_err(|source| PanelError::InvalidResults {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Loaded {} recorded result(s) from {}", results.len(), path.display());
        Ok(Self::new(results))
    }
}

#[async_trait]
impl AssessmentCollaborator for RecordedResults {
    async fn run(&self, skill: &str) -> AssessmentEvent {
        match self.results.iter().find(|r| r.skill == skill) {
            Some(result) => AssessmentEvent::Completed(result.clone()),
            None => AssessmentEvent::Closed,
        }
    }
}

impl ResumeSkillPanel {
    /// Stores `result` under its skill, overwriting any earlier result for that
    /// skill in place, then closes the assessment view.
    pub fn handle_assessment_complete(&mut self, result: AssessmentResult) {
        info!("Assessment completed for {}: {}%", result.skill, result.score);

        match self
            .assessment_results
            .iter_mut()
            .find(|existing| existing.skill == result.skill)
        {
            Some(existing) => *existing = result,
            None => self.assessment_results.push(result),
        }

        self.close_assessment();
    }

    pub fn handle_assessment_event(&mut self, event: AssessmentEvent) {
        match event {
            AssessmentEvent::Completed(result) => self.handle_assessment_complete(result),
            AssessmentEvent::Closed => self.close_assessment(),
        }
    }

    /// Runs the open assessment through `collaborator`. Returns `false` when the
    /// view was closed and nothing ran.
    pub async fn run_open_assessment(&mut self, collaborator: &dyn AssessmentCollaborator) -> bool {
        let Some(skill) = self.view.selected_skill().map(str::to_string) else {
            return false;
        };

        let event = collaborator.run(&skill).await;
        self.handle_assessment_event(event);
        true
    }

    pub fn assessment_result(&self, skill: &str) -> Option<&AssessmentResult> {
        self.assessment_results.iter().find(|r| r.skill == skill)
    }

    /// Score shown on a skill badge once that skill has been assessed.
    pub fn assessed_score(&self, skill: &str) -> Option<u8> {
        self.assessment_result(skill).map(|r| r.score)
    }
}
