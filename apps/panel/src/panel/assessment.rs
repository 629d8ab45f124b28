//! Assessment orchestrator — asks the backend to generate assessments, then opens
//! the assessment view so the collaborator can run the quiz.

use tracing::{debug, info};

use super::ResumeSkillPanel;
use crate::analysis_client::AssessmentRequest;
use crate::errors::PanelError;
use crate::skills::unique_skills;

const BULK_CONTEXT: &str = "Failed to generate assessments";

impl ResumeSkillPanel {
    /// Generates assessments for the union of all profiles' skills and opens the
    /// view on the first one. Returned assessment ids are only logged.
    pub async fn generate_assessment_for_all_skills(&mut self) -> Result<(), PanelError> {
        if self.profiles.is_empty() {
            return self.fail(PanelError::NoProfiles);
        }

        let skills = unique_skills(&self.profiles);
        if skills.is_empty() {
            return self.fail(PanelError::NoSkills);
        }

        self.busy.set_generating(true);
        self.error = None;

        let request = AssessmentRequest {
            skills,
            difficulty: self.difficulty.clone(),
        };
        let outcome = match self.backend.generate_all_skill_assessments(&request).await {
            Ok(response) => response.into_assessments(),
            Err(err) => Err(err.into()),
        };

        self.busy.set_generating(false);

        match outcome {
            Ok(assessments) => {
                for generated in &assessments {
                    if let Some(id) = &generated.assessment_id {
                        debug!(
                            "Assessment generated for {}: {}",
                            generated.skill.as_deref().unwrap_or("<unnamed>"),
                            id
                        );
                    }
                }
                info!(
                    "Generated {} assessment(s) for {} skill(s)",
                    assessments.len(),
                    request.skills.len()
                );
                if let Some(first) = request.skills.into_iter().next() {
                    self.start_skill_assessment(first);
                }
                Ok(())
            }
            Err(err) => self.fail(PanelError::assessment_generation(BULK_CONTEXT, err)),
        }
    }

    /// Generates an assessment for one skill and opens the view on it.
    pub async fn generate_individual_skill_assessment(
        &mut self,
        skill: &str,
    ) -> Result<(), PanelError> {
        self.busy.set_generating(true);
        self.error = None;

        let request = AssessmentRequest {
            skills: vec![skill.to_string()],
            difficulty: self.difficulty.clone(),
        };
        let outcome = match self.backend.generate_skill_assessment(&request).await {
            Ok(response) => response.into_assessment(),
            Err(err) => Err(err.into()),
        };

        self.busy.set_generating(false);

        match outcome {
            Ok(_) => {
                info!("Assessment ready for {}", skill);
                self.start_skill_assessment(skill);
                Ok(())
            }
            Err(err) => self.fail(PanelError::assessment_generation(
                format!("Failed to generate assessment for {skill}"),
                err,
            )),
        }
    }

    /// "Start assessment" on a profile card: assesses its first skill.
    /// A profile without skills is a no-op.
    pub async fn start_profile_assessment(&mut self, index: usize) -> Result<(), PanelError> {
        let first = self
            .profiles
            .get(index)
            .ok_or(PanelError::ProfileNotFound(index))?
            .skills
            .first()
            .cloned();

        match first {
            Some(skill) => self.generate_individual_skill_assessment(&skill).await,
            None => Ok(()),
        }
    }
}
