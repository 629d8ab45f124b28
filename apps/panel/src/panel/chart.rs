//! Skill chart placeholder scores.
//!
//! These are random 1–10 values for the chart display only. They never feed into,
//! and are never mixed with, the 0–100 assessment scores.

use rand::Rng;

use super::ResumeSkillPanel;
use crate::errors::PanelError;
use crate::models::SkillScore;

pub const MIN_CHART_SCORE: u8 = 1;
pub const MAX_CHART_SCORE: u8 = 10;

impl ResumeSkillPanel {
    pub fn generate_skill_scores(&mut self, index: usize) -> Result<(), PanelError> {
        self.generate_skill_scores_with(index, &mut rand::thread_rng())
    }

    /// Attaches fresh chart scores to the profile at `index`, replacing old ones.
    /// An unknown index changes nothing.
    pub fn generate_skill_scores_with<R: Rng>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<(), PanelError> {
        let profile = self
            .profiles
            .get_mut(index)
            .ok_or(PanelError::ProfileNotFound(index))?;
        profile.skill_scores = Some(placeholder_scores(&profile.skills, rng));
        Ok(())
    }
}

pub fn placeholder_scores<R: Rng>(skills: &[String], rng: &mut R) -> Vec<SkillScore> {
    skills
        .iter()
        .map(|skill| SkillScore {
            name: skill.clone(),
            score: rng.gen_range(MIN_CHART_SCORE..=MAX_CHART_SCORE),
        })
        .collect()
}
