//! Upload orchestrator — submits selected resumes one at a time and turns each
//! analysis response into a `Profile`.

use chrono::Utc;
use tracing::info;

use super::ResumeSkillPanel;
use crate::analysis_client::{AnalyzeResponse, SkillBackend};
use crate::errors::PanelError;
use crate::models::{Profile, ResumeFile};
use crate::skills::normalize_skills;

impl ResumeSkillPanel {
    /// Uploads every selected file in order. The first failure aborts the rest and
    /// leaves the previously displayed profiles untouched; on success the profile
    /// list is replaced by the new set.
    pub async fn upload(&mut self) -> Result<(), PanelError> {
        if self.files.is_empty() {
            return self.fail(PanelError::NoFilesSelected);
        }

        self.busy.set_loading(true);
        self.error = None;

        let outcome = analyze_all(self.backend.as_ref(), &self.files).await;

        self.busy.set_loading(false);

        match outcome {
            Ok(profiles) => {
                info!(
                    "Extracted skills from {} file(s): {} skills total",
                    profiles.len(),
                    profiles.iter().map(|p| p.skills.len()).sum::<usize>()
                );
                self.profiles = profiles;
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }
}

async fn analyze_all(
    backend: &dyn SkillBackend,
    files: &[ResumeFile],
) -> Result<Vec<Profile>, PanelError> {
    let mut profiles = Vec::with_capacity(files.len());

    for file in files {
        let response = backend.analyze_resume(file).await?;

        if let Some(message) = response.backend_error() {
            return Err(PanelError::Backend(message));
        }

        profiles.push(build_profile(file, response));
    }

    Ok(profiles)
}

/// Backend values win; missing (or zero/empty) ones fall back to what is known locally.
fn build_profile(file: &ResumeFile, response: AnalyzeResponse) -> Profile {
    let skills = normalize_skills(response.skills.as_ref());

    let filename = response
        .filename()
        .map(str::to_string)
        .unwrap_or_else(|| file.name.clone());
    let skills_count = response
        .skills_count()
        .unwrap_or(skills.len() as u64);

    Profile {
        filename,
        text_length: response.text_length().unwrap_or(0),
        skills_count,
        skills,
        processing_time: Utc::now(),
        skill_scores: None,
    }
}
