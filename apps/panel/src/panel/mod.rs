//! ResumeSkillPanel — state behind the resume skill widget.
//!
//! Operations mirror the widget's controls: select files, upload, chart scores,
//! generate assessments, receive assessment results, clear. Each one mutates the
//! panel in place and records any failure as the single displayed error line.

#![allow(dead_code)]

pub mod assessment;
pub mod chart;
pub mod results;
pub mod summary;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::warn;

use crate::analysis_client::SkillBackend;
use crate::errors::PanelError;
use crate::models::{AssessmentResult, Profile, ResumeFile};

/// Assessment view: closed, or open for exactly one skill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssessmentView {
    #[default]
    Closed,
    Open { skill: String },
}

impl AssessmentView {
    pub fn selected_skill(&self) -> Option<&str> {
        match self {
            AssessmentView::Open { skill } => Some(skill.as_str()),
            AssessmentView::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, AssessmentView::Open { .. })
    }
}

/// `loading` and `generating`, shared so a renderer can read them while a request is
/// in flight.
#[derive(Debug, Default)]
pub struct BusyFlags {
    loading: AtomicBool,
    generating: AtomicBool,
}

impl BusyFlags {
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    fn set_loading(&self, value: bool) {
        self.loading.store(value, Ordering::Release);
    }

    fn set_generating(&self, value: bool) {
        self.generating.store(value, Ordering::Release);
    }
}

pub struct ResumeSkillPanel {
    backend: Arc<dyn SkillBackend>,
    difficulty: String,
    files: Vec<ResumeFile>,
    profiles: Vec<Profile>,
    /// `loading` covers the whole multi-file upload, not each file.
    /// `generating` is shared by bulk and individual generation.
    busy: Arc<BusyFlags>,
    error: Option<String>,
    view: AssessmentView,
    /// Keyed by skill; first-insertion order is kept for the summary.
    assessment_results: Vec<AssessmentResult>,
}

impl ResumeSkillPanel {
    pub fn new(backend: Arc<dyn SkillBackend>, difficulty: impl Into<String>) -> Self {
        Self {
            backend,
            difficulty: difficulty.into(),
            files: Vec::new(),
            profiles: Vec::new(),
            busy: Arc::new(BusyFlags::default()),
            error: None,
            view: AssessmentView::Closed,
            assessment_results: Vec::new(),
        }
    }

    pub fn files(&self) -> &[ResumeFile] {
        &self.files
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn is_loading(&self) -> bool {
        self.busy.is_loading()
    }

    pub fn is_generating(&self) -> bool {
        self.busy.is_generating()
    }

    /// Handle to the busy flags that stays valid across `&mut self` calls.
    pub fn busy_flags(&self) -> Arc<BusyFlags> {
        Arc::clone(&self.busy)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> &AssessmentView {
        &self.view
    }

    pub fn assessment_results(&self) -> &[AssessmentResult] {
        &self.assessment_results
    }

    /// Replaces the selection and clears any displayed error.
    pub fn select_files(&mut self, files: Vec<ResumeFile>) {
        self.files = files;
        self.error = None;
    }

    /// Empties profiles, files, error and assessment results together.
    /// An open assessment view stays open.
    pub fn clear_results(&mut self) {
        self.profiles.clear();
        self.files.clear();
        self.error = None;
        self.assessment_results.clear();
    }

    /// Opens the assessment view for `skill`, replacing any previous selection.
    pub fn start_skill_assessment(&mut self, skill: impl Into<String>) {
        self.view = AssessmentView::Open {
            skill: skill.into(),
        };
    }

    pub fn close_assessment(&mut self) {
        self.view = AssessmentView::Closed;
    }

    /// Records `err` as the displayed error and hands it back to the caller.
    fn fail<T>(&mut self, err: PanelError) -> Result<T, PanelError> {
        warn!("{}", err);
        self.error = Some(err.to_string());
        Err(err)
    }
}
