//! In-memory `SkillBackend` for panel tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use super::{BusyFlags, ResumeSkillPanel};
use crate::analysis_client::{
    AnalyzeResponse, AssessmentRequest, BulkAssessmentResponse, ClientError,
    SingleAssessmentResponse, SkillBackend,
};
use crate::models::{Profile, ResumeFile};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Analyze(String),
    Bulk(AssessmentRequest),
    Single(AssessmentRequest),
}

/// `(loading, generating)` as seen by the backend when a call arrived.
pub type FlagSnapshot = (bool, bool);

/// Replays queued responses in order and records every call.
#[derive(Default)]
pub struct FakeBackend {
    analyze: Mutex<VecDeque<Result<AnalyzeResponse, ClientError>>>,
    bulk: Mutex<VecDeque<Result<BulkAssessmentResponse, ClientError>>>,
    single: Mutex<VecDeque<Result<SingleAssessmentResponse, ClientError>>>,
    calls: Mutex<Vec<Call>>,
    observed: Mutex<Option<Arc<BusyFlags>>>,
    snapshots: Mutex<Vec<FlagSnapshot>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_analyze(&self, response: Result<AnalyzeResponse, ClientError>) {
        self.analyze.lock().unwrap().push_back(response);
    }

    pub fn push_bulk(&self, response: Result<BulkAssessmentResponse, ClientError>) {
        self.bulk.lock().unwrap().push_back(response);
    }

    pub fn push_single(&self, response: Result<SingleAssessmentResponse, ClientError>) {
        self.single.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Snapshot `flags` at the start of every subsequent call.
    pub fn observe(&self, flags: Arc<BusyFlags>) {
        *self.observed.lock().unwrap() = Some(flags);
    }

    pub fn snapshots(&self) -> Vec<FlagSnapshot> {
        self.snapshots.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        if let Some(flags) = self.observed.lock().unwrap().as_ref() {
            self.snapshots
                .lock()
                .unwrap()
                .push((flags.is_loading(), flags.is_generating()));
        }
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SkillBackend for FakeBackend {
    async fn analyze_resume(&self, file: &ResumeFile) -> Result<AnalyzeResponse, ClientError> {
        self.record(Call::Analyze(file.name.clone()));
        self.analyze
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected analyze_resume call")
    }

    async fn generate_all_skill_assessments(
        &self,
        request: &AssessmentRequest,
    ) -> Result<BulkAssessmentResponse, ClientError> {
        self.record(Call::Bulk(request.clone()));
        self.bulk
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected generate_all_skill_assessments call")
    }

    async fn generate_skill_assessment(
        &self,
        request: &AssessmentRequest,
    ) -> Result<SingleAssessmentResponse, ClientError> {
        self.record(Call::Single(request.clone()));
        self.single
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected generate_skill_assessment call")
    }
}

pub fn panel_with(backend: Arc<FakeBackend>) -> ResumeSkillPanel {
    let panel = ResumeSkillPanel::new(backend.clone(), "intermediate");
    backend.observe(panel.busy_flags());
    panel
}

pub fn profile(filename: &str, skills: &[&str]) -> Profile {
    Profile {
        filename: filename.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        text_length: 1200,
        skills_count: skills.len() as u64,
        processing_time: Utc::now(),
        skill_scores: None,
    }
}
