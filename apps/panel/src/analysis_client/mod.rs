//! Analysis client — the single point of entry for all calls to the resume analysis backend.
//!
//! Every request the panel makes goes through `SkillBackend`. `AnalysisClient` is the
//! HTTP implementation; tests swap in an in-memory backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::ResumeFile;

pub mod wire;

pub use wire::{
    AnalyzeResponse, AssessmentRequest, BulkAssessmentResponse, SingleAssessmentResponse,
};

const ANALYZE_RESUME_ENDPOINT: &str = "/analyze_resume";
const BULK_ASSESSMENT_ENDPOINT: &str = "/generate_all_skill_assessments";
const SINGLE_ASSESSMENT_ENDPOINT: &str = "/generate_skill_assessment";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Operations the panel needs from the analysis backend.
#[async_trait]
pub trait SkillBackend: Send + Sync {
    async fn analyze_resume(&self, file: &ResumeFile) -> Result<AnalyzeResponse, ClientError>;

    async fn generate_all_skill_assessments(
        &self,
        request: &AssessmentRequest,
    ) -> Result<BulkAssessmentResponse, ClientError>;

    async fn generate_skill_assessment(
        &self,
        request: &AssessmentRequest,
    ) -> Result<SingleAssessmentResponse, ClientError>;
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Sends the request and decodes a 2xx body. Any other status becomes
    /// `ClientError::Status` without reading the body as JSON.
    async fn send_json<R: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<R, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Analysis backend returned {}: {}", status, body);
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl SkillBackend for AnalysisClient {
    async fn analyze_resume(&self, file: &ResumeFile) -> Result<AnalyzeResponse, ClientError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(file.content_type)?;
        let form = Form::new().part("file", part);

        debug!("Uploading {} ({} bytes)", file.name, file.bytes.len());

        let request = self
            .client
            .post(self.url(ANALYZE_RESUME_ENDPOINT))
            .multipart(form);
        let response: AnalyzeResponse = self.send_json(request).await?;

        debug!(
            "Analysis response for {}: skills={:?}, text_length={:?}",
            file.name,
            response.skills,
            response.text_length()
        );
        Ok(response)
    }

    async fn generate_all_skill_assessments(
        &self,
        request: &AssessmentRequest,
    ) -> Result<BulkAssessmentResponse, ClientError> {
        debug!(
            "Requesting {} assessments at {} difficulty",
            request.skills.len(),
            request.difficulty
        );
        let builder = self
            .client
            .post(self.url(BULK_ASSESSMENT_ENDPOINT))
            .json(request);
        self.send_json(builder).await
    }

    async fn generate_skill_assessment(
        &self,
        request: &AssessmentRequest,
    ) -> Result<SingleAssessmentResponse, ClientError> {
        debug!("Requesting assessment for {:?}", request.skills);
        let builder = self
            .client
            .post(self.url(SINGLE_ASSESSMENT_ENDPOINT))
            .json(request);
        self.send_json(builder).await
    }
}
