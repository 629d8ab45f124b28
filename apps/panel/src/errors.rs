use std::path::PathBuf;

use thiserror::Error;

use crate::analysis_client::ClientError;

/// Panel-level error type.
/// Every variant renders as the single human-readable line the panel displays.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Please select files first!")]
    NoFilesSelected,

    #[error("Please extract skills from a resume first!")]
    NoProfiles,

    #[error("No skills found to assess!")]
    NoSkills,

    #[error("No profile at index {0}")]
    ProfileNotFound(usize),

    #[error("Could not read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid assessment results in {}: {source}", .path.display())]
    InvalidResults {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `error` field reported by the backend inside a 2xx response. Shown verbatim.
    #[error("{0}")]
    Backend(String),

    /// 2xx response missing `success` or the generated assessment payload.
    #[error("{0}")]
    Malformed(&'static str),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("{context}: {source}")]
    AssessmentGeneration {
        context: String,
        #[source]
        source: Box<PanelError>,
    },
}

impl PanelError {
    pub fn assessment_generation(context: impl Into<String>, source: PanelError) -> Self {
        PanelError::AssessmentGeneration {
            context: context.into(),
            source: Box::new(source),
        }
    }
}
