use std::path::Path;

use crate::errors::PanelError;

/// A resume selected for upload, held in memory until the panel submits it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        Self {
            content_type: content_type_for(&name),
            name,
            bytes,
        }
    }

    /// Reads a resume from disk, naming it after the final path component.
    pub async fn from_path(path: &Path) -> Result<Self, PanelError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| PanelError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, bytes))
    }
}

/// The widget accepts `.pdf` and `.txt`; anything else is sent as opaque bytes.
pub fn content_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}
