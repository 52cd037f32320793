//! Wire contract for the resume generation service
//!
//! These types mirror the JSON bodies the service accepts and returns.
//! The client (Dioxus / WASM) serializes them with serde over HTTP; keeping
//! them in their own crate keeps the contract natively testable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Enums
// ============================================================================

/// Which section the generated resume should lead with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    #[serde(rename = "experience")]
    ExperienceFirst,
    #[serde(rename = "projects")]
    ProjectsFirst,
}

impl Priority {
    /// The literal value the service expects on the wire.
    pub fn wire_value(self) -> &'static str {
        match self {
            Priority::ExperienceFirst => "experience",
            Priority::ProjectsFirst => "projects",
        }
    }
}

/// Output formats supported by the export endpoint. Anything else is a
/// caller error and is rejected before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Md,
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Md => "md",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    /// File extension for the downloaded document; maps 1:1 to the format.
    pub fn extension(self) -> &'static str {
        self.as_str()
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Md => "text/markdown",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported export format: {0}")]
pub struct UnsupportedFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" => Ok(ExportFormat::Md),
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            other => Err(UnsupportedFormat(other.to_string())),
        }
    }
}

// ============================================================================
// Requests / responses
// ============================================================================

/// Body of `POST /generate-resume`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResumeRequest {
    pub github_username: Option<String>,
    pub additional_info: Option<String>,
    pub priority: Priority,
    /// Only present when the user saved a prompt override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_system_prompt: Option<String>,
    /// Only present when an uploaded resume should steer the layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_template: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResumeResponse {
    pub resume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemPromptResponse {
    pub prompt: String,
}

/// Body returned by `POST /extract-resume` after server-side text extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResumeResponse {
    pub text: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Body of `POST /export-resume`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub markdown_content: String,
    pub format: ExportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn priority_serializes_to_wire_values() {
        assert_eq!(
            serde_json::to_value(Priority::ExperienceFirst).unwrap(),
            json!("experience")
        );
        assert_eq!(
            serde_json::to_value(Priority::ProjectsFirst).unwrap(),
            json!("projects")
        );
        assert_eq!(Priority::default(), Priority::ExperienceFirst);
    }

    #[test]
    fn export_format_round_trips_known_values() {
        for (raw, format) in [
            ("md", ExportFormat::Md),
            ("pdf", ExportFormat::Pdf),
            ("docx", ExportFormat::Docx),
        ] {
            assert_eq!(raw.parse::<ExportFormat>().unwrap(), format);
            assert_eq!(format.extension(), raw);
        }
    }

    #[test]
    fn export_format_rejects_unknown_values() {
        let err = "xlsx".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err, UnsupportedFormat("xlsx".to_string()));
        assert!("MD".parse::<ExportFormat>().is_err());
        assert!("".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn generate_request_omits_absent_optionals() {
        let request = GenerateResumeRequest {
            github_username: Some("octocat".to_string()),
            additional_info: None,
            priority: Priority::ExperienceFirst,
            custom_system_prompt: None,
            resume_template: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["github_username"], json!("octocat"));
        assert_eq!(value["additional_info"], json!(null));
        assert_eq!(value["priority"], json!("experience"));
        assert!(value.get("custom_system_prompt").is_none());
        assert!(value.get("resume_template").is_none());
    }

    #[test]
    fn export_request_carries_format_string() {
        let request = ExportRequest {
            markdown_content: "# Resume".to_string(),
            format: ExportFormat::Docx,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["format"], json!("docx"));
    }
}
