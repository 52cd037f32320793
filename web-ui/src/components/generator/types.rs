//! Generator data types

use thiserror::Error;

/// Layouts narrower than this use the two-pane compact flow.
pub const COMPACT_BREAKPOINT_PX: u32 = 768;

pub const SUCCESS_NOTICE_MS: u32 = 3_000;
pub const ERROR_NOTICE_MS: u32 = 5_000;
pub const COPIED_RESET_MS: u32 = 2_000;

/// Connectivity classification from the startup probe; gates every
/// network-triggering operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Probe still in flight
    Checking,
    Connected,
    /// Service unreachable (network failure or probe timeout)
    Disconnected,
    /// Service reachable but the probe returned a failure
    Error,
}

impl SessionStatus {
    pub fn is_connected(self) -> bool {
        matches!(self, SessionStatus::Connected)
    }

    /// Banner copy for the not-connected states; compact layouts get the
    /// short version.
    pub fn banner_text(self, compact: bool) -> &'static str {
        match (self, compact) {
            (SessionStatus::Checking, false) => "Checking backend connection...",
            (SessionStatus::Checking, true) => "Checking...",
            (_, false) => "Backend disconnected - Start server on port 8000",
            (_, true) => "Backend disconnected",
        }
    }
}

/// Edit/Preview toggle for the resume document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeView {
    Edit,
    Preview,
}

/// Which pane the compact layout is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactPane {
    Form,
    Resume,
}

/// The single active upload; a new upload replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedResume {
    pub file_name: String,
    /// Text the service extracted from the document.
    pub text: String,
}

/// Instruction template steering generation: an immutable default fetched
/// at startup plus an optional user override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    default_text: String,
    override_text: Option<String>,
}

impl PromptTemplate {
    /// Substitute default when the template endpoint is unreachable.
    pub const FALLBACK: &'static str = "You are a professional resume writer. \
        Create an ATS-friendly, one-page resume in markdown format.";

    pub fn new(default_text: String) -> Self {
        Self {
            default_text,
            override_text: None,
        }
    }

    pub fn fallback() -> Self {
        Self::new(Self::FALLBACK.to_string())
    }

    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    pub fn override_text(&self) -> Option<&str> {
        self.override_text.as_deref()
    }

    /// Seed text for the editor modal: the override when one is saved,
    /// otherwise the default.
    pub fn draft_seed(&self) -> &str {
        self.override_text.as_deref().unwrap_or(&self.default_text)
    }

    /// Store the edited text as the active override. Whitespace is trimmed;
    /// saving an empty draft is equivalent to a reset.
    pub fn save(&mut self, edited: &str) {
        let trimmed = edited.trim();
        self.override_text = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Drop the override; generation falls back to the default.
    pub fn reset(&mut self) {
        self.override_text = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn expiry_ms(self) -> u32 {
        match self {
            NoticeKind::Success => SUCCESS_NOTICE_MS,
            NoticeKind::Error => ERROR_NOTICE_MS,
        }
    }
}

/// A transient notice. The id lets a stale expiry timer recognize that a
/// later notice has replaced the one it was scheduled to clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// Failures produced locally, never by the network. They surface as error
/// notices just like service and transport failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A precondition failed before any request was issued.
    #[error("{0}")]
    Validation(String),
    #[error("Failed to copy to clipboard")]
    Clipboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_save_trims_and_stores_override() {
        let mut prompt = PromptTemplate::new("default".to_string());
        prompt.save("  custom instructions \n");
        assert_eq!(prompt.override_text(), Some("custom instructions"));
        assert_eq!(prompt.draft_seed(), "custom instructions");
        assert_eq!(prompt.default_text(), "default");
    }

    #[test]
    fn prompt_reset_restores_default() {
        let mut prompt = PromptTemplate::new("default".to_string());
        prompt.save("custom");
        prompt.reset();
        assert_eq!(prompt.override_text(), None);
        assert_eq!(prompt.draft_seed(), "default");
    }

    #[test]
    fn saving_blank_draft_clears_override() {
        let mut prompt = PromptTemplate::new("default".to_string());
        prompt.save("custom");
        prompt.save("   ");
        assert_eq!(prompt.override_text(), None);
    }

    #[test]
    fn banner_text_matches_status() {
        assert_eq!(
            SessionStatus::Checking.banner_text(false),
            "Checking backend connection..."
        );
        assert_eq!(
            SessionStatus::Disconnected.banner_text(true),
            "Backend disconnected"
        );
        assert_eq!(
            SessionStatus::Error.banner_text(false),
            "Backend disconnected - Start server on port 8000"
        );
    }
}
