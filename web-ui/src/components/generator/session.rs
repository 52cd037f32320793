//! Generation session state machine. Pure transitions, no RSX, no network.
//!
//! The view holds one `Session` in a signal and drives it: `try_begin_*`
//! checks local preconditions and raises the busy flag before a request is
//! issued, `finish_*` applies the response. Every failure path leaves the
//! resume document and prior state untouched.

use shared_types::ExportFormat;

use crate::api::ApiError;

use super::logic::validate_generate_inputs;
use super::types::{
    CompactPane, Notice, NoticeKind, ResumeView, SessionStatus, UiError,
};

const NOT_CONNECTED_MSG: &str = "Backend server is not connected. Please start the server first.";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    status: SessionStatus,
    /// Generate/upload busy flag; gates their triggering controls.
    loading: bool,
    /// Export busy flag, independent of `loading`.
    exporting: bool,
    resume: String,
    view: ResumeView,
    pane: CompactPane,
    notice_seq: u64,
    success: Option<Notice>,
    error: Option<Notice>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            status: SessionStatus::Checking,
            loading: false,
            exporting: false,
            resume: String::new(),
            view: ResumeView::Edit,
            pane: CompactPane::Form,
            notice_seq: 0,
            success: None,
            error: None,
        }
    }
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    pub fn resume(&self) -> &str {
        &self.resume
    }

    pub fn has_resume(&self) -> bool {
        !self.resume.is_empty()
    }

    pub fn view(&self) -> ResumeView {
        self.view
    }

    pub fn pane(&self) -> CompactPane {
        self.pane
    }

    pub fn success_notice(&self) -> Option<&Notice> {
        self.success.as_ref()
    }

    pub fn error_notice(&self) -> Option<&Notice> {
        self.error.as_ref()
    }

    pub fn set_view(&mut self, view: ResumeView) {
        self.view = view;
    }

    pub fn set_pane(&mut self, pane: CompactPane) {
        self.pane = pane;
    }

    /// Direct user edits to the resume document.
    pub fn set_resume(&mut self, content: String) {
        self.resume = content;
    }

    // ------------------------------------------------------------------
    // Connectivity probe
    // ------------------------------------------------------------------

    pub fn begin_probe(&mut self) {
        self.status = SessionStatus::Checking;
    }

    /// Classify the probe outcome. Unreachable (including timeout) maps to
    /// `Disconnected` and raises an error notice; an HTTP failure maps to
    /// `Error` without one.
    pub fn apply_probe(&mut self, outcome: Result<(), ApiError>) -> Option<(NoticeKind, u64)> {
        match outcome {
            Ok(()) => {
                self.status = SessionStatus::Connected;
                None
            }
            Err(ApiError::Service(_)) => {
                self.status = SessionStatus::Error;
                None
            }
            Err(ApiError::Transport(_)) => {
                self.status = SessionStatus::Disconnected;
                let id = self.show_error(
                    "Cannot connect to backend server. Make sure it's running on port 8000."
                        .to_string(),
                );
                Some((NoticeKind::Error, id))
            }
        }
    }

    // ------------------------------------------------------------------
    // Generate
    // ------------------------------------------------------------------

    /// Local preconditions for generation; on success the busy flag is up
    /// and the previous error notice is cleared. Never touches the network.
    pub fn try_begin_generate(
        &mut self,
        github_username: &str,
        notes: &str,
    ) -> Result<(), UiError> {
        validate_generate_inputs(github_username, notes)?;
        self.ensure_connected()?;
        self.error = None;
        self.loading = true;
        Ok(())
    }

    /// Apply the generation outcome. Success replaces the document
    /// wholesale and switches to Preview (and, in compact layouts, to the
    /// result pane); failure preserves the existing document.
    pub fn finish_generate(
        &mut self,
        outcome: Result<String, ApiError>,
        compact: bool,
    ) -> (NoticeKind, u64) {
        self.loading = false;
        match outcome {
            Ok(markdown) => {
                self.resume = markdown;
                self.view = ResumeView::Preview;
                if compact {
                    self.pane = CompactPane::Resume;
                }
                let id = self.show_success("Resume generated successfully!".to_string());
                (NoticeKind::Success, id)
            }
            Err(e) => {
                let id = self.show_error(e.to_string());
                (NoticeKind::Error, id)
            }
        }
    }

    // ------------------------------------------------------------------
    // Upload
    // ------------------------------------------------------------------

    /// Uploads share the `loading` flag with generation, as the triggering
    /// controls disable together.
    pub fn try_begin_upload(&mut self) -> Result<(), UiError> {
        self.ensure_connected()?;
        self.loading = true;
        Ok(())
    }

    /// The caller merges extracted text before reporting success; a failed
    /// upload changes nothing beyond the notice.
    pub fn finish_upload(&mut self, outcome: Result<(), ApiError>) -> (NoticeKind, u64) {
        self.loading = false;
        match outcome {
            Ok(()) => {
                let id = self.show_success("Resume uploaded successfully!".to_string());
                (NoticeKind::Success, id)
            }
            Err(e) => {
                let id = self.show_error(e.to_string());
                (NoticeKind::Error, id)
            }
        }
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    pub fn try_begin_export(&mut self) -> Result<(), UiError> {
        if self.resume.is_empty() {
            return Err(UiError::Validation("No resume to export".to_string()));
        }
        if !self.status.is_connected() {
            return Err(UiError::Validation(
                "Backend server is not connected.".to_string(),
            ));
        }
        self.exporting = true;
        Ok(())
    }

    pub fn finish_export(
        &mut self,
        format: ExportFormat,
        outcome: Result<(), ApiError>,
    ) -> (NoticeKind, u64) {
        self.exporting = false;
        match outcome {
            Ok(()) => {
                let id = self.show_success(format!(
                    "Resume exported as {} successfully!",
                    format.as_str().to_uppercase()
                ));
                (NoticeKind::Success, id)
            }
            Err(e) => {
                let id = self.show_error(e.to_string());
                (NoticeKind::Error, id)
            }
        }
    }

    // ------------------------------------------------------------------
    // Notices
    // ------------------------------------------------------------------

    pub fn show_success(&mut self, text: String) -> u64 {
        let id = self.next_notice_id();
        self.success = Some(Notice { id, text });
        id
    }

    pub fn show_error(&mut self, text: String) -> u64 {
        let id = self.next_notice_id();
        self.error = Some(Notice { id, text });
        id
    }

    /// Expiry callbacks pass the id they were scheduled with, so a timer
    /// for a replaced notice never clears its successor.
    pub fn clear_success_if(&mut self, id: u64) {
        if self.success.as_ref().is_some_and(|n| n.id == id) {
            self.success = None;
        }
    }

    pub fn clear_error_if(&mut self, id: u64) {
        if self.error.as_ref().is_some_and(|n| n.id == id) {
            self.error = None;
        }
    }

    fn ensure_connected(&self) -> Result<(), UiError> {
        if self.status.is_connected() {
            Ok(())
        } else {
            Err(UiError::Validation(NOT_CONNECTED_MSG.to_string()))
        }
    }

    fn next_notice_id(&mut self) -> u64 {
        self.notice_seq += 1;
        self.notice_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_session() -> Session {
        let mut session = Session::default();
        session.apply_probe(Ok(()));
        session
    }

    #[test]
    fn probe_outcomes_map_to_statuses() {
        let mut session = Session::default();
        assert_eq!(session.status(), SessionStatus::Checking);

        session.apply_probe(Ok(()));
        assert_eq!(session.status(), SessionStatus::Connected);

        session.begin_probe();
        assert_eq!(session.status(), SessionStatus::Checking);

        let notice = session.apply_probe(Err(ApiError::Service("HTTP error: 500".to_string())));
        assert_eq!(session.status(), SessionStatus::Error);
        assert!(notice.is_none());

        let notice =
            session.apply_probe(Err(ApiError::Transport("Health check timed out".to_string())));
        assert_eq!(session.status(), SessionStatus::Disconnected);
        assert!(notice.is_some());
        assert!(session
            .error_notice()
            .is_some_and(|n| n.text.contains("Cannot connect to backend server")));
    }

    #[test]
    fn generate_with_no_input_fails_before_any_network_call() {
        let mut session = connected_session();
        let err = session.try_begin_generate("", "").unwrap_err();
        assert!(matches!(err, UiError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Please provide either a GitHub username or additional information"
        );
        assert!(!session.is_loading());
    }

    #[test]
    fn generate_requires_connectivity() {
        let mut session = Session::default();
        session.apply_probe(Err(ApiError::Transport("down".to_string())));
        let err = session.try_begin_generate("octocat", "").unwrap_err();
        assert_eq!(err.to_string(), NOT_CONNECTED_MSG);
        assert!(!session.is_loading());
    }

    #[test]
    fn generate_success_replaces_document_and_switches_to_preview() {
        let mut session = connected_session();
        session.set_resume("stale draft".to_string());

        session.try_begin_generate("octocat", "").unwrap();
        assert!(session.is_loading());

        let (kind, _) = session.finish_generate(Ok("# Octo Cat".to_string()), false);
        assert_eq!(kind, NoticeKind::Success);
        assert!(!session.is_loading());
        assert_eq!(session.resume(), "# Octo Cat");
        assert_eq!(session.view(), ResumeView::Preview);
        assert_eq!(session.pane(), CompactPane::Form);
        assert!(session
            .success_notice()
            .is_some_and(|n| n.text == "Resume generated successfully!"));
    }

    #[test]
    fn generate_success_on_compact_layout_moves_to_result_pane() {
        let mut session = connected_session();
        session.try_begin_generate("octocat", "").unwrap();
        session.finish_generate(Ok("# Octo Cat".to_string()), true);
        assert_eq!(session.pane(), CompactPane::Resume);
    }

    #[test]
    fn generate_failure_preserves_document_and_propagates_message() {
        let mut session = connected_session();
        session.set_resume("# Previous".to_string());

        session.try_begin_generate("octocat", "").unwrap();
        let (kind, _) =
            session.finish_generate(Err(ApiError::Service("rate limited".to_string())), false);

        assert_eq!(kind, NoticeKind::Error);
        assert_eq!(session.resume(), "# Previous");
        assert_eq!(session.error_notice().unwrap().text, "rate limited");
        assert!(!session.is_loading());
    }

    #[test]
    fn export_requires_document_and_connectivity() {
        let mut session = connected_session();
        let err = session.try_begin_export().unwrap_err();
        assert_eq!(err.to_string(), "No resume to export");

        let mut offline = Session::default();
        offline.set_resume("# R".to_string());
        let err = offline.try_begin_export().unwrap_err();
        assert_eq!(err.to_string(), "Backend server is not connected.");
        assert!(!offline.is_exporting());
    }

    #[test]
    fn export_failure_leaves_resume_unchanged() {
        let mut session = connected_session();
        session.set_resume("# Keep me".to_string());
        session.try_begin_export().unwrap();
        assert!(session.is_exporting());

        session.finish_export(
            ExportFormat::Pdf,
            Err(ApiError::Transport("Request failed: refused".to_string())),
        );
        assert!(!session.is_exporting());
        assert_eq!(session.resume(), "# Keep me");
    }

    #[test]
    fn export_success_notice_names_the_format() {
        let mut session = connected_session();
        session.set_resume("# R".to_string());
        session.try_begin_export().unwrap();
        session.finish_export(ExportFormat::Docx, Ok(()));
        assert_eq!(
            session.success_notice().unwrap().text,
            "Resume exported as DOCX successfully!"
        );
    }

    #[test]
    fn upload_failure_only_raises_a_notice() {
        let mut session = connected_session();
        session.set_resume("# Keep".to_string());
        session.try_begin_upload().unwrap();
        session.finish_upload(Err(ApiError::Service("Unsupported file format.".to_string())));
        assert_eq!(session.resume(), "# Keep");
        assert_eq!(
            session.error_notice().unwrap().text,
            "Unsupported file format."
        );
    }

    #[test]
    fn later_notice_replaces_earlier_and_keeps_fresh_id() {
        let mut session = connected_session();
        let first = session.show_error("first".to_string());
        let second = session.show_error("second".to_string());
        assert_ne!(first, second);
        assert_eq!(session.error_notice().unwrap().text, "second");

        // The stale timer must not clear the replacement.
        session.clear_error_if(first);
        assert!(session.error_notice().is_some());
        session.clear_error_if(second);
        assert!(session.error_notice().is_none());
    }

    #[test]
    fn success_and_error_notices_are_independent_slots() {
        let mut session = connected_session();
        let success_id = session.show_success("done".to_string());
        let error_id = session.show_error("oops".to_string());
        assert!(session.success_notice().is_some());
        assert!(session.error_notice().is_some());
        session.clear_success_if(success_id);
        assert!(session.success_notice().is_none());
        assert!(session.error_notice().is_some());
        session.clear_error_if(error_id);
    }

    #[test]
    fn beginning_generate_clears_previous_error_notice() {
        let mut session = connected_session();
        session.show_error("old failure".to_string());
        session.try_begin_generate("octocat", "").unwrap();
        assert!(session.error_notice().is_none());
    }
}
