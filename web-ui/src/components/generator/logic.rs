//! Pure upload-merge and validation helpers. No RSX, no signals.

use shared_types::ExportFormat;

use super::types::{UiError, COMPACT_BREAKPOINT_PX};

/// Separator inserted between the user's own notes and text merged from an
/// uploaded resume. Unmerge looks for this exact block first.
pub const EXTRACTED_SEPARATOR: &str = "\n\n--- Extracted from uploaded resume ---\n";

/// Append extracted resume text to the notes field. Empty (or
/// whitespace-only) notes are replaced outright, with no separator prefix.
pub fn merge_extracted(notes: &str, extracted: &str) -> String {
    if notes.trim().is_empty() {
        extracted.to_string()
    } else {
        format!("{notes}{EXTRACTED_SEPARATOR}{extracted}")
    }
}

/// Remove previously merged text from the notes. Tries the exact
/// separator+text block first; only if manual edits disturbed the separator
/// does it fall back to removing a bare occurrence of the extracted text,
/// so a user-authored copy of the same text survives a clean detach. A
/// no-op (beyond trimming) when neither is present, so detaching twice is
/// safe.
pub fn unmerge_extracted(notes: &str, extracted: &str) -> String {
    if extracted.is_empty() {
        return notes.to_string();
    }
    let merged_block = format!("{EXTRACTED_SEPARATOR}{extracted}");
    let stripped = match remove_first(notes, &merged_block) {
        Some(without_block) => without_block,
        None => remove_first(notes, extracted).unwrap_or_else(|| notes.to_string()),
    };
    stripped.trim().to_string()
}

fn remove_first(haystack: &str, needle: &str) -> Option<String> {
    haystack.find(needle).map(|idx| {
        let mut out = String::with_capacity(haystack.len() - needle.len());
        out.push_str(&haystack[..idx]);
        out.push_str(&haystack[idx + needle.len()..]);
        out
    })
}

/// Local precondition for generation: at least one input must be present.
/// Checked before connectivity, and always before any network call.
pub fn validate_generate_inputs(github_username: &str, notes: &str) -> Result<(), UiError> {
    if github_username.is_empty() && notes.is_empty() {
        return Err(UiError::Validation(
            "Please provide either a GitHub username or additional information".to_string(),
        ));
    }
    Ok(())
}

/// Download name for an exported document; the extension maps 1:1 to the
/// format with no re-derivation.
pub fn export_file_name(format: ExportFormat) -> String {
    format!("resume.{}", format.extension())
}

pub fn is_compact(viewport_width: u32) -> bool {
    viewport_width < COMPACT_BREAKPOINT_PX
}

pub fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_into_empty_notes_is_the_extracted_text() {
        assert_eq!(merge_extracted("", "resume body"), "resume body");
        assert_eq!(merge_extracted("   ", "resume body"), "resume body");
    }

    #[test]
    fn merge_into_nonempty_notes_uses_separator() {
        let merged = merge_extracted("my notes", "resume body");
        assert_eq!(
            merged,
            "my notes\n\n--- Extracted from uploaded resume ---\nresume body"
        );
    }

    #[test]
    fn merge_then_unmerge_round_trips() {
        let notes = "contact: me@example.com\nskills: rust";
        let extracted = "Old Resume\nSenior Engineer";
        let merged = merge_extracted(notes, extracted);
        assert_eq!(unmerge_extracted(&merged, extracted), notes);
    }

    #[test]
    fn unmerge_falls_back_to_bare_text_when_separator_disturbed() {
        let extracted = "Old Resume";
        // User deleted the separator line but kept the text.
        let notes = "my notes\nOld Resume";
        assert_eq!(unmerge_extracted(notes, extracted), "my notes");
    }

    #[test]
    fn unmerge_without_merged_text_is_a_noop() {
        assert_eq!(unmerge_extracted("just my notes", "absent"), "just my notes");
        // Detaching twice is safe.
        let once = unmerge_extracted(
            &merge_extracted("notes", "extracted"),
            "extracted",
        );
        assert_eq!(unmerge_extracted(&once, "extracted"), once);
    }

    #[test]
    fn unmerge_preserves_user_authored_copy_of_extracted_text() {
        // The notes already contain the same text the upload extracted;
        // only the merged block may be removed.
        let extracted = "Senior Engineer";
        let merged = merge_extracted("Senior Engineer", extracted);
        assert_eq!(unmerge_extracted(&merged, extracted), "Senior Engineer");

        let merged = merge_extracted("I was a Senior Engineer at X", extracted);
        assert_eq!(
            unmerge_extracted(&merged, extracted),
            "I was a Senior Engineer at X"
        );
    }

    #[test]
    fn unmerge_does_not_touch_unrelated_content() {
        let extracted = "EXTRACTED";
        let merged = merge_extracted("before", extracted);
        let edited = format!("{merged}\nafter");
        assert_eq!(unmerge_extracted(&edited, extracted), "before\nafter");
    }

    #[test]
    fn validation_requires_some_input() {
        assert!(validate_generate_inputs("", "").is_err());
        assert!(validate_generate_inputs("octocat", "").is_ok());
        assert!(validate_generate_inputs("", "notes").is_ok());
    }

    #[test]
    fn export_file_names_map_directly() {
        assert_eq!(export_file_name(ExportFormat::Md), "resume.md");
        assert_eq!(export_file_name(ExportFormat::Pdf), "resume.pdf");
        assert_eq!(export_file_name(ExportFormat::Docx), "resume.docx");
    }

    #[test]
    fn compact_breakpoint_is_exclusive() {
        assert!(is_compact(767));
        assert!(!is_compact(768));
    }
}
