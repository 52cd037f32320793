//! Main GeneratorView component

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use shared_types::{ExportFormat, GenerateResumeRequest, Priority};

use crate::api::{self, ApiError};
use crate::interop;
use crate::markdown::{self, Block, Inline};

use super::logic::{
    export_file_name, is_compact, merge_extracted, none_if_empty, unmerge_extracted,
};
use super::session::Session;
use super::styles::GENERATOR_STYLES;
use super::types::{
    CompactPane, NoticeKind, PromptTemplate, ResumeView, UiError, UploadedResume,
    COPIED_RESET_MS,
};

fn schedule_notice_expiry(mut session: Signal<Session>, kind: NoticeKind, id: u64) {
    spawn(async move {
        TimeoutFuture::new(kind.expiry_ms()).await;
        match kind {
            NoticeKind::Success => session.write().clear_success_if(id),
            NoticeKind::Error => session.write().clear_error_if(id),
        }
    });
}

fn notify_error(mut session: Signal<Session>, text: String) {
    let id = session.write().show_error(text);
    schedule_notice_expiry(session, NoticeKind::Error, id);
}

fn notify_success(mut session: Signal<Session>, text: String) {
    let id = session.write().show_success(text);
    schedule_notice_expiry(session, NoticeKind::Success, id);
}

#[component]
pub fn GeneratorView() -> Element {
    let github_username = use_signal(String::new);
    let notes = use_signal(String::new);
    let priority = use_signal(|| Priority::ExperienceFirst);
    let upload = use_signal(|| None::<UploadedResume>);
    let use_as_template = use_signal(|| false);
    let use_as_data = use_signal(|| true);

    let mut prompt = use_signal(PromptTemplate::fallback);
    let prompt_draft = use_signal(String::new);
    let prompt_modal_open = use_signal(|| false);

    let mut session = use_signal(Session::default);
    let mut compact = use_signal(|| is_compact(interop::viewport_width()));
    let copied = use_signal(|| false);
    let download_menu_open = use_signal(|| false);
    let mut started = use_signal(|| false);

    let on_resize = use_callback(move |width: u32| compact.set(is_compact(width)));

    // Startup: attach the resize listener, probe connectivity, and load the
    // default prompt (falling back silently if that fails).
    use_effect(move || {
        if started() {
            return;
        }
        started.set(true);
        interop::on_viewport_resize(on_resize);

        spawn(async move {
            let outcome = api::probe_health().await;
            let notice = session.write().apply_probe(outcome);
            if let Some((kind, id)) = notice {
                schedule_notice_expiry(session, kind, id);
            }
        });

        spawn(async move {
            match api::fetch_default_prompt().await {
                Ok(text) => prompt.set(PromptTemplate::new(text)),
                Err(e) => {
                    log::warn!("could not load system prompt, using fallback: {e}");
                    prompt.set(PromptTemplate::fallback());
                }
            }
        });
    });

    let root_class = if compact() {
        "generator-root generator-root--compact"
    } else {
        "generator-root"
    };

    rsx! {
        style { {GENERATOR_STYLES} }
        div { class: "{root_class}",
            NoticeLayer { session, compact }
            if prompt_modal_open() {
                PromptModal { session, prompt, prompt_draft, prompt_modal_open }
            }
            if compact() {
                match session.read().pane() {
                    CompactPane::Form => rsx! {
                        FormPane {
                            session,
                            github_username,
                            notes,
                            priority,
                            upload,
                            use_as_template,
                            use_as_data,
                            prompt,
                            prompt_draft,
                            prompt_modal_open,
                            compact,
                        }
                    },
                    CompactPane::Resume => rsx! {
                        ResumePane { session, copied, download_menu_open, compact }
                    },
                }
            } else {
                FormPane {
                    session,
                    github_username,
                    notes,
                    priority,
                    upload,
                    use_as_template,
                    use_as_data,
                    prompt,
                    prompt_draft,
                    prompt_modal_open,
                    compact,
                }
                ResumePane { session, copied, download_menu_open, compact }
            }
        }
    }
}

/// Success notice and the not-connected banner. The banner carries an
/// explicit re-check control; there is no automatic retry loop.
#[component]
fn NoticeLayer(mut session: Signal<Session>, compact: Signal<bool>) -> Element {
    let mut retry_probe = move || {
        session.write().begin_probe();
        spawn(async move {
            let outcome = api::probe_health().await;
            let notice = session.write().apply_probe(outcome);
            if let Some((kind, id)) = notice {
                schedule_notice_expiry(session, kind, id);
            }
        });
    };

    let status = session.read().status();
    let success_text = session.read().success_notice().map(|n| n.text.clone());

    rsx! {
        if let Some(text) = success_text {
            div { class: "generator-notice generator-notice--success", "{text}" }
        }
        if !status.is_connected() {
            div { class: "generator-status-banner",
                span { {status.banner_text(compact())} }
                button { onclick: move |_| retry_probe(), "Retry" }
            }
        }
    }
}

#[component]
fn FormPane(
    mut session: Signal<Session>,
    mut github_username: Signal<String>,
    mut notes: Signal<String>,
    mut priority: Signal<Priority>,
    mut upload: Signal<Option<UploadedResume>>,
    mut use_as_template: Signal<bool>,
    mut use_as_data: Signal<bool>,
    prompt: Signal<PromptTemplate>,
    mut prompt_draft: Signal<String>,
    mut prompt_modal_open: Signal<bool>,
    compact: Signal<bool>,
) -> Element {
    let mut trigger_generate = move || {
        let begin = session
            .write()
            .try_begin_generate(&github_username(), &notes());
        if let Err(err) = begin {
            notify_error(session, err.to_string());
            return;
        }

        let request = GenerateResumeRequest {
            github_username: none_if_empty(github_username()),
            additional_info: none_if_empty(notes()),
            priority: priority(),
            custom_system_prompt: prompt.read().override_text().map(str::to_string),
            resume_template: upload
                .read()
                .as_ref()
                .filter(|_| use_as_template())
                .map(|u| u.text.clone()),
        };

        spawn(async move {
            let outcome = api::generate_resume(&request).await;
            let (kind, id) = session.write().finish_generate(outcome, compact());
            schedule_notice_expiry(session, kind, id);
        });
    };

    let mut on_file_change = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();

        let begin = session.write().try_begin_upload();
        if let Err(err) = begin {
            notify_error(session, err.to_string());
            return;
        }

        spawn(async move {
            let outcome = match file.read_bytes().await {
                Ok(bytes) => api::extract_resume_text(&file_name, &bytes).await,
                Err(e) => Err(ApiError::Transport(format!(
                    "Failed to read the selected file: {e}"
                ))),
            };

            let outcome = match outcome {
                Ok(text) => {
                    if use_as_data() {
                        // A replaced upload takes its merged text with it
                        // before the new text lands.
                        if let Some(previous) = upload() {
                            let cleaned = unmerge_extracted(&notes(), &previous.text);
                            notes.set(cleaned);
                        }
                        let merged = merge_extracted(&notes(), &text);
                        notes.set(merged);
                    }
                    upload.set(Some(UploadedResume {
                        file_name: file_name.clone(),
                        text,
                    }));
                    Ok(())
                }
                Err(e) => Err(e),
            };

            let (kind, id) = session.write().finish_upload(outcome);
            schedule_notice_expiry(session, kind, id);
        });
    };

    let mut on_remove_upload = move || {
        if let Some(previous) = upload() {
            if use_as_data() {
                let cleaned = unmerge_extracted(&notes(), &previous.text);
                notes.set(cleaned);
            }
        }
        upload.set(None);
    };

    let mut open_prompt_modal = move || {
        prompt_draft.set(prompt.read().draft_seed().to_string());
        prompt_modal_open.set(true);
    };

    let loading = session.read().is_loading();
    let connected = session.read().status().is_connected();
    let error_text = session.read().error_notice().map(|n| n.text.clone());
    let upload_label_class = if loading {
        "generator-upload-label generator-upload-label--disabled"
    } else {
        "generator-upload-label"
    };

    rsx! {
        div { class: "generator-form-pane",
            div { class: "generator-pane-header",
                div {
                    h1 { class: "generator-title", "Resume Generator" }
                    p { class: "generator-subtitle",
                        "Generate ATS-friendly resumes from your GitHub profile"
                    }
                }
                button {
                    class: "generator-btn generator-btn--secondary",
                    onclick: move |_| open_prompt_modal(),
                    "Edit Prompt"
                }
            }

            div { class: "generator-pane-body",
                div { class: "generator-field",
                    label { class: "generator-field-label", "GitHub Username" }
                    input {
                        r#type: "text",
                        value: "{github_username}",
                        placeholder: "e.g., octocat",
                        oninput: move |evt| github_username.set(evt.value()),
                    }
                    p { class: "generator-field-hint",
                        "We'll fetch your README to extract relevant information"
                    }
                }

                div { class: "generator-field",
                    label { class: "generator-field-label", "Upload Old Resume (Optional)" }
                    input {
                        r#type: "file",
                        id: "resume-upload",
                        accept: ".pdf,.docx,.txt,.md",
                        style: "display: none;",
                        disabled: loading,
                        onchange: move |evt| on_file_change(evt),
                    }
                    label { class: "{upload_label_class}", r#for: "resume-upload",
                        if loading { "Uploading..." } else { "Click to upload resume" }
                    }
                    if let Some(uploaded) = upload() {
                        div { class: "generator-upload-file",
                            span { "{uploaded.file_name}" }
                            button {
                                class: "generator-upload-remove",
                                onclick: move |_| on_remove_upload(),
                                "Remove"
                            }
                        }
                    }
                    label { class: "generator-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: use_as_template(),
                            onchange: move |evt| use_as_template.set(evt.checked()),
                        }
                        "Use as template structure"
                    }
                    label { class: "generator-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: use_as_data(),
                            onchange: move |evt| use_as_data.set(evt.checked()),
                        }
                        "Extract data from resume"
                    }
                }

                div { class: "generator-field",
                    label { class: "generator-field-label", "Resume Focus" }
                    div { class: "generator-priority-grid",
                        PriorityCard {
                            priority,
                            value: Priority::ExperienceFirst,
                            title: "Experience First",
                            hint: "Emphasize work history",
                        }
                        PriorityCard {
                            priority,
                            value: Priority::ProjectsFirst,
                            title: "Projects First",
                            hint: "Highlight technical projects",
                        }
                    }
                }

                div { class: "generator-field",
                    label { class: "generator-field-label", "Additional Information" }
                    textarea {
                        rows: 8,
                        value: "{notes}",
                        placeholder: "Add details like contact info, experience, education, skills...",
                        oninput: move |evt| notes.set(evt.value()),
                    }
                }

                if let Some(text) = error_text {
                    div { class: "generator-notice generator-notice--error generator-notice--inline",
                        "{text}"
                    }
                }

                button {
                    class: "generator-btn generator-btn--primary generator-btn--wide",
                    disabled: loading || !connected,
                    onclick: move |_| trigger_generate(),
                    if loading { "Generating..." } else { "Generate Resume" }
                }
            }
        }
    }
}

#[component]
fn PriorityCard(
    mut priority: Signal<Priority>,
    value: Priority,
    title: &'static str,
    hint: &'static str,
) -> Element {
    let selected = priority() == value;
    let card_class = if selected {
        "generator-priority-card generator-priority-card--selected"
    } else {
        "generator-priority-card"
    };

    rsx! {
        div { class: "{card_class}", onclick: move |_| priority.set(value),
            input {
                r#type: "radio",
                checked: selected,
                onchange: move |_| priority.set(value),
            }
            div { class: "card-title", "{title}" }
            div { class: "card-hint", "{hint}" }
        }
    }
}

#[component]
fn ResumePane(
    mut session: Signal<Session>,
    mut copied: Signal<bool>,
    mut download_menu_open: Signal<bool>,
    compact: Signal<bool>,
) -> Element {
    let mut on_copy = move || {
        let text = session.read().resume().to_string();
        spawn(async move {
            match interop::copy_text_to_clipboard(&text).await {
                Ok(()) => {
                    copied.set(true);
                    TimeoutFuture::new(COPIED_RESET_MS).await;
                    copied.set(false);
                }
                Err(e) => {
                    log::warn!("clipboard copy failed: {e}");
                    notify_error(session, UiError::Clipboard.to_string());
                }
            }
        });
    };

    let mut trigger_export = move |format: ExportFormat| {
        download_menu_open.set(false);
        let begin = session.write().try_begin_export();
        if let Err(err) = begin {
            notify_error(session, err.to_string());
            return;
        }

        spawn(async move {
            let markdown = session.read().resume().to_string();
            let outcome = match api::export_resume(&markdown, format).await {
                Ok(bytes) => {
                    interop::save_binary_file(&export_file_name(format), &bytes, format.mime())
                        .map_err(ApiError::Transport)
                }
                Err(e) => Err(e),
            };
            let (kind, id) = session.write().finish_export(format, outcome);
            schedule_notice_expiry(session, kind, id);
        });
    };

    let has_resume = session.read().has_resume();
    let view = session.read().view();
    let exporting = session.read().is_exporting();
    let resume_text = session.read().resume().to_string();

    rsx! {
        div { class: "generator-result-pane",
            div { class: "generator-pane-header",
                if compact() {
                    button {
                        class: "generator-back-btn",
                        onclick: move |_| session.write().set_pane(CompactPane::Form),
                        "\u{2190} Back"
                    }
                }
                h2 { class: "generator-title", "Resume" }
                if has_resume {
                    div { class: "generator-toggle",
                        button {
                            class: if view == ResumeView::Edit { "active" } else { "" },
                            onclick: move |_| session.write().set_view(ResumeView::Edit),
                            "Edit"
                        }
                        button {
                            class: if view == ResumeView::Preview { "active" } else { "" },
                            onclick: move |_| session.write().set_view(ResumeView::Preview),
                            "Preview"
                        }
                    }
                    button {
                        class: "generator-btn generator-btn--secondary",
                        onclick: move |_| on_copy(),
                        if copied() { "Copied!" } else { "Copy" }
                    }
                    div { class: "generator-download",
                        button {
                            class: "generator-btn generator-btn--primary",
                            disabled: exporting,
                            onclick: move |_| download_menu_open.toggle(),
                            if exporting { "Exporting..." } else { "Download" }
                        }
                        if download_menu_open() {
                            div { class: "generator-download-menu",
                                button {
                                    onclick: move |_| trigger_export(ExportFormat::Pdf),
                                    "Download as PDF"
                                }
                                button {
                                    onclick: move |_| trigger_export(ExportFormat::Docx),
                                    "Download as Word"
                                }
                                button {
                                    onclick: move |_| trigger_export(ExportFormat::Md),
                                    "Download as Markdown"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "generator-pane-body",
                if !has_resume {
                    div { class: "generator-empty-state",
                        div {
                            p { "No resume generated yet" }
                            p { "Fill in your information and click \"Generate Resume\"" }
                        }
                    }
                } else if view == ResumeView::Edit {
                    div { class: "generator-doc-card",
                        textarea {
                            value: "{resume_text}",
                            oninput: move |evt| session.write().set_resume(evt.value()),
                        }
                    }
                } else {
                    div { class: "generator-doc-card",
                        MarkdownPreview { content: resume_text }
                    }
                }
            }
        }
    }
}

/// Editor modal for the instruction template. Closing without saving
/// discards the draft; the live override changes only on Save or Reset.
#[component]
fn PromptModal(
    mut session: Signal<Session>,
    mut prompt: Signal<PromptTemplate>,
    mut prompt_draft: Signal<String>,
    mut prompt_modal_open: Signal<bool>,
) -> Element {
    let mut on_save = move || {
        prompt.write().save(&prompt_draft());
        prompt_modal_open.set(false);
        notify_success(session, "System prompt updated!".to_string());
    };

    let mut on_reset = move || {
        prompt.write().reset();
        let default_text = prompt.read().default_text().to_string();
        prompt_draft.set(default_text);
        notify_success(session, "System prompt reset to default".to_string());
    };

    rsx! {
        div { class: "generator-modal-backdrop",
            div { class: "generator-modal",
                div { class: "generator-modal-header",
                    h2 { class: "generator-title", "Edit System Prompt" }
                    button {
                        class: "generator-modal-close",
                        onclick: move |_| prompt_modal_open.set(false),
                        "\u{00d7}"
                    }
                }
                div { class: "generator-modal-body",
                    p { class: "generator-field-hint",
                        "Customize the system prompt to change how the AI formats your resume."
                    }
                    textarea {
                        value: "{prompt_draft}",
                        oninput: move |evt| prompt_draft.set(evt.value()),
                    }
                }
                div { class: "generator-modal-footer",
                    button {
                        class: "generator-btn generator-btn--secondary",
                        onclick: move |_| on_reset(),
                        "Reset to Default"
                    }
                    div {
                        button {
                            class: "generator-btn generator-btn--secondary",
                            onclick: move |_| prompt_modal_open.set(false),
                            "Cancel"
                        }
                        button {
                            class: "generator-btn generator-btn--primary",
                            onclick: move |_| on_save(),
                            "Save"
                        }
                    }
                }
            }
        }
    }
}

/// Map rendered markdown blocks to elements; one element per input line.
#[component]
pub fn MarkdownPreview(content: String) -> Element {
    let blocks = markdown::render(&content);

    rsx! {
        div { class: "md-preview",
            {blocks.into_iter().enumerate().map(|(i, block)| render_block(i, block))}
        }
    }
}

fn render_block(key: usize, block: Block) -> Element {
    match block {
        Block::Break => rsx! {
            br { key: "{key}" }
        },
        Block::Heading { level: 1, text } => rsx! {
            h1 { key: "{key}", "{text}" }
        },
        Block::Heading { level: 2, text } => rsx! {
            h2 { key: "{key}", "{text}" }
        },
        Block::Heading { text, .. } => rsx! {
            h3 { key: "{key}", "{text}" }
        },
        Block::ListItem(inlines) => rsx! {
            li { key: "{key}", {render_inlines(inlines)} }
        },
        Block::Paragraph(inlines) => rsx! {
            p { key: "{key}", {render_inlines(inlines)} }
        },
    }
}

fn render_inlines(inlines: Vec<Inline>) -> Element {
    rsx! {
        {inlines.into_iter().enumerate().map(|(i, inline)| match inline {
            Inline::Text(text) => rsx! {
                span { key: "{i}", "{text}" }
            },
            Inline::Link { label, url } => rsx! {
                a {
                    key: "{i}",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{label}"
                }
            },
        })}
    }
}
