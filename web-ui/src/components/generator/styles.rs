//! Generator styles

pub const GENERATOR_STYLES: &str = r#"
.generator-root {
    display: flex;
    height: 100vh;
    background: #f9fafb;
    color: #111827;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
}

.generator-root--compact {
    flex-direction: column;
}

/* ── Panes ── */
.generator-form-pane {
    width: 50%;
    display: flex;
    flex-direction: column;
    background: #ffffff;
    border-right: 1px solid #e5e7eb;
}

.generator-result-pane {
    width: 50%;
    display: flex;
    flex-direction: column;
    background: #f9fafb;
}

.generator-root--compact .generator-form-pane,
.generator-root--compact .generator-result-pane {
    width: 100%;
    height: 100%;
    border-right: none;
}

.generator-pane-header {
    padding: 1.25rem 1.5rem;
    border-bottom: 1px solid #e5e7eb;
    background: #ffffff;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.75rem;
}

.generator-pane-body {
    flex: 1;
    overflow-y: auto;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}

.generator-title { font-size: 1.5rem; font-weight: 700; margin: 0; }
.generator-subtitle { font-size: 0.85rem; color: #4b5563; margin: 0.25rem 0 0; }

/* ── Form fields ── */
.generator-field label.generator-field-label {
    display: block;
    font-size: 0.85rem;
    font-weight: 500;
    color: #374151;
    margin-bottom: 0.5rem;
}

.generator-field input[type="text"],
.generator-field textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.6rem 0.9rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    font-size: 0.9rem;
    outline: none;
}

.generator-field textarea {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    resize: none;
}

.generator-field input:focus,
.generator-field textarea:focus {
    border-color: #2563eb;
    box-shadow: 0 0 0 2px rgba(37, 99, 235, 0.25);
}

.generator-field-hint { font-size: 0.75rem; color: #6b7280; margin-top: 0.35rem; }

/* ── Upload ── */
.generator-upload-label {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.6rem 0.9rem;
    border: 2px dashed #d1d5db;
    border-radius: 0.5rem;
    color: #4b5563;
    font-size: 0.85rem;
    font-weight: 500;
    cursor: pointer;
}

.generator-upload-label:hover { border-color: #2563eb; background: #eff6ff; }
.generator-upload-label--disabled { cursor: not-allowed; opacity: 0.5; }

.generator-upload-file {
    margin-top: 0.5rem;
    font-size: 0.75rem;
    color: #16a34a;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.generator-upload-remove {
    margin-left: auto;
    background: none;
    border: none;
    color: #dc2626;
    cursor: pointer;
    font-size: 0.75rem;
}

.generator-checkbox {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.75rem;
    color: #4b5563;
    margin-top: 0.4rem;
}

/* ── Priority cards ── */
.generator-priority-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
.generator-root--compact .generator-priority-grid { grid-template-columns: 1fr; }

.generator-priority-card {
    border: 2px solid #e5e7eb;
    border-radius: 0.5rem;
    padding: 0.9rem;
    cursor: pointer;
}

.generator-priority-card--selected { border-color: #2563eb; background: #eff6ff; }
.generator-priority-card .card-title { font-weight: 600; font-size: 0.9rem; }
.generator-priority-card .card-hint { font-size: 0.75rem; color: #4b5563; margin-top: 0.2rem; }

/* ── Buttons ── */
.generator-btn {
    border: none;
    border-radius: 0.5rem;
    padding: 0.6rem 1rem;
    font-size: 0.85rem;
    font-weight: 500;
    cursor: pointer;
}

.generator-btn--primary { background: #2563eb; color: #ffffff; }
.generator-btn--primary:hover { background: #1d4ed8; }
.generator-btn--primary:disabled { background: #93c5fd; cursor: not-allowed; }
.generator-btn--secondary { background: #f3f4f6; color: #374151; }
.generator-btn--secondary:hover { background: #e5e7eb; }
.generator-btn--wide { width: 100%; padding: 0.8rem 1rem; }

.generator-toggle { display: flex; background: #f3f4f6; border-radius: 0.5rem; padding: 0.2rem; }
.generator-toggle button {
    border: none;
    background: transparent;
    padding: 0.35rem 0.8rem;
    font-size: 0.85rem;
    font-weight: 500;
    border-radius: 0.4rem;
    color: #4b5563;
    cursor: pointer;
}
.generator-toggle button.active { background: #ffffff; color: #111827; box-shadow: 0 1px 2px rgba(0,0,0,0.08); }

/* ── Download menu ── */
.generator-download { position: relative; }
.generator-download-menu {
    position: absolute;
    right: 0;
    top: calc(100% + 0.4rem);
    width: 13rem;
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px rgba(0,0,0,0.1);
    z-index: 30;
    overflow: hidden;
}
.generator-download-menu button {
    display: block;
    width: 100%;
    text-align: left;
    padding: 0.55rem 1rem;
    border: none;
    background: none;
    font-size: 0.85rem;
    cursor: pointer;
}
.generator-download-menu button:hover { background: #f9fafb; }

/* ── Notices / status banner ── */
.generator-notice {
    position: fixed;
    top: 1rem;
    right: 1rem;
    z-index: 50;
    padding: 0.7rem 1rem;
    border-radius: 0.5rem;
    font-size: 0.85rem;
    box-shadow: 0 10px 15px rgba(0,0,0,0.1);
}
.generator-notice--success { background: #f0fdf4; border: 1px solid #bbf7d0; color: #15803d; }
.generator-notice--error { background: #fef2f2; border: 1px solid #fecaca; color: #b91c1c; }
.generator-notice--error.generator-notice--inline {
    position: static;
    box-shadow: none;
}

.generator-status-banner {
    position: fixed;
    top: 1rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 50;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.7rem 1rem;
    border-radius: 0.5rem;
    font-size: 0.85rem;
    background: #fefce8;
    border: 1px solid #fef08a;
    color: #a16207;
    box-shadow: 0 10px 15px rgba(0,0,0,0.1);
}
.generator-status-banner button {
    border: none;
    background: none;
    color: #a16207;
    font-weight: 600;
    cursor: pointer;
    text-decoration: underline;
}

/* ── Resume document ── */
.generator-doc-card {
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 0.5rem;
    box-shadow: 0 1px 2px rgba(0,0,0,0.05);
}

.generator-doc-card textarea {
    width: 100%;
    box-sizing: border-box;
    min-height: 600px;
    padding: 1.5rem;
    border: none;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 0.85rem;
    line-height: 1.6;
    resize: none;
    outline: none;
}

.generator-empty-state {
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #9ca3af;
    text-align: center;
}

/* ── Markdown preview ── */
.md-preview { font-family: Georgia, "Times New Roman", serif; line-height: 1.6; padding: 2rem; }
.md-preview h1 { font-size: 1.5rem; font-weight: 700; text-align: center; margin: 0 0 0.5rem; }
.md-preview h2 {
    font-size: 1.25rem;
    font-weight: 700;
    margin: 1rem 0 0.5rem;
    border-bottom: 2px solid #1f2937;
}
.md-preview h3 { font-size: 1.1rem; font-weight: 700; margin: 0.75rem 0 0.25rem; }
.md-preview p { margin: 0 0 0.5rem; }
.md-preview li { margin-left: 1.25rem; }
.md-preview a { color: #2563eb; text-decoration: none; }
.md-preview a:hover { text-decoration: underline; }

/* ── Prompt modal ── */
.generator-modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 60;
}

.generator-root--compact .generator-modal-backdrop { align-items: flex-end; }

.generator-modal {
    background: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 20px 25px rgba(0,0,0,0.2);
    width: 100%;
    max-width: 56rem;
    max-height: 90vh;
    display: flex;
    flex-direction: column;
    margin: 1rem;
}

.generator-modal-header,
.generator-modal-footer {
    padding: 1.25rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.75rem;
}

.generator-modal-header { border-bottom: 1px solid #e5e7eb; }
.generator-modal-footer { border-top: 1px solid #e5e7eb; }

.generator-modal-body { flex: 1; overflow-y: auto; padding: 1.5rem; }
.generator-modal-body textarea {
    width: 100%;
    box-sizing: border-box;
    height: 22rem;
    padding: 0.9rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 0.85rem;
    outline: none;
}

.generator-modal-close {
    border: none;
    background: none;
    color: #9ca3af;
    font-size: 1.25rem;
    cursor: pointer;
}

/* ── Compact chrome ── */
.generator-compact-bar {
    padding: 1rem;
    border-top: 1px solid #e5e7eb;
    background: #ffffff;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.generator-back-btn {
    border: none;
    background: none;
    color: #2563eb;
    font-size: 0.85rem;
    font-weight: 500;
    cursor: pointer;
}
"#;
