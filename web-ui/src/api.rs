//! HTTP client for the resume generation service.
//!
//! Every call classifies failure as either `Service` (the service answered
//! and its `detail` payload is propagated verbatim) or `Transport` (the
//! request never completed). Callers only ever branch on success/failure;
//! status codes stay in this module.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::sync::OnceLock;

use futures_util::future::{select, Either};
use futures_util::pin_mut;
use thiserror::Error;

use shared_types::{
    ExportFormat, ExportRequest, ExtractResumeResponse, GenerateResumeRequest,
    GenerateResumeResponse, SystemPromptResponse,
};

/// The connectivity probe is abandoned after this long; other calls have no
/// timeout and stay outstanding until the browser gives up.
const HEALTH_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service returned a failure; the message is its structured
    /// `detail` when present, otherwise a generic HTTP description.
    #[error("{0}")]
    Service(String),
    /// The service could not be reached (network failure or probe timeout).
    #[error("{0}")]
    Transport(String),
}

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8000
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Pull the FastAPI-style `detail` message out of an error body, so notices
/// carry the service's own words (e.g. a `detail` of "rate limited" surfaces
/// exactly as "rate limited").
async fn describe_service_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(detail) = json.get("detail").and_then(|v| v.as_str()) {
            return ApiError::Service(detail.to_string());
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return ApiError::Service(message.to_string());
        }
    }

    ApiError::Service(format!("HTTP error: {status}"))
}

/// One-shot connectivity probe against `/health`, raced with a fixed
/// timeout. A timeout counts as a transport failure, not a service error.
pub async fn probe_health() -> Result<(), ApiError> {
    let url = format!("{}/health", api_base());

    let request = Request::get(&url).send();
    pin_mut!(request);
    let timeout = TimeoutFuture::new(HEALTH_TIMEOUT_MS);
    pin_mut!(timeout);

    match select(request, timeout).await {
        Either::Left((Ok(response), _)) => {
            if response.ok() {
                Ok(())
            } else {
                Err(ApiError::Service(format!(
                    "HTTP error: {}",
                    response.status()
                )))
            }
        }
        Either::Left((Err(e), _)) => Err(ApiError::Transport(format!("Request failed: {e}"))),
        Either::Right(((), _)) => Err(ApiError::Transport(
            "Health check timed out".to_string(),
        )),
    }
}

pub async fn fetch_default_prompt() -> Result<String, ApiError> {
    let url = format!("{}/get-system-prompt", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(describe_service_error(response).await);
    }

    let data: SystemPromptResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Service(format!("Failed to parse JSON: {e}")))?;

    Ok(data.prompt)
}

/// Ship an uploaded file to the service for text extraction. The multipart
/// field name (`file`) is part of the service contract.
pub async fn extract_resume_text(file_name: &str, bytes: &[u8]) -> Result<String, ApiError> {
    let url = format!("{}/extract-resume", api_base());

    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::Transport(format!("Failed to build form data: {e:?}")))?;
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(array.as_ref());
    let blob = web_sys::Blob::new_with_u8_array_sequence(parts.as_ref())
        .map_err(|e| ApiError::Transport(format!("Failed to build blob: {e:?}")))?;
    form.append_with_blob_and_filename("file", &blob, file_name)
        .map_err(|e| ApiError::Transport(format!("Failed to build form data: {e:?}")))?;

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Transport(format!("Failed to build request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(describe_service_error(response).await);
    }

    let data: ExtractResumeResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Service(format!("Failed to parse JSON: {e}")))?;

    Ok(data.text)
}

pub async fn generate_resume(request: &GenerateResumeRequest) -> Result<String, ApiError> {
    let url = format!("{}/generate-resume", api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(describe_service_error(response).await);
    }

    let data: GenerateResumeResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Service(format!("Failed to parse JSON: {e}")))?;

    Ok(data.resume)
}

/// Render the markdown server-side and return the document bytes. Nothing
/// is written locally here; the boundary layer saves the payload only on
/// success, so a failed export never produces a partial file.
pub async fn export_resume(markdown: &str, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
    let url = format!("{}/export-resume", api_base());

    let request = ExportRequest {
        markdown_content: markdown.to_string(),
        format,
    };

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(describe_service_error(response).await);
    }

    response
        .binary()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_display_their_message_verbatim() {
        let err = ApiError::Service("rate limited".to_string());
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn transport_errors_display_their_message_verbatim() {
        let err = ApiError::Transport("Request failed: connection refused".to_string());
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }
}
