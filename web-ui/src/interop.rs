//! Browser boundary helpers (web-sys / js-sys interop).

use dioxus::prelude::Callback;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

/// Current viewport width in CSS pixels, 0 if unavailable.
pub fn viewport_width() -> u32 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32
}

/// Call `on_resize` with the new viewport width whenever the window
/// resizes. The listener lives for the page lifetime.
pub fn on_viewport_resize(on_resize: Callback<u32>) {
    let Some(window) = window() else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        on_resize.call(viewport_width());
    }) as Box<dyn FnMut(web_sys::Event)>);

    if window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach viewport resize listener");
    }

    // Leak the closure to keep it alive (cleaned up when the page unloads)
    closure.forget();
}

/// Write text to the system clipboard via the async Clipboard API.
pub async fn copy_text_to_clipboard(text: &str) -> Result<(), String> {
    let window = window().ok_or_else(|| "no global `window` exists".to_string())?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}

/// Hand a binary payload to the browser as a named download. Builds a blob
/// URL, clicks a detached anchor, and revokes the URL again.
pub fn save_binary_file(file_name: &str, bytes: &[u8], mime: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(array.as_ref());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(parts.as_ref(), &options)
        .map_err(|e| format!("failed to build blob: {e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("failed to create object URL: {e:?}"))?;

    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document on window".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("failed to create anchor: {e:?}"))?
        .dyn_into()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| "no document body".to_string())?;
    body.append_child(&anchor)
        .map_err(|e| format!("failed to attach anchor: {e:?}"))?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}
