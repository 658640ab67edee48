//! Browser hand-offs for share actions: clipboard, mail handler, new tab.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::notice::Notice;
use crate::share::{ShareAction, ShareError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn clipboard_write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), ShareError> {
    // throws synchronously when the Clipboard API is missing (insecure context)
    let promise = clipboard_write_text(text)
        .map_err(|e| ShareError::ClipboardWriteFailed(describe(&e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ShareError::ClipboardWriteFailed(describe(&e)))
}

pub fn open_uri(uri: &str) -> Result<(), ShareError> {
    let window = web_sys::window()
        .ok_or_else(|| ShareError::MailHandlerUnavailable("no window".to_string()))?;
    window
        .location()
        .set_href(uri)
        .map_err(|e| ShareError::MailHandlerUnavailable(describe(&e)))
}

pub fn open_new_context(uri: &str) -> Result<(), ShareError> {
    let window = web_sys::window().ok_or(ShareError::PopupBlocked)?;
    match window.open_with_url_and_target(uri, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) | Err(_) => Err(ShareError::PopupBlocked),
    }
}

/// Runs a planned share. Returns the confirmation notice, if the action has one.
pub async fn perform(action: ShareAction) -> Result<Option<Notice>, ShareError> {
    match action {
        ShareAction::OpenUri(uri) => open_uri(&uri).map(|_| None),
        ShareAction::OpenNewContext(uri) => open_new_context(&uri).map(|_| None),
        ShareAction::CopyLink { url, notice } => {
            copy_to_clipboard(&url).await?;
            Ok(Some(notice))
        }
    }
}
