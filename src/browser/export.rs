//! Clipboard and download exports

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlDocument, HtmlTextAreaElement, Url};

use super::js_err;
use crate::controller::{ExportError, ExportSink, SVG_MEDIA_TYPE};

#[derive(Clone, Debug)]
pub struct BrowserExport {
    document: Document,
    /// Raw text display, selected by the legacy copy fallback
    code_output: HtmlTextAreaElement,
}

impl BrowserExport {
    pub fn new(document: Document, code_output: HtmlTextAreaElement) -> Self {
        Self { document, code_output }
    }

    /// Write text to the clipboard.
    ///
    /// Uses `navigator.clipboard.writeText` in secure contexts, otherwise
    /// selects the raw text display and runs `document.execCommand("copy")`.
    pub async fn write_clipboard(&self, text: &str) -> Result<(), ExportError> {
        match async_clipboard()? {
            Some(clipboard) => write_async(&clipboard, text).await,
            None => self.write_legacy(),
        }
    }

    fn write_legacy(&self) -> Result<(), ExportError> {
        log::debug!("Async clipboard unavailable, using execCommand fallback");
        self.code_output.select();
        let html_document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or(ExportError::ClipboardUnavailable)?;
        match html_document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(ExportError::ClipboardWrite("execCommand returned false".to_string())),
            Err(e) => Err(ExportError::ClipboardWrite(js_err(e))),
        }
    }
}

/// `navigator.clipboard` when usable (secure context and API present)
fn async_clipboard() -> Result<Option<JsValue>, ExportError> {
    let window = super::window().map_err(|_| ExportError::ClipboardUnavailable)?;
    if !window.is_secure_context() {
        return Ok(None);
    }
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|e| ExportError::ClipboardWrite(js_err(e)))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Ok(None);
    }
    Ok(Some(clipboard))
}

async fn write_async(clipboard: &JsValue, text: &str) -> Result<(), ExportError> {
    let write_text = js_sys::Reflect::get(clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| ExportError::ClipboardWrite(js_err(e)))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| ExportError::ClipboardUnavailable)?;
    let promise = write_text
        .call1(clipboard, &JsValue::from_str(text))
        .map_err(|e| ExportError::ClipboardWrite(js_err(e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| ExportError::ClipboardWrite("writeText did not return a promise".to_string()))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ExportError::ClipboardWrite(js_err(e)))
}

fn download_err(error: JsValue) -> ExportError {
    ExportError::Download(js_err(error))
}

impl ExportSink for BrowserExport {
    /// Blob + object URL + synthetic anchor click; the URL is revoked
    /// right after the click
    fn trigger_download(&self, bytes: &[u8], suggested_name: &str) -> Result<(), ExportError> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes).buffer());
        let options = BlobPropertyBag::new();
        options.set_type(SVG_MEDIA_TYPE);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(download_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(download_err)?;

        let result = self.click_anchor(&url, suggested_name);
        let _ = Url::revoke_object_url(&url);
        result
    }
}

impl BrowserExport {
    fn click_anchor(&self, url: &str, suggested_name: &str) -> Result<(), ExportError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| ExportError::Download("missing document body".to_string()))?;
        let anchor = self
            .document
            .create_element("a")
            .map_err(download_err)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| ExportError::Download("created element is not an anchor".to_string()))?;
        anchor.set_href(url);
        anchor.set_download(suggested_name);

        body.append_child(&anchor).map_err(download_err)?;
        anchor.click();
        body.remove_child(&anchor).map_err(download_err)?;
        Ok(())
    }
}
