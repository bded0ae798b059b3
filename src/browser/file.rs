//! Dropped or picked file

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, FileReader};

use super::js_err;
use crate::controller::FileCandidate;

/// A `File` from a drop or the file picker
#[derive(Clone, Debug)]
pub struct BrowserFile {
    file: File,
}

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self { file }
    }

    /// Declared media type and name, available before reading
    pub fn candidate(&self) -> FileCandidate {
        FileCandidate::new(self.file.type_(), self.file.name())
    }

    /// Read the whole file as text with `FileReader.readAsText`
    pub async fn read_text(&self) -> Result<String, String> {
        let reader = FileReader::new().map_err(js_err)?;
        let promise = reader_to_promise(&reader);
        reader.read_as_text(&self.file).map_err(js_err)?;
        let value = JsFuture::from(promise).await.map_err(js_err)?;
        value
            .as_string()
            .ok_or_else(|| "file reader returned non-text result".to_string())
    }
}

fn reader_to_promise(reader: &FileReader) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve, reject| {
        let load_reader = reader.clone();
        let on_load = Closure::once(move |_event: Event| {
            let result = load_reader.result().unwrap_or(JsValue::UNDEFINED);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let on_error = Closure::once(move |_event: Event| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("file read failed"));
        });
        reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
        reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_load.forget();
        on_error.forget();
    })
}
