//! `SvgViewer`: the JavaScript-facing viewer object
//!
//! Binds the DOM, wires drag-and-drop, the file picker, the reset key and
//! the copy/download buttons to the controller, and exposes the same
//! operations to script.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, Event, EventTarget, File, KeyboardEvent};

use super::helpers::{deserialize_or_default, serialize};
use crate::browser::{self, BrowserExport, BrowserFile, DomView};
use crate::controller::Controller;
use crate::models::{LoadedDocument, ViewerConfig, ViewerState};
use crate::{wasm_error, wasm_info, wasm_warn};

type BrowserController = Controller<DomView, DomView, BrowserExport>;

/// Read-only view of the viewer handed to script
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ViewerSnapshot {
    pub state: ViewerState,
    pub document: LoadedDocument,
}

#[wasm_bindgen]
pub struct SvgViewer {
    controller: Rc<RefCell<BrowserController>>,
    view: DomView,
    document: web_sys::Document,
    mounted: Cell<bool>,
}

#[wasm_bindgen]
impl SvgViewer {
    /// Create a viewer bound to the page's elements.
    ///
    /// `config` is an optional partial `ViewerConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SvgViewer, JsValue> {
        let config: ViewerConfig = deserialize_or_default(config, "Invalid viewer config")?;
        let document = browser::document()?;
        let view = DomView::bind(&document, &config).map_err(|e| {
            wasm_error!("Failed to bind viewer elements: {}", browser::js_err(e.clone()));
            e
        })?;
        let export = BrowserExport::new(document.clone(), view.code_output.clone());
        let controller = Controller::new(config, view.clone(), view.clone(), export);

        wasm_info!("SvgViewer created");
        Ok(SvgViewer {
            controller: Rc::new(RefCell::new(controller)),
            view,
            document,
            mounted: Cell::new(false),
        })
    }

    /// Attach all event listeners. Calling it again is a no-op.
    pub fn mount(&self) -> Result<(), JsValue> {
        if self.mounted.replace(true) {
            wasm_warn!("SvgViewer already mounted");
            return Ok(());
        }

        let drop_zone: &EventTarget = self.view.drop_zone.as_ref();

        let view = self.view.clone();
        listen(drop_zone, "dragover", move |event: DragEvent| {
            event.prevent_default();
            view.set_drag_highlight(true);
        })?;

        let view = self.view.clone();
        listen(drop_zone, "dragleave", move |_event: DragEvent| {
            view.set_drag_highlight(false);
        })?;

        let view = self.view.clone();
        let controller = self.controller.clone();
        listen(drop_zone, "drop", move |event: DragEvent| {
            event.prevent_default();
            view.set_drag_highlight(false);
            let file = event
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            intake(&controller, file);
        })?;

        let file_input = self.view.file_input.clone();
        listen(drop_zone, "click", move |_event: Event| {
            file_input.click();
        })?;

        let file_input = self.view.file_input.clone();
        let controller = self.controller.clone();
        listen(self.view.file_input.as_ref(), "change", move |_event: Event| {
            let file = file_input.files().and_then(|files| files.get(0));
            intake(&controller, file);
        })?;

        let document = self.document.clone();
        let controller = self.controller.clone();
        listen(self.document.as_ref(), "keydown", move |event: KeyboardEvent| {
            let focus = browser::focus_target(&document);
            if controller.borrow_mut().handle_key(&event.key(), focus) {
                event.prevent_default();
            }
        })?;

        let controller = self.controller.clone();
        listen(self.view.copy_button.as_ref(), "click", move |_event: Event| {
            copy(&controller);
        })?;

        let controller = self.controller.clone();
        listen(self.view.download_button.as_ref(), "click", move |_event: Event| {
            controller.borrow().export_to_file();
        })?;

        wasm_info!("SvgViewer mounted");
        Ok(())
    }

    /// Submit a file as if it had been dropped.
    ///
    /// Returns whether the file was accepted for reading; the document is
    /// replaced once the read completes.
    #[wasm_bindgen(js_name = submitFile)]
    pub fn submit_file(&self, file: Option<File>) -> bool {
        intake(&self.controller, file)
    }

    pub fn reset(&self) {
        self.controller.borrow_mut().reset();
    }

    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self) {
        copy(&self.controller);
    }

    #[wasm_bindgen(js_name = downloadSvg)]
    pub fn download_svg(&self) {
        self.controller.borrow().export_to_file();
    }

    #[wasm_bindgen(js_name = hasDocument)]
    pub fn has_document(&self) -> bool {
        self.controller.borrow().document().is_loaded()
    }

    #[wasm_bindgen(js_name = fileName)]
    pub fn file_name(&self) -> String {
        self.controller.borrow().document().file_name.clone()
    }

    pub fn content(&self) -> String {
        self.controller.borrow().document().content.clone()
    }

    /// `{ state, document: { content, fileName } }`
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serialize(&self.current_snapshot(), "Snapshot serialization error")
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.current_snapshot())
            .map_err(|e| JsValue::from_str(&format!("Snapshot serialization error: {}", e)))
    }
}

impl SvgViewer {
    fn current_snapshot(&self) -> ViewerSnapshot {
        let controller = self.controller.borrow();
        ViewerSnapshot {
            state: controller.state(),
            document: controller.document().clone(),
        }
    }
}

fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Validate, then read the file text in the background.
///
/// The controller is not borrowed while the read is pending, so a second
/// submission can start (and finish) before the first.
fn intake(controller: &Rc<RefCell<BrowserController>>, file: Option<File>) -> bool {
    let file = file.map(BrowserFile::new);
    let candidate = file.as_ref().map(BrowserFile::candidate);
    let submitted = controller.borrow_mut().submit_file(candidate.as_ref());

    match (submitted, file) {
        (Ok(Some(pending)), Some(file)) => {
            let controller = controller.clone();
            spawn_local(async move {
                let read = file.read_text().await;
                if let Err(e) = controller.borrow_mut().complete_intake(pending, read) {
                    wasm_warn!("Intake failed: {}", e);
                }
            });
            true
        }
        (Err(e), _) => {
            wasm_warn!("Intake rejected: {}", e);
            false
        }
        _ => false,
    }
}

fn copy(controller: &Rc<RefCell<BrowserController>>) {
    let (export, text) = {
        let controller = controller.borrow();
        (controller.export().clone(), controller.clipboard_payload())
    };
    let controller = controller.clone();
    spawn_local(async move {
        let result = export.write_clipboard(&text).await;
        controller.borrow().complete_clipboard(result);
    });
}
