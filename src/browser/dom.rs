//! DOM view: presentation and error banner

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::controller::{ErrorSink, PresentationSink};
use crate::models::ViewerConfig;

/// Handles to every element the viewer drives, resolved once at bind time
#[derive(Clone, Debug)]
pub struct DomView {
    pub drop_zone: HtmlElement,
    pub file_input: HtmlInputElement,
    pub workspace: Element,
    pub preview: Element,
    pub code_output: HtmlTextAreaElement,
    pub filename_display: Element,
    pub error_msg: Element,
    pub error_text: Element,
    pub copy_button: HtmlElement,
    pub download_button: HtmlElement,
    hidden_class: String,
    error_hidden_class: String,
    drag_classes: Vec<String>,
    idle_copy_class: String,
    copied_class: String,
    copied_label: String,
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))
}

fn element_as<T: JsCast>(document: &Document, id: &str, kind: &str) -> Result<T, JsValue> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} is not {}", id, kind)))
}

impl DomView {
    /// Resolve all configured element ids. Fails on the first missing one.
    pub fn bind(document: &Document, config: &ViewerConfig) -> Result<Self, JsValue> {
        let ids = &config.elements;
        Ok(Self {
            drop_zone: element_as(document, &ids.drop_zone, "an HTML element")?,
            file_input: element_as(document, &ids.file_input, "an <input>")?,
            workspace: element(document, &ids.workspace)?,
            preview: element(document, &ids.preview_container)?,
            code_output: element_as(document, &ids.code_output, "a <textarea>")?,
            filename_display: element(document, &ids.filename_display)?,
            error_msg: element(document, &ids.error_msg)?,
            error_text: element(document, &ids.error_text)?,
            copy_button: element_as(document, &ids.copy_button, "an HTML element")?,
            download_button: element_as(document, &ids.download_button, "an HTML element")?,
            hidden_class: config.hidden_class.clone(),
            error_hidden_class: config.error_hidden_class.clone(),
            drag_classes: config.drag_highlight_classes.clone(),
            idle_copy_class: config.idle_copy_class.clone(),
            copied_class: config.copied_class.clone(),
            copied_label: config.copied_label.clone(),
        })
    }

    /// Drop zone highlight while a drag hovers over it
    pub fn set_drag_highlight(&self, active: bool) {
        let classes = self.drop_zone.class_list();
        for class in &self.drag_classes {
            let result = if active {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
            if let Err(e) = result {
                log::warn!("Failed to toggle drag class '{}': {:?}", class, e);
            }
        }
    }

    fn set_hidden(&self, element: &Element, class: &str, hidden: bool) {
        let classes = element.class_list();
        let result = if hidden {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle '{}' on #{}: {:?}", class, element.id(), e);
        }
    }
}

impl PresentationSink for DomView {
    fn render_markup(&self, content: &str) {
        self.preview.set_inner_html(content);
    }

    fn show_raw_text(&self, content: &str) {
        self.code_output.set_value(content);
    }

    fn show_file_name(&self, file_name: &str) {
        self.filename_display.set_text_content(Some(file_name));
    }

    fn show_workspace(&self) {
        self.set_hidden(&self.drop_zone, &self.hidden_class, true);
        self.set_hidden(&self.workspace, &self.hidden_class, false);
    }

    fn clear(&self) {
        self.set_hidden(&self.workspace, &self.hidden_class, true);
        self.set_hidden(&self.drop_zone, &self.hidden_class, false);
        // Lets the same file be picked again
        self.file_input.set_value("");
        self.preview.set_inner_html("");
        self.code_output.set_value("");
    }

    fn show_acknowledgment(&self, duration_ms: u32) {
        let button = self.copy_button.clone();
        let idle = self.idle_copy_class.clone();
        let copied = self.copied_class.clone();
        let original = button.inner_html();

        let classes = button.class_list();
        if let Err(e) = classes.replace(&idle, &copied) {
            log::warn!("Failed to mark copy button: {:?}", e);
        }
        button.set_text_content(Some(self.copied_label.as_str()));

        // Reverts unconditionally; a newer copy inside the window is not tracked
        let revert = Closure::once_into_js(move || {
            let _ = button.class_list().replace(&copied, &idle);
            button.set_inner_html(&original);
        });

        let scheduled = super::window().and_then(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                revert.unchecked_ref(),
                duration_ms.min(i32::MAX as u32) as i32,
            )
        });
        if let Err(e) = scheduled {
            log::warn!("Failed to schedule acknowledgment revert: {}", super::js_err(e));
        }
    }
}

impl ErrorSink for DomView {
    fn show_error(&self, message: &str) {
        self.error_text.set_text_content(Some(message));
        self.set_hidden(&self.error_msg, &self.error_hidden_class, false);
    }

    fn clear_error(&self) {
        self.set_hidden(&self.error_msg, &self.error_hidden_class, true);
    }
}
