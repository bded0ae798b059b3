// Intake, reset and export behavior of the viewer controller

use std::cell::RefCell;
use std::rc::Rc;

use svg_viewer_wasm::controller::{ErrorSink, ExportSink, PresentationSink};
use svg_viewer_wasm::{Controller, ExportError, FileCandidate, FocusTarget, IntakeError};
use svg_viewer_wasm::{LoadedDocument, ViewerConfig, ViewerState};

/// What the sinks currently display
#[derive(Default, Debug)]
struct Screen {
    preview: String,
    raw_text: String,
    file_name: String,
    workspace_visible: bool,
    error: Option<String>,
    acknowledgments: Vec<u32>,
    downloads: Vec<(Vec<u8>, String)>,
}

#[derive(Clone, Default)]
struct FakePage(Rc<RefCell<Screen>>);

impl PresentationSink for FakePage {
    fn render_markup(&self, content: &str) {
        self.0.borrow_mut().preview = content.to_string();
    }
    fn show_raw_text(&self, content: &str) {
        self.0.borrow_mut().raw_text = content.to_string();
    }
    fn show_file_name(&self, file_name: &str) {
        self.0.borrow_mut().file_name = file_name.to_string();
    }
    fn show_workspace(&self) {
        self.0.borrow_mut().workspace_visible = true;
    }
    fn clear(&self) {
        let mut screen = self.0.borrow_mut();
        screen.preview.clear();
        screen.raw_text.clear();
        screen.workspace_visible = false;
    }
    fn show_acknowledgment(&self, duration_ms: u32) {
        self.0.borrow_mut().acknowledgments.push(duration_ms);
    }
}

impl ErrorSink for FakePage {
    fn show_error(&self, message: &str) {
        self.0.borrow_mut().error = Some(message.to_string());
    }
    fn clear_error(&self) {
        self.0.borrow_mut().error = None;
    }
}

impl ExportSink for FakePage {
    fn trigger_download(&self, bytes: &[u8], suggested_name: &str) -> Result<(), ExportError> {
        self.0
            .borrow_mut()
            .downloads
            .push((bytes.to_vec(), suggested_name.to_string()));
        Ok(())
    }
}

fn setup() -> (Controller<FakePage, FakePage, FakePage>, FakePage) {
    let page = FakePage::default();
    let controller = Controller::new(ViewerConfig::default(), page.clone(), page.clone(), page.clone());
    (controller, page)
}

fn submit(
    controller: &mut Controller<FakePage, FakePage, FakePage>,
    media_type: &str,
    name: &str,
    content: &str,
) -> Result<(), IntakeError> {
    let candidate = FileCandidate::new(media_type, name);
    match controller.submit_file(Some(&candidate))? {
        Some(pending) => controller.complete_intake(pending, Ok(content.to_string())),
        None => Ok(()),
    }
}

#[test]
fn test_uppercase_extension_accepted_by_media_type() {
    let (mut controller, page) = setup();

    submit(&mut controller, "image/svg+xml", "icon.SVG", "<svg></svg>").unwrap();

    assert_eq!(controller.document(), &LoadedDocument::new("<svg></svg>", "icon.SVG"));
    let screen = page.0.borrow();
    assert_eq!(screen.preview, "<svg></svg>");
    assert_eq!(screen.raw_text, "<svg></svg>");
    assert_eq!(screen.file_name, "icon.SVG");
    assert!(screen.workspace_visible);
}

#[test]
fn test_text_file_rejected_and_document_kept() {
    let (mut controller, page) = setup();
    submit(&mut controller, "image/svg+xml", "logo.svg", "<svg/>").unwrap();

    let result = submit(&mut controller, "text/plain", "notes.txt", "hello");

    assert_eq!(result, Err(IntakeError::InvalidFormat));
    assert_eq!(controller.document(), &LoadedDocument::new("<svg/>", "logo.svg"));
    assert_eq!(
        page.0.borrow().error.as_deref(),
        Some("Invalid format. Please upload an SVG file.")
    );
}

#[test]
fn test_rejection_from_empty_stays_empty() {
    let (mut controller, _page) = setup();
    let result = submit(&mut controller, "", "picture.png", "png");
    assert_eq!(result, Err(IntakeError::InvalidFormat));
    assert_eq!(controller.state(), ViewerState::Empty);
}

#[test]
fn test_successful_load_clears_previous_error() {
    let (mut controller, page) = setup();
    let _ = submit(&mut controller, "", "notes.txt", "hello");
    assert!(page.0.borrow().error.is_some());

    submit(&mut controller, "", "ok.svg", "<svg/>").unwrap();
    assert!(page.0.borrow().error.is_none());
}

#[test]
fn test_valid_file_replaces_loaded_document() {
    let (mut controller, _page) = setup();
    submit(&mut controller, "", "one.svg", "<svg id=\"one\"/>").unwrap();
    submit(&mut controller, "", "two.svg", "<svg id=\"two\"/>").unwrap();
    assert_eq!(controller.document(), &LoadedDocument::new("<svg id=\"two\"/>", "two.svg"));
}

#[test]
fn test_reset_restores_default_name() {
    let (mut controller, page) = setup();
    submit(&mut controller, "", "drawing.svg", "<svg/>").unwrap();

    controller.reset();
    controller.reset();

    assert_eq!(controller.document(), &LoadedDocument::empty("image.svg"));
    let screen = page.0.borrow();
    assert!(screen.preview.is_empty());
    assert!(screen.raw_text.is_empty());
    assert!(!screen.workspace_visible);
}

#[test]
fn test_custom_reset_key_and_default_name() {
    let page = FakePage::default();
    let config = ViewerConfig {
        reset_key: "Escape".to_string(),
        default_file_name: "untitled.svg".to_string(),
        ..ViewerConfig::default()
    };
    let mut controller = Controller::new(config, page.clone(), page.clone(), page);
    submit(&mut controller, "", "a.svg", "<svg/>").unwrap();

    assert!(!controller.handle_key("Delete", FocusTarget::Other));
    assert!(controller.handle_key("Escape", FocusTarget::Other));
    assert_eq!(controller.document().file_name, "untitled.svg");
}

#[test]
fn test_download_matches_document() {
    let (mut controller, page) = setup();
    submit(&mut controller, "image/svg+xml", "shape.svg", "<svg><rect/></svg>").unwrap();

    controller.export_to_file();

    let screen = page.0.borrow();
    assert_eq!(
        screen.downloads,
        vec![(b"<svg><rect/></svg>".to_vec(), "shape.svg".to_string())]
    );
}

#[test]
fn test_download_when_empty_uses_default_name() {
    let (controller, page) = setup();
    controller.export_to_file();
    assert_eq!(page.0.borrow().downloads, vec![(Vec::new(), "image.svg".to_string())]);
}

#[test]
fn test_copy_acknowledges_with_configured_duration() {
    let page = FakePage::default();
    let config = ViewerConfig {
        acknowledgment_ms: 750,
        ..ViewerConfig::default()
    };
    let controller = Controller::new(config, page.clone(), page.clone(), page.clone());

    controller.complete_clipboard(Ok(()));
    controller.complete_clipboard(Err(ExportError::ClipboardUnavailable));

    let screen = page.0.borrow();
    assert_eq!(screen.acknowledgments, vec![750]);
    assert!(screen.error.is_none());
}

#[test]
fn test_is_svg_candidate_export() {
    assert!(svg_viewer_wasm::api::is_svg_candidate("image/svg+xml", "x"));
    assert!(svg_viewer_wasm::api::is_svg_candidate("", "x.svg"));
    assert!(!svg_viewer_wasm::api::is_svg_candidate("", "x.SVG"));
}
