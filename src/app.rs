use crate::constants::READY_MESSAGE_MS;
use crate::dom;
use crate::frame::{self, RafScheduler};
use crate::overlay;
use crate::render::GpuState;
use crate::status::{self, MessageKind};
use figurine_core::constants::SURFACE_HEIGHT;
use figurine_core::prompt::figurine_prompt;
use figurine_core::{OptionSet, Preview, PreviewError, ViewMode};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Page state shared by every event handler and the frame loop.
pub struct App {
    pub preview: Preview<GpuState>,
    pub scheduler: RafScheduler,
    pub canvas: web::HtmlCanvasElement,
    // bumped per message so a stale dismiss timer leaves newer text alone
    preview_message_seq: u32,
    form_message_seq: u32,
}

pub type SharedApp = Rc<RefCell<App>>;

impl App {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        Self {
            preview: Preview::default(),
            scheduler: RafScheduler::default(),
            canvas,
            preview_message_seq: 0,
            form_message_seq: 0,
        }
    }
}

/// Show a preview status message, optionally hiding it (and settling the
/// preview status) after `dismiss_ms`.
pub fn show_preview_status(
    app: &SharedApp,
    document: &web::Document,
    text: &str,
    kind: MessageKind,
    dismiss_ms: Option<i32>,
) {
    let seq = {
        let mut a = app.borrow_mut();
        a.preview_message_seq = a.preview_message_seq.wrapping_add(1);
        a.preview_message_seq
    };
    status::show_preview_message(document, text, kind);
    let Some(ms) = dismiss_ms else {
        return;
    };
    let app = app.clone();
    dom::set_timeout(ms, move || {
        let mut a = app.borrow_mut();
        if a.preview_message_seq != seq {
            return;
        }
        a.preview.dismiss_status();
        if let Some(doc) = dom::window_document() {
            status::hide_preview_message(&doc);
        }
    });
}

/// Show an order-form message that clears itself after `clear_ms`.
pub fn show_form_status(
    app: &SharedApp,
    document: &web::Document,
    text: &str,
    kind: MessageKind,
    clear_ms: i32,
) {
    let seq = {
        let mut a = app.borrow_mut();
        a.form_message_seq = a.form_message_seq.wrapping_add(1);
        a.form_message_seq
    };
    status::show_form_message(document, text, kind);
    let app = app.clone();
    dom::set_timeout(clear_ms, move || {
        if app.borrow().form_message_seq != seq {
            return;
        }
        if let Some(doc) = dom::window_document() {
            status::clear_form_message(&doc);
        }
    });
}

/// Second half of a generate click, run once the photo has been read.
pub async fn finish_generate(app: SharedApp, data_url: String, options: OptionSet) {
    let Some(document) = dom::window_document() else {
        return;
    };
    log::info!("[preview] photo loaded ({} bytes)", data_url.len());
    log::info!("[preview] prompt: {}", figurine_prompt(&options));
    overlay::show_photo(&document, &data_url, &options);

    if !ensure_scene(&app).await {
        app.borrow_mut().preview.renderer_failed();
        overlay::apply_mode(&document, ViewMode::Flat);
        overlay::set_info_visible(&document, true);
        show_preview_status(
            &app,
            &document,
            status::preview_error_text(PreviewError::RendererUnavailable),
            MessageKind::Error,
            None,
        );
        return;
    }

    let mode = {
        let mut a = app.borrow_mut();
        a.preview.generate_preview(options);
        a.preview.mode()
    };
    overlay::apply_mode(&document, mode);
    overlay::set_info_visible(&document, true);
    show_preview_status(
        &app,
        &document,
        status::READY_TEXT,
        MessageKind::Success,
        Some(READY_MESSAGE_MS),
    );
}

/// Lazily create the GPU surface and start the frame loop. Returns whether
/// the scene is usable.
async fn ensure_scene(app: &SharedApp) -> bool {
    let canvas = {
        let a = app.borrow();
        if a.preview.scene.is_initialized() {
            return true;
        }
        a.canvas.clone()
    };
    // the canvas must be laid out before its container can be measured
    if let Some(document) = dom::window_document() {
        overlay::apply_mode(&document, ViewMode::ThreeD);
    }
    let width = dom::container_width(&canvas);
    canvas.set_width(width);
    canvas.set_height(SURFACE_HEIGHT);

    let Some(gpu) = frame::init_gpu(&canvas).await else {
        return false;
    };
    let fresh = app.borrow_mut().preview.scene.initialize(gpu, width);
    if fresh {
        frame::start_loop(app);
    }
    app.borrow().preview.scene.is_initialized()
}
