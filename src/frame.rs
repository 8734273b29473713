use crate::render::GpuState;
use crate::app::{App, SharedApp};
use figurine_core::{FrameRequestId, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` behind the core's scheduler trait. The callback
/// lives in a shared slot so it can re-request itself.
#[derive(Default)]
pub struct RafScheduler {
    tick: TickSlot,
}

impl RafScheduler {
    pub fn is_armed(&self) -> bool {
        self.tick.borrow().is_some()
    }

    /// Drop the frame callback. It holds a handle to the app, so the slot
    /// must be emptied once the loop is stopped.
    pub fn release(&mut self) {
        _ = self.tick.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameRequestId> {
        let window = web::window()?;
        let slot = self.tick.borrow();
        let tick = slot.as_ref()?;
        window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(id);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState> {
    match GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Install the frame callback and request the first frame. Each callback
/// runs one scene tick, which requests the next frame while the loop runs.
pub fn start_loop(app: &SharedApp) {
    let mut guard = app.borrow_mut();
    let App {
        preview, scheduler, ..
    } = &mut *guard;
    if !scheduler.is_armed() {
        let app_tick = app.clone();
        *scheduler.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut guard = app_tick.borrow_mut();
            let App {
                preview, scheduler, ..
            } = &mut *guard;
            preview.scene.on_frame(scheduler);
        }) as Box<dyn FnMut()>));
    }
    preview.scene.start_loop(scheduler);
}

/// Stop the loop and free its callback when the page is hidden; restart it
/// if the page comes back from the back/forward cache.
pub fn wire_page_lifecycle(app: &SharedApp) {
    let Some(window) = web::window() else {
        return;
    };

    let app_hide = app.clone();
    let on_hide = Closure::wrap(Box::new(move || {
        let mut guard = app_hide.borrow_mut();
        let App {
            preview, scheduler, ..
        } = &mut *guard;
        preview.scene.stop_loop(scheduler);
        scheduler.release();
        log::info!("[scene] render loop stopped");
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let app_show = app.clone();
    let on_show = Closure::wrap(Box::new(move || {
        let resume = {
            let a = app_show.borrow();
            a.preview.scene.is_initialized() && !a.preview.scene.is_running()
        };
        if resume {
            start_loop(&app_show);
            log::info!("[scene] render loop resumed");
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}
