//! Scene context: camera, lights, mannequin, render surface and render loop.
//!
//! The drawing backend and the per-frame scheduler are injected through
//! [`RenderSurface`] and [`FrameScheduler`], so the whole state machine runs
//! on the host without a GPU or a browser.

use crate::builder;
use crate::interaction::{CanvasEvent, EventResponse, InteractionController};
use crate::options::OptionSet;
use crate::scene::{Camera, LightRig, Mannequin, ViewParams};
use std::fmt::Debug;

/// Everything a backend needs to draw one frame.
pub struct SceneFrame<'a> {
    pub camera: &'a Camera,
    pub lights: &'a LightRig,
    pub mannequin: Option<&'a Mannequin>,
}

pub trait RenderSurface {
    type Error: Debug;

    /// Resize the drawing buffer to `width` x `height` pixels.
    fn resize(&mut self, width: u32, height: u32);

    fn draw(&mut self, frame: &SceneFrame<'_>) -> Result<(), Self::Error>;
}

pub type FrameRequestId = i32;

/// Host animation-frame primitive (e.g. `requestAnimationFrame`).
pub trait FrameScheduler {
    /// Ask for one callback on the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameRequestId>;
    fn cancel_frame(&mut self, id: FrameRequestId);
}

pub struct SceneManager<S: RenderSurface> {
    params: ViewParams,
    camera: Camera,
    lights: LightRig,
    mannequin: Option<Mannequin>,
    controller: InteractionController,
    surface: Option<S>,
    width: u32,
    running: bool,
    pending_frame: Option<FrameRequestId>,
    frames_drawn: u64,
}

impl<S: RenderSurface> Default for SceneManager<S> {
    fn default() -> Self {
        Self::new(ViewParams::default())
    }
}

impl<S: RenderSurface> SceneManager<S> {
    pub fn new(params: ViewParams) -> Self {
        Self {
            camera: Camera::new(&params, 1.0),
            lights: LightRig::default(),
            mannequin: None,
            controller: InteractionController::new(&params),
            surface: None,
            width: 0,
            running: false,
            pending_frame: None,
            frames_drawn: 0,
            params,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.surface.is_some()
    }

    /// Bind `surface`, size it to `container_width` x the fixed height and
    /// build the default mannequin. Returns `false` (dropping `surface`) if
    /// already initialized.
    pub fn initialize(&mut self, mut surface: S, container_width: u32) -> bool {
        if self.is_initialized() {
            log::warn!("[scene] initialize called twice; keeping existing surface");
            return false;
        }
        let width = container_width.max(1);
        let height = self.params.surface_height;
        surface.resize(width, height);
        self.camera = Camera::new(&self.params, width as f32 / height as f32);
        self.lights = LightRig::default();
        self.surface = Some(surface);
        self.width = width;
        self.build_default_mannequin();
        log::info!("[scene] initialized at {}x{}", width, height);
        true
    }

    /// Replace any existing mannequin with the default one.
    pub fn build_default_mannequin(&mut self) {
        self.mannequin = Some(Mannequin::default());
    }

    /// Run the figurine builder, building the default mannequin first if
    /// none exists yet.
    pub fn apply_options(&mut self, options: &OptionSet) {
        let mannequin = self.mannequin.get_or_insert_with(Mannequin::default);
        builder::apply_options(mannequin, options);
    }

    /// One frame: auto-rotate when idle, then draw once.
    pub fn render_loop_tick(&mut self) {
        if self.controller.auto_rotate_enabled() {
            if let Some(m) = self.mannequin.as_mut() {
                m.transform.rotation.y += self.params.auto_rotate_step;
            }
        }
        if let Some(surface) = self.surface.as_mut() {
            let frame = SceneFrame {
                camera: &self.camera,
                lights: &self.lights,
                mannequin: self.mannequin.as_ref(),
            };
            match surface.draw(&frame) {
                Ok(()) => self.frames_drawn += 1,
                Err(e) => log::warn!("[scene] draw failed: {:?}", e),
            }
        }
    }

    /// Begin the recurring render loop. No-op if already running.
    pub fn start_loop(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.running {
            return;
        }
        self.running = true;
        self.pending_frame = scheduler.request_frame();
    }

    /// Frame callback: tick and reschedule while running.
    pub fn on_frame(&mut self, scheduler: &mut impl FrameScheduler) {
        self.pending_frame = None;
        if !self.running {
            return;
        }
        self.render_loop_tick();
        self.pending_frame = scheduler.request_frame();
    }

    /// Cancel the loop and release the pending frame registration.
    pub fn stop_loop(&mut self, scheduler: &mut impl FrameScheduler) {
        self.running = false;
        if let Some(id) = self.pending_frame.take() {
            scheduler.cancel_frame(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending_frame
    }

    /// Follow the container width; the height stays fixed.
    pub fn resize(&mut self, new_width: u32) {
        if new_width == 0 {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let height = self.params.surface_height;
        surface.resize(new_width, height);
        self.camera.aspect = new_width as f32 / height as f32;
        self.width = new_width;
    }

    pub fn handle_event(&mut self, event: CanvasEvent) -> EventResponse {
        self.controller
            .handle(event, self.mannequin.as_mut(), &mut self.camera)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    pub fn mannequin(&self) -> Option<&Mannequin> {
        self.mannequin.as_ref()
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.width, self.params.surface_height)
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}
