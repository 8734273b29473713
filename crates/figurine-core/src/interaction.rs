//! Drag-to-rotate and wheel zoom over the render surface.
//!
//! Handlers take synthetic [`CanvasEvent`]s so hosts (and tests) drive the
//! controller directly. Dragging suspends auto-rotation; releasing or leaving
//! the surface resumes it unconditionally.

use crate::scene::{Camera, Mannequin, ViewParams};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    PointerLeave,
    /// Wheel delta in the host's units; only the sign matters.
    Wheel { delta_y: f64 },
}

/// What the host should do with the originating DOM event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    pub prevent_default: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        anchor: Vec2,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionController {
    phase: DragPhase,
    auto_rotate: bool,
    yaw_per_px: f32,
    pitch_per_px: f32,
    zoom_step: f32,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&ViewParams::default())
    }
}

impl InteractionController {
    pub fn new(params: &ViewParams) -> Self {
        Self {
            phase: DragPhase::Idle,
            auto_rotate: true,
            yaw_per_px: params.drag_yaw_per_px,
            pitch_per_px: params.drag_pitch_per_px,
            zoom_step: params.zoom_step,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn auto_rotate_enabled(&self) -> bool {
        self.auto_rotate
    }

    /// Route one event. `mannequin` may be absent before the first build;
    /// drag state still updates so the phase machine stays consistent.
    pub fn handle(
        &mut self,
        event: CanvasEvent,
        mannequin: Option<&mut Mannequin>,
        camera: &mut Camera,
    ) -> EventResponse {
        match event {
            CanvasEvent::PointerDown { x, y } => {
                self.pointer_down(Vec2::new(x, y));
                EventResponse::default()
            }
            CanvasEvent::PointerMove { x, y } => {
                self.pointer_move(Vec2::new(x, y), mannequin);
                EventResponse::default()
            }
            CanvasEvent::PointerUp | CanvasEvent::PointerLeave => {
                self.release();
                EventResponse::default()
            }
            CanvasEvent::Wheel { delta_y } => {
                self.wheel(delta_y, camera);
                EventResponse {
                    prevent_default: true,
                }
            }
        }
    }

    pub fn pointer_down(&mut self, at: Vec2) {
        self.phase = DragPhase::Dragging { anchor: at };
        self.auto_rotate = false;
    }

    /// Incremental drag: rotation follows the delta since the last move.
    pub fn pointer_move(&mut self, at: Vec2, mannequin: Option<&mut Mannequin>) {
        let DragPhase::Dragging { anchor } = self.phase else {
            return;
        };
        let delta = at - anchor;
        if let Some(m) = mannequin {
            m.rotate(delta.x * self.yaw_per_px, delta.y * self.pitch_per_px);
        }
        self.phase = DragPhase::Dragging { anchor: at };
    }

    pub fn release(&mut self) {
        if self.is_dragging() {
            log::debug!("[interaction] drag released");
        }
        self.phase = DragPhase::Idle;
        self.auto_rotate = true;
    }

    /// One zoom step per event, toward the model for negative `delta_y`.
    /// A zero delta (horizontal-only scroll) leaves the distance alone.
    pub fn wheel(&mut self, delta_y: f64, camera: &mut Camera) {
        let step = if delta_y < 0.0 {
            -self.zoom_step
        } else if delta_y > 0.0 {
            self.zoom_step
        } else {
            return;
        };
        camera.set_distance(camera.distance() + step);
    }
}
