use crate::dom;
use crate::app::SharedApp;
use figurine_core::CanvasEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: SharedApp,
}

/// Mouse drag, wheel zoom and window resize for the 3D canvas.
pub fn wire_input_handlers(w: InputWiring) {
    wire_mouse(&w, "mousedown", |ev| CanvasEvent::PointerDown {
        x: ev.client_x() as f32,
        y: ev.client_y() as f32,
    });
    wire_mouse(&w, "mousemove", |ev| CanvasEvent::PointerMove {
        x: ev.client_x() as f32,
        y: ev.client_y() as f32,
    });
    wire_mouse(&w, "mouseup", |_| CanvasEvent::PointerUp);
    wire_mouse(&w, "mouseout", |_| CanvasEvent::PointerLeave);
    wire_wheel(&w);
    wire_window_resize(&w);
}

fn wire_mouse(w: &InputWiring, name: &str, to_event: fn(&web::MouseEvent) -> CanvasEvent) {
    let app = w.app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        app.borrow_mut().preview.scene.handle_event(to_event(&ev));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let app = w.app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let resp = app
            .borrow_mut()
            .preview
            .scene
            .handle_event(CanvasEvent::Wheel {
                delta_y: ev.delta_y(),
            });
        if resp.prevent_default {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    // non-passive so the page does not scroll while zooming
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = w
        .canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    closure.forget();
}

fn wire_window_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let width = dom::container_width(&w.canvas);
        w.app.borrow_mut().preview.scene.resize(width);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
