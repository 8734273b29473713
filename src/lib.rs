#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod status;

use app::App;
use figurine_core::ViewMode;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("figurine-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // The GPU surface is created on the first generate; until then the page
    // shows the flat photo box.
    overlay::apply_mode(&document, ViewMode::Flat);
    overlay::set_info_visible(&document, false);

    let app = Rc::new(RefCell::new(App::new(canvas.clone())));
    events::wire_input_handlers(events::InputWiring {
        canvas,
        app: app.clone(),
    });
    events::wire_page_controls(&app, &document);
    frame::wire_page_lifecycle(&app);
    Ok(())
}
