#![cfg(target_arch = "wasm32")]

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use app_core::{ProjectorState, SceneDirector, ScrollState};
use glam::Vec3;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

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

    dom::sync_canvas_backing_size(&canvas);
    dom::install_resize_listener(&window, &canvas);

    let scroll = Rc::new(RefCell::new(ScrollState::default()));
    // Start at the page's current scroll position instead of gliding in.
    scroll
        .borrow_mut()
        .jump_to(input::page_scroll_progress(&window));

    let projector = Rc::new(RefCell::new(ProjectorState::default()));
    let director = SceneDirector::authored();
    let pick_center = Rc::new(Cell::new(Vec3::ZERO));

    events::wire_pointer_handlers(&canvas, projector.clone(), pick_center.clone());
    overlay::update_caption(&document, scroll.borrow().current_section());

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("running without WebGPU; scene state still advances");
    }

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        scroll,
        projector,
        pick_center,
        director,
        gpu,
        start_instant: now,
        last_instant: now,
        last_section: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
