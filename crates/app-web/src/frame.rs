use crate::{dom, input, overlay, render};
use app_core::{ProjectorState, SceneDirector, ScrollState};
use glam::Vec3;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub scroll: Rc<RefCell<ScrollState>>,
    pub projector: Rc<RefCell<ProjectorState>>,
    pub pick_center: Rc<Cell<Vec3>>,
    pub director: SceneDirector,

    pub gpu: Option<render::GpuState<'a>>,

    pub start_instant: Instant,
    pub last_instant: Instant,
    pub last_section: Option<usize>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.start_instant).as_secs_f32();

        if let Some(w) = web::window() {
            self.scroll
                .borrow_mut()
                .set_target(input::page_scroll_progress(&w));
        }
        let (offset, section) = {
            let mut s = self.scroll.borrow_mut();
            s.advance(dt);
            (s.offset(), s.current_section())
        };

        self.projector.borrow_mut().advance_reels(dt);
        let toggle = *self.projector.borrow();
        let scene_frame = self.director.advance(offset, &toggle, elapsed, dt);

        // Hover picking follows the gliding projector, not the raw waypoints.
        self.pick_center.set(scene_frame.projector.position);

        if self.last_section != Some(section) {
            self.last_section = Some(section);
            if let Some(doc) = dom::window_document() {
                overlay::update_caption(&doc, section);
            }
        }

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&scene_frame, elapsed) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
