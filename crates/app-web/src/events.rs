use crate::dom;
use crate::input;
use app_core::{ray_sphere, ProjectorState, PROJECTOR_PICK_RADIUS};
use glam::Vec3;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire pointer picking against the projector to the canvas.
///
/// The pick sphere center is shared with the frame loop, which moves it
/// along the smoothed path every frame; hover therefore stays correct
/// while the projector glides without re-entering the event handlers.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    projector: Rc<RefCell<ProjectorState>>,
    pick_center: Rc<Cell<Vec3>>,
) {
    // Hover tracking.
    {
        let canvas_move = canvas.clone();
        let projector = projector.clone();
        let pick_center = pick_center.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let px = input::pointer_canvas_px(&ev, &canvas_move);
            let (ro, rd) = input::screen_to_world_ray(&canvas_move, px.x, px.y);
            let hit = ray_sphere(ro, rd, pick_center.get(), PROJECTOR_PICK_RADIUS).is_some();
            let mut p = projector.borrow_mut();
            if p.hovered() != hit {
                p.set_hovered(hit);
                dom::set_pointer_cursor(&canvas_move, hit);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Click toggles the projector when released over it.
    {
        let canvas_up = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let px = input::pointer_canvas_px(&ev, &canvas_up);
            let (ro, rd) = input::screen_to_world_ray(&canvas_up, px.x, px.y);
            if ray_sphere(ro, rd, pick_center.get(), PROJECTOR_PICK_RADIUS).is_some() {
                let mut p = projector.borrow_mut();
                p.handle_click();
                log::info!("[click] projector now {}", if p.is_on() { "on" } else { "off" });
            }
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
