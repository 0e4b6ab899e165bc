use app_core::Camera;
use glam::{Vec2, Vec3, Vec4};
use web_sys as web;

/// Normalized page scroll position in 0..=1 over the scrollable track.
pub fn page_scroll_progress(window: &web::Window) -> f32 {
    let doc_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let track = (doc_height - viewport).max(1.0);
    let scrolled = window.scroll_y().unwrap_or(0.0);
    (scrolled / track).clamp(0.0, 1.0) as f32
}

/// Convert client (CSS px) pointer coords to canvas internal pixel coords.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Unproject a canvas pixel through the auditorium camera into a world ray.
pub fn screen_to_world_ray(canvas: &web::HtmlCanvasElement, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let width = canvas.width().max(1) as f32;
    let height = canvas.height().max(1) as f32;
    let camera = Camera::auditorium(width / height);

    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (far - ro).normalize();
    (ro, rd)
}
