//! Pure numeric helpers: range mapping, smoothing factors and picking.
//!
//! Everything here is total over its input domain; callers clamp scroll
//! progress to \[0, 1\] and the helpers tolerate values outside it anyway.

use glam::Vec3;
use smallvec::SmallVec;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Frame-rate-independent smoothing factor.
///
/// A fixed per-frame lerp factor only behaves consistently at one frame
/// rate; this derives the equivalent factor for an arbitrary `dt_sec` from
/// an exponential approach rate, so the filter settles identically at 30,
/// 60 or 144 fps.
#[inline]
pub fn smooth_alpha(rate_per_sec: f32, dt_sec: f32) -> f32 {
    1.0 - (-rate_per_sec * dt_sec.max(0.0)).exp()
}

/// Linear ramp local to section `index` of `total`.
///
/// 0 before the span `[i/n, (i+1)/n]`, rises linearly to 1 across it and
/// saturates at 1 after. Spans need not divide the unit interval evenly
/// when callers pass uneven section bounds through `ScrollState::range`.
#[inline]
pub fn section_ramp(index: usize, total: usize, progress: f32) -> f32 {
    if total == 0 {
        return 0.0;
    }
    let n = total as f32;
    let start = index as f32 / n;
    ((progress - start) * n).clamp(0.0, 1.0)
}

/// Triangular response local to section `index` of `total`: 0 at both span
/// ends, 1 at the span midpoint, 0 everywhere outside the span.
#[inline]
pub fn section_curve(index: usize, total: usize, progress: f32) -> f32 {
    let r = section_ramp(index, total, progress);
    1.0 - (2.0 * r - 1.0).abs()
}

/// Hat-basis blend weights over `count` waypoints spanning progress \[0, 1\].
///
/// Weights are each in \[0, 1\] and sum to 1 for `count >= 1`, so blending
/// waypoints with them yields a continuous piecewise-linear path that hits
/// every waypoint exactly, including the endpoints at progress 0 and 1.
pub fn waypoint_weights(count: usize, progress: f32) -> SmallVec<[f32; 8]> {
    let mut weights = SmallVec::new();
    match count {
        0 => {}
        1 => weights.push(1.0),
        _ => {
            let u = progress.clamp(0.0, 1.0) * (count - 1) as f32;
            for i in 0..count {
                weights.push((1.0 - (u - i as f32).abs()).max(0.0));
            }
        }
    }
    weights
}

/// Ray-sphere intersection; returns the near-hit parameter along `ray_dir`.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
