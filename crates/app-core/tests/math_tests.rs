// Host-side tests for the range-mapping and smoothing helpers.

use app_core::{ray_sphere, section_curve, section_ramp, smooth_alpha, waypoint_weights};

#[test]
fn section_curve_is_zero_outside_its_span() {
    let total = 4;
    for index in 0..total {
        let start = index as f32 / total as f32;
        let end = (index + 1) as f32 / total as f32;
        for step in 0..=100 {
            let p = step as f32 / 100.0;
            let w = section_curve(index, total, p);
            assert!(w.is_finite());
            assert!((0.0..=1.0).contains(&w), "w={w} at p={p}");
            if p < start - 1e-6 || p > end + 1e-6 {
                assert!(w.abs() < 1e-5, "index {index} leaked w={w} at p={p}");
            }
        }
    }
}

#[test]
fn section_curve_peaks_at_span_midpoint_and_vanishes_at_ends() {
    let total = 4;
    for index in 0..total {
        let start = index as f32 / total as f32;
        let mid = start + 0.5 / total as f32;
        let end = (index + 1) as f32 / total as f32;
        assert!((section_curve(index, total, mid) - 1.0).abs() < 1e-5);
        assert!(section_curve(index, total, start) < 1e-5);
        assert!(section_curve(index, total, end) < 1e-5);
    }
}

#[test]
fn section_ramp_rises_across_its_span_and_saturates() {
    let total = 4;
    assert!(section_ramp(1, total, 0.0).abs() < 1e-6);
    assert!(section_ramp(1, total, 0.25).abs() < 1e-6);
    assert!((section_ramp(1, total, 0.375) - 0.5).abs() < 1e-5);
    assert!((section_ramp(1, total, 0.5) - 1.0).abs() < 1e-6);
    assert!((section_ramp(1, total, 1.0) - 1.0).abs() < 1e-6);
}

#[test]
fn section_helpers_are_finite_for_small_and_large_totals() {
    for total in 1..=8 {
        for index in 0..total {
            for step in 0..=40 {
                let p = step as f32 / 40.0;
                assert!(section_ramp(index, total, p).is_finite());
                assert!(section_curve(index, total, p).is_finite());
            }
        }
    }
    // Degenerate total never divides by zero.
    assert_eq!(section_ramp(0, 0, 0.5), 0.0);
}

#[test]
fn waypoint_weights_are_affine_and_bounded() {
    for count in 1..=8 {
        for step in 0..=100 {
            let p = step as f32 / 100.0;
            let w = waypoint_weights(count, p);
            assert_eq!(w.len(), count);
            let sum: f32 = w.iter().sum();
            assert!((sum - 1.0).abs() < 1e-4, "count={count} p={p} sum={sum}");
            for v in &w {
                assert!((0.0..=1.0 + 1e-6).contains(v));
                assert!(v.is_finite());
            }
        }
    }
}

#[test]
fn waypoint_weights_hit_endpoints_exactly() {
    let w = waypoint_weights(4, 0.0);
    assert!((w[0] - 1.0).abs() < 1e-6);
    assert!(w[1..].iter().all(|v| v.abs() < 1e-6));

    let w = waypoint_weights(4, 1.0);
    assert!((w[3] - 1.0).abs() < 1e-6);
    assert!(w[..3].iter().all(|v| v.abs() < 1e-6));
}

#[test]
fn smooth_alpha_stays_in_unit_interval_and_grows_with_dt() {
    let mut prev = 0.0;
    for step in 1..=50 {
        let dt = step as f32 * 0.01;
        let a = smooth_alpha(2.4, dt);
        assert!(a > 0.0 && a < 1.0);
        assert!(a > prev);
        prev = a;
    }
    // Negative dt is treated as a stalled frame.
    assert_eq!(smooth_alpha(2.4, -0.5), 0.0);
}

#[test]
fn ray_sphere_hit_and_miss() {
    let origin = glam::Vec3::new(0.0, 0.0, -10.0);
    let dir = glam::Vec3::Z;
    let hit = ray_sphere(origin, dir, glam::Vec3::ZERO, 1.0);
    assert!(hit.is_some());
    assert!((hit.unwrap() - 9.0).abs() < 1e-4);

    let miss = ray_sphere(origin, glam::Vec3::X, glam::Vec3::ZERO, 1.0);
    assert!(miss.is_none());
}
