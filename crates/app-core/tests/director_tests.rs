// Host-side tests for the scroll-to-scene transform director.

use app_core::{
    ProjectorState, SceneDirector, Waypoint, BOB_AMPLITUDE, PATH_POSITIONS, SCREEN_Z,
    SPOT_AIM_X_FACTOR,
};
use glam::Vec3;

const DT: f32 = 1.0 / 60.0;

fn documented_path_director() -> SceneDirector {
    // Documented combination: x waypoints 0, 4, -8, 4.
    SceneDirector::new(
        [0.0, 4.0, -8.0, 4.0]
            .iter()
            .map(|x| Waypoint {
                position: Vec3::new(*x, 0.0, 0.0),
                yaw: 0.0,
            })
            .collect(),
    )
}

#[test]
fn endpoints_yield_boundary_waypoints_exactly() {
    let d = SceneDirector::authored();
    let start = d.target_pose(0.0);
    assert!((start.position - Vec3::from(PATH_POSITIONS[0])).length() < 1e-6);
    let end = d.target_pose(1.0);
    assert!((end.position - Vec3::from(PATH_POSITIONS[3])).length() < 1e-6);
}

#[test]
fn midpoint_blends_adjacent_waypoints_evenly() {
    let d = documented_path_director();
    // Halfway between waypoints 1 and 2: 4 * 0.5 - 8 * 0.5 = -2.
    let pose = d.target_pose(0.5);
    assert!((pose.position.x - -2.0).abs() < 1e-5);
}

#[test]
fn target_path_is_continuous_at_section_boundaries() {
    let d = SceneDirector::authored();
    let n = d.waypoint_count();
    for boundary in 1..n - 1 {
        let b = boundary as f32 / (n - 1) as f32;
        let eps = 1e-4;
        let before = d.target_pose(b - eps).position;
        let after = d.target_pose(b + eps).position;
        assert!(
            (before - after).length() < 1e-2,
            "jump at boundary {boundary}: {before:?} vs {after:?}"
        );
    }
}

#[test]
fn uneven_section_counts_are_legal() {
    for count in 2..=7 {
        let d = SceneDirector::new(
            (0..count)
                .map(|i| Waypoint {
                    position: Vec3::new(i as f32, 0.0, 0.0),
                    yaw: 0.0,
                })
                .collect(),
        );
        for step in 0..=100 {
            let pose = d.target_pose(step as f32 / 100.0);
            assert!(pose.position.is_finite());
            assert!(pose.yaw.is_finite());
        }
    }
}

#[test]
fn first_advance_snaps_instead_of_swimming_in() {
    let mut d = SceneDirector::authored();
    let toggle = ProjectorState::default();
    d.advance(1.0, &toggle, 0.0, DT);
    let expected = d.target_pose(1.0);
    assert!((d.smoothed_pose().position - expected.position).length() < 1e-6);
}

#[test]
fn smoothing_approaches_a_constant_target_monotonically() {
    let mut d = SceneDirector::authored();
    let toggle = ProjectorState::default();
    d.advance(0.0, &toggle, 0.0, DT);

    let target = d.target_pose(1.0).position;
    let mut prev = (d.smoothed_pose().position - target).length();
    for frame in 1..=600 {
        d.advance(1.0, &toggle, frame as f32 * DT, DT);
        let dist = (d.smoothed_pose().position - target).length();
        assert!(dist <= prev + 1e-6, "distance grew at frame {frame}");
        prev = dist;
    }
    assert!(prev < 1e-2, "did not converge, still {prev} away");
}

#[test]
fn idle_bob_is_bounded_and_scroll_independent() {
    let mut d = SceneDirector::authored();
    let toggle = ProjectorState::default();
    d.advance(0.0, &toggle, 0.0, DT);
    for frame in 0..1000 {
        let elapsed = frame as f32 * DT;
        let frame_out = d.advance(0.0, &toggle, elapsed, DT);
        let bob = frame_out.projector.position.y - d.smoothed_pose().position.y;
        assert!(bob.abs() <= BOB_AMPLITUDE + 1e-6);
    }
}

#[test]
fn spotlight_aims_at_the_screen_plane() {
    let mut d = SceneDirector::authored();
    let toggle = ProjectorState::default();
    let frame = d.advance(0.37, &toggle, 1.0, DT);
    assert!((frame.spotlight.target.z - SCREEN_Z).abs() < 1e-6);
    let target = d.target_pose(0.37);
    assert!((frame.spotlight.target.x - target.position.x * SPOT_AIM_X_FACTOR).abs() < 1e-5);
}

#[test]
fn beam_opacity_drops_to_zero_on_the_frame_after_a_click() {
    let mut d = SceneDirector::authored();
    let mut toggle = ProjectorState::default();
    let lit = d.advance(0.0, &toggle, 0.0, DT);
    assert!(lit.beam_opacity > 0.0);

    toggle.handle_click();
    let dark = d.advance(0.0, &toggle, DT, DT);
    assert_eq!(dark.beam_opacity, 0.0);
    // Reels stop advancing as well.
    let angle = dark.reel_angle;
    toggle.advance_reels(DT);
    let still = d.advance(0.0, &toggle, 2.0 * DT, DT);
    assert_eq!(still.reel_angle, angle);
}

#[test]
fn advance_is_total_over_the_progress_domain() {
    let mut d = SceneDirector::authored();
    let toggle = ProjectorState::default();
    for step in 0..=100 {
        let p = step as f32 / 100.0;
        let frame = d.advance(p, &toggle, p * 10.0, DT);
        assert!(frame.projector.position.is_finite());
        assert!(frame.spotlight.position.is_finite());
        assert!(frame.spotlight.target.is_finite());
        assert!(frame.beam_opacity.is_finite());
    }
    // Out-of-range progress is clamped, not propagated.
    let frame = d.advance(42.0, &toggle, 0.0, DT);
    assert!(frame.projector.position.is_finite());
}
