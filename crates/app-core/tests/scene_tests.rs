// Host-side tests for the procedural cinema set and mesh builders.

use app_core::{
    beam_mesh, box_mesh, cylinder_mesh, plane_mesh, projector_group_matrix, projector_parts,
    slide_content, sparkle_field, static_scene, PROJECTOR_SCALE, SEAT_COLS, SEAT_ROWS,
    SPARKLE_COUNT, SPARKLE_EXTENT,
};
use glam::{Vec3, Vec4};

fn assert_mesh_integrity(mesh: &app_core::MeshData) {
    assert!(!mesh.vertices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0);
    for &i in &mesh.indices {
        assert!((i as usize) < mesh.vertices.len(), "index {i} out of bounds");
    }
    for v in &mesh.vertices {
        let n = Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4, "non-unit normal {n:?}");
    }
}

#[test]
fn box_mesh_has_expected_counts() {
    let m = box_mesh(2.0, 2.5, 4.0);
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.indices.len(), 36);
    assert_mesh_integrity(&m);
}

#[test]
fn plane_and_cylinder_meshes_are_well_formed() {
    assert_mesh_integrity(&plane_mesh(46.0, 22.0));
    assert_mesh_integrity(&cylinder_mesh(1.4, 1.4, 0.3, 32, true));
    assert_mesh_integrity(&cylinder_mesh(0.8, 0.9, 0.6, 16, true));
}

#[test]
fn beam_mesh_tip_sits_at_the_origin() {
    let m = beam_mesh();
    assert_mesh_integrity(&m);
    let max_y = m
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::MIN, f32::max);
    let min_y = m
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::MAX, f32::min);
    assert!((max_y - 0.0).abs() < 1e-4, "tip at y={max_y}");
    assert!((min_y - -25.0).abs() < 1e-4, "mouth at y={min_y}");
}

#[test]
fn seat_grid_is_complete_and_centered() {
    let scene = static_scene();
    let seats: Vec<_> = scene
        .boxes
        .iter()
        .filter(|i| i.translation.z >= 15.0 && (-5.0..-2.0).contains(&i.translation.y))
        .collect();
    assert_eq!(seats.len(), SEAT_ROWS * SEAT_COLS * 2); // cushion + backrest

    let mean_x: f32 = seats.iter().map(|i| i.translation.x).sum::<f32>() / seats.len() as f32;
    assert!(mean_x.abs() < 1e-4, "grid off-center by {mean_x}");
}

#[test]
fn sparkle_field_is_deterministic_and_bounded() {
    let a = sparkle_field(42, SPARKLE_COUNT);
    let b = sparkle_field(42, SPARKLE_COUNT);
    assert_eq!(a.len(), SPARKLE_COUNT);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.size, y.size);
        assert_eq!(x.phase, y.phase);
    }
    let half = SPARKLE_EXTENT * 0.5;
    for s in &a {
        assert!(s.position.x.abs() <= half);
        assert!(s.position.y.abs() <= half);
        assert!(s.size > 0.0);
    }

    let c = sparkle_field(7, SPARKLE_COUNT);
    assert!(a.iter().zip(c.iter()).any(|(x, y)| x.position != y.position));
}

#[test]
fn projector_parts_respect_reel_angle_and_emissive() {
    let idle = projector_parts(0.0, 0.2);
    let spun = projector_parts(1.0, 0.2);
    assert_ne!(idle.reels[0].rotation, spun.reels[0].rotation);
    assert!((idle.lens.emissive - 0.2).abs() < 1e-6);
    assert!(idle.beam.emissive > 0.0);
}

#[test]
fn projector_group_matrix_applies_scale_and_translation() {
    let m = projector_group_matrix(Vec3::new(1.0, 2.0, 3.0), 0.0, 1.0);
    let origin = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((Vec3::new(origin.x, origin.y, origin.z) - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
    let unit = m * Vec4::new(1.0, 0.0, 0.0, 0.0);
    assert!((unit.x - PROJECTOR_SCALE).abs() < 1e-5);
}

#[test]
fn slide_content_covers_every_section_and_clamps() {
    for section in 0..4 {
        let s = slide_content(section);
        assert!(!s.heading.is_empty());
        assert!(!s.sub.is_empty());
    }
    assert_eq!(slide_content(4), slide_content(99));
}
