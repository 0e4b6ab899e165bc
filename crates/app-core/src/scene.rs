//! The authored cinema set: screen wall, curtains, seats, floor, the
//! projector body parts and the dust-sparkle field.
//!
//! Everything is expressed as mesh-space instances; the frontends turn
//! these into GPU instance buffers. Static pieces are built once, the
//! projector parts are rebuilt each frame from the director's pose.

use glam::{Mat4, Quat, Vec3};
use rand::prelude::*;

use crate::constants::*;
use crate::mesh::{box_mesh, cylinder_mesh, plane_mesh, MeshData};

#[derive(Clone, Copy, Debug)]
pub struct Instance {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub color: [f32; 3],
    pub emissive: f32,
}

impl Instance {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

fn instance(translation: Vec3, rotation: Quat, scale: Vec3, color: [f32; 3]) -> Instance {
    Instance {
        translation,
        rotation,
        scale,
        color,
        emissive: 0.0,
    }
}

/// Static geometry, grouped by the mesh each group instances.
pub struct StaticScene {
    /// Drawn with a unit cube: seats and the screen frame strips.
    pub boxes: Vec<Instance>,
    /// Drawn with a unit +Z plane: wall, projection surface, curtains, floor.
    pub planes: Vec<Instance>,
}

pub fn static_scene() -> StaticScene {
    let mut boxes = Vec::new();
    let mut planes = Vec::new();

    // Rows of red seats, centered on the aisle, pushed toward the screen.
    for row in 0..SEAT_ROWS {
        for col in 0..SEAT_COLS {
            let x = (col as f32 - (SEAT_COLS as f32 - 1.0) / 2.0) * SEAT_SPACING_X;
            let z = SEAT_FRONT_Z + row as f32 * SEAT_SPACING_Z;
            boxes.push(instance(
                Vec3::new(x, SEAT_Y, z),
                Quat::IDENTITY,
                Vec3::new(1.7, 0.7, 1.4),
                [0.50, 0.11, 0.11], // cushion, deep red
            ));
            boxes.push(instance(
                Vec3::new(x, SEAT_Y + 0.9, z - 0.3),
                Quat::IDENTITY,
                Vec3::new(1.7, 1.4, 0.5),
                [0.60, 0.11, 0.11], // backrest
            ));
        }
    }

    // Screen frame strips.
    for (y, sx, sy) in [(11.5, 48.0, 1.0), (-11.5, 48.0, 1.0)] {
        boxes.push(instance(
            Vec3::new(0.0, y, SCREEN_Z - 0.02),
            Quat::IDENTITY,
            Vec3::new(sx, sy, 1.0),
            [0.0, 0.0, 0.0],
        ));
    }
    for x in [-24.0, 24.0] {
        boxes.push(instance(
            Vec3::new(x, 0.0, SCREEN_Z - 0.02),
            Quat::IDENTITY,
            Vec3::new(1.0, 23.0, 1.0),
            [0.0, 0.0, 0.0],
        ));
    }

    // Screen wall and projection surface, facing the stalls.
    let toward_stalls = Quat::from_rotation_y(std::f32::consts::PI);
    planes.push(instance(
        Vec3::new(0.0, 0.0, SCREEN_Z),
        toward_stalls,
        Vec3::new(60.0, 35.0, 1.0),
        [0.02, 0.02, 0.02],
    ));
    planes.push(instance(
        Vec3::new(0.0, 0.0, SCREEN_Z - 0.01),
        toward_stalls,
        Vec3::new(46.0, 22.0, 1.0),
        [1.0, 1.0, 1.0],
    ));

    // Curtains on each side.
    for x in [-29.0, 29.0] {
        planes.push(instance(
            Vec3::new(x, 0.0, SCREEN_Z + 1.0),
            toward_stalls,
            Vec3::new(10.0, 35.0, 1.0),
            [0.50, 0.11, 0.11],
        ));
    }

    // Floor.
    planes.push(instance(
        Vec3::new(0.0, FLOOR_Y, 20.0),
        Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        Vec3::new(100.0, 100.0, 1.0),
        [0.10, 0.02, 0.02],
    ));

    StaticScene { boxes, planes }
}

/// Projector body parts in projector-local space, keyed by mesh.
pub struct ProjectorParts {
    /// Unit-cube instance: the chassis.
    pub chassis: Instance,
    /// Instance for [`lens_mesh`].
    pub lens: Instance,
    /// Instances for [`reel_mesh`], spun by the reel angle.
    pub reels: [Instance; 2],
    /// Instance for [`beam_mesh`], positioned at the lens, pointing +Z.
    pub beam: Instance,
}

pub fn projector_parts(reel_angle: f32, emissive: f32) -> ProjectorParts {
    let chassis = instance(
        Vec3::ZERO,
        Quat::IDENTITY,
        Vec3::new(2.0, 2.5, 4.0),
        [0.07, 0.07, 0.07],
    );

    let mut lens = instance(
        Vec3::new(0.0, 0.2, 2.2),
        Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        Vec3::ONE,
        [0.13, 0.13, 0.13],
    );
    lens.emissive = emissive;

    // Reels sit above the chassis with their axes along X and spin about
    // that axis; both turn in the same direction like fed film.
    let spin = Quat::from_rotation_x(reel_angle) * Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
    let reels = [
        instance(Vec3::new(0.0, 2.3, -1.5), spin, Vec3::ONE, [0.02, 0.02, 0.02]),
        instance(Vec3::new(0.0, 2.3, 0.3), spin, Vec3::ONE, [0.02, 0.02, 0.02]),
    ];

    let mut beam = instance(
        Vec3::new(0.0, 0.2, 2.2),
        Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        Vec3::ONE,
        SPOT_COLOR,
    );
    beam.emissive = 1.0;

    ProjectorParts {
        chassis,
        lens,
        reels,
        beam,
    }
}

/// World transform of the projector group for a director frame.
pub fn projector_group_matrix(position: Vec3, yaw: f32, hover_scale: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(PROJECTOR_SCALE * hover_scale),
        Quat::from_rotation_y(yaw),
        position,
    )
}

pub fn lens_mesh() -> MeshData {
    cylinder_mesh(0.8, 0.9, 0.6, 32, true)
}

pub fn reel_mesh() -> MeshData {
    cylinder_mesh(1.4, 1.4, 0.3, 32, true)
}

/// Beam cone: starts at the lens aperture and flares toward the screen.
/// Authored tip-down along -Y so a -90° X rotation points it at +Z.
pub fn beam_mesh() -> MeshData {
    let mut mesh = cylinder_mesh(0.1, 6.0, 25.0, 32, false);
    // Shift so the narrow tip sits at the local origin.
    for v in &mut mesh.vertices {
        v.position[1] -= 12.5;
    }
    mesh
}

#[derive(Clone, Copy, Debug)]
pub struct Sparkle {
    pub position: Vec3,
    pub size: f32,
    pub phase: f32,
}

/// Deterministic dust field floating through the auditorium volume.
pub fn sparkle_field(seed: u64, count: usize) -> Vec<Sparkle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let half = SPARKLE_EXTENT * 0.5;
            Sparkle {
                position: Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half) + 10.0,
                ),
                size: SPARKLE_SIZE * rng.gen_range(0.5..1.5),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
            }
        })
        .collect()
}
