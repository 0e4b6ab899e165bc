use glam::Vec3;

// Shared scene/tuning constants used by both web and native frontends.

// Scroll
pub const SECTION_COUNT: usize = 4;
pub const SCROLL_DAMPING_RATE: f32 = 5.0; // per-second approach rate of the damped offset

// Authored projector path, one waypoint per section
pub const PATH_POSITIONS: [[f32; 3]; SECTION_COUNT] = [
    [0.0, 0.0, 0.0],
    [4.0, -1.0, 5.0],
    [-4.0, -1.0, 3.0],
    [0.0, 0.0, 8.0],
];
pub const PATH_YAWS: [f32; SECTION_COUNT] = [0.0, -0.3, 0.3, 0.0];

// Pose smoothing rates (per second); equal to per-frame factors 0.04/0.05/0.1 at 60 fps
pub const POSITION_SMOOTH_RATE: f32 = 2.4;
pub const YAW_SMOOTH_RATE: f32 = 3.1;
pub const SPOT_SMOOTH_RATE: f32 = 6.3;
pub const INTENSITY_SMOOTH_RATE: f32 = 6.3;

// Cosmetic idle bob on the projector's display Y
pub const BOB_AMPLITUDE: f32 = 0.12;

// Spotlight
pub const SPOT_LENS_OFFSET: [f32; 3] = [0.0, 0.0, 2.0]; // world offset from projector body
pub const SPOT_AIM_X_FACTOR: f32 = 0.5; // lateral aim derives from the scroll target, halved
pub const SPOT_ANGLE_RAD: f32 = 0.6;
pub const SPOT_COLOR: [f32; 3] = [1.0, 0.96, 0.84]; // #fff5d6
pub const SPOT_LIT_INTENSITY: f32 = 1.0;
pub const SPOT_DIM_INTENSITY: f32 = 0.12;

// Projector toggle effects
pub const REEL_RATE: f32 = 2.0; // radians per second while running
pub const BEAM_BASE_OPACITY: f32 = 0.06;
pub const BEAM_FLICKER_SPAN: f32 = 0.02;
pub const BEAM_FLICKER_HZ: f32 = 15.0;
pub const HOVER_SCALE: f32 = 1.06;
pub const PROJECTOR_SCALE: f32 = 0.4;
pub const PROJECTOR_PICK_RADIUS: f32 = 1.4;

// Camera (eye in front of the stalls, looking down the beam toward the screen)
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.0, -14.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 10.0];
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 120.0;

// Auditorium layout
pub const SCREEN_Z: f32 = 25.0;
pub const SEAT_ROWS: usize = 6;
pub const SEAT_COLS: usize = 12;
pub const SEAT_SPACING_X: f32 = 2.2;
pub const SEAT_SPACING_Z: f32 = 2.3;
pub const SEAT_Y: f32 = -4.0;
pub const SEAT_FRONT_Z: f32 = 16.0;
pub const FLOOR_Y: f32 = -4.8;

// Atmosphere
pub const FOG_COLOR: [f32; 3] = [0.02, 0.0, 0.0]; // #050000
pub const FOG_NEAR: f32 = 5.0;
pub const FOG_FAR: f32 = 45.0;
pub const AMBIENT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const AMBIENT_INTENSITY: f32 = 0.15;
pub const SPARKLE_COUNT: usize = 300;
pub const SPARKLE_EXTENT: f32 = 20.0;
pub const SPARKLE_SIZE: f32 = 0.09;
pub const SPARKLE_SPEED: f32 = 0.4;
pub const SPARKLE_OPACITY: f32 = 0.4;
pub const SPARKLE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

#[inline]
pub fn camera_eye() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn camera_target() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}

#[inline]
pub fn spot_lens_offset() -> Vec3 {
    Vec3::from(SPOT_LENS_OFFSET)
}
