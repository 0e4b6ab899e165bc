//! Pose and camera types shared between the director and the frontends.
//!
//! These intentionally avoid platform-specific APIs so they build on both
//! native and web targets; the frontends consume them to build matrices and
//! to position the spotlight uniform.

use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed auditorium camera of the authored scene.
    pub fn auditorium(aspect: f32) -> Self {
        Self {
            eye: crate::constants::camera_eye(),
            target: crate::constants::camera_target(),
            up: Vec3::Y,
            aspect,
            fovy_radians: crate::constants::CAMERA_FOV_DEG.to_radians(),
            znear: crate::constants::CAMERA_ZNEAR,
            zfar: crate::constants::CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Position plus yaw; the only rotational degree of freedom the path uses.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub yaw: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SpotlightPose {
    pub position: Vec3,
    pub target: Vec3,
    pub intensity: f32,
}

/// Everything the renderer needs for one displayed frame, produced by the
/// director as an explicit value. The host applies it to its own handles
/// and simply skips the application while a handle is not ready yet.
#[derive(Clone, Copy, Debug)]
pub struct SceneFrame {
    pub projector: Pose,
    pub spotlight: SpotlightPose,
    pub beam_opacity: f32,
    pub reel_angle: f32,
    pub emissive: f32,
    pub hover_scale: f32,
}
