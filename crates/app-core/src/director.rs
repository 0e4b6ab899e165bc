//! Scroll-to-scene transform director.
//!
//! Maps the damped scroll offset onto the projector's authored waypoint
//! path, then low-passes the live pose toward the target each frame so the
//! scene glides instead of popping. The director owns only its smoothing
//! state; it returns an explicit [`SceneFrame`] and never touches scene
//! handles itself.

use glam::Vec3;

use crate::constants::*;
use crate::math::{lerp, smooth_alpha, waypoint_weights};
use crate::projector::ProjectorState;
use crate::state::{Pose, SceneFrame, SpotlightPose};

/// Authored target pose for one scroll section.
#[derive(Clone, Copy, Debug)]
pub struct Waypoint {
    pub position: Vec3,
    pub yaw: f32,
}

pub struct SceneDirector {
    waypoints: Vec<Waypoint>,
    position: Vec3,
    yaw: f32,
    spot_position: Vec3,
    intensity: f32,
    initialized: bool,
}

impl SceneDirector {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        let waypoints = if waypoints.is_empty() {
            vec![Waypoint {
                position: Vec3::ZERO,
                yaw: 0.0,
            }]
        } else {
            waypoints
        };
        Self {
            waypoints,
            position: Vec3::ZERO,
            yaw: 0.0,
            spot_position: Vec3::ZERO,
            intensity: SPOT_LIT_INTENSITY,
            initialized: false,
        }
    }

    /// The hand-tuned path of the shipped scene, one waypoint per section.
    pub fn authored() -> Self {
        let waypoints = PATH_POSITIONS
            .iter()
            .zip(PATH_YAWS.iter())
            .map(|(p, y)| Waypoint {
                position: Vec3::from(*p),
                yaw: *y,
            })
            .collect();
        Self::new(waypoints)
    }

    #[inline]
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Target pose for a scroll offset: hat-basis blend of the waypoints.
    ///
    /// Exact at `progress` 0 and 1 and continuous across every interior
    /// section boundary; weights sum to 1 so the blend is affine.
    pub fn target_pose(&self, progress: f32) -> Pose {
        let weights = waypoint_weights(self.waypoints.len(), progress);
        let mut position = Vec3::ZERO;
        let mut yaw = 0.0;
        for (wp, w) in self.waypoints.iter().zip(weights.iter()) {
            position += wp.position * *w;
            yaw += wp.yaw * *w;
        }
        Pose { position, yaw }
    }

    /// Smoothed pose currently being displayed, without the idle bob.
    pub fn smoothed_pose(&self) -> Pose {
        Pose {
            position: self.position,
            yaw: self.yaw,
        }
    }

    /// Per-frame update: advance smoothing state and assemble the frame.
    ///
    /// Total for any `progress` in \[0, 1\] and non-negative times. The
    /// first call snaps to the target so the scene does not swim in from
    /// the zero pose on mount.
    pub fn advance(
        &mut self,
        progress: f32,
        toggle: &ProjectorState,
        elapsed_sec: f32,
        dt_sec: f32,
    ) -> SceneFrame {
        let target = self.target_pose(progress.clamp(0.0, 1.0));
        let lit = toggle.emissive_level();

        if !self.initialized {
            self.position = target.position;
            self.yaw = target.yaw;
            self.spot_position = target.position + spot_lens_offset();
            self.intensity = lit;
            self.initialized = true;
        } else {
            self.position = self
                .position
                .lerp(target.position, smooth_alpha(POSITION_SMOOTH_RATE, dt_sec));
            self.yaw = lerp(self.yaw, target.yaw, smooth_alpha(YAW_SMOOTH_RATE, dt_sec));
            self.spot_position = self.spot_position.lerp(
                self.position + spot_lens_offset(),
                smooth_alpha(SPOT_SMOOTH_RATE, dt_sec),
            );
            self.intensity = lerp(
                self.intensity,
                lit,
                smooth_alpha(INTENSITY_SMOOTH_RATE, dt_sec),
            );
        }

        // Idle bob sits on top of the filter output so it never fights it.
        let mut display = self.position;
        display.y += elapsed_sec.sin() * BOB_AMPLITUDE;

        // Aim at the screen plane; lateral aim follows the scroll target so
        // the beam stays roughly on the screen wherever the body wanders.
        let aim = Vec3::new(
            target.position.x * SPOT_AIM_X_FACTOR,
            target.position.y,
            SCREEN_Z,
        );

        SceneFrame {
            projector: Pose {
                position: display,
                yaw: self.yaw,
            },
            spotlight: SpotlightPose {
                position: self.spot_position,
                target: aim,
                intensity: self.intensity,
            },
            beam_opacity: toggle.beam_opacity(elapsed_sec),
            reel_angle: toggle.reel_angle(),
            emissive: self.intensity,
            hover_scale: toggle.hover_scale(),
        }
    }
}

impl Default for SceneDirector {
    fn default() -> Self {
        Self::authored()
    }
}
