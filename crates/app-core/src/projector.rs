//! Projector on/off toggle and its frame effects.
//!
//! Two states, `On` and `Off`, starting `On`. A click flips the state; no
//! other transition exists. `hovered` is a cosmetic flag set by
//! pointer-enter/leave and is deliberately untouched by clicks.

use crate::constants::*;

#[derive(Clone, Copy, Debug)]
pub struct ProjectorState {
    is_on: bool,
    hovered: bool,
    reel_angle: f32,
}

impl Default for ProjectorState {
    fn default() -> Self {
        Self {
            is_on: true,
            hovered: false,
            reel_angle: 0.0,
        }
    }
}

impl ProjectorState {
    pub fn handle_click(&mut self) {
        self.is_on = !self.is_on;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[inline]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Advance the film reels; frozen while the projector is off.
    pub fn advance_reels(&mut self, dt_sec: f32) {
        if self.is_on {
            self.reel_angle -= REEL_RATE * dt_sec.max(0.0);
        }
    }

    #[inline]
    pub fn reel_angle(&self) -> f32 {
        self.reel_angle
    }

    /// Time-varying flicker opacity of the light beam; exactly 0 while off.
    pub fn beam_opacity(&self, elapsed_sec: f32) -> f32 {
        if self.is_on {
            BEAM_BASE_OPACITY + (elapsed_sec * BEAM_FLICKER_HZ).sin() * BEAM_FLICKER_SPAN
        } else {
            0.0
        }
    }

    /// Emissive target for accent materials: lit while running, dim idle.
    pub fn emissive_level(&self) -> f32 {
        if self.is_on {
            SPOT_LIT_INTENSITY
        } else {
            SPOT_DIM_INTENSITY
        }
    }

    /// Cosmetic scale affordance while the pointer rests on the body.
    pub fn hover_scale(&self) -> f32 {
        if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }
}
