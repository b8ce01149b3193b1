//! Data-driven gameplay tunables
//!
//! `Tuning::default()` reproduces the compiled-in constants. A JSON document
//! may override any subset of fields; missing fields keep their defaults.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What happens to a camera policy's private state when the player
/// switches away from it and back again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraSwitch {
    /// Keep whatever state the policy last held
    #[default]
    Preserve,
    /// Clear the state of the policy being activated
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub start: Vec2,
    pub movement_speed: f32,
    pub jump_speed: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            movement_speed: PLAYER_MOVEMENT_SPEED,
            jump_speed: PLAYER_JUMP_SPEED,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeathRayTuning {
    pub start: Vec2,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    /// Seconds of session time before the ray starts moving
    pub spawn_delay: f32,
}

impl Default for DeathRayTuning {
    fn default() -> Self {
        Self {
            start: Vec2::new(DEATH_RAY_START_X, DEATH_RAY_START_Y),
            speed: DEATH_RAY_SPEED,
            width: DEATH_RAY_WIDTH,
            height: DEATH_RAY_HEIGHT,
            spawn_delay: DEATH_RAY_SPAWN_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Zoom change per wheel notch
    pub zoom_step: f32,
    pub smooth_min_speed: f32,
    pub smooth_min_effect_length: f32,
    pub smooth_fraction_speed: f32,
    pub even_out_speed: f32,
    /// Dead zone size as a fraction of the viewport
    pub push_box: Vec2,
    pub on_switch: CameraSwitch,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
            smooth_min_speed: SMOOTH_MIN_SPEED,
            smooth_min_effect_length: SMOOTH_MIN_EFFECT_LENGTH,
            smooth_fraction_speed: SMOOTH_FRACTION_SPEED,
            even_out_speed: EVEN_OUT_SPEED,
            push_box: Vec2::new(PUSH_BOX_X, PUSH_BOX_Y),
            on_switch: CameraSwitch::Preserve,
        }
    }
}

/// All gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub player: PlayerTuning,
    pub death_ray: DeathRayTuning,
    pub camera: CameraTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            player: PlayerTuning::default(),
            death_ray: DeathRayTuning::default(),
            camera: CameraTuning::default(),
        }
    }
}

/// Failure to load a tuning document
#[derive(Debug)]
pub enum TuningError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "malformed tuning JSON: {}", e),
            TuningError::Invalid(reason) => write!(f, "invalid tuning: {}", reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.player.width <= 0.0 || self.player.height <= 0.0 {
            return Err(TuningError::Invalid("player size must be positive"));
        }
        if self.death_ray.width <= 0.0 || self.death_ray.height <= 0.0 {
            return Err(TuningError::Invalid("death ray size must be positive"));
        }
        if self.death_ray.spawn_delay < 0.0 {
            return Err(TuningError::Invalid("spawn delay must not be negative"));
        }
        let cam = &self.camera;
        if cam.zoom_min <= 0.0 || cam.zoom_min > cam.zoom_max {
            return Err(TuningError::Invalid("zoom limits must satisfy 0 < min <= max"));
        }
        if cam.smooth_min_effect_length < 0.0 {
            return Err(TuningError::Invalid("smooth_min_effect_length must not be negative"));
        }
        if cam.even_out_speed <= 0.0 {
            return Err(TuningError::Invalid("even_out_speed must be positive"));
        }
        if !(0.0..=1.0).contains(&cam.push_box.x) || !(0.0..=1.0).contains(&cam.push_box.y) {
            return Err(TuningError::Invalid("push box must be a fraction of the viewport"));
        }
        Ok(())
    }
}
