//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::{Camera2D, CameraMode, CameraRig};
use super::level::{Level, Rect};
use crate::tuning::{DeathRayTuning, PlayerTuning, Tuning};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player is alive, everything updates
    Running,
    /// Player touched the Death Ray; terminal
    Ended,
}

/// Notable things that happened during a tick, drained by the front end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player came to rest on the blocking item at `item` (index into the level)
    Landed { item: usize, y: f32 },
    CameraModeChanged(CameraMode),
    /// Zoom and player position restored
    Reset,
    /// Player touched the Death Ray; the session is over
    DeathRayHit,
}

/// The player's box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Left edge / feet line of the bounding box
    pub position: Vec2,
    /// Positive is downward
    pub vertical_speed: f32,
    pub movement_speed: f32,
    pub jump_speed: f32,
    pub can_jump: bool,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            position: tuning.start,
            vertical_speed: 0.0,
            movement_speed: tuning.movement_speed,
            jump_speed: tuning.jump_speed,
            can_jump: false,
            width: tuning.width,
            height: tuning.height,
        }
    }

    /// Bounding box, hanging up from `position`
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y - self.height,
            self.width,
            self.height,
        )
    }
}

/// The hazard sweeping in from the right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeathRay {
    pub position: Vec2,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    /// Session time (seconds) at which the ray starts moving
    pub spawn_delay: f32,
}

impl DeathRay {
    pub fn new(tuning: &DeathRayTuning) -> Self {
        Self {
            position: tuning.start,
            speed: tuning.speed,
            width: tuning.width,
            height: tuning.height,
            spawn_delay: tuning.spawn_delay,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y - self.height,
            self.width,
            self.height,
        )
    }

    pub fn is_active(&self, elapsed: f32) -> bool {
        elapsed >= self.spawn_delay
    }

    /// Slide left if the spawn delay has passed
    pub fn advance(&mut self, elapsed: f32, dt: f32) {
        if self.is_active(elapsed) {
            self.position.x -= self.speed * dt;
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub level: Level,
    pub player: Player,
    pub death_ray: DeathRay,
    pub camera: Camera2D,
    pub rig: CameraRig,
    pub phase: GamePhase,
    /// Seconds since the session started
    pub elapsed: f32,
    pub frame: u64,
    /// Events produced since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Session on the demo level with default tuning
    pub fn new(viewport: Vec2, mode: CameraMode) -> Self {
        Self::with_tuning(Tuning::default(), Level::demo(), viewport, mode)
    }

    pub fn with_tuning(tuning: Tuning, level: Level, viewport: Vec2, mode: CameraMode) -> Self {
        let player = Player::new(&tuning.player);
        let death_ray = DeathRay::new(&tuning.death_ray);
        let mut camera = Camera2D::new(player.position, viewport / 2.0);
        camera.set_zoom(1.0, &tuning.camera);
        Self {
            tuning,
            level,
            player,
            death_ray,
            camera,
            rig: CameraRig::new(mode),
            phase: GamePhase::Running,
            elapsed: 0.0,
            frame: 0,
            events: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Restore zoom and player position (speed and jump state carry over)
    pub fn reset_view(&mut self) {
        self.camera.set_zoom(1.0, &self.tuning.camera);
        self.player.position = self.tuning.player.start;
        self.events.push(GameEvent::Reset);
        log::info!("View reset, player back at {:?}", self.player.position);
    }
}
