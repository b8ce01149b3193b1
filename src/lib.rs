//! Death Ray - a tiny 2D platformer with swappable camera strategies
//!
//! Core modules:
//! - `sim`: Simulation (player physics, Death Ray, camera policies, frame tick)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven gameplay constants
//! - `settings`: Player preferences
//! - `ui`: HUD text
//! - `headless`: Scripted windowless session for the native build

pub mod headless;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Palette (sRGB, 0-1 per channel)
pub mod colors {
    pub const LIGHTGRAY: [f32; 4] = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0];
    pub const GRAY: [f32; 4] = [130.0 / 255.0, 130.0 / 255.0, 130.0 / 255.0, 1.0];
    pub const DARKBLUE: [f32; 4] = [0.0, 82.0 / 255.0, 172.0 / 255.0, 1.0];
    pub const MAROON: [f32; 4] = [190.0 / 255.0, 33.0 / 255.0, 55.0 / 255.0, 1.0];
    pub const GOLD: [f32; 4] = [1.0, 203.0 / 255.0, 0.0, 1.0];
}

/// Game configuration constants
pub mod consts {
    /// Default window/canvas size
    pub const SCREEN_WIDTH: f32 = 900.0;
    pub const SCREEN_HEIGHT: f32 = 500.0;

    /// Largest frame delta fed to the simulation (tab switches, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 280.0;
    pub const PLAYER_MOVEMENT_SPEED: f32 = 200.0;
    pub const PLAYER_JUMP_SPEED: f32 = 350.0;
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;

    /// Death Ray defaults
    pub const DEATH_RAY_START_X: f32 = 1000.0;
    pub const DEATH_RAY_START_Y: f32 = 400.0;
    pub const DEATH_RAY_SPEED: f32 = 50.0;
    pub const DEATH_RAY_WIDTH: f32 = 75.0;
    pub const DEATH_RAY_HEIGHT: f32 = 150.0;
    /// Seconds before the ray starts moving
    pub const DEATH_RAY_SPAWN_DELAY: f32 = 0.0;

    /// Zoom limits and wheel step
    pub const ZOOM_MIN: f32 = 0.25;
    pub const ZOOM_MAX: f32 = 3.0;
    pub const ZOOM_STEP: f32 = 0.05;

    /// Smooth follow camera
    pub const SMOOTH_MIN_SPEED: f32 = 30.0;
    pub const SMOOTH_MIN_EFFECT_LENGTH: f32 = 10.0;
    pub const SMOOTH_FRACTION_SPEED: f32 = 0.8;

    /// Even-out-on-landing camera (pixels/s)
    pub const EVEN_OUT_SPEED: f32 = 700.0;

    /// Bounds-push camera dead zone (fraction of the viewport)
    pub const PUSH_BOX_X: f32 = 0.2;
    pub const PUSH_BOX_Y: f32 = 0.2;
}
