//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! the front end feeds a `TickInput` and a frame delta, then reads the state.

pub mod camera;
pub mod collision;
pub mod level;
pub mod physics;
pub mod state;
pub mod tick;

pub use camera::{Camera2D, CameraMode, CameraRig, EvenOutState};
pub use collision::{player_hits_death_ray, rects_touch};
pub use level::{EnvItem, Level, Rect};
pub use physics::{MoveInput, update_player};
pub use state::{DeathRay, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
