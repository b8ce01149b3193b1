//! Per-frame simulation step
//!
//! One call per rendered frame with that frame's delta. Order within a frame:
//! player, zoom, reset, camera switch, camera policy, Death Ray hit check,
//! Death Ray movement.

use glam::Vec2;

use super::collision::player_hits_death_ray;
use super::physics::{MoveInput, update_player};
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held keys
    pub movement: MoveInput,
    /// Mouse wheel notches this frame (positive zooms in)
    pub wheel: f32,
    /// One-shot: restore zoom and player position
    pub reset: bool,
    /// One-shot: switch to the next camera policy
    pub cycle_camera: bool,
}

impl TickInput {
    /// Clear one-shot inputs after a frame has consumed them
    pub fn clear_one_shots(&mut self) {
        self.wheel = 0.0;
        self.reset = false;
        self.cycle_camera = false;
    }

    /// Let go of every held key (focus lost, so no keyup will arrive)
    pub fn release_held(&mut self) {
        self.movement = MoveInput::default();
    }
}

/// Advance the session by one frame of `dt` seconds on a `viewport`-sized screen
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, viewport: Vec2) {
    if state.phase == GamePhase::Ended {
        return;
    }

    let was_grounded = state.player.can_jump;
    let landed = update_player(
        &mut state.player,
        &state.level,
        input.movement,
        state.tuning.gravity,
        dt,
    );
    if let Some(item) = landed {
        if !was_grounded {
            let y = state.player.position.y;
            log::debug!("Landed on item {} at y={}", item, y);
            state.events.push(GameEvent::Landed { item, y });
        }
    }

    // Clamped every frame, not only when the wheel moves
    state.camera.apply_zoom(input.wheel, &state.tuning.camera);

    if input.reset {
        state.reset_view();
    }

    if input.cycle_camera {
        let mode = state.rig.cycle(state.tuning.camera.on_switch);
        log::debug!("Camera mode: {}", mode.as_str());
        state.events.push(GameEvent::CameraModeChanged(mode));
    }

    state.rig.update(
        &mut state.camera,
        &state.player,
        &state.level,
        &state.tuning.camera,
        dt,
        viewport,
    );

    if player_hits_death_ray(&state.player, &state.death_ray) {
        log::info!(
            "Death Ray hit at frame {} ({:.2}s), player at {:?}",
            state.frame,
            state.elapsed,
            state.player.position
        );
        state.phase = GamePhase::Ended;
        state.events.push(GameEvent::DeathRayHit);
        return;
    }

    state.death_ray.advance(state.elapsed, dt);

    state.elapsed += dt;
    state.frame += 1;
}
