//! Scripted session without a window
//!
//! The native binary has no windowing backend, so it plays a short scripted
//! run at a fixed frame rate and logs what happens.

use glam::Vec2;

use crate::sim::{GameEvent, GameState, MoveInput, TickInput, tick};
use crate::ui;

/// Input held from `start` (seconds) until the next step begins
#[derive(Debug, Clone)]
pub struct ScriptStep {
    pub start: f32,
    pub movement: MoveInput,
    pub cycle_camera: bool,
    pub wheel: f32,
}

impl ScriptStep {
    pub fn hold(start: f32, movement: MoveInput) -> Self {
        Self {
            start,
            movement,
            cycle_camera: false,
            wheel: 0.0,
        }
    }

    pub fn cycle(start: f32) -> Self {
        Self {
            cycle_camera: true,
            ..Self::hold(start, MoveInput::default())
        }
    }
}

/// Walk right, hop onto a platform, walk back left, flip through every
/// camera policy, zoom out, then stand still until the Death Ray arrives.
pub fn demo_script() -> Vec<ScriptStep> {
    let right = MoveInput {
        right: true,
        ..Default::default()
    };
    let left = MoveInput {
        left: true,
        ..Default::default()
    };
    let jump_right = MoveInput {
        right: true,
        jump: true,
        ..Default::default()
    };
    let mut steps = vec![
        ScriptStep::hold(0.0, MoveInput::default()),
        ScriptStep::hold(1.0, right),
        ScriptStep::hold(1.5, jump_right),
        ScriptStep::hold(2.0, right),
        ScriptStep::hold(2.5, left),
        ScriptStep::hold(4.5, MoveInput::default()),
    ];
    steps.extend((0..5).map(|i| ScriptStep::cycle(5.0 + i as f32)));
    steps.push(ScriptStep {
        wheel: -3.0,
        ..ScriptStep::hold(10.5, MoveInput::default())
    });
    steps
}

/// What happened during a headless run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub frames: u64,
    pub elapsed: f32,
    pub landings: usize,
    pub camera_changes: usize,
    pub hit: bool,
}

/// Play `script` at `dt` per frame until the session ends or `max_seconds`
/// of game time pass. One-shot inputs fire on the first frame of their step.
pub fn run(
    state: &mut GameState,
    script: &[ScriptStep],
    dt: f32,
    max_seconds: f32,
    viewport: Vec2,
) -> Summary {
    let mut summary = Summary::default();
    let mut step_index = None;

    while !state.is_over() && state.elapsed < max_seconds {
        let current = script.iter().rposition(|s| s.start <= state.elapsed);
        let mut input = TickInput::default();
        if let Some(i) = current {
            let step = &script[i];
            input.movement = step.movement;
            if step_index != Some(i) {
                input.cycle_camera = step.cycle_camera;
                input.wheel = step.wheel;
                step_index = Some(i);
            }
        }

        tick(state, &input, dt, viewport);

        for event in state.drain_events() {
            match event {
                GameEvent::Landed { item, y } => {
                    summary.landings += 1;
                    log::info!("Landed on item {} at y={:.1}", item, y);
                }
                GameEvent::CameraModeChanged(mode) => {
                    summary.camera_changes += 1;
                    log::info!("Camera: {}", mode.description());
                }
                GameEvent::Reset => log::info!("Reset"),
                GameEvent::DeathRayHit => {
                    summary.hit = true;
                    log::info!("The Death Ray got you");
                }
            }
        }

        if state.frame % 120 == 0 {
            for line in ui::hud_lines(state).iter().skip(6) {
                log::debug!("{}", line.text);
            }
        }
    }

    summary.frames = state.frame;
    summary.elapsed = state.elapsed;
    summary
}
