//! Player movement and landing
//!
//! Deliberately simple: horizontal motion is unconstrained and the only
//! collision is falling onto the top edge of a blocking item. A fast enough
//! fall can skip past a thin platform in one frame.

use super::level::{EnvItem, Level};
use super::state::Player;

/// Held directional/jump keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Whether `player` reaches the top edge of `item` during this frame's fall.
///
/// The horizontal test widens the item by the player's width on the left
/// only, so the player's left edge must lie in `[item.x - width, item.right]`.
pub fn lands_on(player: &Player, item: &EnvItem, dt: f32) -> bool {
    let p = player.position;
    item.blocking
        && item.rect.x - player.width <= p.x
        && item.rect.right() >= p.x
        && item.rect.y >= p.y
        && item.rect.y <= p.y + player.vertical_speed * dt
}

/// Advance the player one frame.
///
/// Returns the index of the item the player is standing on, if any.
pub fn update_player(
    player: &mut Player,
    level: &Level,
    input: MoveInput,
    gravity: f32,
    dt: f32,
) -> Option<usize> {
    if input.left {
        player.position.x -= player.movement_speed * dt;
    }
    if input.right {
        player.position.x += player.movement_speed * dt;
    }

    if input.jump && player.can_jump {
        player.vertical_speed = -player.jump_speed;
        player.can_jump = false;
    }

    let landed = level
        .items()
        .iter()
        .position(|item| lands_on(player, item, dt));

    match landed {
        Some(index) => {
            player.vertical_speed = 0.0;
            player.position.y = level.items()[index].rect.y;
            player.can_jump = true;
        }
        None => {
            player.position.y += player.vertical_speed * dt;
            player.vertical_speed += gravity * dt;
            player.can_jump = false;
        }
    }

    landed
}
