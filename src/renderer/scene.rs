//! Frame composition
//!
//! Turns the game state into one list of screen-space triangles, painted in
//! order: level items, player, Death Ray, anchor markers.

use super::shapes;
use super::vertex::Vertex;
use crate::colors;
use crate::settings::Settings;
use crate::sim::GameState;

/// Radius (world units) of the gold anchor markers
const MARKER_RADIUS: f32 = 3.0;
const MARKER_SEGMENTS: u32 = 16;

/// Background clear color
pub const BACKGROUND: [f32; 4] = colors::LIGHTGRAY;

/// Build every vertex for the current frame
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let camera = &state.camera;
    let mut vertices = Vec::with_capacity((state.level.items().len() + 2) * 6 + 2 * 48);

    for item in state.level.items() {
        vertices.extend(shapes::rect(&item.rect, camera, item.color));
    }

    vertices.extend(shapes::rect(&state.player.rect(), camera, colors::DARKBLUE));
    vertices.extend(shapes::rect(&state.death_ray.rect(), camera, colors::MAROON));

    if settings.show_hitboxes {
        for anchor in [state.player.position, state.death_ray.position] {
            vertices.extend(shapes::circle(
                anchor,
                MARKER_RADIUS,
                camera,
                colors::GOLD,
                MARKER_SEGMENTS,
            ));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CameraMode;
    use glam::Vec2;

    #[test]
    fn test_scene_layers() {
        let state = GameState::new(Vec2::new(900.0, 500.0), CameraMode::Center);
        let settings = Settings::default();
        let verts = build_scene(&state, &settings);
        // 5 items + player + ray as quads, plus two 16-segment markers
        assert_eq!(verts.len(), 7 * 6 + 2 * 16 * 3);
        assert_eq!(verts[0].color, colors::LIGHTGRAY);
        assert_eq!(verts[5 * 6].color, colors::DARKBLUE);
        assert_eq!(verts[6 * 6].color, colors::MAROON);
        assert_eq!(verts.last().map(|v| v.color), Some(colors::GOLD));
    }

    #[test]
    fn test_player_drawn_at_screen_center() {
        let state = GameState::new(Vec2::new(900.0, 500.0), CameraMode::Center);
        let settings = Settings {
            show_hitboxes: false,
            ..Default::default()
        };
        let verts = build_scene(&state, &settings);
        assert_eq!(verts.len(), 7 * 6);
        // Player's bottom-left corner is its anchor, which the camera targets
        assert_eq!(verts[5 * 6 + 5].position, [450.0, 250.0]);
    }
}
