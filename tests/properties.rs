//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use death_ray::sim::{
    Camera2D, CameraMode, EnvItem, Level, MoveInput, Player, Rect, rects_touch, update_player,
};
use death_ray::tuning::{CameraTuning, PlayerTuning};

fn player_at(x: f32, y: f32, vertical_speed: f32) -> Player {
    let mut player = Player::new(&PlayerTuning::default());
    player.position = Vec2::new(x, y);
    player.vertical_speed = vertical_speed;
    player
}

proptest! {
    #[test]
    fn zoom_stays_clamped(wheels in prop::collection::vec(-40.0f32..40.0, 1..50)) {
        let tuning = CameraTuning::default();
        let mut camera = Camera2D::new(Vec2::ZERO, Vec2::new(450.0, 250.0));
        for wheel in wheels {
            camera.apply_zoom(wheel, &tuning);
            prop_assert!(camera.zoom >= tuning.zoom_min);
            prop_assert!(camera.zoom <= tuning.zoom_max);
        }
    }

    #[test]
    fn free_fall_gains_gravity(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        vs in -400.0f32..400.0,
        dt in 0.001f32..0.1,
    ) {
        let level = Level::new(Vec::new());
        let mut player = player_at(x, y, vs);
        let standing = update_player(&mut player, &level, MoveInput::default(), 600.0, dt);

        prop_assert!(standing.is_none());
        prop_assert!(!player.can_jump);
        prop_assert!((player.position.y - (y + vs * dt)).abs() < 1e-3);
        prop_assert!((player.vertical_speed - (vs + 600.0 * dt)).abs() < 1e-3);
    }

    #[test]
    fn falling_onto_platform_snaps_to_top(
        x in 270.0f32..700.0,
        gap in 0.0f32..5.0,
        vs in 360.0f32..1000.0,
    ) {
        let level = Level::new(vec![EnvItem::new(
            Rect::new(300.0, 200.0, 400.0, 10.0),
            true,
            [0.5; 4],
        )]);
        let mut player = player_at(x, 200.0 - gap, vs);
        let standing = update_player(&mut player, &level, MoveInput::default(), 600.0, 1.0 / 60.0);

        prop_assert_eq!(standing, Some(0));
        prop_assert_eq!(player.position.y, 200.0);
        prop_assert_eq!(player.vertical_speed, 0.0);
        prop_assert!(player.can_jump);
    }

    #[test]
    fn separated_rects_never_touch(
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
        w in 1.0f32..200.0,
        h in 1.0f32..200.0,
        gap in 0.5f32..100.0,
    ) {
        let a = Rect::new(x, y, w, h);
        let right = Rect::new(x + w + gap, y, w, h);
        let below = Rect::new(x, y + h + gap, w, h);

        prop_assert!(!rects_touch(&a, &right));
        prop_assert!(!rects_touch(&right, &a));
        prop_assert!(!rects_touch(&a, &below));
        prop_assert!(rects_touch(&a, &a));
    }

    #[test]
    fn camera_cycle_wraps_every_five(start in 0usize..5, presses in 0usize..40) {
        let mut mode = CameraMode::from_index(start);
        for _ in 0..presses {
            mode = mode.next();
        }
        prop_assert_eq!(mode, CameraMode::from_index(start + presses));
        prop_assert_eq!(mode.index(), (start + presses) % 5);
    }

    #[test]
    fn screen_to_world_inverts_world_to_screen(
        tx in -1000.0f32..1000.0,
        ty in -1000.0f32..1000.0,
        zoom in 0.25f32..3.0,
        px in -1000.0f32..1000.0,
        py in -1000.0f32..1000.0,
    ) {
        let mut camera = Camera2D::new(Vec2::new(tx, ty), Vec2::new(450.0, 250.0));
        camera.zoom = zoom;
        let world = Vec2::new(px, py);
        let back = camera.screen_to_world(camera.world_to_screen(world));
        prop_assert!((back - world).length() < 0.05);
    }
}
