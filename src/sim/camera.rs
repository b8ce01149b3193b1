//! 2D camera and the five follow policies
//!
//! The camera maps world space to screen space as
//! `screen = rotate(world - target) * zoom + offset`. Each policy rewrites
//! `target` and `offset` once per frame; only `EvenOutOnLanding` carries
//! private state between frames, kept in [`EvenOutState`] inside the rig.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::Level;
use super::state::Player;
use crate::tuning::{CameraSwitch, CameraTuning};

/// World-to-screen transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera2D {
    /// World point that lands on `offset`
    pub target: Vec2,
    /// Screen point (pixels) the target is drawn at
    pub offset: Vec2,
    pub zoom: f32,
    /// Degrees, clockwise on screen
    pub rotation: f32,
}

impl Camera2D {
    pub fn new(target: Vec2, offset: Vec2) -> Self {
        Self {
            target,
            offset,
            zoom: 1.0,
            rotation: 0.0,
        }
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let rot = Vec2::from_angle(self.rotation.to_radians());
        rot.rotate(world - self.target) * self.zoom + self.offset
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let rot = Vec2::from_angle(-self.rotation.to_radians());
        rot.rotate((screen - self.offset) / self.zoom) + self.target
    }

    /// Set zoom, clamped to the configured range
    pub fn set_zoom(&mut self, zoom: f32, tuning: &CameraTuning) {
        self.zoom = zoom.clamp(tuning.zoom_min, tuning.zoom_max);
    }

    /// Add `wheel` notches of zoom and clamp to the configured range
    pub fn apply_zoom(&mut self, wheel: f32, tuning: &CameraTuning) {
        self.set_zoom(self.zoom + wheel * tuning.zoom_step, tuning);
    }
}

/// Available camera policies, in cycling order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraMode {
    Center,
    CenterInsideMap,
    #[default]
    CenterSmoothFollow,
    EvenOutOnLanding,
    PlayerBoundsPush,
}

impl CameraMode {
    pub const ALL: [CameraMode; 5] = [
        CameraMode::Center,
        CameraMode::CenterInsideMap,
        CameraMode::CenterSmoothFollow,
        CameraMode::EvenOutOnLanding,
        CameraMode::PlayerBoundsPush,
    ];

    pub fn index(self) -> usize {
        match self {
            CameraMode::Center => 0,
            CameraMode::CenterInsideMap => 1,
            CameraMode::CenterSmoothFollow => 2,
            CameraMode::EvenOutOnLanding => 3,
            CameraMode::PlayerBoundsPush => 4,
        }
    }

    /// Wraps around, so any index is valid
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Text shown in the HUD
    pub fn description(self) -> &'static str {
        match self {
            CameraMode::Center => "Follow player center",
            CameraMode::CenterInsideMap => "Follow player center, but clamp to map edges",
            CameraMode::CenterSmoothFollow => "Follow player center; smoothed",
            CameraMode::EvenOutOnLanding => {
                "Follow player center horizontally; update player center vertically after landing"
            }
            CameraMode::PlayerBoundsPush => {
                "Player push camera on getting too close to screen edge"
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CameraMode::Center => "center",
            CameraMode::CenterInsideMap => "center-inside-map",
            CameraMode::CenterSmoothFollow => "smooth-follow",
            CameraMode::EvenOutOnLanding => "even-out-on-landing",
            CameraMode::PlayerBoundsPush => "bounds-push",
        }
    }
}

/// Private state of the even-out-on-landing policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvenOutState {
    /// Currently sliding `target.y` toward `target_y`
    pub evening_out: bool,
    pub target_y: f32,
}

/// The active policy plus every policy's private state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraRig {
    mode: CameraMode,
    pub even_out: EvenOutState,
}

impl CameraRig {
    pub fn new(mode: CameraMode) -> Self {
        Self {
            mode,
            even_out: EvenOutState::default(),
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Activate `mode`; with `CameraSwitch::Reset` its private state starts over
    pub fn set_mode(&mut self, mode: CameraMode, on_switch: CameraSwitch) {
        if on_switch == CameraSwitch::Reset && mode == CameraMode::EvenOutOnLanding {
            self.even_out = EvenOutState::default();
        }
        self.mode = mode;
    }

    /// Move to the next policy and return it
    pub fn cycle(&mut self, on_switch: CameraSwitch) -> CameraMode {
        self.set_mode(self.mode.next(), on_switch);
        self.mode
    }

    /// Run the active policy for one frame
    pub fn update(
        &mut self,
        camera: &mut Camera2D,
        player: &Player,
        level: &Level,
        tuning: &CameraTuning,
        dt: f32,
        viewport: Vec2,
    ) {
        match self.mode {
            CameraMode::Center => update_center(camera, player, viewport),
            CameraMode::CenterInsideMap => update_center_inside_map(camera, player, level, viewport),
            CameraMode::CenterSmoothFollow => {
                update_smooth_follow(camera, player, tuning, dt, viewport)
            }
            CameraMode::EvenOutOnLanding => {
                update_even_out(camera, &mut self.even_out, player, tuning, dt, viewport)
            }
            CameraMode::PlayerBoundsPush => update_bounds_push(camera, player, tuning, viewport),
        }
    }
}

/// Lock the player to the middle of the screen
pub fn update_center(camera: &mut Camera2D, player: &Player, viewport: Vec2) {
    camera.offset = viewport / 2.0;
    camera.target = player.position;
}

/// Like [`update_center`], but shift the offset so nothing outside the
/// level's bounding box is shown along an axis where the level is larger than
/// the screen.
pub fn update_center_inside_map(
    camera: &mut Camera2D,
    player: &Player,
    level: &Level,
    viewport: Vec2,
) {
    camera.target = player.position;
    camera.offset = viewport / 2.0;

    let Some(bounds) = level.bounds() else {
        return;
    };

    let max = camera.world_to_screen(bounds.max());
    let min = camera.world_to_screen(bounds.min());
    let (w, h) = (viewport.x, viewport.y);

    if max.x < w {
        camera.offset.x = w - (max.x - w / 2.0);
    }
    if max.y < h {
        camera.offset.y = h - (max.y - h / 2.0);
    }
    if min.x > 0.0 {
        camera.offset.x = w / 2.0 - min.x;
    }
    if min.y > 0.0 {
        camera.offset.y = h / 2.0 - min.y;
    }
}

/// Ease the target toward the player, faster the further away it is.
/// Within `smooth_min_effect_length` the target holds still.
pub fn update_smooth_follow(
    camera: &mut Camera2D,
    player: &Player,
    tuning: &CameraTuning,
    dt: f32,
    viewport: Vec2,
) {
    camera.offset = viewport / 2.0;
    let diff = player.position - camera.target;
    let length = diff.length();

    if length > tuning.smooth_min_effect_length {
        let speed = (tuning.smooth_fraction_speed * length).max(tuning.smooth_min_speed);
        camera.target += diff * (speed * dt / length);
    }
}

/// Track x directly; re-center y only after the player lands somewhere new,
/// sliding at `even_out_speed` and stopping exactly on the landing height.
pub fn update_even_out(
    camera: &mut Camera2D,
    state: &mut EvenOutState,
    player: &Player,
    tuning: &CameraTuning,
    dt: f32,
    viewport: Vec2,
) {
    camera.offset = viewport / 2.0;
    camera.target.x = player.position.x;

    if state.evening_out {
        let step = tuning.even_out_speed * dt;
        if state.target_y > camera.target.y {
            camera.target.y += step;
            if camera.target.y > state.target_y {
                camera.target.y = state.target_y;
                state.evening_out = false;
            }
        } else {
            camera.target.y -= step;
            if camera.target.y < state.target_y {
                camera.target.y = state.target_y;
                state.evening_out = false;
            }
        }
    } else if player.can_jump
        && player.vertical_speed == 0.0
        && player.position.y != camera.target.y
    {
        state.evening_out = true;
        state.target_y = player.position.y;
    }
}

/// Keep the camera still while the player stays inside a centered dead zone;
/// when the player leaves it, push the camera by the overshoot.
pub fn update_bounds_push(
    camera: &mut Camera2D,
    player: &Player,
    tuning: &CameraTuning,
    viewport: Vec2,
) {
    let bbox = tuning.push_box;
    let near = (Vec2::ONE - bbox) * 0.5 * viewport;
    let far = (Vec2::ONE + bbox) * 0.5 * viewport;

    // Dead zone corners are measured with last frame's offset
    let world_min = camera.screen_to_world(near);
    let world_max = camera.screen_to_world(far);
    camera.offset = near;

    let p = player.position;
    if p.x < world_min.x {
        camera.target.x = p.x;
    }
    if p.y < world_min.y {
        camera.target.y = p.y;
    }
    if p.x > world_max.x {
        camera.target.x = world_min.x + (p.x - world_max.x);
    }
    if p.y > world_max.y {
        camera.target.y = world_min.y + (p.y - world_max.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::PlayerTuning;

    const VIEWPORT: Vec2 = Vec2::new(900.0, 500.0);
    const DT: f32 = 1.0 / 60.0;

    fn player_at(x: f32, y: f32) -> Player {
        let mut p = Player::new(&PlayerTuning::default());
        p.position = Vec2::new(x, y);
        p
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_world_screen_inverse() {
        let mut cam = Camera2D::new(Vec2::new(100.0, 50.0), Vec2::new(450.0, 250.0));
        cam.zoom = 2.0;
        cam.rotation = 30.0;
        let w = Vec2::new(-37.0, 412.5);
        assert!(approx(cam.screen_to_world(cam.world_to_screen(w)), w));
        cam.rotation = 0.0;
        assert!(approx(cam.world_to_screen(Vec2::new(110.0, 50.0)), Vec2::new(470.0, 250.0)));
    }

    #[test]
    fn test_zoom_clamped() {
        let tuning = CameraTuning::default();
        let mut cam = Camera2D::new(Vec2::ZERO, Vec2::ZERO);
        cam.apply_zoom(100.0, &tuning);
        assert_eq!(cam.zoom, 3.0);
        cam.apply_zoom(-1000.0, &tuning);
        assert_eq!(cam.zoom, 0.25);
        cam.apply_zoom(1.0, &tuning);
        assert!((cam.zoom - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_cycle_wraps_after_five() {
        let mut rig = CameraRig::new(CameraMode::CenterSmoothFollow);
        let seen: Vec<_> = (0..5).map(|_| rig.cycle(CameraSwitch::Preserve)).collect();
        assert_eq!(rig.mode(), CameraMode::CenterSmoothFollow);
        assert_eq!(seen[0], CameraMode::EvenOutOnLanding);
        assert_eq!(seen[2], CameraMode::Center);
    }

    #[test]
    fn test_mode_index_round_trip() {
        for mode in CameraMode::ALL {
            assert_eq!(CameraMode::from_index(mode.index()), mode);
        }
        assert_eq!(CameraMode::from_index(8), CameraMode::EvenOutOnLanding);
    }

    #[test]
    fn test_center() {
        let mut cam = Camera2D::new(Vec2::ZERO, Vec2::ZERO);
        update_center(&mut cam, &player_at(123.0, 45.0), VIEWPORT);
        assert_eq!(cam.target, Vec2::new(123.0, 45.0));
        assert_eq!(cam.offset, Vec2::new(450.0, 250.0));
    }

    #[test]
    fn test_center_inside_map_clamps_left_edge() {
        let level = Level::demo();
        let mut cam = Camera2D::new(Vec2::ZERO, Vec2::ZERO);
        // Near the left edge the level's left side would be on screen at x=350
        update_center_inside_map(&mut cam, &player_at(100.0, 400.0), &level, VIEWPORT);
        assert_eq!(cam.offset.x, 100.0);
        // Level x=0 now maps to screen x=0
        assert!(cam.world_to_screen(Vec2::ZERO).x.abs() < 1e-4);
        // The level bottom (600) would sit at screen y=450 and is pulled down too
        assert_eq!(cam.offset.y, 300.0);
    }

    #[test]
    fn test_center_inside_map_clamps_right_edge() {
        let level = Level::demo();
        let mut cam = Camera2D::new(Vec2::ZERO, Vec2::ZERO);
        update_center_inside_map(&mut cam, &player_at(900.0, 400.0), &level, VIEWPORT);
        // Level right edge (1000) lands on the screen's right edge
        assert!((cam.world_to_screen(Vec2::new(1000.0, 0.0)).x - 900.0).abs() < 1e-4);
    }

    #[test]
    fn test_center_inside_map_middle_untouched_horizontally() {
        let level = Level::demo();
        let mut cam = Camera2D::new(Vec2::ZERO, Vec2::ZERO);
        update_center_inside_map(&mut cam, &player_at(500.0, 300.0), &level, VIEWPORT);
        assert_eq!(cam.offset.x, 450.0);
        assert_eq!(cam.offset.y, 250.0);
    }

    #[test]
    fn test_center_inside_map_clamps_bottom_edge() {
        let level = Level::demo();
        let mut cam = Camera2D::new(Vec2::ZERO, Vec2::ZERO);
        update_center_inside_map(&mut cam, &player_at(500.0, 400.0), &level, VIEWPORT);
        assert_eq!(cam.offset.x, 450.0);
        assert_eq!(cam.offset.y, 300.0);
        // Level bottom (600) lands on the screen's bottom edge
        assert!((cam.world_to_screen(Vec2::new(0.0, 600.0)).y - 500.0).abs() < 1e-4);
    }

    #[test]
    fn test_center_inside_map_clamps_top_edge() {
        let level = Level::demo();
        let mut cam = Camera2D::new(Vec2::ZERO, Vec2::ZERO);
        // Level top (0) would be on screen at y=150
        update_center_inside_map(&mut cam, &player_at(500.0, 100.0), &level, VIEWPORT);
        assert_eq!(cam.offset.x, 450.0);
        assert_eq!(cam.offset.y, 100.0);
        assert!(cam.world_to_screen(Vec2::ZERO).y.abs() < 1e-4);
    }

    #[test]
    fn test_smooth_follow_dead_radius() {
        let tuning = CameraTuning::default();
        let mut cam = Camera2D::new(Vec2::new(400.0, 280.0), Vec2::ZERO);
        update_smooth_follow(&mut cam, &player_at(408.0, 286.0), &tuning, DT, VIEWPORT);
        assert_eq!(cam.target, Vec2::new(400.0, 280.0));
        assert_eq!(cam.offset, Vec2::new(450.0, 250.0));
    }

    #[test]
    fn test_smooth_follow_moves_toward_player() {
        let tuning = CameraTuning::default();
        let mut cam = Camera2D::new(Vec2::new(0.0, 0.0), Vec2::ZERO);
        let player = player_at(100.0, 0.0);
        update_smooth_follow(&mut cam, &player, &tuning, DT, VIEWPORT);
        // speed = max(0.8 * 100, 30) = 80 px/s
        assert!((cam.target.x - 80.0 * DT).abs() < 1e-4);
        assert_eq!(cam.target.y, 0.0);

        // Far away the minimum speed no longer matters; close in it does
        let mut cam = Camera2D::new(Vec2::new(0.0, 0.0), Vec2::ZERO);
        update_smooth_follow(&mut cam, &player_at(20.0, 0.0), &tuning, DT, VIEWPORT);
        assert!((cam.target.x - 30.0 * DT).abs() < 1e-4);
    }

    #[test]
    fn test_even_out_converges_without_overshoot() {
        let tuning = CameraTuning::default();
        let mut state = EvenOutState::default();
        let mut cam = Camera2D::new(Vec2::new(400.0, 300.0), Vec2::ZERO);
        let mut player = player_at(400.0, 400.0);
        player.can_jump = true;
        player.vertical_speed = 0.0;

        let step = tuning.even_out_speed * DT;
        let max_frames = (100.0 / step).ceil() as usize + 2;
        let mut frames = 0;
        loop {
            update_even_out(&mut cam, &mut state, &player, &tuning, DT, VIEWPORT);
            frames += 1;
            assert!(cam.target.y <= 400.0);
            if cam.target.y == 400.0 {
                break;
            }
            assert!(frames <= max_frames, "did not converge");
        }
        assert!(!state.evening_out);
        assert_eq!(state.target_y, 400.0);
    }

    #[test]
    fn test_even_out_upward() {
        let tuning = CameraTuning::default();
        let mut state = EvenOutState::default();
        let mut cam = Camera2D::new(Vec2::new(0.0, 400.0), Vec2::ZERO);
        let mut player = player_at(0.0, 200.0);
        player.can_jump = true;
        for _ in 0..100 {
            update_even_out(&mut cam, &mut state, &player, &tuning, DT, VIEWPORT);
            assert!(cam.target.y >= 200.0);
        }
        assert_eq!(cam.target.y, 200.0);
    }

    #[test]
    fn test_even_out_holds_y_while_airborne() {
        let tuning = CameraTuning::default();
        let mut state = EvenOutState::default();
        let mut cam = Camera2D::new(Vec2::new(0.0, 400.0), Vec2::ZERO);
        let mut player = player_at(50.0, 300.0);
        player.vertical_speed = -100.0;
        update_even_out(&mut cam, &mut state, &player, &tuning, DT, VIEWPORT);
        assert_eq!(cam.target, Vec2::new(50.0, 400.0));
        assert!(!state.evening_out);
    }

    #[test]
    fn test_bounds_push_dead_zone() {
        let tuning = CameraTuning::default();
        let near = Vec2::new(0.4 * 900.0, 0.4 * 500.0);
        let mut cam = Camera2D::new(Vec2::new(400.0, 300.0), near);

        // Dead zone spans world x 400..580, y 300..400
        update_bounds_push(&mut cam, &player_at(450.0, 350.0), &tuning, VIEWPORT);
        assert_eq!(cam.target, Vec2::new(400.0, 300.0));

        // 20 px past the right edge pushes the target 20 px
        update_bounds_push(&mut cam, &player_at(600.0, 350.0), &tuning, VIEWPORT);
        assert!(approx(cam.target, Vec2::new(420.0, 300.0)));

        // Past the top edge the target jumps to the player
        update_bounds_push(&mut cam, &player_at(450.0, 250.0), &tuning, VIEWPORT);
        assert!(approx(cam.target, Vec2::new(420.0, 250.0)));
        assert!(approx(cam.offset, near));
    }

    #[test]
    fn test_bounds_push_dead_zone_scales_with_zoom() {
        let tuning = CameraTuning::default();
        let near = Vec2::new(0.4 * 900.0, 0.4 * 500.0);
        let mut cam = Camera2D::new(Vec2::new(400.0, 300.0), near);
        cam.zoom = 2.0;

        // At zoom 2 the dead zone covers half the world: x 400..490, y 300..350
        update_bounds_push(&mut cam, &player_at(480.0, 340.0), &tuning, VIEWPORT);
        assert!(approx(cam.target, Vec2::new(400.0, 300.0)));

        // 20 world units past the right edge
        update_bounds_push(&mut cam, &player_at(510.0, 340.0), &tuning, VIEWPORT);
        assert!(approx(cam.target, Vec2::new(420.0, 300.0)));

        // Past the bottom edge (now y 350) by 15
        update_bounds_push(&mut cam, &player_at(450.0, 365.0), &tuning, VIEWPORT);
        assert!(approx(cam.target, Vec2::new(420.0, 315.0)));
        assert_eq!(cam.zoom, 2.0);
    }

    #[test]
    fn test_reset_on_switch_clears_even_out() {
        let mut rig = CameraRig::new(CameraMode::Center);
        rig.even_out = EvenOutState {
            evening_out: true,
            target_y: 123.0,
        };
        rig.set_mode(CameraMode::EvenOutOnLanding, CameraSwitch::Preserve);
        assert!(rig.even_out.evening_out);

        rig.set_mode(CameraMode::Center, CameraSwitch::Reset);
        assert!(rig.even_out.evening_out);
        rig.set_mode(CameraMode::EvenOutOnLanding, CameraSwitch::Reset);
        assert_eq!(rig.even_out, EvenOutState::default());
    }
}
