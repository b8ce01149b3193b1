//! Player vs Death Ray overlap
//!
//! Both boxes hang up from their `position` anchor. Touching edges count as
//! a hit.

use super::level::Rect;
use super::state::{DeathRay, Player};

/// Inclusive overlap test between two rects
#[inline]
pub fn rects_touch(a: &Rect, b: &Rect) -> bool {
    a.right() >= b.x && a.x <= b.right() && a.y <= b.bottom() && a.bottom() >= b.y
}

/// Check whether the player is touching the Death Ray
pub fn player_hits_death_ray(player: &Player, ray: &DeathRay) -> bool {
    rects_touch(&player.rect(), &ray.rect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{DeathRayTuning, PlayerTuning};
    use glam::Vec2;

    fn setup(player_pos: Vec2, ray_pos: Vec2) -> (Player, DeathRay) {
        let mut player = Player::new(&PlayerTuning::default());
        player.position = player_pos;
        let mut ray = DeathRay::new(&DeathRayTuning::default());
        ray.position = ray_pos;
        (player, ray)
    }

    #[test]
    fn test_overlap_hits() {
        // Ray spans x 500..575, y 250..400; player box 490..520, 370..400
        let (player, ray) = setup(Vec2::new(490.0, 400.0), Vec2::new(500.0, 400.0));
        assert!(player_hits_death_ray(&player, &ray));
    }

    #[test]
    fn test_touching_edge_hits() {
        // Player right edge at exactly 500
        let (player, ray) = setup(Vec2::new(470.0, 400.0), Vec2::new(500.0, 400.0));
        assert!(player_hits_death_ray(&player, &ray));
    }

    #[test]
    fn test_separated_horizontally_misses() {
        let (player, ray) = setup(Vec2::new(400.0, 400.0), Vec2::new(500.0, 400.0));
        assert!(!player_hits_death_ray(&player, &ray));
        let (player, ray) = setup(Vec2::new(600.0, 400.0), Vec2::new(500.0, 400.0));
        assert!(!player_hits_death_ray(&player, &ray));
    }

    #[test]
    fn test_separated_vertically_misses() {
        // Player standing on the platform above the ray (ray top at y=250)
        let (player, ray) = setup(Vec2::new(520.0, 200.0), Vec2::new(500.0, 400.0));
        assert!(!player_hits_death_ray(&player, &ray));
        // Player below the ray's feet line
        let (player, ray) = setup(Vec2::new(520.0, 450.0), Vec2::new(500.0, 400.0));
        assert!(!player_hits_death_ray(&player, &ray));
    }

    #[test]
    fn test_rects_touch_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(rects_touch(&a, &b) && rects_touch(&b, &a));
        assert!(!rects_touch(&a, &c) && !rects_touch(&c, &a));
    }
}
