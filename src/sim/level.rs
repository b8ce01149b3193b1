//! Static level geometry
//!
//! A level is an ordered list of axis-aligned rectangles. Order matters: the
//! landing scan in `physics` stops at the first blocking item it hits.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::colors;

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Smallest rect containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let min = self.min().min(other.min());
        let max = self.max().max(other.max());
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

/// One piece of scenery
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvItem {
    pub rect: Rect,
    /// Whether the player can land on it
    pub blocking: bool,
    pub color: [f32; 4],
}

impl EnvItem {
    pub const fn new(rect: Rect, blocking: bool, color: [f32; 4]) -> Self {
        Self {
            rect,
            blocking,
            color,
        }
    }
}

/// Immutable set of scenery items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    items: Vec<EnvItem>,
}

impl Level {
    pub fn new(items: Vec<EnvItem>) -> Self {
        Self { items }
    }

    /// The built-in demo level: backdrop, ground and three floating platforms
    pub fn demo() -> Self {
        Self::new(vec![
            EnvItem::new(Rect::new(0.0, 0.0, 1000.0, 400.0), false, colors::LIGHTGRAY),
            EnvItem::new(Rect::new(0.0, 400.0, 1000.0, 200.0), true, colors::GRAY),
            EnvItem::new(Rect::new(300.0, 200.0, 400.0, 10.0), true, colors::GRAY),
            EnvItem::new(Rect::new(250.0, 300.0, 100.0, 10.0), true, colors::GRAY),
            EnvItem::new(Rect::new(650.0, 300.0, 100.0, 10.0), true, colors::GRAY),
        ])
    }

    pub fn items(&self) -> &[EnvItem] {
        &self.items
    }

    /// Bounding box of every item, `None` for an empty level
    pub fn bounds(&self) -> Option<Rect> {
        let mut iter = self.items.iter();
        let first = iter.next()?.rect;
        Some(iter.fold(first, |acc, item| acc.union(&item.rect)))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::demo()
    }
}
