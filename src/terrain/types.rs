//! Terrain data structures.

use crate::core::GameConfig;
use crate::geometry::Aabb;
use std::collections::VecDeque;

/// One vertical slot of terrain: a ceiling obstacle and a floor obstacle with
/// the navigable gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainPair {
    /// Height of the ceiling obstacle, an integer step of the random walk.
    pub top_height: u32,
    pub top: Aabb,
    pub bottom: Aabb,
}

impl TerrainPair {
    /// Build the pair at `x`. The top obstacle hangs from y = 0; the bottom one
    /// starts `terrain_gap` below it and is one window tall, so it always
    /// reaches past the bottom edge.
    pub fn new(x: f64, top_height: u32, config: &GameConfig) -> Self {
        let top_h = top_height as f64;
        Self {
            top_height,
            top: Aabb::new(x, 0.0, config.slot_width, top_h),
            bottom: Aabb::new(
                x,
                top_h + config.terrain_gap as f64,
                config.slot_width,
                config.window_height,
            ),
        }
    }

    pub fn x(&self) -> f64 {
        self.top.x
    }

    pub fn right(&self) -> f64 {
        self.top.right()
    }

    /// Vertical middle of the navigable gap.
    pub fn gap_center(&self) -> f64 {
        (self.top.bottom() + self.bottom.y) / 2.0
    }

    pub fn shift_left(&mut self, amount: f64) {
        self.top.translate_x(-amount);
        self.bottom.translate_x(-amount);
    }
}

/// Ordered left-to-right sequence of terrain pairs covering the visible width.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainField {
    pub(crate) pairs: VecDeque<TerrainPair>,
    /// Width of the visible window; the field is refilled up to this edge.
    pub visible_width: f64,
}

impl TerrainField {
    pub fn new(visible_width: f64) -> Self {
        Self {
            pairs: VecDeque::new(),
            visible_width,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = &TerrainPair> {
        self.pairs.iter()
    }

    pub fn front(&self) -> Option<&TerrainPair> {
        self.pairs.front()
    }

    pub fn back(&self) -> Option<&TerrainPair> {
        self.pairs.back()
    }

    /// Every obstacle rectangle, top then bottom for each pair.
    pub fn rects(&self) -> impl Iterator<Item = &Aabb> {
        self.pairs.iter().flat_map(|p| [&p.top, &p.bottom])
    }

    /// The pair whose horizontal span contains `x`.
    pub fn pair_at(&self, x: f64) -> Option<&TerrainPair> {
        self.pairs.iter().find(|p| p.x() <= x && x < p.right())
    }

    /// Middle of the gap under `x`, used to place the player on reset.
    pub fn channel_center_at(&self, x: f64) -> Option<f64> {
        self.pair_at(x).map(TerrainPair::gap_center)
    }
}
