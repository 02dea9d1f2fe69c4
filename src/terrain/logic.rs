//! Terrain generation and scrolling.

use super::types::{TerrainField, TerrainPair};
use crate::core::GameConfig;
use rand::Rng;

/// One step of the clamped random walk: a uniform integer in
/// `[max(0, prev - variation), min(cap, prev + variation)]`.
pub fn next_top_height<R: Rng>(prev: u32, variation: u32, cap: u32, rng: &mut R) -> u32 {
    let hi = prev.saturating_add(variation).min(cap);
    let lo = prev.saturating_sub(variation).min(hi);
    rng.gen_range(lo..=hi)
}

/// Build a fresh field of `total_slots` pairs starting at x = 0.
pub fn generate_initial<R: Rng>(
    config: &GameConfig,
    total_slots: usize,
    variation: u32,
    rng: &mut R,
) -> TerrainField {
    let cap = config.terrain_height_cap;
    let mut field = TerrainField::new(config.window_width);
    let mut top_height = rng.gen_range(0..=cap);

    for slot in 0..total_slots.max(1) {
        top_height = next_top_height(top_height, variation, cap, rng);
        let x = slot as f64 * config.slot_width;
        field.pairs.push_back(TerrainPair::new(x, top_height, config));
    }

    field
}

/// Scroll the field left by `speed` and keep it covering the visible width.
///
/// Pairs whose right edge has left the screen are popped (possibly several
/// per call at high speed); each counts one point. New pairs are appended
/// until the rightmost one starts at or beyond the visible width. Returns the
/// number of pairs popped.
pub fn advance<R: Rng>(
    field: &mut TerrainField,
    config: &GameConfig,
    speed: f64,
    variation: u32,
    rng: &mut R,
) -> u32 {
    for pair in &mut field.pairs {
        pair.shift_left(speed);
    }

    // The walk continues from the rightmost pair even if it is popped below.
    let Some(back) = field.pairs.back() else {
        return 0;
    };
    let (mut tail_x, mut tail_height) = (back.x(), back.top_height);

    let mut popped = 0;
    while field.pairs.front().is_some_and(|p| p.right() < 0.0) {
        field.pairs.pop_front();
        popped += 1;
    }

    while tail_x < field.visible_width || field.pairs.is_empty() {
        tail_x += config.slot_width;
        tail_height = next_top_height(
            tail_height,
            variation,
            config.terrain_height_cap,
            rng,
        );
        field
            .pairs
            .push_back(TerrainPair::new(tail_x, tail_height, config));
    }

    popped
}
