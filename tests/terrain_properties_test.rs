//! Integration test: terrain generation properties
//!
//! Runs the generator and the scroller for many ticks and checks the
//! invariants the rest of the game relies on: bounded heights, bounded steps
//! between neighbours, a field that always covers the screen, and a score that
//! matches the pairs that scrolled away.

use copter::core::GameConfig;
use copter::terrain::{advance, generate_initial, next_top_height, TerrainField};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn assert_field_invariants(field: &TerrainField, config: &GameConfig, variation: u32) {
    let pairs: Vec<_> = field.pairs().collect();
    for pair in &pairs {
        assert!(pair.top_height <= config.terrain_height_cap);
        assert_eq!(pair.bottom.y, pair.top_height as f64 + config.terrain_gap as f64);
    }
    for window in pairs.windows(2) {
        let step = window[0].top_height.abs_diff(window[1].top_height);
        assert!(step <= variation, "step {} exceeds {}", step, variation);
        assert!((window[1].x() - window[0].x() - config.slot_width).abs() < 1e-9);
    }
}

#[test]
fn test_random_walk_stays_in_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut height = 150;
    for _ in 0..10_000 {
        let next = next_top_height(height, 40, 300, &mut rng);
        assert!(next <= 300);
        assert!(next.abs_diff(height) <= 40);
        height = next;
    }
}

#[test]
fn test_initial_field_invariants() {
    let config = GameConfig::default();
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let field = generate_initial(&config, config.total_slots(), 10, &mut rng);
        assert_eq!(field.len(), config.total_slots());
        assert_eq!(field.front().map(|p| p.x()), Some(0.0));
        assert_field_invariants(&field, &config, 10);
    }
}

#[test]
fn test_scrolling_keeps_invariants_and_counts_score() {
    let config = GameConfig::default();
    let variation = 25;
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut field = generate_initial(&config, config.total_slots(), variation, &mut rng);

    let mut generated = field.len() as u32;
    let mut score = 0u32;

    for tick in 0..5_000 {
        // Vary the speed, including several slots per tick.
        let speed = 1.0 + (tick % 37) as f64;
        let before = field.len() as u32;
        let popped = advance(&mut field, &config, speed, variation, &mut rng);
        let after = field.len() as u32;

        score += popped;
        generated += after + popped - before;

        let back = field.back().expect("field never empties");
        assert!(back.x() >= field.visible_width);
        assert!(field.front().is_some_and(|p| p.right() >= 0.0));
        assert_field_invariants(&field, &config, variation);
    }

    assert_eq!(score, generated - field.len() as u32);
    assert!(score > 0);
}

#[test]
fn test_flat_terrain_with_zero_variation() {
    let config = GameConfig {
        terrain_height_cap: 0,
        ..GameConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut field = generate_initial(&config, config.total_slots(), 0, &mut rng);
    for _ in 0..500 {
        advance(&mut field, &config, 3.0, 0, &mut rng);
    }
    assert!(field.pairs().all(|p| p.top_height == 0 && p.top.is_empty()));
}
