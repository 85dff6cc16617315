//! Obstacle stream: scrolling, spawning, recycling, random gap placement
//!
//! The stream holds a short FIFO of pipe pairs (screen order = insertion
//! order). At most one spawn and one recycle happen per tick, and the
//! stream can never go empty.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::assets::SpriteMetrics;
use crate::consts::*;

use super::state::{GameState, PipePair};

/// Mixer for per-draw seeds (Knuth multiplicative hash)
const DRAW_SEED_MUL: u64 = 2654435761;

/// Seed the two round-start pairs, spaced half a screen apart beyond the
/// right edge
pub fn seed_initial_pairs(state: &mut GameState) {
    debug_assert!(state.pipes.is_empty());
    for i in 0..2u64 {
        let mut pair = random_pair(state.seed, state.spawn_count, &state.metrics);
        pair.x = SEED_X + i as f32 * SEED_SPACING;
        state.spawn_count += 1;
        state.pipes.push(pair);
    }
}

/// Advance the stream one tick: scroll every pair, then at most one spawn
/// and one recycle
pub fn advance(state: &mut GameState) {
    for pipe in &mut state.pipes {
        pipe.x -= SCROLL_SPEED;
    }
    spawn_if_needed(state);
    recycle_if_offscreen(state);
}

/// Append a fresh pair once the lead pair enters the epsilon window just
/// past the left spawn point
fn spawn_if_needed(state: &mut GameState) {
    let Some(lead) = state.pipes.first() else {
        return;
    };
    if lead.x > 0.0 && lead.x < SPAWN_WINDOW {
        let pair = random_pair(state.seed, state.spawn_count, &state.metrics);
        state.spawn_count += 1;
        state.pipes.push(pair);
    }
}

/// Drop the lead pair once its right edge has fully cleared the left screen
/// edge. The trailing-pair guard keeps the stream from ever going empty.
fn recycle_if_offscreen(state: &mut GameState) {
    if state.pipes.len() > 1 && state.pipes[0].x < -state.metrics.pipe.w {
        state.pipes.remove(0);
    }
}

/// Draw a pair with uniform random gap placement.
///
/// The gap bottom lands in [GAP_HEIGHT, GAP_HEIGHT + span), where the span
/// leaves room for the base strip: the opening never overlaps the ground.
/// Each draw seeds a fresh generator from the round seed and the draw
/// index, so the gap sequence is a pure function of the round seed.
pub fn random_pair(seed: u64, draw: u64, metrics: &SpriteMetrics) -> PipePair {
    let draw_seed = draw.wrapping_mul(DRAW_SEED_MUL).wrapping_add(seed);
    let mut rng = Pcg32::seed_from_u64(draw_seed);
    let span = SCREEN_H - metrics.base.h - 1.2 * GAP_HEIGHT;
    let gap_bottom = GAP_HEIGHT + rng.random_range(0.0..span);
    PipePair {
        x: SPAWN_X,
        gap_top: gap_bottom - GAP_HEIGHT,
        gap_bottom,
        passed: false,
    }
}
