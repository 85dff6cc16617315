//! Fixed timestep simulation tick
//!
//! The single mutation entry point for a round: consume this frame's
//! commands, advance every component exactly once, apply transitions.
//! Exactly one simulation step per rendered frame; the frame rate is the
//! simulation rate.

use crate::assets::Skin;
use crate::consts::*;

use super::collision::{self, Verdict};
use super::state::{GameEvent, GamePhase, GameState};
use super::stream;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap impulse request; accepted only while the avatar is below the
    /// ceiling
    pub flap: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the round by one tick.
///
/// Paused frames are render-only: the counter freezes and nothing moves.
/// The timed holds (level banner, round-over) advance only the counter and
/// resolve against the deadline stored on the state, so tests never need a
/// wall clock.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    match state.phase {
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Active;
            }
            return;
        }
        GamePhase::Active if input.pause => {
            state.phase = GamePhase::Paused;
            return;
        }
        _ => {}
    }

    state.frame_counter += 1;

    match state.phase {
        GamePhase::Active => active_step(state, input),
        GamePhase::LevelTransition => {
            // Banner hold: nothing advances but the clock
            if state.frame_counter >= state.deadline_tick {
                state.phase = GamePhase::Active;
            }
        }
        GamePhase::RoundOver => {
            // Final-frame hold, then the one-shot round-end bookkeeping
            if state.frame_counter == state.deadline_tick {
                finish_round(state);
            }
        }
        GamePhase::Paused => {}
    }
}

/// One frame of active gameplay, in the fixed order: input, avatar
/// physics, obstacle stream, detector, transitions.
fn active_step(state: &mut GameState, input: &TickInput) {
    let flapped = input.flap && state.avatar.pos.y > 0.0;
    if flapped {
        state.avatar.flap();
        state.events.push(GameEvent::Flapped);
    }

    state.avatar.advance(flapped, &state.metrics);
    state.avatar.animate(state.frame_counter);
    stream::advance(state);

    match collision::evaluate(&state.avatar, &state.pipes, &state.metrics) {
        Verdict::Collided => {
            state.events.push(GameEvent::Hit);
            state.phase = GamePhase::RoundOver;
            state.deadline_tick = state.frame_counter + ROUND_OVER_TICKS;
            log::debug!(
                "collision at tick {} (score {})",
                state.frame_counter,
                state.score
            );
        }
        Verdict::Scored(index) => {
            state.pipes[index].passed = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
            if state.score == LEVEL_UP_SCORE {
                state.level += 1;
                state.skin = Skin::Night;
                state.phase = GamePhase::LevelTransition;
                state.deadline_tick = state.frame_counter + BANNER_TICKS;
                state.events.push(GameEvent::LevelUp { level: state.level });
                log::info!("level {} reached at tick {}", state.level, state.frame_counter);
            }
        }
        Verdict::None => {}
    }
}

/// Round-end bookkeeping, exactly once per round: high-score compare and
/// the terminal event.
fn finish_round(state: &mut GameState) {
    if state.score > state.high_score {
        state.high_score = state.score;
        state.events.push(GameEvent::NewHighScore { score: state.score });
        log::info!("new high score: {}", state.score);
    }
    state.events.push(GameEvent::RoundEnded { score: state.score });
}
