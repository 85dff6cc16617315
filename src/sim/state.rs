//! Game state and core simulation types
//!
//! Everything a round needs to advance deterministically lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::{Skin, SpriteMetrics};
use crate::consts::*;

use super::stream;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal gameplay: physics, scrolling and scoring all advance
    Active,
    /// Render-only frames until the pause toggle fires again
    Paused,
    /// Level banner hold after the level-up score is reached
    LevelTransition,
    /// Final-frame hold after a collision; terminal
    RoundOver,
}

/// The player entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Position; x is fixed for the whole round, y is mutated every tick
    pub pos: Vec2,
    /// Vertical velocity (px/tick, positive is down)
    pub vel_y: f32,
    /// Cyclic sprite frame index
    pub frame: usize,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(AVATAR_X, AVATAR_START_Y),
            vel_y: AVATAR_START_VEL,
            frame: 0,
        }
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

/// One obstacle: two aligned wall segments sharing an x coordinate, with a
/// contiguous opening between `gap_top` and `gap_bottom`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    /// Left edge; scrolls left every unpaused tick
    pub x: f32,
    /// Lower edge of the top half
    pub gap_top: f32,
    /// Upper edge of the bottom half (gap_top + GAP_HEIGHT)
    pub gap_bottom: f32,
    /// Scoring flag; set once when the avatar passes this pair
    pub passed: bool,
}

/// Events a tick can emit for the audio/persistence collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flapped,
    Scored { score: u32 },
    LevelUp { level: u32 },
    Hit,
    /// The final score beat the stored high score; a write should follow
    NewHighScore { score: u32 },
    /// The round-over hold elapsed; control returns to the menu
    RoundEnded { score: u32 },
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Round seed; every gap draw derives from it
    pub seed: u64,
    pub score: u32,
    /// Starts at 0; increments exactly once per round
    pub level: u32,
    /// Loaded once at round start, compared once at round end
    pub high_score: u32,
    /// Monotonic tick counter; frozen while paused
    pub frame_counter: u64,
    pub phase: GamePhase,
    /// Tick at which the current LevelTransition/RoundOver hold ends
    pub deadline_tick: u64,
    /// Active art skin; swapped at the level transition
    pub skin: Skin,
    pub avatar: Avatar,
    /// Live obstacle pairs; insertion order is screen order
    pub pipes: Vec<PipePair>,
    /// Gap draws consumed so far; indexes the deterministic RNG stream
    pub spawn_count: u64,
    /// Sprite dimensions the simulation reads
    pub metrics: SpriteMetrics,
    /// Events emitted by the latest tick; drained by the app layer
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a round at tick zero with the obstacle stream seeded
    pub fn new(seed: u64, high_score: u32, metrics: SpriteMetrics) -> Self {
        let mut state = Self {
            seed,
            score: 0,
            level: 0,
            high_score,
            frame_counter: 0,
            phase: GamePhase::Active,
            deadline_tick: 0,
            skin: Skin::Day,
            avatar: Avatar::new(),
            pipes: Vec::new(),
            spawn_count: 0,
            metrics,
            events: Vec::new(),
        };
        stream::seed_initial_pairs(&mut state);
        state
    }

    /// True once the round-over hold has elapsed
    pub fn round_finished(&self) -> bool {
        self.phase == GamePhase::RoundOver && self.frame_counter >= self.deadline_tick
    }
}
