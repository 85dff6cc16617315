//! Skyflap - a side-scrolling flap-to-fly arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle stream, collisions, game state)
//! - `assets`: Read-only asset bundle and sprite metrics
//! - `present`: Presentation adapter contract (read-only frame snapshots)
//! - `audio`: Fire-and-forget audio cue contract
//! - `highscore`: High-score persistence adapter
//! - `settings`: Player preferences
//! - `app`: Screen flow, input commands, frame clock

pub mod app;
pub mod assets;
pub mod audio;
pub mod highscore;
pub mod present;
pub mod settings;
pub mod sim;

pub use assets::{AssetBundle, Skin};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate; one tick per rendered frame, no sub-stepping
    pub const TICKS_PER_SEC: u32 = 32;

    /// Screen dimensions (logical pixels)
    pub const SCREEN_W: f32 = 289.0;
    pub const SCREEN_H: f32 = 511.0;
    /// The base strip starts here; the playfield ends above it
    pub const GROUND_LINE: f32 = SCREEN_H * 0.8;

    /// Avatar spawn position and initial upward drift
    pub const AVATAR_X: f32 = SCREEN_W / 5.0;
    pub const AVATAR_START_Y: f32 = 144.0;
    pub const AVATAR_START_VEL: f32 = -9.0;

    /// Gravity (px/tick per tick) and the downward velocity cap (px/tick)
    pub const GRAVITY: f32 = 1.0;
    pub const MAX_FALL_SPEED: f32 = 10.0;
    /// Flap: one-frame upward velocity override
    pub const FLAP_IMPULSE: f32 = -8.0;

    /// Horizontal scroll speed of the obstacle stream (px/tick)
    pub const SCROLL_SPEED: f32 = 4.0;
    /// Lead pair x inside (0, SPAWN_WINDOW) triggers the next spawn
    pub const SPAWN_WINDOW: f32 = 5.0;
    /// Fresh pairs enter here, just past the right edge
    pub const SPAWN_X: f32 = SCREEN_W + 10.0;
    /// Round start seeds two pairs at SEED_X and SEED_X + SEED_SPACING
    pub const SEED_X: f32 = SCREEN_W + 200.0;
    pub const SEED_SPACING: f32 = SCREEN_W / 2.0;

    /// Vertical opening between the two halves of a pair
    pub const GAP_HEIGHT: f32 = SCREEN_H / 3.0;

    /// Width of the horizontal window that scores a pair
    pub const SCORE_WINDOW: f32 = 4.0;
    /// Ground collision fires this many px above the ground line
    pub const GROUND_MARGIN: f32 = 25.0;

    /// Score that triggers the one-shot level transition
    pub const LEVEL_UP_SCORE: u32 = 12;
    /// Level banner hold
    pub const BANNER_TICKS: u64 = 2 * TICKS_PER_SEC as u64;
    /// Final-frame hold after a collision
    pub const ROUND_OVER_TICKS: u64 = 2 * TICKS_PER_SEC as u64;

    /// The avatar's sprite frame advances every this many ticks
    pub const ANIM_PERIOD_TICKS: u64 = 10;
}
