//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod state;
pub mod stream;
pub mod tick;

pub use collision::{Verdict, evaluate};
pub use state::{Avatar, GameEvent, GamePhase, GameState, PipePair};
pub use tick::{TickInput, tick};
