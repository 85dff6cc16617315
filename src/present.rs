//! Presentation adapter contract
//!
//! The core hands the presenter a read-only snapshot each frame and never
//! queries rendering state back. Frontends (window, terminal, web)
//! implement [`Presenter`] outside this crate.

use crate::app::ScreenId;
use crate::assets::{BirdColor, Skin};
use crate::consts::TICKS_PER_SEC;
use crate::sim::{Avatar, GamePhase, GameState, PipePair};

/// Read-only view of one gameplay frame
pub struct Snapshot<'a> {
    pub avatar: &'a Avatar,
    pub pipes: &'a [PipePair],
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub paused: bool,
    pub phase: GamePhase,
    pub skin: Skin,
}

impl<'a> Snapshot<'a> {
    pub fn of(state: &'a GameState) -> Self {
        Self {
            avatar: &state.avatar,
            pipes: &state.pipes,
            score: state.score,
            high_score: state.high_score,
            level: state.level,
            paused: state.phase == GamePhase::Paused,
            phase: state.phase,
            skin: state.skin,
        }
    }
}

/// One frame of a menu screen
pub struct MenuView {
    pub screen: ScreenId,
    pub character: BirdColor,
}

/// Renders frames from read-only state
pub trait Presenter {
    fn frame(&mut self, snapshot: &Snapshot<'_>);
    fn menu_frame(&mut self, view: &MenuView);
}

/// Discards every frame (tests, benchmarks)
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn frame(&mut self, _snapshot: &Snapshot<'_>) {}
    fn menu_frame(&mut self, _view: &MenuView) {}
}

/// Logs one line per second of play and each menu change (headless runs)
#[derive(Default)]
pub struct LogPresenter {
    ticks: u64,
    last_screen: Option<ScreenId>,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for LogPresenter {
    fn frame(&mut self, snapshot: &Snapshot<'_>) {
        self.ticks += 1;
        if self.ticks % TICKS_PER_SEC as u64 == 0 {
            log::info!(
                "y={:.1} score={} best={} pipes={} phase={:?} skin={:?}",
                snapshot.avatar.pos.y,
                snapshot.score,
                snapshot.high_score,
                snapshot.pipes.len(),
                snapshot.phase,
                snapshot.skin,
            );
        }
    }

    fn menu_frame(&mut self, view: &MenuView) {
        if self.last_screen != Some(view.screen) {
            log::info!("screen: {:?} ({})", view.screen, view.character.name());
            self.last_screen = Some(view.screen);
        }
    }
}
