//! Screen flow, input commands, and the frame clock
//!
//! One thread owns input polling, simulation advance and rendering,
//! executed strictly in that order each tick. Blocking out the remainder
//! of a tick on the frame clock is the only place the thread waits. Quit
//! is observed at the top of a frame's input step, never mid-simulation.

use std::time::{Duration, Instant};

use crate::assets::AssetBundle;
use crate::audio::{AudioCue, AudioSink};
use crate::consts::*;
use crate::highscore::HighScoreStore;
use crate::present::{MenuView, Presenter, Snapshot};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameState, TickInput};

/// Screen identifiers for the outer control-flow state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Welcome,
    CharacterSelect,
    Gameplay,
}

/// Commands from the input collaborator (keyboard/controller/touch)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Primary action: start a round on the menu, flap during play
    Action,
    /// Freeze/unfreeze the simulation
    PauseToggle,
    /// Open character selection from the welcome screen
    OpenCharacterSelect,
    /// Cycle the highlighted character
    NextCharacter,
    PrevCharacter,
    /// Confirm the highlighted character
    Confirm,
    /// Tear down and exit
    Quit,
}

/// Source of the per-frame command stream
pub trait CommandSource {
    /// Commands that arrived since the previous frame
    fn poll(&mut self) -> Vec<Command>;
}

/// Fixed-rate frame clock. When a frame's work finishes early, [`wait`]
/// blocks until the next tick boundary.
///
/// [`wait`]: FrameClock::wait
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        let period = Duration::from_secs(1) / ticks_per_sec;
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// Block out the remainder of the current tick
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            // Overran the boundary: resynchronize rather than rush to
            // catch up
            self.next = now + self.period;
        }
    }
}

/// Outer application: owns the screen state machine and wires the sim to
/// the presentation, audio and persistence collaborators.
pub struct App<'a> {
    assets: AssetBundle,
    settings: Settings,
    presenter: &'a mut dyn Presenter,
    audio: &'a mut dyn AudioSink,
    store: &'a mut dyn HighScoreStore,
    screen: ScreenId,
    round: Option<GameState>,
    seed: u64,
}

impl<'a> App<'a> {
    pub fn new(
        assets: AssetBundle,
        settings: Settings,
        presenter: &'a mut dyn Presenter,
        audio: &'a mut dyn AudioSink,
        store: &'a mut dyn HighScoreStore,
        seed: u64,
    ) -> Self {
        Self {
            assets,
            settings,
            presenter,
            audio,
            store,
            screen: ScreenId::Welcome,
            round: None,
            seed,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn screen(&self) -> ScreenId {
        self.screen
    }

    /// Drive frames at the fixed tick rate until a quit command arrives
    pub fn run(&mut self, source: &mut dyn CommandSource) {
        let mut clock = FrameClock::new(TICKS_PER_SEC);
        loop {
            let commands = source.poll();
            if commands.contains(&Command::Quit) {
                log::info!("quit requested, shutting down");
                break;
            }
            self.frame(&commands);
            clock.wait();
        }
    }

    /// One frame: dispatch this tick's commands to the current screen,
    /// advance it, and render. `run` adds the clock; tests call this
    /// directly.
    pub fn frame(&mut self, commands: &[Command]) {
        match self.screen {
            ScreenId::Welcome => self.welcome_frame(commands),
            ScreenId::CharacterSelect => self.select_frame(commands),
            ScreenId::Gameplay => self.gameplay_frame(commands),
        }
    }

    fn welcome_frame(&mut self, commands: &[Command]) {
        for command in commands {
            match command {
                Command::Action => {
                    self.enter_gameplay();
                    return;
                }
                Command::OpenCharacterSelect => {
                    self.screen = ScreenId::CharacterSelect;
                    break;
                }
                _ => {}
            }
        }
        self.menu_frame();
    }

    fn select_frame(&mut self, commands: &[Command]) {
        for command in commands {
            match command {
                Command::NextCharacter => {
                    self.settings.character = self.settings.character.next();
                }
                Command::PrevCharacter => {
                    self.settings.character = self.settings.character.prev();
                }
                Command::Confirm => {
                    log::info!("character selected: {}", self.settings.character.name());
                    self.screen = ScreenId::Welcome;
                    break;
                }
                _ => {}
            }
        }
        self.menu_frame();
    }

    fn menu_frame(&mut self) {
        self.presenter.menu_frame(&MenuView {
            screen: self.screen,
            character: self.settings.character,
        });
    }

    fn enter_gameplay(&mut self) {
        let high_score = self.store.load();
        let seed = self.next_seed();
        log::info!("round start (seed {}, best {})", seed, high_score);
        self.round = Some(GameState::new(seed, high_score, self.assets.metrics));
        self.screen = ScreenId::Gameplay;
        self.audio.play(AudioCue::Swoosh);
    }

    fn gameplay_frame(&mut self, commands: &[Command]) {
        let Some(state) = self.round.as_mut() else {
            self.screen = ScreenId::Welcome;
            return;
        };

        let input = TickInput {
            flap: commands.contains(&Command::Action),
            pause: commands.contains(&Command::PauseToggle),
        };
        sim::tick(state, &input);

        let mut finished = false;
        for event in &state.events {
            match event {
                GameEvent::Flapped => self.audio.play(AudioCue::Flap),
                GameEvent::Scored { .. } => self.audio.play(AudioCue::Score),
                GameEvent::Hit => self.audio.play(AudioCue::Hit),
                GameEvent::LevelUp { level } => {
                    log::debug!("entering level {}", level);
                }
                GameEvent::NewHighScore { score } => self.store.save(*score),
                GameEvent::RoundEnded { score } => {
                    log::info!("round over, final score {}", score);
                    finished = true;
                }
            }
        }

        self.presenter.frame(&Snapshot::of(state));

        if finished {
            // Round state is destroyed here; the next round starts fresh
            self.round = None;
            self.screen = ScreenId::Welcome;
        }
    }

    /// Fresh seed per round (LCG step over the previous one)
    fn next_seed(&mut self) -> u64 {
        let seed = self.seed;
        self.seed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::highscore::MemoryStore;
    use crate::present::NullPresenter;
    use crate::sim::GamePhase;

    fn harness() -> (NullPresenter, NullAudio, MemoryStore) {
        (NullPresenter, NullAudio, MemoryStore::default())
    }

    #[test]
    fn welcome_action_starts_a_round() {
        let (mut presenter, mut audio, mut store) = harness();
        let mut app = App::new(
            AssetBundle::classic(),
            Settings::default(),
            &mut presenter,
            &mut audio,
            &mut store,
            11,
        );

        assert_eq!(app.screen(), ScreenId::Welcome);
        app.frame(&[Command::Action]);
        assert_eq!(app.screen(), ScreenId::Gameplay);
        assert!(app.round.is_some());
    }

    #[test]
    fn character_select_cycles_and_confirms() {
        let (mut presenter, mut audio, mut store) = harness();
        let mut app = App::new(
            AssetBundle::classic(),
            Settings::default(),
            &mut presenter,
            &mut audio,
            &mut store,
            11,
        );

        app.frame(&[Command::OpenCharacterSelect]);
        assert_eq!(app.screen(), ScreenId::CharacterSelect);

        let start = app.settings().character;
        app.frame(&[Command::NextCharacter]);
        assert_eq!(app.settings().character, start.next());

        app.frame(&[Command::Confirm]);
        assert_eq!(app.screen(), ScreenId::Welcome);
        assert_eq!(app.settings().character, start.next());
    }

    #[test]
    fn round_end_returns_to_welcome_and_saves_a_beaten_best() {
        let (mut presenter, mut audio, mut store) = harness();
        store.save(3);
        let mut app = App::new(
            AssetBundle::classic(),
            Settings::default(),
            &mut presenter,
            &mut audio,
            &mut store,
            11,
        );

        app.frame(&[Command::Action]);
        {
            let state = app.round.as_mut().unwrap();
            assert_eq!(state.high_score, 3);
            state.score = 7;
            state.avatar.pos.y = crate::consts::GROUND_LINE;
        }

        // Collision frame plus the full round-over hold
        for _ in 0..=ROUND_OVER_TICKS {
            app.frame(&[]);
        }

        assert_eq!(app.screen(), ScreenId::Welcome);
        assert!(app.round.is_none());
        assert_eq!(store.load(), 7);
    }

    #[test]
    fn pause_freezes_the_round_until_toggled_again() {
        let (mut presenter, mut audio, mut store) = harness();
        let mut app = App::new(
            AssetBundle::classic(),
            Settings::default(),
            &mut presenter,
            &mut audio,
            &mut store,
            11,
        );

        app.frame(&[Command::Action]);
        app.frame(&[]);
        app.frame(&[Command::PauseToggle]);
        let frozen = app.round.as_ref().unwrap().frame_counter;
        assert_eq!(app.round.as_ref().unwrap().phase, GamePhase::Paused);

        for _ in 0..5 {
            app.frame(&[Command::Action]); // flaps ignored while paused
        }
        assert_eq!(app.round.as_ref().unwrap().frame_counter, frozen);

        app.frame(&[Command::PauseToggle]);
        assert_eq!(app.round.as_ref().unwrap().phase, GamePhase::Active);
    }

    #[test]
    fn frame_clock_blocks_until_the_tick_boundary() {
        let mut clock = FrameClock::new(100);
        let start = Instant::now();
        clock.wait();
        clock.wait();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn per_round_seeds_differ() {
        let (mut presenter, mut audio, mut store) = harness();
        let mut app = App::new(
            AssetBundle::classic(),
            Settings::default(),
            &mut presenter,
            &mut audio,
            &mut store,
            11,
        );
        let a = app.next_seed();
        let b = app.next_seed();
        assert_ne!(a, b);
    }
}
