//! Skyflap entry point
//!
//! Initializes logging and the adapters, then drives a scripted round
//! through the full app loop at the fixed tick rate. The crate ships no
//! windowing frontend; a real frontend supplies its own `Presenter`,
//! `AudioSink` and `CommandSource` implementations and loads the assets
//! named by the bundle.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use skyflap::app::{App, Command, CommandSource};
use skyflap::assets::AssetBundle;
use skyflap::audio::LogAudio;
use skyflap::consts::TICKS_PER_SEC;
use skyflap::highscore::JsonFileStore;
use skyflap::present::LogPresenter;
use skyflap::settings::Settings;

/// Replays a fixed command timeline: start a round, flap on a cadence for
/// a while, let the round end, then quit from the menu.
struct ScriptedSource {
    tick: u64,
}

impl CommandSource for ScriptedSource {
    fn poll(&mut self) -> Vec<Command> {
        self.tick += 1;
        let flap_until = 10 * TICKS_PER_SEC as u64;
        let quit_at = 15 * TICKS_PER_SEC as u64;
        match self.tick {
            1 => vec![Command::Action],
            t if t >= quit_at => vec![Command::Quit],
            t if t < flap_until && t % 16 == 0 => vec![Command::Action],
            _ => Vec::new(),
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("skyflap starting (headless demo)");

    let settings_path = Path::new("settings.json");
    let settings = Settings::load(settings_path);

    let assets = AssetBundle::classic();
    // The headless demo renders nothing, so missing asset files only warn
    // here; a frontend treats this as fatal before starting a round.
    if let Err(err) = assets.verify(Path::new(".")) {
        log::warn!("{} (continuing headless)", err);
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut presenter = LogPresenter::new();
    let mut audio = LogAudio;
    let mut store = JsonFileStore::new("high_score.json");

    let mut app = App::new(
        assets,
        settings,
        &mut presenter,
        &mut audio,
        &mut store,
        seed,
    );
    app.run(&mut ScriptedSource { tick: 0 });

    app.settings().save(settings_path);
    log::info!("skyflap exiting");
}
