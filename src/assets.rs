//! Read-only asset bundle
//!
//! Built once at startup and passed by reference into the components that
//! need it. The simulation reads only the sprite metrics; file names are
//! for the presentation and audio collaborators. Level transitions switch
//! the typed [`Skin`] on round state rather than mutating a shared
//! registry.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::AudioCue;

/// Width/height of one sprite in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

/// Sprite dimensions the simulation depends on (collision boxes, clamps)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteMetrics {
    pub bird: Size,
    pub pipe: Size,
    pub base: Size,
}

impl SpriteMetrics {
    /// Dimensions of the classic sprite set
    pub const CLASSIC: Self = Self {
        bird: Size { w: 34.0, h: 24.0 },
        pipe: Size { w: 52.0, h: 320.0 },
        base: Size { w: 336.0, h: 112.0 },
    };
}

/// Frames in one avatar flap cycle
pub const BIRD_FRAME_COUNT: usize = 3;

/// Active art set; swapped once per round at the level transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Skin {
    #[default]
    Day,
    Night,
}

impl Skin {
    /// Background image for this skin
    pub fn background(self) -> &'static str {
        match self {
            Skin::Day => "images/background.png",
            Skin::Night => "images/background-night.png",
        }
    }

    /// Pipe image for this skin (the presenter derives the flipped top half)
    pub fn pipe(self) -> &'static str {
        match self {
            Skin::Day => "images/pipe.png",
            Skin::Night => "images/pipe-red.png",
        }
    }
}

/// Selectable avatar characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BirdColor {
    #[default]
    Red,
    Blue,
    Yellow,
}

impl BirdColor {
    pub const ALL: [BirdColor; 3] = [BirdColor::Red, BirdColor::Blue, BirdColor::Yellow];

    /// Display name for the selection screen
    pub fn name(self) -> &'static str {
        match self {
            BirdColor::Red => "Red Bird",
            BirdColor::Blue => "Blue Bird",
            BirdColor::Yellow => "Yellow Bird",
        }
    }

    /// Flap-cycle frames: downflap, midflap, upflap
    pub fn frames(self) -> [&'static str; BIRD_FRAME_COUNT] {
        match self {
            BirdColor::Red => [
                "images/redbird-downflap.png",
                "images/redbird-midflap.png",
                "images/redbird-upflap.png",
            ],
            BirdColor::Blue => [
                "images/bluebird-downflap.png",
                "images/bluebird-midflap.png",
                "images/bluebird-upflap.png",
            ],
            BirdColor::Yellow => [
                "images/yellowbird-downflap.png",
                "images/yellowbird-midflap.png",
                "images/yellowbird-upflap.png",
            ],
        }
    }

    pub fn next(self) -> Self {
        match self {
            BirdColor::Red => BirdColor::Blue,
            BirdColor::Blue => BirdColor::Yellow,
            BirdColor::Yellow => BirdColor::Red,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            BirdColor::Red => BirdColor::Yellow,
            BirdColor::Blue => BirdColor::Red,
            BirdColor::Yellow => BirdColor::Blue,
        }
    }
}

/// Immutable asset catalog: metrics for the simulation, file names for the
/// collaborators
#[derive(Debug, Clone)]
pub struct AssetBundle {
    pub metrics: SpriteMetrics,
}

impl AssetBundle {
    pub fn classic() -> Self {
        Self {
            metrics: SpriteMetrics::CLASSIC,
        }
    }

    /// Digit sprite for the score display
    pub fn digit(digit: u32) -> String {
        format!("images/{}.png", digit % 10)
    }

    /// Sound file for a cue
    pub fn sound(cue: AudioCue) -> &'static str {
        match cue {
            AudioCue::Flap => "sounds/wing.wav",
            AudioCue::Score => "sounds/point.wav",
            AudioCue::Hit => "sounds/hit.wav",
            AudioCue::Swoosh => "sounds/swoosh.wav",
        }
    }

    /// Every file the game references
    pub fn manifest(&self) -> Vec<String> {
        let mut files: Vec<String> =
            vec!["images/message.png".into(), "images/base.png".into()];
        for skin in [Skin::Day, Skin::Night] {
            files.push(skin.background().into());
            files.push(skin.pipe().into());
        }
        for color in BirdColor::ALL {
            files.extend(color.frames().iter().map(|f| f.to_string()));
        }
        for digit in 0..10 {
            files.push(Self::digit(digit));
        }
        for cue in [AudioCue::Flap, AudioCue::Score, AudioCue::Hit, AudioCue::Swoosh] {
            files.push(Self::sound(cue).into());
        }
        files
    }

    /// Check that every referenced asset exists under `root`.
    ///
    /// Missing assets are fatal at startup; the simulation performs no
    /// checks of its own at spawn time.
    pub fn verify(&self, root: &Path) -> io::Result<()> {
        for file in self.manifest() {
            let path = root.join(&file);
            if !path.is_file() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("missing asset: {}", path.display()),
                ));
            }
        }
        Ok(())
    }
}
