//! Game settings and preferences
//!
//! Persisted separately from the high score, as pretty JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Ball fill colors selectable in the settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BallColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl BallColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BallColor::Red => "Red",
            BallColor::Green => "Green",
            BallColor::Blue => "Blue",
        }
    }
}

/// HUD language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Bangla,
}

/// HUD label set for the active language
#[derive(Debug, Clone, Copy)]
pub struct HudLabels {
    pub score: &'static str,
    pub lives: &'static str,
    pub player: &'static str,
    pub best: &'static str,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Bangla => "Bangla",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Bangla,
            Language::Bangla => Language::English,
        }
    }

    /// Labels are transliterated so the bundled Latin font can render them
    pub fn hud_labels(&self) -> HudLabels {
        match self {
            Language::English => HudLabels {
                score: "Score",
                lives: "Lives",
                player: "Player",
                best: "Highest Score",
            },
            Language::Bangla => HudLabels {
                score: "Skor",
                lives: "Jibon",
                player: "Kheloyar",
                best: "Sorboccho Skor",
            },
        }
    }
}

pub const MIN_VOLUME: f32 = 0.0;
pub const MAX_VOLUME: f32 = 100.0;
pub const VOLUME_STEP: f32 = 10.0;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Sound effects on/off
    pub sound_on: bool,
    /// Playback volume, 0-100
    pub volume: f32,
    pub language: Language,
    pub player_name: String,
    pub ball_color: BallColor,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_on: true,
            volume: MAX_VOLUME,
            language: Language::English,
            player_name: "Player".to_string(),
            ball_color: BallColor::Red,
        }
    }
}

impl Settings {
    /// Settings file, resolved against the working directory
    pub const FILE: &'static str = "settings.json";

    pub fn volume_up(&mut self) {
        self.volume = (self.volume + VOLUME_STEP).min(MAX_VOLUME);
    }

    pub fn volume_down(&mut self) {
        self.volume = (self.volume - VOLUME_STEP).max(MIN_VOLUME);
    }

    /// Effective playback volume in 0.0-1.0; 0 when sound is off
    pub fn effective_volume(&self) -> f32 {
        if !self.sound_on {
            0.0
        } else {
            (self.volume / MAX_VOLUME).clamp(0.0, 1.0)
        }
    }

    /// Load settings from the default file
    pub fn load() -> Self {
        Self::load_from(Self::FILE)
    }

    /// Load settings from a path; a missing or malformed file falls back
    /// to the defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to the default file
    pub fn save(&self) {
        self.save_to(Self::FILE);
    }

    /// Save settings to a path; failures are logged, never fatal
    pub fn save_to(&self, path: impl AsRef<Path>) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save settings: {err}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}
