//! Sound effects
//!
//! Three WAV clips loaded from the working directory at startup. A load
//! failure is startup-fatal for the caller, matching the game's asset
//! contract; playback volume comes from the settings.

use anyhow::{Result, anyhow};
use macroquad::audio::{PlaySoundParams, Sound, load_sound, play_sound};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball strikes a block
    BlockHit,
    /// A life-draining block was destroyed
    LifeLost,
    /// A ball fell past the paddle
    BallLost,
}

/// Loaded sound clips, one per effect
pub struct AudioBank {
    hit: Sound,
    life_loss: Sound,
    bottom_hit: Sound,
}

impl AudioBank {
    /// Load every clip
    pub async fn load() -> Result<Self> {
        Ok(Self {
            hit: load_clip("hit.wav").await?,
            life_loss: load_clip("life_loss.wav").await?,
            bottom_hit: load_clip("bottom_hit.wav").await?,
        })
    }

    /// Play an effect at the volume configured in settings
    pub fn play(&self, effect: SoundEffect, settings: &Settings) {
        let volume = settings.effective_volume();
        if volume <= 0.0 {
            return;
        }

        let sound = match effect {
            SoundEffect::BlockHit => &self.hit,
            SoundEffect::LifeLost => &self.life_loss,
            SoundEffect::BallLost => &self.bottom_hit,
        };

        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume,
            },
        );
    }
}

async fn load_clip(path: &str) -> Result<Sound> {
    load_sound(path)
        .await
        .map_err(|err| anyhow!("failed to load sound '{path}': {err}"))
}
