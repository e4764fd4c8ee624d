//! Font and background assets, loaded by path convention
//!
//! The HUD font is required; the game refuses to start without it. Level
//! backdrops are best-effort: `background<level>.png`, then the shared
//! `background.png`, then a flat fill.

use anyhow::{Result, anyhow};
use macroquad::prelude::*;

/// HUD font, loaded once at startup
pub const FONT_PATH: &str = "arial.ttf";
/// Fallback backdrop shared by levels without a dedicated image
pub const DEFAULT_BACKGROUND: &str = "background.png";

pub struct Assets {
    pub font: Font,
    /// Backdrop for the current level, if any image could be loaded
    pub background: Option<Texture2D>,
}

impl Assets {
    /// Load startup assets. A missing font is fatal; backgrounds are not.
    pub async fn load(level: u32) -> Result<Self> {
        let font = load_ttf_font(FONT_PATH)
            .await
            .map_err(|err| anyhow!("failed to load font '{FONT_PATH}': {err}"))?;
        let background = load_background(level).await;
        Ok(Self { font, background })
    }

    /// Swap in the backdrop for a new level
    pub async fn set_level(&mut self, level: u32) {
        self.background = load_background(level).await;
    }
}

async fn load_background(level: u32) -> Option<Texture2D> {
    let path = format!("background{level}.png");
    match load_texture(&path).await {
        Ok(texture) => Some(texture),
        Err(_) => match load_texture(DEFAULT_BACKGROUND).await {
            Ok(texture) => {
                log::warn!("No backdrop for level {level}, using {DEFAULT_BACKGROUND}");
                Some(texture)
            }
            Err(err) => {
                log::warn!("No backdrop textures found ({err}), using flat fill");
                None
            }
        },
    }
}
