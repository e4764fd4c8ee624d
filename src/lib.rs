//! Brickout - a single-screen breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Immediate-mode drawing of the game state, HUD and menus
//! - `assets` / `audio`: File-backed font, backgrounds and sound effects
//! - `settings` / `highscore`: Player preferences and the persisted best score

pub mod assets;
pub mod audio;
pub mod highscore;
pub mod menu;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscore::HighScore;
pub use settings::{BallColor, Language, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (logical pixels, origin top-left, y down)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Paddle defaults - pinned to the bottom edge
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 5.0;
    pub const PADDLE_SPEED: f32 = 480.0;
    /// Horizontal velocity per pixel of offset from the paddle center
    pub const PADDLE_DEFLECT: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 300.0;
    /// Speed ramp never pushes a ball past this
    pub const BALL_MAX_SPEED: f32 = 900.0;
    /// Gap between an attached ball and the paddle top
    pub const SERVE_GAP: f32 = 2.0;

    /// Every interval, scale each ball's velocity by the ramp factor
    pub const SPEED_RAMP_INTERVAL_TICKS: u64 = 10 * 120;
    pub const SPEED_RAMP_FACTOR: f32 = 1.1;

    /// Block defaults
    pub const BLOCK_WIDTH: f32 = 50.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    /// Horizontal spacing between blocks in a row
    pub const BLOCK_GAP: f32 = 10.0;
    /// Patrol block speed
    pub const PATROL_SPEED: f32 = 120.0;

    /// Scoring and lives
    pub const SCORE_PER_BLOCK: u32 = 5;
    pub const STARTING_LIVES: u32 = 3;
    /// Simultaneous block touches needed to split a ball
    pub const SPLIT_TOUCH_COUNT: u32 = 3;
}
