//! Brickout entry point
//!
//! Window setup, startup asset loading, and the frame loop: sample input,
//! advance the fixed-timestep simulation, drain simulation events into
//! sounds and persistence, draw.

use anyhow::Result;
use macroquad::prelude::*;

use brickout::assets::Assets;
use brickout::audio::{AudioBank, SoundEffect};
use brickout::consts::*;
use brickout::highscore::HighScore;
use brickout::menu;
use brickout::render;
use brickout::settings::Settings;
use brickout::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Top-level mode: gameplay, or the modal settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Playing,
    SettingsMenu,
}

/// Everything the frame loop owns
struct Game {
    state: GameState,
    settings: Settings,
    high_score: HighScore,
    assets: Assets,
    audio: AudioBank,
    accumulator: f32,
    input: TickInput,
    mode: Mode,
}

impl Game {
    /// Run simulation substeps for the elapsed frame time
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.clone();
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.launch = false;
        }
    }

    /// Turn queued simulation events into sounds, backdrop reloads and
    /// high-score persistence
    async fn drain_events(&mut self) {
        for event in self.state.take_events() {
            match event {
                GameEvent::BlockHit => self.audio.play(SoundEffect::BlockHit, &self.settings),
                GameEvent::BlockDestroyed { drains_life } => {
                    if drains_life {
                        self.audio.play(SoundEffect::LifeLost, &self.settings);
                    }
                }
                GameEvent::BallLost => self.audio.play(SoundEffect::BallLost, &self.settings),
                GameEvent::BallSplit => {}
                GameEvent::LevelCleared { next_level } => {
                    log::info!("Level cleared, advancing to {next_level}");
                    self.assets.set_level(next_level).await;
                }
                GameEvent::GameOver { score } => {
                    log::info!("Game over with score {score}");
                    if self.high_score.record(score) {
                        log::info!("New high score: {score}");
                    }
                }
            }
        }
    }

    /// Reset for a fresh run
    async fn restart(&mut self, seed: u64) {
        self.state = GameState::new(seed);
        self.accumulator = 0.0;
        self.input = TickInput::default();
        self.assets.set_level(self.state.level).await;
        log::info!("Game restarted with seed {seed}");
    }
}

/// Sample held/pressed keys into the tick input
fn gather_input(game: &mut Game) {
    let mut dir = 0.0;
    if is_key_down(KeyCode::Left) {
        dir -= 1.0;
    }
    if is_key_down(KeyCode::Right) {
        dir += 1.0;
    }
    game.input.move_dir = dir;

    if is_key_pressed(KeyCode::Space) {
        game.input.launch = true;
    }
    if is_key_pressed(KeyCode::S) {
        game.input = TickInput::default();
        game.mode = Mode::SettingsMenu;
    }
}

/// Map pressed digit keys to a settings-menu action
fn menu_input() -> Option<menu::MenuAction> {
    const DIGITS: [(KeyCode, u8); 8] = [
        (KeyCode::Key1, 1),
        (KeyCode::Key2, 2),
        (KeyCode::Key3, 3),
        (KeyCode::Key4, 4),
        (KeyCode::Key5, 5),
        (KeyCode::Key6, 6),
        (KeyCode::Key7, 7),
        (KeyCode::Key8, 8),
    ];
    for (key, digit) in DIGITS {
        if is_key_pressed(key) {
            return menu::action_for_digit(digit);
        }
    }
    None
}

async fn startup_assets(level: u32) -> Result<(Assets, AudioBank)> {
    let assets = Assets::load(level).await?;
    let audio = AudioBank::load().await?;
    Ok((assets, audio))
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Brickout".to_string(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

fn now_seed() -> u64 {
    macroquad::miniquad::date::now() as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Brickout starting");

    let settings = Settings::load();
    let high_score = HighScore::load();
    let state = GameState::new(now_seed());

    // Font and sound clips are required; backgrounds degrade gracefully
    let (assets, audio) = match startup_assets(state.level).await {
        Ok(pair) => pair,
        Err(err) => {
            log::error!("{err:#}");
            std::process::exit(1);
        }
    };

    let mut game = Game {
        state,
        settings,
        high_score,
        assets,
        audio,
        accumulator: 0.0,
        input: TickInput::default(),
        mode: Mode::Playing,
    };

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        match game.mode {
            Mode::Playing => {
                gather_input(&mut game);
                if game.state.phase == GamePhase::GameOver && is_key_pressed(KeyCode::Enter) {
                    game.restart(now_seed()).await;
                }

                game.update(get_frame_time());
                game.drain_events().await;
                render::draw_game(
                    &game.state,
                    &game.settings,
                    game.high_score.best(),
                    &game.assets,
                );
            }
            Mode::SettingsMenu => {
                if let Some(action) = menu_input() {
                    if menu::apply(&mut game.settings, action) {
                        game.settings.save();
                        game.mode = Mode::Playing;
                    }
                }
                render::draw_settings_menu(&game.settings, &game.assets);
            }
        }

        next_frame().await;
    }

    game.settings.save();
    log::info!("Brickout exiting");
}
