//! Immediate-mode drawing of the game state, HUD and overlays

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::consts::*;
use crate::menu;
use crate::settings::{BallColor, Settings};
use crate::sim::{Block, BlockKind, GamePhase, GameState, Particle};

/// Background fill when no backdrop texture could be loaded
const CLEAR_COLOR: Color = Color::new(0.02, 0.02, 0.08, 1.0);
const PADDLE_COLOR: Color = GREEN;
const HUD_FONT_SIZE: u16 = 24;
const OVERLAY_FONT_SIZE: u16 = 40;

/// Draw one full frame of gameplay
pub fn draw_game(state: &GameState, settings: &Settings, high_score: u32, assets: &Assets) {
    draw_backdrop(assets);

    for block in &state.blocks {
        draw_block(block);
    }
    for particle in &state.particles {
        draw_particle(particle);
    }
    for ball in &state.balls {
        draw_circle(
            ball.pos.x,
            ball.pos.y,
            ball.radius,
            ball_color(settings.ball_color),
        );
    }

    let paddle = &state.paddle;
    draw_rectangle(
        paddle.x,
        paddle.top(),
        paddle.width,
        paddle.height,
        PADDLE_COLOR,
    );

    draw_hud(state, settings, high_score, assets);

    match state.phase {
        GamePhase::Serve => {
            draw_centered(
                "Press Space to launch",
                WINDOW_HEIGHT * 0.65,
                HUD_FONT_SIZE,
                LIGHTGRAY,
                assets,
            );
        }
        GamePhase::GameOver => draw_game_over(state, high_score, assets),
        GamePhase::Playing => {}
    }
}

/// Draw the modal settings screen
pub fn draw_settings_menu(settings: &Settings, assets: &Assets) {
    draw_backdrop(assets);
    draw_rectangle(
        0.0,
        0.0,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        Color::new(0.0, 0.0, 0.0, 0.75),
    );

    for (i, line) in menu::lines(settings).iter().enumerate() {
        draw_text_ex(
            line,
            40.0,
            60.0 + i as f32 * 34.0,
            text_params(assets, HUD_FONT_SIZE, WHITE),
        );
    }
}

fn draw_backdrop(assets: &Assets) {
    clear_background(CLEAR_COLOR);
    if let Some(backdrop) = &assets.background {
        draw_texture_ex(
            backdrop,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(WINDOW_WIDTH, WINDOW_HEIGHT)),
                ..Default::default()
            },
        );
    }
}

fn draw_block(block: &Block) {
    draw_rectangle(
        block.pos.x,
        block.pos.y,
        block.size.x,
        block.size.y,
        block_color(block.kind, block.damage()),
    );
}

fn draw_particle(particle: &Particle) {
    let mut color = kind_color(particle.kind);
    color.a = particle.life.clamp(0.0, 1.0);
    draw_rectangle(
        particle.pos.x - particle.size / 2.0,
        particle.pos.y - particle.size / 2.0,
        particle.size,
        particle.size,
        color,
    );
}

fn draw_hud(state: &GameState, settings: &Settings, high_score: u32, assets: &Assets) {
    let labels = settings.language.hud_labels();
    draw_text_ex(
        &format!(
            "{}: {}   {}: {}",
            labels.score, state.score, labels.lives, state.lives
        ),
        10.0,
        30.0,
        text_params(assets, HUD_FONT_SIZE, WHITE),
    );
    draw_text_ex(
        &format!("{}: {}", labels.player, settings.player_name),
        10.0,
        58.0,
        text_params(assets, HUD_FONT_SIZE, WHITE),
    );
    draw_text_ex(
        &format!("{}: {}", labels.best, high_score),
        10.0,
        86.0,
        text_params(assets, HUD_FONT_SIZE, WHITE),
    );
}

fn draw_game_over(state: &GameState, high_score: u32, assets: &Assets) {
    draw_rectangle(
        0.0,
        0.0,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        Color::new(0.0, 0.0, 0.0, 0.7),
    );

    draw_centered(
        "Game Over",
        WINDOW_HEIGHT * 0.4,
        OVERLAY_FONT_SIZE,
        RED,
        assets,
    );
    let summary = if state.score >= high_score && state.score > 0 {
        format!("New high score: {}", state.score)
    } else {
        format!("Score: {}   Best: {}", state.score, high_score)
    };
    draw_centered(&summary, WINDOW_HEIGHT * 0.5, HUD_FONT_SIZE, WHITE, assets);
    draw_centered(
        "Press Enter to play again",
        WINDOW_HEIGHT * 0.6,
        HUD_FONT_SIZE,
        LIGHTGRAY,
        assets,
    );
}

fn draw_centered(text: &str, y: f32, font_size: u16, color: Color, assets: &Assets) {
    let dims = measure_text(text, Some(&assets.font), font_size, 1.0);
    draw_text_ex(
        text,
        (WINDOW_WIDTH - dims.width) / 2.0,
        y,
        text_params(assets, font_size, color),
    );
}

fn text_params(assets: &Assets, font_size: u16, color: Color) -> TextParams<'_> {
    TextParams {
        font: Some(&assets.font),
        font_size,
        color,
        ..Default::default()
    }
}

fn ball_color(color: BallColor) -> Color {
    match color {
        BallColor::Red => RED,
        BallColor::Green => GREEN,
        BallColor::Blue => BLUE,
    }
}

fn kind_color(kind: BlockKind) -> Color {
    match kind {
        BlockKind::Standard => BLUE,
        BlockKind::Draining => RED,
        BlockKind::Volatile => YELLOW,
        BlockKind::Patrol { .. } => GREEN,
    }
}

/// Base fill per block kind, faded toward a pale damage tint by hit count
fn block_color(kind: BlockKind, damage: f32) -> Color {
    let base = kind_color(kind);
    let t = damage.clamp(0.0, 1.0) * 0.8;
    Color::new(
        base.r + (1.0 - base.r) * t,
        base.g + (1.0 - base.g) * t,
        base.b + (1.0 - base.b) * t,
        1.0,
    )
}
