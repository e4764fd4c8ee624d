//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::{Vec2, vec2};
use rand::Rng;

use super::collision::{ball_aabb_collision, reflect_velocity};
use super::level;
use super::state::{
    Ball, BallState, BlockKind, GameEvent, GamePhase, GameState, MAX_PARTICLES, Particle,
};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held paddle direction: -1.0, 0.0 or 1.0
    pub move_dir: f32,
    /// Launch attached balls (one-shot)
    pub launch: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if input.move_dir != 0.0 {
        state.paddle.move_by(input.move_dir, dt);
    }

    update_particles(state, dt);

    match state.phase {
        GamePhase::Serve => {
            for ball in &mut state.balls {
                ball.update_attached(&state.paddle);
            }

            if input.launch {
                for ball in &mut state.balls {
                    ball.launch();
                }
                state.ramp_ticks = 0;
                state.phase = GamePhase::Playing;
            }
        }
        GamePhase::Playing => advance_playing(state, dt),
        GamePhase::GameOver => {}
    }
}

fn advance_playing(state: &mut GameState, dt: f32) {
    // Speed ramp: every interval, everything flying gets faster
    state.ramp_ticks += 1;
    if state.ramp_ticks >= SPEED_RAMP_INTERVAL_TICKS {
        state.ramp_ticks = 0;
        for ball in &mut state.balls {
            let speed = ball.vel.length();
            if speed > 0.0 {
                let boosted = (speed * SPEED_RAMP_FACTOR).min(BALL_MAX_SPEED);
                ball.vel = ball.vel / speed * boosted;
            }
        }
    }

    for block in &mut state.blocks {
        block.patrol(dt);
    }

    // Deferred mutations: new balls, particle bursts, score/life deltas.
    // Events are buffered locally so the ball loop can hold disjoint
    // borrows of `balls` and `blocks`.
    let mut events: Vec<GameEvent> = Vec::new();
    let mut bursts: Vec<(Vec2, BlockKind)> = Vec::new();
    let mut spawned: Vec<(Vec2, Vec2)> = Vec::new();
    let mut score_gain: u32 = 0;
    let mut lives_lost: u32 = 0;

    let paddle = state.paddle.clone();
    let balls = &mut state.balls;
    let blocks = &mut state.blocks;

    for ball in balls.iter_mut() {
        if ball.state != BallState::Free {
            continue;
        }

        ball.pos += ball.vel * dt;

        // Window borders: left/right flip x, ceiling flips y
        if ball.pos.x - ball.radius < 0.0 {
            ball.pos.x = ball.radius;
            ball.vel.x = ball.vel.x.abs();
        } else if ball.pos.x + ball.radius > WINDOW_WIDTH {
            ball.pos.x = WINDOW_WIDTH - ball.radius;
            ball.vel.x = -ball.vel.x.abs();
        }
        if ball.pos.y - ball.radius < 0.0 {
            ball.pos.y = ball.radius;
            ball.vel.y = ball.vel.y.abs();
        }

        // Paddle: bounce upward, horizontal velocity set by hit offset
        let paddle_hit = ball_aabb_collision(ball.pos, ball.radius, &paddle.aabb());
        if paddle_hit.hit && ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y.abs();
            ball.vel.x = (ball.pos.x - paddle.center_x()) * PADDLE_DEFLECT;
            ball.pos.y = ball.pos.y.min(paddle.top() - ball.radius);
        }

        // Blocks: every overlapped block takes a hit and counts toward the
        // split threshold; only the first one reflects the ball
        let mut touch_count: u32 = 0;
        let mut reflected = false;
        for block in blocks.iter_mut() {
            let hit = ball_aabb_collision(ball.pos, ball.radius, &block.aabb());
            if !hit.hit {
                continue;
            }
            touch_count += 1;

            if !reflected {
                ball.vel = reflect_velocity(ball.vel, hit.normal);
                ball.pos += hit.normal * hit.penetration;
                reflected = true;
            }

            block.register_hit();
            events.push(GameEvent::BlockHit);
            if block.is_destroyed() {
                score_gain += SCORE_PER_BLOCK;
                let drains_life = block.kind.drains_life();
                if drains_life {
                    lives_lost += 1;
                }
                bursts.push((block.aabb().center(), block.kind));
                events.push(GameEvent::BlockDestroyed { drains_life });
            }
        }
        blocks.retain(|b| !b.is_destroyed());

        if touch_count >= SPLIT_TOUCH_COUNT {
            spawned.push((ball.pos, vec2(-ball.vel.x, ball.vel.y)));
            events.push(GameEvent::BallSplit);
        }

        // Fell past the paddle: lose a life, respawn at the serve spot
        if ball.pos.y - ball.radius > WINDOW_HEIGHT {
            lives_lost += 1;
            events.push(GameEvent::BallLost);
            ball.pos = vec2(
                paddle.center_x(),
                paddle.top() - ball.radius - SERVE_GAP,
            );
            ball.vel = vec2(0.0, -BALL_START_SPEED);
        }
    }

    for (pos, vel) in spawned {
        let id = state.next_entity_id();
        let mut ball = Ball::new(id);
        ball.pos = pos;
        ball.vel = vel;
        ball.state = BallState::Free;
        state.balls.push(ball);
    }

    for (pos, kind) in bursts {
        spawn_burst(state, pos, kind);
    }

    state.score += score_gain;
    state.lives = state.lives.saturating_sub(lives_lost);
    for event in events {
        state.push_event(event);
    }

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver { score: state.score });
        return;
    }

    // Field cleared: next level, fresh layout, back to serving
    if state.blocks.is_empty() {
        state.level += 1;
        level::generate_level(state);
        state.balls.clear();
        state.spawn_ball_attached();
        state.ramp_ticks = 0;
        state.phase = GamePhase::Serve;
        state.push_event(GameEvent::LevelCleared {
            next_level: state.level,
        });
    }
}

/// Debris burst at a destroyed block's center
fn spawn_burst(state: &mut GameState, pos: Vec2, kind: BlockKind) {
    const BURST_COUNT: usize = 12;
    for _ in 0..BURST_COUNT {
        if state.particles.len() >= MAX_PARTICLES {
            break;
        }
        let angle = state.rng.random_range(0.0..std::f32::consts::TAU);
        let speed = state.rng.random_range(40.0..160.0);
        let size = state.rng.random_range(2.0..5.0);
        state.particles.push(Particle {
            pos,
            vel: vec2(angle.cos(), angle.sin()) * speed,
            kind,
            life: 1.0,
            size,
        });
    }
}

fn update_particles(state: &mut GameState, dt: f32) {
    for particle in &mut state.particles {
        particle.pos += particle.vel * dt;
        particle.vel *= 0.98;
        particle.life -= dt * 1.5;
        particle.size *= 0.995;
    }
    state.particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launched_state() -> GameState {
        let mut state = GameState::new(7);
        tick(
            &mut state,
            &TickInput {
                launch: true,
                ..Default::default()
            },
            SIM_DT,
        );
        state
    }

    /// State with no layout blocks and one free ball at the given spot
    fn bare_state(ball_pos: Vec2, ball_vel: Vec2) -> GameState {
        let mut state = launched_state();
        state.blocks.clear();
        state.balls.truncate(1);
        state.balls[0].pos = ball_pos;
        state.balls[0].vel = ball_vel;
        state.take_events();
        state
    }

    fn add_block(state: &mut GameState, kind: BlockKind, pos: Vec2, max_hits: u32) -> u32 {
        let id = state.next_entity_id();
        state
            .blocks
            .push(super::super::state::Block::new(id, kind, pos, max_hits));
        id
    }

    #[test]
    fn test_launch_enters_playing() {
        let state = launched_state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.balls[0].state, BallState::Free);
        assert!(state.balls[0].vel.y < 0.0);
    }

    #[test]
    fn test_attached_ball_tracks_paddle_before_launch() {
        let mut state = GameState::new(7);
        let x0 = state.balls[0].pos.x;
        for _ in 0..30 {
            tick(
                &mut state,
                &TickInput {
                    move_dir: 1.0,
                    ..Default::default()
                },
                SIM_DT,
            );
        }
        assert_eq!(state.phase, GamePhase::Serve);
        assert!(state.balls[0].pos.x > x0);
        assert_eq!(state.balls[0].pos.x, state.paddle.center_x());
    }

    #[test]
    fn test_destroying_blocks_scores_five_each() {
        // One-hit block directly in the ball's path, far from the layout
        let mut state = bare_state(vec2(400.0, 300.0), vec2(0.0, -120.0));
        add_block(&mut state, BlockKind::Standard, vec2(375.0, 260.0), 1);
        // Keep a spare block so clearing the field doesn't end the level
        add_block(&mut state, BlockKind::Standard, vec2(50.0, 500.0), 10);

        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }

        assert_eq!(state.score, SCORE_PER_BLOCK);
        let events = state.take_events();
        assert!(events.contains(&GameEvent::BlockHit));
        assert!(events.contains(&GameEvent::BlockDestroyed { drains_life: false }));
        // Ball bounced back down
        assert!(state.balls[0].vel.y > 0.0);
    }

    #[test]
    fn test_partial_hit_keeps_block_and_counts_damage() {
        let mut state = bare_state(vec2(400.0, 300.0), vec2(0.0, -120.0));
        let id = add_block(&mut state, BlockKind::Standard, vec2(375.0, 260.0), 10);

        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }

        assert_eq!(state.score, 0);
        let block = state.blocks.iter().find(|b| b.id == id).unwrap();
        assert_eq!(block.hits, 1);
        assert!(state.take_events().contains(&GameEvent::BlockHit));
    }

    #[test]
    fn test_draining_block_costs_a_life() {
        let mut state = bare_state(vec2(400.0, 300.0), vec2(0.0, -120.0));
        add_block(&mut state, BlockKind::Volatile, vec2(375.0, 260.0), 1);
        add_block(&mut state, BlockKind::Standard, vec2(50.0, 500.0), 10);

        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }

        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert!(
            state
                .take_events()
                .contains(&GameEvent::BlockDestroyed { drains_life: true })
        );
    }

    #[test]
    fn test_triple_touch_splits_ball() {
        // Three tough blocks stacked on the ball's position
        let mut state = bare_state(vec2(400.0, 300.0), Vec2::ZERO);
        add_block(&mut state, BlockKind::Standard, vec2(375.0, 285.0), 50);
        add_block(&mut state, BlockKind::Standard, vec2(375.0, 290.0), 50);
        add_block(&mut state, BlockKind::Standard, vec2(375.0, 295.0), 50);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.balls.len(), 2);
        assert!(state.take_events().contains(&GameEvent::BallSplit));
    }

    #[test]
    fn test_ball_below_window_costs_one_life_and_respawns() {
        let mut state = bare_state(vec2(400.0, WINDOW_HEIGHT + 30.0), vec2(0.0, 200.0));
        add_block(&mut state, BlockKind::Standard, vec2(50.0, 100.0), 10);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert!(state.take_events().contains(&GameEvent::BallLost));
        let ball = &state.balls[0];
        assert!(ball.pos.y < WINDOW_HEIGHT);
        assert!(ball.vel.y < 0.0);

        // One more tick must not charge another life
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.lives, STARTING_LIVES - 1);
    }

    #[test]
    fn test_game_over_at_zero_lives() {
        let mut state = bare_state(vec2(400.0, WINDOW_HEIGHT + 30.0), vec2(0.0, 200.0));
        add_block(&mut state, BlockKind::Standard, vec2(50.0, 100.0), 10);
        state.lives = 1;
        state.score = 123;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(
            state
                .take_events()
                .contains(&GameEvent::GameOver { score: 123 })
        );

        // Further ticks are inert
        let snapshot = state.balls[0].pos;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.balls[0].pos, snapshot);
    }

    #[test]
    fn test_clearing_field_advances_level() {
        let mut state = bare_state(vec2(400.0, 300.0), vec2(0.0, -120.0));
        add_block(&mut state, BlockKind::Standard, vec2(375.0, 260.0), 1);

        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }

        assert_eq!(state.level, 2);
        assert_eq!(state.phase, GamePhase::Serve);
        assert_eq!(state.balls.len(), 1);
        assert!(matches!(state.balls[0].state, BallState::Attached { .. }));
        assert!(!state.blocks.is_empty());
        assert!(
            state
                .take_events()
                .contains(&GameEvent::LevelCleared { next_level: 2 })
        );
    }

    #[test]
    fn test_speed_ramp_scales_velocity() {
        let mut state = bare_state(vec2(400.0, 300.0), vec2(0.0, -BALL_START_SPEED));
        add_block(&mut state, BlockKind::Standard, vec2(50.0, 500.0), 10);
        state.ramp_ticks = SPEED_RAMP_INTERVAL_TICKS - 1;

        tick(&mut state, &TickInput::default(), SIM_DT);

        let speed = state.balls[0].vel.length();
        assert!((speed - BALL_START_SPEED * SPEED_RAMP_FACTOR).abs() < 0.5);
        assert_eq!(state.ramp_ticks, 0);
    }

    #[test]
    fn test_speed_ramp_respects_cap() {
        let mut state = bare_state(vec2(400.0, 300.0), vec2(0.0, -BALL_MAX_SPEED));
        add_block(&mut state, BlockKind::Standard, vec2(50.0, 500.0), 10);
        state.ramp_ticks = SPEED_RAMP_INTERVAL_TICKS - 1;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.balls[0].vel.length() <= BALL_MAX_SPEED + 0.5);
    }

    #[test]
    fn test_walls_reflect_ball() {
        let mut state = bare_state(vec2(5.0, 300.0), vec2(-200.0, -50.0));
        add_block(&mut state, BlockKind::Standard, vec2(400.0, 500.0), 10);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.balls[0].vel.x > 0.0);
        assert!(state.balls[0].pos.x >= state.balls[0].radius);
    }

    #[test]
    fn test_paddle_deflects_by_hit_offset() {
        let mut state = launched_state();
        state.blocks.clear();
        add_block(&mut state, BlockKind::Standard, vec2(50.0, 100.0), 10);
        state.take_events();

        // Drop the ball onto the right half of the paddle
        let paddle_right = state.paddle.center_x() + 20.0;
        state.balls[0].pos = vec2(paddle_right, state.paddle.top() - 12.0);
        state.balls[0].vel = vec2(0.0, 240.0);

        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }

        let ball = &state.balls[0];
        assert!(ball.vel.y < 0.0);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_burst_spawns_particles() {
        let mut state = bare_state(vec2(400.0, 300.0), vec2(0.0, -120.0));
        add_block(&mut state, BlockKind::Standard, vec2(375.0, 260.0), 1);
        add_block(&mut state, BlockKind::Standard, vec2(50.0, 500.0), 10);

        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }

        assert!(!state.particles.is_empty());
        assert!(state.particles.len() <= MAX_PARTICLES);
    }
}
