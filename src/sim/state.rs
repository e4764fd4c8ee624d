//! Game state and core simulation types

use glam::{Vec2, vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::level;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball attached to paddle, waiting for launch input
    Serve,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Ball state - attached to paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallState {
    /// Ball rides the paddle at the given horizontal offset from its center
    Attached { offset: f32 },
    /// Ball is free-moving
    Free,
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            state: BallState::Attached { offset: 0.0 },
        }
    }

    /// Update attached ball position based on paddle
    pub fn update_attached(&mut self, paddle: &Paddle) {
        if let BallState::Attached { offset } = self.state {
            self.pos = vec2(
                paddle.center_x() + offset,
                paddle.top() - self.radius - SERVE_GAP,
            );
        }
    }

    /// Launch the ball from attached state, straight up
    pub fn launch(&mut self) {
        if matches!(self.state, BallState::Attached { .. }) {
            self.vel = vec2(0.0, -BALL_START_SPEED);
            self.state = BallState::Free;
        }
    }
}

/// The player's paddle, pinned to the bottom edge of the playfield
#[derive(Debug, Clone)]
pub struct Paddle {
    /// X of the paddle's left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: WINDOW_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    /// Y of the paddle's top edge
    pub fn top(&self) -> f32 {
        WINDOW_HEIGHT - self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(vec2(self.x, self.top()), vec2(self.width, self.height))
    }

    /// Move horizontally by direction * speed * dt, clamped to the window
    pub fn move_by(&mut self, dir: f32, dt: f32) {
        self.x = (self.x + dir * PADDLE_SPEED * dt).clamp(0.0, WINDOW_WIDTH - self.width);
    }
}

/// Block variants
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BlockKind {
    /// Plain multi-hit block
    #[default]
    Standard,
    /// Destroying it costs the player a life
    Draining,
    /// One-hit block that also costs a life when destroyed
    Volatile,
    /// Moves with constant velocity, bouncing off the window edges
    Patrol { vel: Vec2 },
}

impl BlockKind {
    /// Whether destroying this block costs the player a life
    pub fn drains_life(&self) -> bool {
        matches!(self, BlockKind::Draining | BlockKind::Volatile)
    }
}

/// A block entity
#[derive(Debug, Clone)]
pub struct Block {
    pub id: u32,
    pub kind: BlockKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub hits: u32,
    pub max_hits: u32,
}

impl Block {
    pub fn new(id: u32, kind: BlockKind, pos: Vec2, max_hits: u32) -> Self {
        Self {
            id,
            kind,
            pos,
            size: vec2(BLOCK_WIDTH, BLOCK_HEIGHT),
            hits: 0,
            max_hits,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn register_hit(&mut self) {
        self.hits = (self.hits + 1).min(self.max_hits);
    }

    pub fn is_destroyed(&self) -> bool {
        self.hits >= self.max_hits
    }

    /// Damage ratio for the renderer's fade: 0.0 fresh, approaching 1.0
    /// just before destruction
    pub fn damage(&self) -> f32 {
        self.hits as f32 / self.max_hits.max(1) as f32
    }

    /// Advance a patrol block, bouncing off the window bounds
    pub fn patrol(&mut self, dt: f32) {
        if let BlockKind::Patrol { ref mut vel } = self.kind {
            self.pos += *vel * dt;
            if self.pos.x < 0.0 || self.pos.x + self.size.x > WINDOW_WIDTH {
                vel.x = -vel.x;
                self.pos.x = self.pos.x.clamp(0.0, WINDOW_WIDTH - self.size.x);
            }
            if self.pos.y < 0.0 || self.pos.y + self.size.y > WINDOW_HEIGHT {
                vel.y = -vel.y;
                self.pos.y = self.pos.y.clamp(0.0, WINDOW_HEIGHT - self.size.y);
            }
        }
    }
}

/// A cosmetic debris particle (not gameplay-affecting)
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Block kind the particle came from, for color lookup
    pub kind: BlockKind,
    /// 0-1, decreases over time
    pub life: f32,
    pub size: f32,
}

/// Maximum live particles
pub const MAX_PARTICLES: usize = 256;

/// Simulation events for the frontend to turn into sounds, background
/// reloads and high-score persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A ball struck a block (destroyed or not)
    BlockHit,
    /// A block's hit count reached its maximum
    BlockDestroyed { drains_life: bool },
    /// A ball fell past the bottom edge
    BallLost,
    /// A ball touched enough blocks at once to split
    BallSplit,
    /// The last block was destroyed
    LevelCleared { next_level: u32 },
    /// Lives reached zero
    GameOver { score: u32 },
}

/// Complete game state, advanced only by [`super::tick`]
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub level: u32,
    pub lives: u32,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks elapsed in the current speed-ramp interval
    pub ramp_ticks: u64,
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    pub blocks: Vec<Block>,
    /// Visual debris (not gameplay-affecting)
    pub particles: Vec<Particle>,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run at level 1 with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 1,
            lives: STARTING_LIVES,
            score: 0,
            time_ticks: 0,
            ramp_ticks: 0,
            phase: GamePhase::Serve,
            paddle: Paddle::default(),
            balls: Vec::new(),
            blocks: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };

        level::generate_level(&mut state);
        state.spawn_ball_attached();

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a ball attached to the paddle
    pub fn spawn_ball_attached(&mut self) {
        let id = self.next_entity_id();
        let mut ball = Ball::new(id);
        ball.update_attached(&self.paddle);
        self.balls.push(ball);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain pending events (called once per frame by the frontend)
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_serving() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Serve);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.balls.len(), 1);
        assert!(matches!(state.balls[0].state, BallState::Attached { .. }));
        assert!(!state.blocks.is_empty());
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);

        let mut seen = std::collections::HashSet::new();
        for block in &state.blocks {
            assert!(seen.insert(block.id));
        }
    }

    #[test]
    fn test_paddle_clamps_to_window() {
        let mut paddle = Paddle::default();
        paddle.move_by(-1.0, 100.0);
        assert_eq!(paddle.x, 0.0);
        paddle.move_by(1.0, 100.0);
        assert_eq!(paddle.x, WINDOW_WIDTH - paddle.width);
    }

    #[test]
    fn test_attached_ball_follows_paddle() {
        let mut state = GameState::new(3);
        state.paddle.x = 100.0;
        state.balls[0].update_attached(&state.paddle);
        let ball = &state.balls[0];
        assert_eq!(ball.pos.x, state.paddle.center_x());
        assert!(ball.pos.y < state.paddle.top());
    }

    #[test]
    fn test_launch_sends_ball_up() {
        let mut ball = Ball::new(1);
        ball.launch();
        assert_eq!(ball.state, BallState::Free);
        assert!(ball.vel.y < 0.0);
        assert_eq!(ball.vel.x, 0.0);

        // Launching a free ball is a no-op
        let vel = ball.vel;
        ball.launch();
        assert_eq!(ball.vel, vel);
    }

    #[test]
    fn test_block_destruction_threshold() {
        let mut block = Block::new(1, BlockKind::Standard, vec2(0.0, 0.0), 3);
        assert!(!block.is_destroyed());
        block.register_hit();
        block.register_hit();
        assert!(!block.is_destroyed());
        assert!(block.damage() > 0.5);
        block.register_hit();
        assert!(block.is_destroyed());
    }

    #[test]
    fn test_drains_life_by_kind() {
        assert!(!BlockKind::Standard.drains_life());
        assert!(BlockKind::Draining.drains_life());
        assert!(BlockKind::Volatile.drains_life());
        assert!(!BlockKind::Patrol { vel: Vec2::ZERO }.drains_life());
    }

    #[test]
    fn test_patrol_bounces_at_window_edge() {
        let mut block = Block::new(
            1,
            BlockKind::Patrol {
                vel: vec2(PATROL_SPEED, 0.0),
            },
            vec2(WINDOW_WIDTH - BLOCK_WIDTH - 1.0, 100.0),
            20,
        );

        block.patrol(0.5);
        match block.kind {
            BlockKind::Patrol { vel } => assert!(vel.x < 0.0),
            _ => unreachable!(),
        }
        assert!(block.pos.x + block.size.x <= WINDOW_WIDTH);
    }
}
