//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or filesystem dependencies
//!
//! Side effects the frontend cares about (sounds, background reloads,
//! high-score persistence) are communicated through [`GameEvent`]s.

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionResult, ball_aabb_collision, reflect_velocity};
pub use level::generate_level;
pub use state::{
    Ball, BallState, Block, BlockKind, GameEvent, GamePhase, GameState, Paddle, Particle,
};
pub use tick::{TickInput, tick};
