//! Collision detection and response
//!
//! Everything in the playfield is either a circle (balls) or an
//! axis-aligned box (paddle, blocks), so the whole collision story is
//! circle/AABB overlap tests plus a reflection helper.

use glam::{Vec2, vec2};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left position and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal pointing away from the box (for reflection)
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check collision between a ball and an axis-aligned box.
///
/// The normal points from the box surface toward the ball center. When the
/// ball center is inside the box (tunneling case), the normal follows the
/// axis of least overlap so the reflection pushes the ball back out the
/// way it came in.
pub fn ball_aabb_collision(ball_pos: Vec2, ball_radius: f32, aabb: &Aabb) -> CollisionResult {
    let closest = ball_pos.clamp(aabb.min, aabb.max);
    let delta = ball_pos - closest;
    let dist_sq = delta.length_squared();

    if dist_sq > ball_radius * ball_radius {
        return CollisionResult::miss();
    }

    if dist_sq > 1e-6 {
        // Center outside the box: normal is from the closest surface point
        let dist = dist_sq.sqrt();
        return CollisionResult {
            hit: true,
            normal: delta / dist,
            penetration: ball_radius - dist,
        };
    }

    // Center inside the box: exit through the nearest face
    let left = ball_pos.x - aabb.min.x;
    let right = aabb.max.x - ball_pos.x;
    let top = ball_pos.y - aabb.min.y;
    let bottom = aabb.max.y - ball_pos.y;

    let min_exit = left.min(right).min(top).min(bottom);
    let normal = if min_exit == left {
        vec2(-1.0, 0.0)
    } else if min_exit == right {
        vec2(1.0, 0.0)
    } else if min_exit == top {
        vec2(0.0, -1.0)
    } else {
        vec2(0.0, 1.0)
    };

    CollisionResult {
        hit: true,
        normal,
        penetration: ball_radius + min_exit,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
