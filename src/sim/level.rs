//! Hard-coded level layouts
//!
//! Five handmade layouts; levels past the fifth cycle through them while
//! the volatile top row keeps growing with the level number.

use glam::vec2;

use super::state::{Block, BlockKind, GameState};
use crate::consts::*;

/// Number of distinct layouts before they cycle
pub const LAYOUT_CYCLE: u32 = 5;

/// Horizontal stride of a block column
const COL_STRIDE: f32 = BLOCK_WIDTH + BLOCK_GAP;
/// Columns that fit in the volatile top row before it wraps
const TOP_ROW_COLS: u32 = 12;

/// Populate `state.blocks` with the layout for `state.level`
pub fn generate_level(state: &mut GameState) {
    state.blocks.clear();
    let level = state.level;

    // Volatile top row, one block per level; wraps into extra rows once
    // the count outgrows the window
    for i in 0..level {
        let col = i % TOP_ROW_COLS;
        let row = i / TOP_ROW_COLS;
        let pos = vec2(50.0 + col as f32 * COL_STRIDE, 20.0 + row as f32 * 30.0);
        let id = state.next_entity_id();
        state.blocks.push(Block::new(id, BlockKind::Volatile, pos, 1));
    }

    match (level - 1) % LAYOUT_CYCLE + 1 {
        1 => {
            push_row(state, BlockKind::Standard, 10, 5, 100.0, 100.0);
        }
        2 => {
            push_row(state, BlockKind::Standard, 10, 5, 100.0, 100.0);
            push_row(state, BlockKind::Standard, 10, 5, 100.0, 130.0);
        }
        3 => {
            push_row(state, BlockKind::Standard, 10, 5, 100.0, 100.0);
            push_row(state, BlockKind::Standard, 10, 5, 100.0, 130.0);
            push_row(state, BlockKind::Draining, 10, 5, 100.0, 160.0);
        }
        4 => {
            push_row(state, BlockKind::Standard, 10, 5, 100.0, 100.0);
            push_row(state, BlockKind::Standard, 10, 5, 100.0, 130.0);
            push_row(state, BlockKind::Draining, 10, 5, 100.0, 160.0);
            push_row(state, BlockKind::Volatile, 1, 5, 100.0, 190.0);
        }
        5 => {
            // Boss layout
            push_row(state, BlockKind::Draining, 10, 10, 50.0, 100.0);
            push_row(state, BlockKind::Volatile, 1, 10, 50.0, 130.0);
            push_row(
                state,
                BlockKind::Patrol {
                    vel: vec2(PATROL_SPEED, 0.0),
                },
                20,
                5,
                100.0,
                160.0,
            );
        }
        _ => unreachable!(),
    }
}

fn push_row(state: &mut GameState, kind: BlockKind, max_hits: u32, count: u32, x0: f32, y: f32) {
    for i in 0..count {
        let pos = vec2(x0 + i as f32 * COL_STRIDE, y);
        let id = state.next_entity_id();
        state.blocks.push(Block::new(id, kind, pos, max_hits));
    }
}
