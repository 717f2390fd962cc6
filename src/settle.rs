//! SettlingResolver - computes the full waypoint path of a dropped grain
//!
//! The whole trajectory is resolved up front, before any animation plays,
//! and the grid is marked at the resting cell as a side effect of resolving.
//! A drop issued right after another therefore always sees correct
//! occupancy, no matter how slowly the first grain is still animating.

use serde::Serialize;

use crate::grid::Grid;
use crate::random::SpillSource;

/// One position in a grain's precomputed settling path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Waypoint {
    pub row: u32,
    pub col: u32,
}

/// Everything one resolve call works against.
pub struct SettleContext<'a> {
    pub grid: &'a mut Grid,
    pub spill: &'a mut dyn SpillSource,
}

/// Outcome of one settling step.
enum Step {
    /// The grain came to rest; the grid has been marked.
    Rest,
    Move { row: u32, col: u32 },
}

pub struct SettlingResolver;

impl SettlingResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the full path of a grain dropped at (row, col).
    ///
    /// The caller must have verified the start cell empty. The returned path
    /// ends at the resting cell; when no movement is possible at all it is
    /// just the single-element start.
    pub fn resolve(
        &self,
        ctx: &mut SettleContext,
        start_row: u32,
        start_col: u32,
    ) -> Vec<Waypoint> {
        let mut path = Vec::new();
        let mut row = start_row;
        let mut col = start_col;

        loop {
            match self.step(ctx, row, col) {
                Step::Rest => {
                    if path.is_empty() {
                        // Came to rest without moving: the start cell itself
                        // is the whole path.
                        path.push(Waypoint { row, col });
                    }
                    return path;
                }
                Step::Move { row: next_row, col: next_col } => {
                    path.push(Waypoint { row: next_row, col: next_col });
                    row = next_row;
                    col = next_col;
                }
            }
        }
    }

    /// One settling step from (row, col).
    fn step(&self, ctx: &mut SettleContext, row: u32, col: u32) -> Step {
        let floor = ctx.grid.rows() - 1;

        if row == floor {
            ctx.grid.set_filled(row as i32, col as i32);
            return Step::Rest;
        }

        let new_col = self.spill_col(ctx, row as i32, col as i32);

        // Fall to directly above the column's topmost grain, or to the
        // floor when the column is still clear.
        let new_row = match ctx.grid.column_top_filled(new_col) {
            Some(top) => top.saturating_sub(1),
            None => floor,
        };

        if new_row == row && new_col == col as i32 {
            ctx.grid.set_filled(row as i32, col as i32);
            return Step::Rest;
        }

        Step::Move { row: new_row, col: new_col as u32 }
    }

    /// Lateral spill decision: which column does the grain fall in next?
    fn spill_col(&self, ctx: &mut SettleContext, row: i32, col: i32) -> i32 {
        if !ctx.grid.is_filled(row + 1, col) {
            // Straight fall, no decision needed.
            return col;
        }

        let left_open = ctx.grid.is_empty(row + 1, col - 1);
        let right_open = ctx.grid.is_empty(row + 1, col + 1);

        match (left_open, right_open) {
            (true, true) => col + ctx.spill.choose().dx(),
            (false, true) => col + 1,
            (true, false) => col - 1,
            // Jammed: neither diagonal is open, drop in place.
            (false, false) => col,
        }
    }
}

impl Default for SettlingResolver {
    fn default() -> Self {
        Self::new()
    }
}
