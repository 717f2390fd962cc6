//! GridLayout - grid dimensions, pixel geometry, and animation timing
//!
//! The frontend positions the grid on a canvas; this module owns the
//! pointer -> cell and cell -> pixel arithmetic so both sides agree on it,
//! plus the per-leg durations the animator plays back.

use serde::{Deserialize, Serialize};

use crate::settle::Waypoint;

/// Lateral legs play faster than straight falls.
const LATERAL_DURATION_SCALE: f32 = 0.4;

/// Grid geometry and animation timing.
///
/// Defaults match the classic toy: 20x40 cells of 20px with the grid origin
/// at (50, 50) and one second per vertical leg. All fields are fixed for the
/// lifetime of a toy instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    pub cell_size: f32,
    pub left: f32,
    pub top: f32,
    pub base_duration_ms: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 40,
            cell_size: 20.0,
            left: 50.0,
            top: 50.0,
            base_duration_ms: 1000,
        }
    }
}

impl GridLayout {
    /// Parse and validate a layout from JSON. Missing fields fall back to
    /// the defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let layout: GridLayout = serde_json::from_str(json).map_err(|e| e.to_string())?;
        layout.validate()?;
        Ok(layout)
    }

    fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err(format!(
                "grid needs at least one row and column, got {}x{}",
                self.rows, self.cols
            ));
        }
        if self.cell_size <= 0.0 {
            return Err(format!("cell size must be positive, got {}", self.cell_size));
        }
        Ok(())
    }

    /// Cell under a pointer position, or None outside the grid rectangle.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(i32, i32)> {
        let col = ((x - self.left) / self.cell_size).floor();
        let row = ((y - self.top) / self.cell_size).floor();
        if row < 0.0 || row >= self.rows as f32 || col < 0.0 || col >= self.cols as f32 {
            return None;
        }
        Some((row as i32, col as i32))
    }

    /// Pixel position of a cell's top-left corner.
    pub fn cell_origin(&self, row: u32, col: u32) -> (f32, f32) {
        (
            col as f32 * self.cell_size + self.left,
            row as f32 * self.cell_size + self.top,
        )
    }

    /// Duration of one animation leg: base speed for a straight fall,
    /// faster when the grain also moves sideways.
    pub fn leg_duration_ms(&self, from: Waypoint, to: Waypoint) -> u32 {
        if from.col == to.col {
            self.base_duration_ms
        } else {
            (self.base_duration_ms as f32 * LATERAL_DURATION_SCALE) as u32
        }
    }
}
