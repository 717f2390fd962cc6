//! Toy simulation - orchestration over grid, resolver, and layout
//!
//! ToyCore is the pure-Rust engine the tests exercise directly; the wasm
//! facade in facade.rs wraps it for the JS frontend. One drop request is
//! resolved synchronously and atomically here: the grid is final before the
//! caller ever sees the path, so overlapping animations cannot race the
//! occupancy state.

use crate::grid::Grid;
use crate::layout::GridLayout;
use crate::playback::PathPlayback;
use crate::random::{SpillSource, XorShiftSpill};
use crate::settle::{SettleContext, SettlingResolver, Waypoint};

mod facade;

pub use facade::{CellRef, Toy};

/// Default seed for the in-engine spill source.
const DEFAULT_SPILL_SEED: u32 = 12345;

/// The toy simulation core.
pub struct ToyCore {
    grid: Grid,
    layout: GridLayout,
    resolver: SettlingResolver,
    spill: Box<dyn SpillSource>,
    grain_count: u32,
}

impl ToyCore {
    pub fn new(layout: GridLayout) -> Self {
        Self::with_spill_source(layout, Box::new(XorShiftSpill::new(DEFAULT_SPILL_SEED)))
    }

    /// Build a core with an injected spill source (tests pin the tie-break).
    pub fn with_spill_source(layout: GridLayout, spill: Box<dyn SpillSource>) -> Self {
        Self {
            grid: Grid::new(layout.rows, layout.cols),
            layout,
            resolver: SettlingResolver::new(),
            spill,
            grain_count: 0,
        }
    }

    pub fn layout(&self) -> &GridLayout { &self.layout }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    /// Grains dropped since creation or the last clear.
    pub fn grain_count(&self) -> u32 { self.grain_count }

    /// Can the UI paint here? In-range empty cells only.
    pub fn paintable(&self, row: i32, col: i32) -> bool {
        self.grid.is_empty(row, col)
    }

    /// Drop a grain at (row, col): resolve its full settling path and mark
    /// the resting cell.
    ///
    /// Returns None when the cell is not paintable. Drag input revisits
    /// cells constantly, so rejection is the normal quiet path, not an
    /// error.
    pub fn drop_at(&mut self, row: i32, col: i32) -> Option<Vec<Waypoint>> {
        if !self.grid.is_empty(row, col) {
            return None;
        }

        let mut ctx = SettleContext {
            grid: &mut self.grid,
            spill: self.spill.as_mut(),
        };
        let path = self.resolver.resolve(&mut ctx, row as u32, col as u32);

        self.grain_count += 1;
        Some(path)
    }

    /// Playback cursor for a path that started at (row, col).
    pub fn playback(&self, start_row: u32, start_col: u32, path: &[Waypoint]) -> PathPlayback {
        let start = Waypoint { row: start_row, col: start_col };
        PathPlayback::new(start, path, &self.layout)
    }

    /// Re-seed the spill source, for reproducible sessions.
    pub fn set_spill_seed(&mut self, seed: u32) {
        self.spill = Box::new(XorShiftSpill::new(seed));
    }

    /// Empty the grid and reset the grain counter.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.grain_count = 0;
    }
}

impl Default for ToyCore {
    fn default() -> Self {
        Self::new(GridLayout::default())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
