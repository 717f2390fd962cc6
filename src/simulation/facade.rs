use wasm_bindgen::prelude::*;

use crate::layout::GridLayout;
use crate::playback::Leg;
use crate::settle::Waypoint;

use super::ToyCore;

/// Pointer-pick result handed to JS. Row and col are -1 when nothing
/// paintable is under the pointer.
#[wasm_bindgen]
pub struct CellRef {
    row: i32,
    col: i32,
}

#[wasm_bindgen]
impl CellRef {
    #[wasm_bindgen(getter)]
    pub fn row(&self) -> i32 { self.row }

    #[wasm_bindgen(getter)]
    pub fn col(&self) -> i32 { self.col }

    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool { self.row >= 0 }
}

#[wasm_bindgen]
pub struct Toy {
    core: ToyCore,
    last_path: Vec<Leg>,
}

#[wasm_bindgen]
impl Toy {
    /// Create a toy with the classic default layout, seeded from JS entropy.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut toy = Self {
            core: ToyCore::new(GridLayout::default()),
            last_path: Vec::new(),
        };
        toy.core.set_spill_seed((js_sys::Math::random() * u32::MAX as f64) as u32);
        toy
    }

    /// Create a toy from a layout JSON string; unknown fields default.
    #[wasm_bindgen(js_name = withLayoutJson)]
    pub fn with_layout_json(json: &str) -> Result<Toy, JsValue> {
        let layout = GridLayout::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        let mut toy = Toy {
            core: ToyCore::new(layout),
            last_path: Vec::new(),
        };
        toy.core.set_spill_seed((js_sys::Math::random() * u32::MAX as f64) as u32);
        Ok(toy)
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn grain_count(&self) -> u32 { self.core.grain_count() }

    /// Pin the spill tie-break sequence, for reproducible sessions.
    #[wasm_bindgen(js_name = setSpillSeed)]
    pub fn set_spill_seed(&mut self, seed: u32) {
        self.core.set_spill_seed(seed);
    }

    /// Cell under a pointer position; invalid when the point is off the
    /// grid or the cell is already settled.
    #[wasm_bindgen(js_name = pickCell)]
    pub fn pick_cell(&self, x: f32, y: f32) -> CellRef {
        match self.core.layout().cell_at(x, y) {
            Some((row, col)) if self.core.paintable(row, col) => CellRef { row, col },
            _ => CellRef { row: -1, col: -1 },
        }
    }

    #[wasm_bindgen(js_name = isPaintable)]
    pub fn is_paintable(&self, row: i32, col: i32) -> bool {
        self.core.paintable(row, col)
    }

    /// Drop a grain and resolve its settling path.
    ///
    /// Returns the number of animation legs (0 = rejected); the animator
    /// reads them back with the waypoint_* getters and plays them strictly
    /// in order.
    #[wasm_bindgen(js_name = dropAt)]
    pub fn drop_at(&mut self, row: i32, col: i32) -> usize {
        let Some(path) = self.core.drop_at(row, col) else {
            self.last_path.clear();
            return 0;
        };

        let start = Waypoint { row: row as u32, col: col as u32 };
        self.last_path = Leg::sequence(start, &path, self.core.layout());
        self.last_path.len()
    }

    // === Indexed access to the most recent path ===

    #[wasm_bindgen(js_name = waypointRow)]
    pub fn waypoint_row(&self, idx: usize) -> u32 {
        self.last_path.get(idx).map_or(0, |leg| leg.row)
    }

    #[wasm_bindgen(js_name = waypointCol)]
    pub fn waypoint_col(&self, idx: usize) -> u32 {
        self.last_path.get(idx).map_or(0, |leg| leg.col)
    }

    #[wasm_bindgen(js_name = waypointLeft)]
    pub fn waypoint_left(&self, idx: usize) -> f32 {
        self.last_path.get(idx).map_or(0.0, |leg| leg.left)
    }

    #[wasm_bindgen(js_name = waypointTop)]
    pub fn waypoint_top(&self, idx: usize) -> f32 {
        self.last_path.get(idx).map_or(0.0, |leg| leg.top)
    }

    #[wasm_bindgen(js_name = waypointDurationMs)]
    pub fn waypoint_duration_ms(&self, idx: usize) -> u32 {
        self.last_path.get(idx).map_or(0, |leg| leg.duration_ms)
    }

    /// The most recent path as one JSON array of legs, for animators that
    /// prefer a structured handoff over indexed getters.
    #[wasm_bindgen(js_name = lastPathJson)]
    pub fn last_path_json(&self) -> String {
        serde_json::to_string(&self.last_path).unwrap_or_else(|_| "[]".to_string())
    }

    /// Empty the grid and reset the grain counter.
    pub fn clear(&mut self) {
        self.core.clear();
        self.last_path.clear();
    }
}

impl Default for Toy {
    fn default() -> Self {
        Self::new()
    }
}
