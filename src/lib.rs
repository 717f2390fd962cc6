//! Sandfall Engine - grid-settling simulation for a falling-sand toy
//!
//! The JS frontend owns rendering, pointer events, and tween playback; this
//! crate owns the occupancy grid and the settling paths:
//! - grid       - occupancy bookkeeping
//! - settle     - waypoint path resolution
//! - random     - spill tie-break source
//! - layout     - pixel geometry and animation timing
//! - playback   - sequential leg cursor for the animator
//! - simulation - orchestration and the wasm facade

pub mod grid;
pub mod layout;
pub mod playback;
pub mod random;
pub mod settle;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Sandfall WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use grid::{Cell, Grid};
pub use layout::GridLayout;
pub use playback::{Leg, PathPlayback};
pub use random::{FixedSpill, Spill, SpillSource, XorShiftSpill};
pub use settle::{SettleContext, SettlingResolver, Waypoint};
pub use simulation::{CellRef, Toy, ToyCore};
