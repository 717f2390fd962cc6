//! PathPlayback - sequential cursor over a settled grain's animation legs
//!
//! The path is fully resolved before playback starts, so no completion
//! callbacks need to recurse: the animator tweens one leg, reports it done,
//! and asks for the next. Legs of one grain never overlap; separate grains
//! get separate playbacks and may run concurrently, because their logical
//! outcome was already serialized through the grid when they were resolved.

use serde::Serialize;

use crate::layout::GridLayout;
use crate::settle::Waypoint;

/// One animation leg: tween to (left, top) over duration_ms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leg {
    pub row: u32,
    pub col: u32,
    pub left: f32,
    pub top: f32,
    pub duration_ms: u32,
}

impl Leg {
    /// Pixel targets and durations for every leg of a path. The first leg
    /// starts at the drop cell itself.
    pub fn sequence(start: Waypoint, path: &[Waypoint], layout: &GridLayout) -> Vec<Leg> {
        let mut legs = Vec::with_capacity(path.len());
        let mut prev = start;
        for &wp in path {
            let (left, top) = layout.cell_origin(wp.row, wp.col);
            legs.push(Leg {
                row: wp.row,
                col: wp.col,
                left,
                top,
                duration_ms: layout.leg_duration_ms(prev, wp),
            });
            prev = wp;
        }
        legs
    }
}

/// Playback state for one grain's path.
pub struct PathPlayback {
    legs: Vec<Leg>,
    index: usize,
}

impl PathPlayback {
    pub fn new(start: Waypoint, path: &[Waypoint], layout: &GridLayout) -> Self {
        Self {
            legs: Leg::sequence(start, path, layout),
            index: 0,
        }
    }

    /// Next leg to play, advancing the cursor; None once the path is done.
    pub fn advance(&mut self) -> Option<Leg> {
        let leg = self.legs.get(self.index).copied()?;
        self.index += 1;
        Some(leg)
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.legs.len() - self.index
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.legs.len()
    }
}
