//! Terminal-side host adapter.
//!
//! Terminals have no rotation sensor, so the adapter decides what
//! orientation to report: either a fixed mode from config, or `auto`, which
//! compares columns against rows scaled by the cell aspect ratio. A manual
//! rotation flips whatever the mode would report.

use crate::config::OrientationMode;
use crate::window::{HostConfig, Orientation};

pub fn orientation_from_cells(cols: u16, rows: u16, cell_aspect: f32) -> Orientation {
    if f32::from(cols) >= f32::from(rows) * cell_aspect {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    }
}

#[derive(Debug, Clone)]
pub struct HostAdapter {
    mode: OrientationMode,
    cell_aspect: f32,
    cols: u16,
    rows: u16,
    rotated: bool,
}

impl HostAdapter {
    pub fn new(mode: OrientationMode, cell_aspect: f32, cols: u16, rows: u16) -> Self {
        Self {
            mode,
            cell_aspect,
            cols,
            rows,
            rotated: false,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Simulated device rotation. A second call returns to the configured mode.
    pub fn toggle_rotation(&mut self) {
        self.rotated = !self.rotated;
    }

    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    pub fn report(&self) -> HostConfig {
        let natural = match self.mode {
            OrientationMode::Auto => orientation_from_cells(self.cols, self.rows, self.cell_aspect),
            OrientationMode::Portrait => Orientation::Portrait,
            OrientationMode::Landscape => Orientation::Landscape,
        };
        HostConfig {
            width: self.cols,
            height: self.rows,
            orientation: if self.rotated {
                natural.flipped()
            } else {
                natural
            },
        }
    }
}
