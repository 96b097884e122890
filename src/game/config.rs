use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::state::Position;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Pixel size of one cell for pixel-based frontends.
    /// The terminal renderer draws each cell two characters wide instead.
    pub cell_size: u32,
    /// Milliseconds between two ticks
    pub tick_interval_ms: u64,
    /// Points awarded per food eaten
    pub score_increment: u32,
    /// Cell the single-segment snake starts on
    pub start: Position,
    /// Cell the first food is placed on, when it is free
    pub start_food: Position,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 50,
            grid_height: 35,
            cell_size: 20,
            tick_interval_ms: 100,
            score_increment: 10,
            start: Position::new(10, 10),
            start_food: Position::new(15, 10),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            start: Position::new(2, 2),
            start_food: Position::new(5, 2),
            ..Self::new(10, 10)
        }
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Reject configurations the game cannot run on
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width >= 2 && self.grid_height >= 1,
            "grid must be at least 2x1 cells, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.grid_width <= i32::MAX as usize && self.grid_height <= i32::MAX as usize,
            "grid dimensions do not fit in i32 coordinates"
        );
        ensure!(self.tick_interval_ms > 0, "tick interval must be positive");
        if !self.contains(self.start) {
            bail!(
                "start cell ({}, {}) lies outside the {}x{} grid",
                self.start.x,
                self.start.y,
                self.grid_width,
                self.grid_height
            );
        }
        Ok(())
    }
}
