//! Layout constraints for a generation run

use crate::io::configuration::{DEFAULT_DIFFICULTY, MAX_GRID_SIZE, preset_grid_size};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{DirectionFlags, DirectionSet};
use crate::words::Difficulty;

/// Grid size, difficulty and allowed orientations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSettings {
    /// Side of the square grid
    pub grid_size: usize,
    /// Difficulty used for word filtering and word supply
    pub difficulty: Difficulty,
    /// Orientation switches
    pub directions: DirectionFlags,
}

impl GameSettings {
    /// Preset grid size for the difficulty, every orientation enabled
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            grid_size: preset_grid_size(difficulty),
            difficulty,
            directions: DirectionFlags::ALL,
        }
    }

    /// Replace the grid size
    #[must_use]
    pub const fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Replace the orientation switches
    #[must_use]
    pub const fn with_directions(mut self, directions: DirectionFlags) -> Self {
        self.directions = directions;
        self
    }

    /// Check the settings can drive a generation run
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid size is zero or larger than
    /// `MAX_GRID_SIZE`
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &"grid must be at least 1x1",
            ));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &format!("grid side may not exceed {MAX_GRID_SIZE}"),
            ));
        }
        Ok(())
    }

    /// Orientations usable under these settings
    pub fn direction_set(&self) -> DirectionSet {
        DirectionSet::from_flags(self.directions)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::for_difficulty(DEFAULT_DIFFICULTY)
    }
}
