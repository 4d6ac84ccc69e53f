//! Grid geometry
//!
//! This module contains:
//! - Line orientations and the set of orientations a puzzle allows
//! - The square letter grid

/// Line orientations and direction-set building
pub mod direction;
/// Letter grid storage
pub mod grid;

pub use direction::{Direction, DirectionFlags, DirectionSet};
pub use grid::LetterGrid;
