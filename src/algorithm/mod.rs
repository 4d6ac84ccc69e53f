/// Random filler for unclaimed cells
pub mod filler;
/// Generation entry point and placement loop
pub mod generator;
/// Feasibility checks and committing words to the grid
pub mod placement;
/// Layout constraints for a run
pub mod settings;

pub use generator::{PuzzleGenerator, WordGrid};
pub use placement::PlacedWord;
pub use settings::GameSettings;
