//! Filler pass: random letters for every cell no word claimed

use crate::io::configuration::FILLER_ALPHABET;
use crate::spatial::LetterGrid;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Uniformly random letter from the filler alphabet
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    // Alphabet is a non-empty constant
    FILLER_ALPHABET.choose(rng).copied().unwrap_or(b'A')
}

/// Fill every empty cell independently, returning how many were filled
///
/// Filler letters may spell unintended words; no check is made.
pub fn fill_empty_cells<R: Rng + ?Sized>(grid: &mut LetterGrid, rng: &mut R) -> usize {
    let empty = grid.empty_count();
    grid.fill_empty_with(|| random_letter(rng));
    empty
}
