//! Picks the working-board side length from the total letter count of the
//! entries being placed.

use crate::config::GenerationConfig;
use crate::entry::Entry;

/// Computes the square working-board side for `entries`.
///
/// `side = clamp(ceil(sqrt(2 * total_letters)), min_grid_size, max_grid_size)`.
/// A density near 50% leaves the search loose enough to satisfy adjacency
/// rules yet tight enough to keep the layout compact after trimming.
pub fn grid_side(entries: &[Entry], config: &GenerationConfig) -> usize {
    let total_letters: usize = entries.iter().map(|e| e.word.len()).sum();
    let raw = ((2 * total_letters) as f64).sqrt().ceil() as usize;
    raw.clamp(config.min_grid_size, config.max_grid_size)
}
