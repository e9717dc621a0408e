//! A crossword layout engine.
//!
//! Takes a list of (answer, clue) pairs and produces a compact American-style
//! crossword grid in which every supplied answer appears exactly once,
//! crossing letters agree, and parallel answers never accidentally spell an
//! uninvited word. The engine is a five-stage pipeline:
//!
//! 1. [`entry::normalize`]: cleans raw JSON input into a canonical entry list.
//! 2. [`sizer::grid_side`]: picks a square working-board side from the total
//!    letter count.
//! 3. [`overlap::OverlapMatrix`]: precomputes letter coincidences between
//!    every pair of entries.
//! 4. [`placer`]: backtracking search that places a seed entry, then the
//!    remaining entries via overlap-ordered candidates and adjacency-aware
//!    legality checks, across up to [`config::MAX_ATTEMPTS`] attempts.
//! 5. [`trim`] / [`numbering`]: crops to the bounding rectangle of placed
//!    letters and assigns standard crossword numbering.
//!
//! The engine is synchronous and single-threaded: a call to
//! [`create_puzzle`] owns its board, usage map, placement list, and random
//! source from entry to return, and touches no global state. A caller
//! building a responsive UI on top of this should run generation on a
//! worker thread and communicate over a channel carrying a request
//! `{entries, requested_count}`, free-form progress strings (also mirrored
//! through the `on_progress` callback below and the `log` facade), and a
//! terminal `Result<LayoutResult, Error>`. The engine itself does not
//! spawn threads.

pub mod board;
pub mod config;
pub mod entry;
pub mod error;
pub mod numbering;
pub mod overlap;
pub mod placement;
pub mod placer;
pub mod sizer;
pub mod trim;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

pub use config::GenerationConfig;
pub use entry::{normalize, Entry};
pub use error::Error;
pub use numbering::ClueEntry;
pub use placement::{Direction, Placement};

use config::{MAX_WORDS, MIN_WORDS};

/// Options for a single [`create_puzzle`] call.
#[derive(Default)]
pub struct CreateOptions<'a> {
    /// Invoked with human-readable phase strings (e.g. "Layout attempt 3 of
    /// 80"). Must be side-effect-only: a panic inside it is the caller's
    /// bug, not the engine's, and is not caught here.
    pub on_progress: Option<&'a dyn Fn(&str)>,
    /// Seed for the random source. Determinism is a configuration option,
    /// not a correctness requirement; omit for implementation-defined
    /// randomness.
    pub seed: Option<u64>,
}

/// The bundle returned by a successful [`create_puzzle`] call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult {
    pub grid: Vec<Vec<Option<char>>>,
    pub placements: Vec<Placement>,
    pub numbers_map: Vec<Vec<Option<u32>>>,
    pub across_clues: Vec<ClueEntry>,
    pub down_clues: Vec<ClueEntry>,
    pub requested_count: usize,
    pub rows: usize,
    pub cols: usize,
}

fn validate_count(available: usize, requested_count: usize) -> Result<(), Error> {
    if requested_count < MIN_WORDS {
        return Err(Error::CountBelowMinimum {
            requested: requested_count,
            min: MIN_WORDS,
        });
    }
    if available < MIN_WORDS {
        return Err(Error::NotEnoughEntries {
            min: MIN_WORDS,
            found: available,
        });
    }
    if requested_count > MAX_WORDS || requested_count > available {
        return Err(Error::CountExceedsAvailable {
            requested: requested_count,
            available: available.min(MAX_WORDS),
        });
    }
    Ok(())
}

/// Picks `requested_count` entries out of `entries` via the call's random
/// source, preserving their relative input order.
fn choose_subset(entries: &[Entry], requested_count: usize, rng: &mut StdRng) -> Vec<Entry> {
    if requested_count >= entries.len() {
        return entries.to_vec();
    }
    let mut indices = index::sample(rng, entries.len(), requested_count).into_vec();
    indices.sort_unstable();
    indices.into_iter().map(|i| entries[i].clone()).collect()
}

fn report(options: &CreateOptions, message: &str) {
    log::debug!("{message}");
    if let Some(callback) = options.on_progress {
        callback(message);
    }
}

/// Generates a crossword layout from `entries`, a caller-chosen
/// `requested_count` of them, and the tuning/callback `options`.
///
/// # Errors
///
/// - [`Error::CountBelowMinimum`] if `requested_count < MIN_WORDS`.
/// - [`Error::CountExceedsAvailable`] if `requested_count` exceeds either
///   `entries.len()` or `MAX_WORDS`.
/// - [`Error::Unplaceable`] if no attempt, across `config.max_attempts`
///   tries, placed every chosen entry.
pub fn create_puzzle(
    entries: &[Entry],
    requested_count: usize,
    config: &GenerationConfig,
    options: CreateOptions,
) -> Result<LayoutResult, Error> {
    validate_count(entries.len(), requested_count)?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let subset = choose_subset(entries, requested_count, &mut rng);
    let side = sizer::grid_side(&subset, config);
    let overlap = overlap::OverlapMatrix::build(&subset);

    let mut best: Option<(f64, board::Board, Vec<Placement>)> = None;

    for attempt_num in 1..=config.max_attempts {
        report(
            &options,
            &format!("Layout attempt {attempt_num} of {}", config.max_attempts),
        );

        let Some((board, placements)) = placer::attempt(&subset, &overlap, side, &mut rng) else {
            continue;
        };

        let crossings = trim::count_crossings(&board);
        let (trimmed_grid, _) = trim::trim(&board, &placements);
        let total_cells = trimmed_grid.len() * trimmed_grid.first().map_or(0, Vec::len);
        let filled_cells: usize = trimmed_grid
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count();
        let fill_ratio = if total_cells == 0 {
            0.0
        } else {
            filled_cells as f64 / total_cells as f64
        };
        let score = fill_ratio + config.crossing_bonus * crossings as f64;

        let is_better = best
            .as_ref()
            .map_or(true, |(best_score, _, _)| score > *best_score);
        if is_better {
            best = Some((score, board, placements));
        }

        if score >= config.early_exit_score {
            break;
        }
    }

    let Some((_, board, placements)) = best else {
        return Err(Error::Unplaceable {
            requested: requested_count,
            attempts: config.max_attempts,
        });
    };

    let (grid, mut placements) = trim::trim(&board, &placements);
    let (numbers_map, across_clues, down_clues) = numbering::number_layout(&grid, &mut placements);

    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);

    Ok(LayoutResult {
        grid,
        placements,
        numbers_map,
        across_clues,
        down_clues,
        requested_count,
        rows,
        cols,
    })
}
