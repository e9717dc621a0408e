//! Tuning constants and configuration structs for the layout engine.
//!
//! These constants are part of the crate's external contract: callers rely
//! on `MIN_WORDS`/`MAX_WORDS` to size their own UI before ever calling
//! [`crate::create_puzzle`].

/// Minimum number of entries a generation request may ask for.
pub const MIN_WORDS: usize = 5;
/// Maximum number of entries a generation request may ask for.
pub const MAX_WORDS: usize = 25;
/// Minimum accepted word length after normalization.
pub const MIN_WORD_LEN: usize = 2;
/// Maximum accepted word length after normalization.
pub const MAX_WORD_LEN: usize = 12;
/// Lower clamp on the working-square grid side.
pub const MIN_GRID_SIZE: usize = 10;
/// Upper clamp on the working-square grid side.
pub const MAX_GRID_SIZE: usize = 25;
/// Number of independent backtracking attempts the placer performs.
pub const MAX_ATTEMPTS: usize = 80;
/// Score at or above which the outer attempt loop exits early.
pub const EARLY_EXIT_SCORE: f64 = 0.85;
/// Per-crossing-cell bonus added to a layout's fill-ratio score.
pub const CROSSING_BONUS: f64 = 0.02;

/// Configuration for [`crate::entry::normalize`].
///
/// Mirrors the `{min_entries, max_word_len, min_word_len}` fields a caller
/// passes to normalization. `min_entries` is advisory (normalization
/// itself never fails on count, only on an empty surviving list) and is
/// consulted by callers that want to pre-validate before calling
/// [`crate::create_puzzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Advisory minimum entry count a caller intends to request later.
    pub min_entries: usize,
    /// Maximum accepted word length; longer words are discarded.
    pub max_word_len: usize,
    /// Minimum accepted word length; shorter words are discarded.
    pub min_word_len: usize,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            min_entries: MIN_WORDS,
            max_word_len: MAX_WORD_LEN,
            min_word_len: MIN_WORD_LEN,
        }
    }
}

/// Configuration for [`crate::create_puzzle`], defaulting to the tuning
/// constants above. Exposed separately so tests can shrink `max_attempts`
/// for speed without touching the engine's compiled-in defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Lower clamp on the working-square grid side.
    pub min_grid_size: usize,
    /// Upper clamp on the working-square grid side.
    pub max_grid_size: usize,
    /// Number of independent backtracking attempts to perform.
    pub max_attempts: usize,
    /// Score at or above which the outer attempt loop exits early.
    pub early_exit_score: f64,
    /// Per-crossing-cell bonus added to a layout's score.
    pub crossing_bonus: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_grid_size: MIN_GRID_SIZE,
            max_grid_size: MAX_GRID_SIZE,
            max_attempts: MAX_ATTEMPTS,
            early_exit_score: EARLY_EXIT_SCORE,
            crossing_bonus: CROSSING_BONUS,
        }
    }
}
