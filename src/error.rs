//! Defines the error types used throughout the crossword layout engine.
//! This module provides a structured way to report issues that can arise
//! during normalization, grid sizing, and backtracking placement.

use thiserror::Error;

/// Every failure the engine's public entry points can surface. Normalizer
/// failures happen before search ever starts; the placer is the only later
/// stage that can fail on otherwise-valid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The raw input was not an ordered sequence of objects.
    #[error("input must be a JSON array of entry objects")]
    InvalidInputShape,

    /// Every candidate entry was rejected during normalization.
    #[error("no valid entries remained after normalization")]
    NoValidEntries,

    /// Fewer normalized entries are available than the engine requires.
    #[error("not enough entries: need at least {min}, found {found}")]
    NotEnoughEntries { min: usize, found: usize },

    /// The caller requested fewer entries than `MIN_WORDS`.
    #[error("requested count {requested} is below the minimum of {min}")]
    CountBelowMinimum { requested: usize, min: usize },

    /// The caller requested more entries than are available.
    #[error("requested count {requested} exceeds the {available} entries available")]
    CountExceedsAvailable { requested: usize, available: usize },

    /// No attempt, across the full outer loop, produced a layout containing
    /// every requested entry.
    #[error("could not place all {requested} entries onto a grid after {attempts} attempts")]
    Unplaceable { requested: usize, attempts: usize },
}
