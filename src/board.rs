//! The scratch board mutated by the backtracking placer: a letter matrix
//! plus a parallel per-cell usage map, with strict push/pop commit/revert
//! so the board state is exactly reproducible across the search.

use crate::placement::{Direction, Placement};

/// Per-cell record of which directions a committed placement has claimed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CellUsage {
    pub used_across: bool,
    pub used_down: bool,
}

/// A square scratch board for one backtracking attempt.
#[derive(Debug, Clone)]
pub struct Board {
    side: usize,
    cells: Vec<Vec<Option<char>>>,
    usage: Vec<Vec<CellUsage>>,
}

impl Board {
    /// Creates an empty `side x side` board.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![vec![None; side]; side],
            usage: vec![vec![CellUsage::default(); side]; side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// The letter at `(row, col)`, or `None` if the position is blocked or
    /// out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn usage_at(&self, row: usize, col: usize) -> CellUsage {
        self.usage
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.side && (col as usize) < self.side
    }

    /// The full row-major letter matrix, for trimming and rendering.
    pub fn rows(&self) -> &[Vec<Option<char>>] {
        &self.cells
    }

    /// Checks every adjacency legality rule for placing `word` at
    /// `(row, col)` in `direction`. `row`/`col` may be
    /// negative (candidate generation can propose off-board starts); such
    /// placements are simply illegal.
    pub fn is_legal(&self, word: &str, row: isize, col: isize, direction: Direction) -> bool {
        let side = self.side as isize;
        let (dr, dc) = direction.step();
        let len = word.len() as isize;

        if row < 0 || col < 0 {
            return false;
        }
        let last_row = row + (len - 1) * dr;
        let last_col = col + (len - 1) * dc;
        if last_row < 0 || last_col < 0 || last_row >= side || last_col >= side {
            return false;
        }

        // Rule 2: no touching end-to-end.
        let before = (row - dr, col - dc);
        if self.in_bounds(before.0, before.1)
            && self.get(before.0 as usize, before.1 as usize).is_some()
        {
            return false;
        }
        let after = (row + len * dr, col + len * dc);
        if self.in_bounds(after.0, after.1) && self.get(after.0 as usize, after.1 as usize).is_some()
        {
            return false;
        }

        let letters: Vec<char> = word.chars().collect();
        for k in 0..len {
            let r = row + k * dr;
            let c = col + k * dc;
            let ch = letters[k as usize];

            match self.get(r as usize, c as usize) {
                // Rule 3: letter compatibility. Crossing an existing letter
                // is only legal if it matches.
                Some(existing) if existing != ch => return false,
                Some(_) => continue,
                None => {
                    // Rule 4: no incidental parallel touching. The new
                    // letter's perpendicular neighbors must be empty unless
                    // they belong to a placement crossing this exact cell.
                    let (nr1, nc1, nr2, nc2) = match direction {
                        Direction::Across => (r - 1, c, r + 1, c),
                        Direction::Down => (r, c - 1, r, c + 1),
                    };
                    for (nr, nc) in [(nr1, nc1), (nr2, nc2)] {
                        if !self.in_bounds(nr, nc) {
                            continue;
                        }
                        let (nr, nc) = (nr as usize, nc as usize);
                        if self.get(nr, nc).is_none() {
                            continue;
                        }
                        let allowed = match direction {
                            Direction::Across => self.usage_at(nr, nc).used_down,
                            Direction::Down => self.usage_at(nr, nc).used_across,
                        };
                        if !allowed {
                            return false;
                        }
                    }
                }
            }
        }

        true
    }

    /// Commits `placement`, filling its letters and marking its usage
    /// flags. Returns a record (per cell, in word order) of whether the
    /// cell was empty beforehand, to be passed back to [`Board::revert`].
    pub fn commit(&mut self, placement: &Placement) -> Vec<bool> {
        let mut was_empty = Vec::with_capacity(placement.word.len());
        for (ch, (r, c)) in placement.word.chars().zip(placement.cells()) {
            was_empty.push(self.cells[r][c].is_none());
            self.cells[r][c] = Some(ch);
            match placement.direction {
                Direction::Across => self.usage[r][c].used_across = true,
                Direction::Down => self.usage[r][c].used_down = true,
            }
        }
        was_empty
    }

    /// Reverts a previous [`Board::commit`] of `placement`, given the
    /// record it returned. Clears the usage flag unconditionally and
    /// clears the letter only if no other direction still claims the cell.
    pub fn revert(&mut self, placement: &Placement, was_empty: &[bool]) {
        for (&empty_before, (r, c)) in was_empty.iter().zip(placement.cells()) {
            match placement.direction {
                Direction::Across => self.usage[r][c].used_across = false,
                Direction::Down => self.usage[r][c].used_down = false,
            }
            let still_used = self.usage[r][c].used_across || self.usage[r][c].used_down;
            if !still_used && empty_before {
                self.cells[r][c] = None;
            }
        }
    }
}
