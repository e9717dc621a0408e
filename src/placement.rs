//! Direction and placement types: where a single entry ends up on the
//! board once the backtracking search has committed it.

use serde::{Deserialize, Serialize};

/// Orientation of a placed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Direction {
    /// Row/column step for one letter in this direction: `(dr, dc)`.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// A committed decision to put one entry's word at a given position and
/// direction. Immutable once the layout is returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub clue: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    /// Back-reference into the entry list this placement came from.
    pub entry_index: usize,
    /// Assigned by the numbering pass; `0` until then.
    pub number: u32,
}

impl Placement {
    /// The `(row, col)` of every cell this placement occupies, in word order.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = self.direction.step();
        (0..self.word.len())
            .map(|k| {
                (
                    (self.row as isize + k as isize * dr) as usize,
                    (self.col as isize + k as isize * dc) as usize,
                )
            })
            .collect()
    }

    /// The `(row, col)` immediately past the placement's last letter, i.e.
    /// the end-to-end touch check cell.
    pub fn after_end(&self) -> (isize, isize) {
        let (dr, dc) = self.direction.step();
        let len = self.word.len() as isize;
        (self.row as isize + len * dr, self.col as isize + len * dc)
    }

    /// The `(row, col)` immediately before the placement's first letter.
    pub fn before_start(&self) -> (isize, isize) {
        let (dr, dc) = self.direction.step();
        (self.row as isize - dr, self.col as isize - dc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_enumerate_in_word_order() {
        let p = Placement {
            word: "CAT".into(),
            clue: "Feline".into(),
            row: 2,
            col: 3,
            direction: Direction::Across,
            entry_index: 0,
            number: 1,
        };
        assert_eq!(p.cells(), vec![(2, 3), (2, 4), (2, 5)]);
        assert_eq!(p.before_start(), (2, 2));
        assert_eq!(p.after_end(), (2, 6));
    }

    #[test]
    fn down_steps_rows() {
        let p = Placement {
            word: "TAR".into(),
            clue: "Sticky black".into(),
            row: 0,
            col: 0,
            direction: Direction::Down,
            entry_index: 1,
            number: 2,
        };
        assert_eq!(p.cells(), vec![(0, 0), (1, 0), (2, 0)]);
    }
}
