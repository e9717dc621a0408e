//! Assigns standard crossword numbering to a trimmed layout and builds the
//! ordered Across/Down clue lists.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::placement::{Direction, Placement};

/// One entry in an ordered clue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    pub number: u32,
    pub clue_text: String,
    pub answer_length: usize,
}

/// Walks `grid` in row-major order, assigning numbers starting at 1 to
/// every cell that is the start of at least one placement (a placement's
/// `(row, col)` is always its start cell, by construction). Returns the
/// numbers map and the Across/Down clue lists, sorted by ascending number.
pub fn number_layout(
    grid: &[Vec<Option<char>>],
    placements: &mut [Placement],
) -> (Vec<Vec<Option<u32>>>, Vec<ClueEntry>, Vec<ClueEntry>) {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);

    let mut starts: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
    for (idx, p) in placements.iter().enumerate() {
        starts.entry((p.row, p.col)).or_default().push(idx);
    }

    let mut numbers_map = vec![vec![None; cols]; rows];
    let mut next_number = 1u32;

    for r in 0..rows {
        for c in 0..cols {
            if grid[r][c].is_none() {
                continue;
            }
            if let Some(indices) = starts.get(&(r, c)) {
                numbers_map[r][c] = Some(next_number);
                for &idx in indices {
                    placements[idx].number = next_number;
                }
                next_number += 1;
            }
        }
    }

    let mut across_clues: Vec<ClueEntry> = placements
        .iter()
        .filter(|p| p.direction == Direction::Across)
        .map(|p| ClueEntry {
            number: p.number,
            clue_text: p.clue.clone(),
            answer_length: p.word.len(),
        })
        .collect();
    across_clues.sort_by_key(|c| c.number);

    let mut down_clues: Vec<ClueEntry> = placements
        .iter()
        .filter(|p| p.direction == Direction::Down)
        .map(|p| ClueEntry {
            number: p.number,
            clue_text: p.clue.clone(),
            answer_length: p.word.len(),
        })
        .collect();
    down_clues.sort_by_key(|c| c.number);

    (numbers_map, across_clues, down_clues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_row_major_and_shares_crossing_cells() {
        // CAT across at (0,0), TAR down at (0,2) crossing CAT's 'T'.
        let grid = vec![
            vec![Some('C'), Some('A'), Some('T')],
            vec![None, None, Some('A')],
            vec![None, None, Some('R')],
        ];
        let mut placements = vec![
            Placement {
                word: "CAT".into(),
                clue: "Feline".into(),
                row: 0,
                col: 0,
                direction: Direction::Across,
                entry_index: 0,
                number: 0,
            },
            Placement {
                word: "TAR".into(),
                clue: "Sticky black".into(),
                row: 0,
                col: 2,
                direction: Direction::Down,
                entry_index: 1,
                number: 0,
            },
        ];

        let (numbers_map, across, down) = number_layout(&grid, &mut placements);
        assert_eq!(numbers_map[0][0], Some(1));
        assert_eq!(numbers_map[0][2], Some(2));
        assert_eq!(across.len(), 1);
        assert_eq!(down.len(), 1);
        assert_eq!(across[0].number, 1);
        assert_eq!(down[0].number, 2);
        assert_eq!(placements[0].number, 1);
        assert_eq!(placements[1].number, 2);
    }

    #[test]
    fn clue_lists_sorted_ascending() {
        let grid = vec![vec![Some('A'), Some('B')], vec![Some('C'), Some('D')]];
        let mut placements = vec![
            Placement {
                word: "CD".into(),
                clue: "second across".into(),
                row: 1,
                col: 0,
                direction: Direction::Across,
                entry_index: 0,
                number: 0,
            },
            Placement {
                word: "AB".into(),
                clue: "first across".into(),
                row: 0,
                col: 0,
                direction: Direction::Across,
                entry_index: 1,
                number: 0,
            },
        ];
        let (_, across, _) = number_layout(&grid, &mut placements);
        assert_eq!(across[0].clue_text, "first across");
        assert_eq!(across[1].clue_text, "second across");
        assert!(across[0].number < across[1].number);
    }
}
