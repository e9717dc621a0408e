//! Crops the working square down to the minimal bounding rectangle of
//! placed letters and translates placements to match.

use crate::board::Board;
use crate::placement::Placement;

/// Crops `board` to the minimal rectangle containing any letter, and
/// translates every placement's `(row, col)` by the same offset. If the
/// board is empty (should be impossible on a successful layout) it is
/// returned unchanged.
pub fn trim(board: &Board, placements: &[Placement]) -> (Vec<Vec<Option<char>>>, Vec<Placement>) {
    let rows = board.rows();

    let mut min_row = None;
    let mut max_row = None;
    let mut min_col = None;
    let mut max_col = None;

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if cell.is_some() {
                min_row = Some(min_row.map_or(r, |m: usize| m.min(r)));
                max_row = Some(max_row.map_or(r, |m: usize| m.max(r)));
                min_col = Some(min_col.map_or(c, |m: usize| m.min(c)));
                max_col = Some(max_col.map_or(c, |m: usize| m.max(c)));
            }
        }
    }

    let (Some(min_row), Some(max_row), Some(min_col), Some(max_col)) =
        (min_row, max_row, min_col, max_col)
    else {
        return (rows.to_vec(), placements.to_vec());
    };

    let trimmed: Vec<Vec<Option<char>>> = rows[min_row..=max_row]
        .iter()
        .map(|row| row[min_col..=max_col].to_vec())
        .collect();

    let translated: Vec<Placement> = placements
        .iter()
        .cloned()
        .map(|mut p| {
            p.row -= min_row;
            p.col -= min_col;
            p
        })
        .collect();

    (trimmed, translated)
}

/// Counts cells where both an across and a down placement cross, for the
/// attempt scoring formula.
pub fn count_crossings(board: &Board) -> usize {
    let mut count = 0;
    for r in 0..board.side() {
        for c in 0..board.side() {
            let usage = board.usage_at(r, c);
            if usage.used_across && usage.used_down {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Direction;

    #[test]
    fn crops_to_minimal_rectangle() {
        let mut board = Board::new(10);
        let placement = Placement {
            word: "CAT".into(),
            clue: "Feline".into(),
            row: 4,
            col: 5,
            direction: Direction::Across,
            entry_index: 0,
            number: 0,
        };
        board.commit(&placement);

        let (grid, translated) = trim(&board, &[placement]);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].len(), 3);
        assert_eq!(translated[0].row, 0);
        assert_eq!(translated[0].col, 0);
    }

    #[test]
    fn counts_true_crossings() {
        let mut board = Board::new(10);
        let across = Placement {
            word: "CAT".into(),
            clue: "Feline".into(),
            row: 5,
            col: 5,
            direction: Direction::Across,
            entry_index: 0,
            number: 0,
        };
        board.commit(&across);
        let down = Placement {
            word: "TAR".into(),
            clue: "Sticky black".into(),
            row: 4,
            col: 6,
            direction: Direction::Down,
            entry_index: 1,
            number: 0,
        };
        board.commit(&down);
        assert_eq!(count_crossings(&board), 1);
    }
}
