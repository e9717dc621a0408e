//! Precomputes every letter coincidence between pairs of entries. The
//! resulting matrix drives both seed selection and candidate ordering in
//! the backtracking placer.

use std::collections::HashMap;

use crate::entry::Entry;

/// A mapping from ordered index pair `(i, j)` (`i != j`) to every
/// `(i_pos, j_pos)` position pair where `entries[i].word[i_pos] ==
/// entries[j].word[j_pos]`, plus the per-entry total coincidence count.
#[derive(Debug, Clone)]
pub struct OverlapMatrix {
    pairs: HashMap<(usize, usize), Vec<(usize, usize)>>,
    /// `totals[i]` is the sum, over every other entry `j`, of the number of
    /// letter coincidences between entry `i` and entry `j`.
    pub totals: Vec<usize>,
}

impl OverlapMatrix {
    /// Builds the overlap matrix for `entries`. Entirely derived from the
    /// entry list; immutable for the life of one generation.
    pub fn build(entries: &[Entry]) -> Self {
        let mut pairs = HashMap::new();
        let mut totals = vec![0usize; entries.len()];

        for i in 0..entries.len() {
            for j in 0..entries.len() {
                if i == j {
                    continue;
                }
                let word_i = entries[i].word.as_bytes();
                let word_j = entries[j].word.as_bytes();
                let mut coincidences = Vec::new();
                for (i_pos, &ci) in word_i.iter().enumerate() {
                    for (j_pos, &cj) in word_j.iter().enumerate() {
                        if ci == cj {
                            coincidences.push((i_pos, j_pos));
                        }
                    }
                }
                totals[i] += coincidences.len();
                if !coincidences.is_empty() {
                    pairs.insert((i, j), coincidences);
                }
            }
        }

        Self { pairs, totals }
    }

    /// Coincidences between entry `i` and entry `j` (order matters: the
    /// first element of each pair indexes into `entries[i]`).
    pub fn between(&self, i: usize, j: usize) -> Option<&[(usize, usize)]> {
        self.pairs.get(&(i, j)).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, idx: usize) -> Entry {
        Entry {
            word: word.to_string(),
            clue: "clue".to_string(),
            original_index: idx,
        }
    }

    #[test]
    fn finds_coincidences_between_cat_and_tar() {
        let entries = vec![entry("CAT", 0), entry("TAR", 1)];
        let matrix = OverlapMatrix::build(&entries);
        // CAT[0]='C' TAR has no C; CAT[1]='A' TAR[1]='A'; CAT[2]='T' TAR[0]='T'
        let coincidences = matrix.between(0, 1).unwrap();
        assert!(coincidences.contains(&(1, 1)));
        assert!(coincidences.contains(&(2, 0)));
        assert_eq!(coincidences.len(), 2);
    }

    #[test]
    fn totals_sum_across_all_other_entries() {
        let entries = vec![entry("CAT", 0), entry("TAR", 1), entry("ART", 2)];
        let matrix = OverlapMatrix::build(&entries);
        let expected: usize = (0..entries.len())
            .filter(|&j| j != 0)
            .map(|j| matrix.between(0, j).map_or(0, <[_]>::len))
            .sum();
        assert_eq!(matrix.totals[0], expected);
    }

    #[test]
    fn no_shared_letters_means_no_entry() {
        let entries = vec![entry("DOG", 0), entry("FLY", 1)];
        let matrix = OverlapMatrix::build(&entries);
        assert!(matrix.between(0, 1).is_none());
        assert_eq!(matrix.totals[0], 0);
    }
}
