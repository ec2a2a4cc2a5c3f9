//! Weakness co-occurrence matrix

use crate::bestiary::dataset::FilteredMobs;
use crate::bestiary::element::{ELEMENT_COUNT, Element};
use ndarray::Array2;

/// Build the `ELEMENT_COUNT` x `ELEMENT_COUNT` co-occurrence matrix
///
/// Every ordered pair of positions `(i, j)` in a mob's weakness list, `i == j`
/// included, adds one to cell `(w_i, w_j)`. A mob listing the same element
/// twice therefore adds four to that element's diagonal cell.
pub fn weakness_overlap(mobs: &FilteredMobs) -> Array2<usize> {
    let mut matrix = Array2::<usize>::zeros((ELEMENT_COUNT, ELEMENT_COUNT));

    for weaknesses in mobs.weaknesses() {
        for row in weaknesses {
            for col in weaknesses {
                if let Some(cell) = matrix.get_mut([row.index(), col.index()]) {
                    *cell += 1;
                }
            }
        }
    }

    matrix
}

/// Read one cell of a co-occurrence matrix by element pair
pub fn overlap_count(matrix: &Array2<usize>, row: Element, col: Element) -> usize {
    matrix.get([row.index(), col.index()]).copied().unwrap_or(0)
}

/// Largest cell value, zero for an empty mob set
pub fn max_overlap(matrix: &Array2<usize>) -> usize {
    matrix.iter().copied().max().unwrap_or(0)
}
