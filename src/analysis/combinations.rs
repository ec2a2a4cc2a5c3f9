//! Counts how many mobs each weakness combination covers
//!
//! A mob is covered by a combination when at least one of its weaknesses is in
//! the combination. Combinations are drawn from the element universe in
//! lexicographic order and the full result is sorted by coverage, ascending.

use crate::bestiary::dataset::FilteredMobs;
use crate::bestiary::element::{ELEMENT_COUNT, Element};

/// Coverage of one weakness combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationCount {
    /// Elements of the combination in universe order
    pub elements: Vec<Element>,
    /// Number of mobs with at least one weakness in `elements`
    pub mobs: usize,
}

/// Lexicographic k-combinations of the element universe
///
/// Yields `C(ELEMENT_COUNT, k)` combinations; none when `k` exceeds the
/// universe size.
#[derive(Debug, Clone)]
pub struct Combinations {
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    fn current(&self) -> Vec<Element> {
        self.indices
            .iter()
            .filter_map(|&index| Element::from_index(index))
            .collect()
    }
}

impl Iterator for Combinations {
    type Item = Vec<Element>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        // Rightmost position that has not reached its final value
        let span = ELEMENT_COUNT - self.indices.len();
        let Some(pivot) = self
            .indices
            .iter()
            .enumerate()
            .rposition(|(position, &index)| index < position + span)
        else {
            self.exhausted = true;
            return None;
        };

        let base = self.indices.get(pivot).copied().unwrap_or(0) + 1;
        for (offset, index) in self.indices.iter_mut().skip(pivot).enumerate() {
            *index = base + offset;
        }

        Some(self.current())
    }
}

/// Enumerate every combination of `size` distinct elements
pub fn combinations(size: usize) -> Combinations {
    Combinations {
        indices: (0..size).collect(),
        started: false,
        exhausted: size > ELEMENT_COUNT,
    }
}

/// Number of mobs having at least one weakness in `combination`
pub fn coverage(mobs: &FilteredMobs, combination: &[Element]) -> usize {
    mobs.weaknesses()
        .filter(|weaknesses| weaknesses.iter().any(|w| combination.contains(w)))
        .count()
}

/// Coverage of every combination with a size in `min_size..=max_size`
///
/// Sizes are clipped to `1..=ELEMENT_COUNT`; an empty range after clipping
/// gives an empty result. The output is sorted by coverage ascending, ties
/// keeping enumeration order (smaller sizes first, then lexicographic).
pub fn count_per_combination(
    mobs: &FilteredMobs,
    min_size: usize,
    max_size: usize,
) -> Vec<CombinationCount> {
    let lower = min_size.max(1);
    let upper = max_size.min(ELEMENT_COUNT);

    let mut results: Vec<CombinationCount> = (lower..=upper)
        .flat_map(combinations)
        .map(|elements| {
            let covered = coverage(mobs, &elements);
            CombinationCount {
                elements,
                mobs: covered,
            }
        })
        .collect();

    results.sort_by_key(|result| result.mobs);
    results
}
