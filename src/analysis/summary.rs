//! Plain-text description of a run's mob set

use crate::bestiary::dataset::FilteredMobs;
use crate::bestiary::element::Element;
use std::collections::HashSet;
use std::fmt;

/// Separator line opening every summary block
pub const SUMMARY_RULE: &str = "======================================";

/// Mob counts for one (category mode, region mode) run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Category mode name
    pub category: String,
    /// Region mode name
    pub region: String,
    /// Number of mobs in the filtered set
    pub total: usize,
    /// Mobs with exactly two distinct weaknesses
    pub with_two_weaknesses: usize,
    /// Mobs with exactly three distinct weaknesses
    pub with_three_weaknesses: usize,
}

impl RunSummary {
    /// Count the mobs of a filtered set
    ///
    /// A weakness listed twice on the same mob counts once.
    pub fn new(mobs: &FilteredMobs, category: &str, region: &str) -> Self {
        let with_length = |length: usize| {
            mobs.weaknesses()
                .filter(|weaknesses| distinct_weaknesses(weaknesses) == length)
                .count()
        };

        Self {
            category: category.to_string(),
            region: region.to_string(),
            total: mobs.len(),
            with_two_weaknesses: with_length(2),
            with_three_weaknesses: with_length(3),
        }
    }
}

fn distinct_weaknesses(weaknesses: &[Element]) -> usize {
    weaknesses.iter().collect::<HashSet<_>>().len()
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SUMMARY_RULE}")?;
        writeln!(f, "{:20} --- {} mobs", self.region, self.category)?;
        writeln!(f)?;
        writeln!(f, "Number of mobs: {}", self.total)?;
        writeln!(
            f,
            "Number of mobs with 2 weaknesses:{}",
            self.with_two_weaknesses
        )?;
        writeln!(
            f,
            "Number of mobs with 3 weaknesses:{}",
            self.with_three_weaknesses
        )?;
        writeln!(f)
    }
}
