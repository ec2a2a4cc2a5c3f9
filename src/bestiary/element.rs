//! Damage elements that a mob can be weak to

use serde::Deserialize;
use std::fmt;

/// Number of elements in the universe
pub const ELEMENT_COUNT: usize = 7;

/// One of the fixed damage types
///
/// Declaration order is the display order and the axis order of every chart,
/// and the order in which weakness combinations are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Element {
    /// Fire damage
    Fire,
    /// Ice damage
    Ice,
    /// Lightning damage
    Lightning,
    /// Wind damage
    Wind,
    /// Physical damage
    Physical,
    /// Imaginary damage
    Imaginary,
    /// Quantum damage
    Quantum,
}

impl Element {
    /// Every element in universe order
    pub const ALL: [Self; ELEMENT_COUNT] = [
        Self::Fire,
        Self::Ice,
        Self::Lightning,
        Self::Wind,
        Self::Physical,
        Self::Imaginary,
        Self::Quantum,
    ];

    /// Dense index of the element, in `0..ELEMENT_COUNT`
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Element at the given dense index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name used in datasets and as the icon asset stem
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Ice => "Ice",
            Self::Lightning => "Lightning",
            Self::Wind => "Wind",
            Self::Physical => "Physical",
            Self::Imaginary => "Imaginary",
            Self::Quantum => "Quantum",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
