//! Bestiary data model: the element universe, datasets and filter presets

/// Mob and zone datasets with category/region filtering
pub mod dataset;
/// The closed universe of damage elements
pub mod element;
/// Named category and region presets for batch runs
pub mod modes;

pub use dataset::{FilteredMobs, MobDataset, MobRecord, ZoneDataset, filter_mobs, get_mobs};
pub use element::{ELEMENT_COUNT, Element};
pub use modes::{CategoryMode, RegionMode};
