//! Mob and zone datasets, and the category/region filter that produces a run's mob set

use crate::bestiary::element::Element;
use crate::io::error::{Result, WeakmapError};
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single mob entry as stored in the mob dataset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MobRecord {
    /// Category tags (tiers) of the mob; the dataset may store one tag or a list
    #[serde(rename = "Type", deserialize_with = "one_or_many")]
    pub categories: Vec<String>,
    /// Zones the mob appears in
    #[serde(rename = "Zones")]
    pub zones: Vec<String>,
    /// Ordered weaknesses; repeated entries are kept
    #[serde(rename = "Weaknesses")]
    pub weaknesses: Vec<Element>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(tag) => vec![tag],
        OneOrMany::Many(tags) => tags,
    })
}

/// Mob dataset keyed by mob name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MobDataset {
    /// Mob records in name order
    pub mobs: BTreeMap<String, MobRecord>,
}

impl MobDataset {
    /// Parse a mob dataset from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a map of mob records or a weakness
    /// is not a known element
    pub fn from_json_str(json: &str) -> Result<Self> {
        parse_json(json, Path::new("<memory>"))
    }

    /// Read and parse a mob dataset file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dataset: Self = parse_json(&read_dataset(path)?, path)?;
        debug!(path = %path.display(), mobs = dataset.mobs.len(), "loaded mob dataset");
        Ok(dataset)
    }
}

/// Zone dataset: region name to the zones it contains
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ZoneDataset {
    /// Zone lists keyed by region
    pub regions: BTreeMap<String, Vec<String>>,
}

impl ZoneDataset {
    /// Parse a zone dataset from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a map of zone lists
    pub fn from_json_str(json: &str) -> Result<Self> {
        parse_json(json, Path::new("<memory>"))
    }

    /// Read and parse a zone dataset file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dataset: Self = parse_json(&read_dataset(path)?, path)?;
        debug!(path = %path.display(), regions = dataset.regions.len(), "loaded zone dataset");
        Ok(dataset)
    }

    /// Union of the zones of every listed region
    ///
    /// # Errors
    ///
    /// Returns [`WeakmapError::UnknownRegion`] for the first region that is
    /// not in the dataset
    pub fn resolve<S: AsRef<str>>(&self, regions: &[S]) -> Result<HashSet<&str>> {
        let mut zones = HashSet::new();
        for region in regions {
            let region = region.as_ref();
            let region_zones =
                self.regions
                    .get(region)
                    .ok_or_else(|| WeakmapError::UnknownRegion {
                        region: region.to_string(),
                    })?;
            zones.extend(region_zones.iter().map(String::as_str));
        }
        Ok(zones)
    }
}

/// Mob name to weakness list for one (category mode, region mode) run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredMobs {
    mobs: BTreeMap<String, Vec<Element>>,
}

impl FilteredMobs {
    /// Number of mobs in the set
    pub fn len(&self) -> usize {
        self.mobs.len()
    }

    /// Whether no mob matched the filters
    pub fn is_empty(&self) -> bool {
        self.mobs.is_empty()
    }

    /// Weakness list of a mob, if it is in the set
    pub fn get(&self, name: &str) -> Option<&[Element]> {
        self.mobs.get(name).map(Vec::as_slice)
    }

    /// Iterate `(name, weaknesses)` in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Element])> {
        self.mobs
            .iter()
            .map(|(name, weaknesses)| (name.as_str(), weaknesses.as_slice()))
    }

    /// Iterate weakness lists in name order
    pub fn weaknesses(&self) -> impl Iterator<Item = &[Element]> {
        self.mobs.values().map(Vec::as_slice)
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<Element>)> for FilteredMobs {
    fn from_iter<I: IntoIterator<Item = (N, Vec<Element>)>>(iter: I) -> Self {
        Self {
            mobs: iter
                .into_iter()
                .map(|(name, weaknesses)| (name.into(), weaknesses))
                .collect(),
        }
    }
}

/// Keep the mobs sharing at least one category with `categories` and at least
/// one zone with the zones of `regions`
///
/// # Errors
///
/// Returns [`WeakmapError::UnknownRegion`] if a region is not in `zones`
pub fn filter_mobs<C: AsRef<str>, R: AsRef<str>>(
    mobs: &MobDataset,
    zones: &ZoneDataset,
    categories: &[C],
    regions: &[R],
) -> Result<FilteredMobs> {
    let zone_set = zones.resolve(regions)?;
    let category_set: HashSet<&str> = categories.iter().map(AsRef::as_ref).collect();

    let filtered = mobs
        .mobs
        .iter()
        .filter(|(_, record)| {
            record
                .categories
                .iter()
                .any(|category| category_set.contains(category.as_str()))
                && record
                    .zones
                    .iter()
                    .any(|zone| zone_set.contains(zone.as_str()))
        })
        .map(|(name, record)| (name.clone(), record.weaknesses.clone()))
        .collect();

    Ok(FilteredMobs { mobs: filtered })
}

/// Load both dataset files and filter the mobs for one run
///
/// Files are read on every call.
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed, or a region is
/// missing from the zone dataset
pub fn get_mobs<C: AsRef<str>, R: AsRef<str>>(
    mob_path: &Path,
    zone_path: &Path,
    categories: &[C],
    regions: &[R],
) -> Result<FilteredMobs> {
    let zones = ZoneDataset::from_json_file(zone_path)?;
    // Region lookups fail before the larger mob file is touched
    zones.resolve(regions)?;
    let mobs = MobDataset::from_json_file(mob_path)?;
    filter_mobs(&mobs, &zones, categories, regions)
}

fn read_dataset(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| WeakmapError::DatasetRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_json<T: for<'de> Deserialize<'de>>(json: &str, path: &Path) -> Result<T> {
    serde_json::from_str(json).map_err(|e| WeakmapError::DatasetParse {
        path: PathBuf::from(path),
        source: e,
    })
}
