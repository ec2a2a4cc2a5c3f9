//! Named filter presets selecting which mob tiers and regions a run covers

/// A named group of mob categories used as an inclusion filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMode {
    /// Mode name, used in chart titles and file names
    pub name: String,
    /// Category tags included by this mode
    pub categories: Vec<String>,
}

impl CategoryMode {
    /// Create a category mode from a name and its tags
    pub fn new(name: &str, categories: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            categories: categories.iter().map(ToString::to_string).collect(),
        }
    }

    /// Default category table: every tier, normal mobs only, and the harder tiers
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("all", &["Normal", "Elite", "Boss", "Boss' Invocation"]),
            Self::new("normal", &["Normal"]),
            Self::new("elite", &["Elite", "Boss", "Boss' Invocation"]),
        ]
    }
}

/// A named group of regions whose zones are unioned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMode {
    /// Mode name, used in chart titles, file names and the logo asset name
    pub name: String,
    /// Regions resolved through the zone dataset
    pub regions: Vec<String>,
}

impl RegionMode {
    /// Create a region mode from a name and its regions
    pub fn new(name: &str, regions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            regions: regions.iter().map(ToString::to_string).collect(),
        }
    }

    /// Default region table: all planets together, then each main planet alone
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "every planets",
                &[
                    "Herta Space Station",
                    "Jarilo-VI",
                    "The Xianzhou Luofu",
                    "Simulated Universe",
                ],
            ),
            Self::new("Herta Space Station", &["Herta Space Station"]),
            Self::new("Jarilo-VI", &["Jarilo-VI"]),
            Self::new("The Xianzhou Luofu", &["The Xianzhou Luofu"]),
        ]
    }
}

