//! Tests for the category and region mode tables

#[cfg(test)]
mod tests {
    use weakmap::bestiary::{CategoryMode, RegionMode};

    // Tests the default category table
    // Verified by moving Boss into the normal mode
    #[test]
    fn test_default_category_modes() {
        let modes = CategoryMode::defaults();

        let names: Vec<&str> = modes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["all", "normal", "elite"]);
        assert_eq!(
            modes.first().map(|m| m.categories.len()),
            Some(4),
            "all covers every tier"
        );
        assert_eq!(modes.get(1), Some(&CategoryMode::new("normal", &["Normal"])));
        assert_eq!(
            modes.get(2),
            Some(&CategoryMode::new(
                "elite",
                &["Elite", "Boss", "Boss' Invocation"]
            ))
        );
    }

    // Tests the default region table, combined mode first
    // Verified by dropping the Simulated Universe from the combined mode
    #[test]
    fn test_default_region_modes() {
        let modes = RegionMode::defaults();

        let names: Vec<&str> = modes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "every planets",
                "Herta Space Station",
                "Jarilo-VI",
                "The Xianzhou Luofu"
            ]
        );
        assert_eq!(
            modes.first().map(|m| m.regions.last().cloned()),
            Some(Some("Simulated Universe".to_string()))
        );
        assert!(
            modes
                .iter()
                .skip(1)
                .all(|m| m.regions == vec![m.name.clone()])
        );
    }
}
