//! Catalog
//!
//! Flavors offered for each kind of donut. The built-in catalog matches the shop's
//! standard menu; a YAML file can replace it:
//!
//! ```yaml
//! flavors:
//!   yeast: [Glazed, Jelly]
//!   cake: [Vanilla]
//!   hole: [Plain]
//!   seasonal: [Pumpkin Spice]
//! ```

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::items::DonutKind;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A donut kind has no flavors to choose from
    #[error("No flavors listed for {0}")]
    NoFlavors(DonutKind),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    flavors: FxHashMap<DonutKind, Vec<String>>,
}

/// Flavors offered per donut kind.
#[derive(Debug, Clone)]
pub struct Catalog {
    flavors: FxHashMap<DonutKind, Vec<String>>,
}

impl Default for Catalog {
    fn default() -> Self {
        let flavors = [
            (
                DonutKind::Yeast,
                &[
                    "Glazed",
                    "Jelly",
                    "Chocolate",
                    "Boston Cream",
                    "Maple",
                    "Strawberry",
                ][..],
            ),
            (DonutKind::Cake, &["Vanilla", "Chocolate", "Blueberry"][..]),
            (
                DonutKind::Hole,
                &["Plain", "Cinnamon Sugar", "Powdered"][..],
            ),
            (DonutKind::Seasonal, &["Spooky", "Pumpkin Spice"][..]),
        ]
        .into_iter()
        .map(|(kind, flavors)| (kind, flavors.iter().map(ToString::to_string).collect()))
        .collect();

        Self { flavors }
    }
}

impl Catalog {
    /// Parses a catalog from YAML.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Yaml`]: the document is not a valid catalog.
    /// - [`CatalogError::NoFlavors`]: a donut kind is missing or has an empty flavor list.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_norway::from_str(yaml)?;

        for kind in DonutKind::ALL {
            let has_flavors = file
                .flavors
                .get(&kind)
                .is_some_and(|flavors| flavors.iter().any(|flavor| !flavor.trim().is_empty()));

            if !has_flavors {
                return Err(CatalogError::NoFlavors(kind));
            }
        }

        let flavors = file
            .flavors
            .into_iter()
            .map(|(kind, flavors)| {
                let flavors = flavors
                    .into_iter()
                    .map(|flavor| flavor.trim().to_string())
                    .filter(|flavor| !flavor.is_empty())
                    .collect();

                (kind, flavors)
            })
            .collect();

        Ok(Self { flavors })
    }

    /// Loads a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or is not a valid catalog.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        debug!(path = %path.display(), "loading catalog");

        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Flavors offered for a donut kind, in menu order.
    pub fn flavors(&self, kind: DonutKind) -> &[String] {
        self.flavors
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Finds the catalog spelling of a flavor.
    ///
    /// Matching ignores case and accepts `-` or `_` in place of spaces, so
    /// `boston-cream` finds `Boston Cream`.
    pub fn find_flavor(&self, kind: DonutKind, input: &str) -> Option<&str> {
        let wanted = normalize(input);

        self.flavors(kind)
            .iter()
            .find(|flavor| normalize(flavor) == wanted)
            .map(String::as_str)
    }
}

fn normalize(flavor: &str) -> String {
    flavor
        .trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_catalog_has_shop_flavors() {
        let catalog = Catalog::default();

        assert_eq!(catalog.flavors(DonutKind::Yeast).len(), 6);
        assert_eq!(
            catalog.flavors(DonutKind::Cake),
            ["Vanilla", "Chocolate", "Blueberry"]
        );
        assert_eq!(
            catalog.flavors(DonutKind::Hole),
            ["Plain", "Cinnamon Sugar", "Powdered"]
        );
        assert_eq!(
            catalog.flavors(DonutKind::Seasonal),
            ["Spooky", "Pumpkin Spice"]
        );
    }

    #[test]
    fn find_flavor_is_forgiving() {
        let catalog = Catalog::default();

        assert_eq!(
            catalog.find_flavor(DonutKind::Yeast, "boston-cream"),
            Some("Boston Cream")
        );
        assert_eq!(
            catalog.find_flavor(DonutKind::Hole, "CINNAMON_SUGAR"),
            Some("Cinnamon Sugar")
        );
        assert_eq!(catalog.find_flavor(DonutKind::Cake, "Maple"), None);
    }

    #[test]
    fn from_yaml_replaces_flavors() -> TestResult {
        let catalog = Catalog::from_yaml(
            "flavors:\n  yeast: [Glazed]\n  cake: [Lemon]\n  donut_hole: [Plain]\n  seasonal: ['  Eggnog ', '']\n",
        )?;

        assert_eq!(catalog.flavors(DonutKind::Cake), ["Lemon"]);
        assert_eq!(catalog.flavors(DonutKind::Hole), ["Plain"]);
        assert_eq!(catalog.flavors(DonutKind::Seasonal), ["Eggnog"]);

        Ok(())
    }

    #[test]
    fn from_yaml_requires_every_kind() {
        let result = Catalog::from_yaml("flavors:\n  yeast: [Glazed]\n  cake: [Lemon]\n  hole: []\n");

        assert!(matches!(
            result,
            Err(CatalogError::NoFlavors(DonutKind::Hole))
        ));
    }

    #[test]
    fn from_yaml_rejects_unknown_kinds() {
        let result = Catalog::from_yaml("flavors:\n  cruller: [Honey]\n");

        assert!(matches!(result, Err(CatalogError::Yaml(_))));
    }

    #[test]
    fn from_yaml_file_reports_missing_file() {
        let result = Catalog::from_yaml_file("does/not/exist.yaml");

        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
