//! Selections
//!
//! What a customer has picked so far on an order-taking screen. Any choice may still be
//! missing; [`Selection::build`] checks the picks and turns them into a [`MenuItem`].

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::{
    catalog::Catalog,
    items::{AddIn, AddOn, Bread, Coffee, CupSize, DonutKind, MenuItem, Protein, Quantity, Sandwich},
};

/// Quantities accepted when ordering.
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=100;

/// Reasons a selection cannot become a menu item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// No donut type chosen.
    #[error("Please select a donut type")]
    MissingDonutType,

    /// No flavor chosen.
    #[error("Please select a flavor")]
    MissingFlavor,

    /// The flavor is not offered for that donut type.
    #[error("{flavor} is not a {kind} flavor")]
    UnknownFlavor {
        /// Donut type that was chosen
        kind: DonutKind,

        /// Flavor as entered
        flavor: String,
    },

    /// No cup size chosen.
    #[error("Please select a cup size")]
    MissingCupSize,

    /// Protein or bread missing.
    #[error("Please select protein and bread")]
    MissingProteinOrBread,

    /// Quantity outside the accepted range.
    #[error("Quantity must be between 1 and 100, got {0}")]
    QuantityOutOfRange(u32),
}

/// Donut screen choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonutSelection {
    /// Donut type
    pub kind: Option<DonutKind>,

    /// Flavor, matched against the catalog
    pub flavor: Option<String>,

    /// Number of donuts
    pub quantity: u32,
}

/// Coffee screen choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeeSelection {
    /// Cup size
    pub size: Option<CupSize>,

    /// Checked add-ins
    pub add_ins: Vec<AddIn>,

    /// Number of coffees
    pub quantity: u32,
}

/// Sandwich screen choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandwichSelection {
    /// Bread
    pub bread: Option<Bread>,

    /// Protein
    pub protein: Option<Protein>,

    /// Checked add-ons
    pub add_ons: Vec<AddOn>,

    /// Number of sandwiches
    pub quantity: u32,
}

/// Choices from any order-taking screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Donuts
    Donut(DonutSelection),

    /// Coffee
    Coffee(CoffeeSelection),

    /// Sandwich
    Sandwich(SandwichSelection),
}

impl Selection {
    /// Validates the choices and builds the menu item.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] naming the first missing or invalid choice.
    pub fn build(&self, catalog: &Catalog) -> Result<MenuItem, SelectionError> {
        match self {
            Selection::Donut(donut) => donut.build(catalog),
            Selection::Coffee(coffee) => coffee.build(),
            Selection::Sandwich(sandwich) => sandwich.build(),
        }
    }
}

impl DonutSelection {
    /// Validates the choices and builds a donut line.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if the type or flavor is missing, the flavor is not
    /// in the catalog, or the quantity is out of range.
    pub fn build(&self, catalog: &Catalog) -> Result<MenuItem, SelectionError> {
        let kind = self.kind.ok_or(SelectionError::MissingDonutType)?;

        let input = self
            .flavor
            .as_deref()
            .filter(|flavor| !flavor.trim().is_empty())
            .ok_or(SelectionError::MissingFlavor)?;

        let flavor =
            catalog
                .find_flavor(kind, input)
                .ok_or_else(|| SelectionError::UnknownFlavor {
                    kind,
                    flavor: input.to_string(),
                })?;

        Ok(MenuItem::donut(kind, flavor, quantity(self.quantity)?))
    }
}

impl CoffeeSelection {
    /// Validates the choices and builds a coffee line.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if no size is chosen or the quantity is out of range.
    pub fn build(&self) -> Result<MenuItem, SelectionError> {
        let size = self.size.ok_or(SelectionError::MissingCupSize)?;
        let coffee = Coffee::new(size, quantity(self.quantity)?).with_add_ins(self.add_ins.iter().copied());

        Ok(MenuItem::Coffee(coffee))
    }
}

impl SandwichSelection {
    /// Validates the choices and builds a sandwich line.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if protein or bread is missing or the quantity is out
    /// of range.
    pub fn build(&self) -> Result<MenuItem, SelectionError> {
        let (Some(bread), Some(protein)) = (self.bread, self.protein) else {
            return Err(SelectionError::MissingProteinOrBread);
        };

        let sandwich = Sandwich::new(bread, protein, quantity(self.quantity)?)
            .with_add_ons(self.add_ons.iter().copied());

        Ok(MenuItem::Sandwich(sandwich))
    }
}

fn quantity(value: u32) -> Result<Quantity, SelectionError> {
    if !QUANTITY_RANGE.contains(&value) {
        return Err(SelectionError::QuantityOutOfRange(value));
    }

    Quantity::new(value)
        .ok()
        .ok_or(SelectionError::QuantityOutOfRange(value))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn donut(kind: Option<DonutKind>, flavor: Option<&str>, quantity: u32) -> DonutSelection {
        DonutSelection {
            kind,
            flavor: flavor.map(ToString::to_string),
            quantity,
        }
    }

    #[test]
    fn donut_uses_catalog_spelling() -> TestResult {
        let item = donut(Some(DonutKind::Yeast), Some("boston-cream"), 2).build(&Catalog::default())?;

        assert_eq!(item.describe(), "Yeast Donut (Boston Cream) x2 $3.98");

        Ok(())
    }

    #[test]
    fn donut_requires_type_and_flavor() {
        let catalog = Catalog::default();

        assert_eq!(
            donut(None, Some("Glazed"), 1).build(&catalog),
            Err(SelectionError::MissingDonutType)
        );
        assert_eq!(
            donut(Some(DonutKind::Cake), None, 1).build(&catalog),
            Err(SelectionError::MissingFlavor)
        );
        assert_eq!(
            donut(Some(DonutKind::Cake), Some("  "), 1).build(&catalog),
            Err(SelectionError::MissingFlavor)
        );
    }

    #[test]
    fn donut_rejects_flavor_of_other_kind() {
        let result = donut(Some(DonutKind::Seasonal), Some("Glazed"), 1).build(&Catalog::default());

        assert_eq!(
            result,
            Err(SelectionError::UnknownFlavor {
                kind: DonutKind::Seasonal,
                flavor: "Glazed".to_string(),
            })
        );
    }

    #[test]
    fn quantity_must_be_in_range() {
        let catalog = Catalog::default();

        assert_eq!(
            donut(Some(DonutKind::Hole), Some("Plain"), 0).build(&catalog),
            Err(SelectionError::QuantityOutOfRange(0))
        );
        assert_eq!(
            donut(Some(DonutKind::Hole), Some("Plain"), 101).build(&catalog),
            Err(SelectionError::QuantityOutOfRange(101))
        );
        assert!(donut(Some(DonutKind::Hole), Some("Plain"), 100).build(&catalog).is_ok());
    }

    #[test]
    fn coffee_requires_size() -> TestResult {
        let mut selection = CoffeeSelection {
            size: None,
            add_ins: vec![AddIn::Milk, AddIn::Milk],
            quantity: 1,
        };

        assert_eq!(selection.build(), Err(SelectionError::MissingCupSize));

        selection.size = Some(CupSize::Grande);

        assert_eq!(selection.build()?.describe(), "Grande Coffee with milk x1 $3.84");

        Ok(())
    }

    #[test]
    fn sandwich_requires_bread_and_protein() -> TestResult {
        let mut selection = SandwichSelection {
            bread: Some(Bread::Sourdough),
            protein: None,
            add_ons: vec![AddOn::Cheese],
            quantity: 1,
        };

        assert_eq!(selection.build(), Err(SelectionError::MissingProteinOrBread));

        selection.protein = Some(Protein::Salmon);

        let item = Selection::Sandwich(selection).build(&Catalog::default())?;

        assert_eq!(item.describe(), "Salmon Sandwich on sourdough with cheese x1 $15.99");

        Ok(())
    }
}
