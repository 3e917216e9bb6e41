//! Items
//!
//! Every line on an order is a [`MenuItem`]. Each variant carries only the options that
//! matter for it and prices itself with its own formula.

use std::fmt;

use thiserror::Error;

use crate::pricing::{Price, format_money};

pub mod coffee;
pub mod donut;
pub mod extras;
pub mod sandwich;

pub use coffee::{AddIn, Coffee, CupSize};
pub use donut::{Donut, DonutKind};
pub use extras::{Extra, Extras};
pub use sandwich::{AddOn, Bread, Protein, Sandwich};

/// Errors raised while building or changing a menu item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuItemError {
    /// Quantities start at one.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// How many of an item were ordered. Always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    /// A single item.
    pub const ONE: Quantity = Quantity(1);

    /// Creates a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`MenuItemError::ZeroQuantity`] if `value` is zero.
    pub fn new(value: u32) -> Result<Self, MenuItemError> {
        if value == 0 {
            return Err(MenuItemError::ZeroQuantity);
        }

        Ok(Self(value))
    }

    /// The quantity as a number.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = MenuItemError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line on an order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuItem {
    /// Yeast donuts
    YeastDonut(Donut),

    /// Cake donuts
    CakeDonut(Donut),

    /// Donut holes
    DonutHole(Donut),

    /// Seasonal donuts
    SeasonalDonut(Donut),

    /// Coffee
    Coffee(Coffee),

    /// Sandwich
    Sandwich(Sandwich),
}

impl MenuItem {
    /// Creates a donut line of the given kind.
    pub fn donut(kind: DonutKind, flavor: impl Into<String>, quantity: Quantity) -> Self {
        let donut = Donut::new(flavor, quantity);

        match kind {
            DonutKind::Yeast => MenuItem::YeastDonut(donut),
            DonutKind::Cake => MenuItem::CakeDonut(donut),
            DonutKind::Hole => MenuItem::DonutHole(donut),
            DonutKind::Seasonal => MenuItem::SeasonalDonut(donut),
        }
    }

    /// The donut kind, if this line is a donut.
    pub fn donut_kind(&self) -> Option<DonutKind> {
        match self {
            MenuItem::YeastDonut(_) => Some(DonutKind::Yeast),
            MenuItem::CakeDonut(_) => Some(DonutKind::Cake),
            MenuItem::DonutHole(_) => Some(DonutKind::Hole),
            MenuItem::SeasonalDonut(_) => Some(DonutKind::Seasonal),
            MenuItem::Coffee(_) | MenuItem::Sandwich(_) => None,
        }
    }

    /// Price of the whole line, recalculated from the current options.
    pub fn price(&self) -> Price {
        match self {
            MenuItem::YeastDonut(donut) => donut.price(DonutKind::Yeast),
            MenuItem::CakeDonut(donut) => donut.price(DonutKind::Cake),
            MenuItem::DonutHole(donut) => donut.price(DonutKind::Hole),
            MenuItem::SeasonalDonut(donut) => donut.price(DonutKind::Seasonal),
            MenuItem::Coffee(coffee) => coffee.price(),
            MenuItem::Sandwich(sandwich) => sandwich.price(),
        }
    }

    /// Number of units on this line.
    pub fn quantity(&self) -> Quantity {
        match self {
            MenuItem::YeastDonut(donut)
            | MenuItem::CakeDonut(donut)
            | MenuItem::DonutHole(donut)
            | MenuItem::SeasonalDonut(donut) => donut.quantity(),
            MenuItem::Coffee(coffee) => coffee.quantity(),
            MenuItem::Sandwich(sandwich) => sandwich.quantity(),
        }
    }

    /// Changes the number of units on this line.
    pub fn set_quantity(&mut self, quantity: Quantity) {
        match self {
            MenuItem::YeastDonut(donut)
            | MenuItem::CakeDonut(donut)
            | MenuItem::DonutHole(donut)
            | MenuItem::SeasonalDonut(donut) => donut.set_quantity(quantity),
            MenuItem::Coffee(coffee) => coffee.set_quantity(quantity),
            MenuItem::Sandwich(sandwich) => sandwich.set_quantity(quantity),
        }
    }

    /// Name of the line without quantity or price, e.g. `Cake Donut (Blueberry)`.
    pub fn name(&self) -> String {
        let (kind, donut) = match self {
            MenuItem::YeastDonut(donut) => (DonutKind::Yeast, donut),
            MenuItem::CakeDonut(donut) => (DonutKind::Cake, donut),
            MenuItem::DonutHole(donut) => (DonutKind::Hole, donut),
            MenuItem::SeasonalDonut(donut) => (DonutKind::Seasonal, donut),
            MenuItem::Coffee(coffee) => return coffee.name(),
            MenuItem::Sandwich(sandwich) => return sandwich.name(),
        };

        format!("{kind} ({})", donut.flavor())
    }

    /// Full ticket line: name, `x<quantity>` and price.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} {}",
            self.name(),
            self.quantity(),
            format_money(&self.price())
        )
    }
}

impl From<Coffee> for MenuItem {
    fn from(coffee: Coffee) -> Self {
        MenuItem::Coffee(coffee)
    }
}

impl From<Sandwich> for MenuItem {
    fn from(sandwich: Sandwich) -> Self {
        MenuItem::Sandwich(sandwich)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn zero_quantity_is_rejected() {
        assert_eq!(Quantity::new(0), Err(MenuItemError::ZeroQuantity));
        assert_eq!(Quantity::try_from(0), Err(MenuItemError::ZeroQuantity));
    }

    #[test]
    fn donut_constructor_picks_variant() {
        for kind in DonutKind::ALL {
            let item = MenuItem::donut(kind, "Plain", Quantity::ONE);

            assert_eq!(item.donut_kind(), Some(kind));
            assert_eq!(item.price(), kind.unit_price());
        }
    }

    #[test]
    fn donut_rendering() -> TestResult {
        let item = MenuItem::donut(DonutKind::Cake, "Blueberry", Quantity::new(3)?);

        assert_eq!(item.to_string(), "Cake Donut (Blueberry) x3 $6.57");

        let item = MenuItem::donut(DonutKind::Hole, "Powdered", Quantity::new(10)?);

        assert_eq!(item.describe(), "Donut Hole (Powdered) x10 $3.90");

        Ok(())
    }

    #[test]
    fn coffee_rendering() {
        let item = MenuItem::from(
            Coffee::new(CupSize::Tall, Quantity::ONE)
                .with_add_ins([AddIn::WhippedCream, AddIn::Vanilla]),
        );

        assert_eq!(
            item.to_string(),
            "Tall Coffee with whipped cream, vanilla x1 $3.49"
        );
    }

    #[test]
    fn sandwich_rendering() {
        let item = MenuItem::from(
            Sandwich::new(Bread::Bagel, Protein::Chicken, Quantity::ONE)
                .with_add_ons([AddOn::Lettuce, AddOn::Tomatoes]),
        );

        assert_eq!(
            item.to_string(),
            "Chicken Sandwich on bagel with lettuce, tomatoes x1 $11.59"
        );
    }

    #[test]
    fn set_quantity_reprices() -> TestResult {
        let mut item = MenuItem::donut(DonutKind::Seasonal, "Spooky", Quantity::ONE);
        assert_eq!(item.price().to_minor_units(), 249);

        item.set_quantity(Quantity::new(4)?);

        assert_eq!(item.quantity().get(), 4);
        assert_eq!(item.price().to_minor_units(), 996);

        Ok(())
    }

    #[test]
    fn non_donuts_have_no_donut_kind() {
        let item = MenuItem::from(Coffee::new(CupSize::Short, Quantity::ONE));

        assert_eq!(item.donut_kind(), None);
    }
}
