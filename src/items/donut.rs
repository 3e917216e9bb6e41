//! Donuts

use std::fmt;

use serde::Deserialize;

use crate::{
    items::Quantity,
    pricing::{Price, cents, times},
};

/// The kinds of donut on the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DonutKind {
    /// Yeast donut, $1.99 each
    Yeast,

    /// Cake donut, $2.19 each
    Cake,

    /// Donut hole, $0.39 each
    #[serde(alias = "donut_hole")]
    #[value(alias = "holes")]
    Hole,

    /// Seasonal donut, $2.49 each
    Seasonal,
}

impl DonutKind {
    /// Every donut kind, in menu order.
    pub const ALL: [DonutKind; 4] = [
        DonutKind::Yeast,
        DonutKind::Cake,
        DonutKind::Hole,
        DonutKind::Seasonal,
    ];

    /// Price of a single donut of this kind.
    pub fn unit_price(self) -> Price {
        match self {
            DonutKind::Yeast => cents(199),
            DonutKind::Cake => cents(219),
            DonutKind::Hole => cents(39),
            DonutKind::Seasonal => cents(249),
        }
    }
}

/// Name used on tickets, e.g. `Donut Hole`.
impl fmt::Display for DonutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DonutKind::Yeast => "Yeast Donut",
            DonutKind::Cake => "Cake Donut",
            DonutKind::Hole => "Donut Hole",
            DonutKind::Seasonal => "Seasonal Donut",
        })
    }
}

/// A flavored donut line. The kind lives on the [`MenuItem`](crate::items::MenuItem) variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Donut {
    flavor: String,
    quantity: Quantity,
}

impl Donut {
    /// Creates a donut line.
    pub fn new(flavor: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            flavor: flavor.into(),
            quantity,
        }
    }

    /// Flavor of the donuts.
    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    /// Changes the flavor.
    pub fn set_flavor(&mut self, flavor: impl Into<String>) {
        self.flavor = flavor.into();
    }

    /// Number of donuts.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Changes the quantity.
    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    pub(crate) fn price(&self, kind: DonutKind) -> Price {
        times(&kind.unit_price(), self.quantity.get())
    }
}
