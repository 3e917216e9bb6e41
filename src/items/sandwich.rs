//! Sandwiches

use std::fmt;

use crate::{
    items::{
        Quantity,
        extras::{Extra, Extras},
    },
    pricing::{Price, add_prices, cents, times},
};

/// Bread choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Bread {
    /// Bagel
    Bagel,

    /// Wheat bread
    WheatBread,

    /// Sourdough
    Sourdough,
}

impl Bread {
    /// Every bread, in menu order.
    pub const ALL: [Bread; 3] = [Bread::Bagel, Bread::WheatBread, Bread::Sourdough];
}

impl fmt::Display for Bread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Bread::Bagel => "bagel",
            Bread::WheatBread => "wheat bread",
            Bread::Sourdough => "sourdough",
        })
    }
}

/// Protein choices. The protein sets the sandwich base price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Protein {
    /// Beef, $12.99
    Beef,

    /// Chicken, $10.99
    Chicken,

    /// Salmon, $14.99
    Salmon,
}

impl Protein {
    /// Every protein, in menu order.
    pub const ALL: [Protein; 3] = [Protein::Beef, Protein::Chicken, Protein::Salmon];

    /// Price of one sandwich with this protein and no add-ons.
    pub fn base_price(self) -> Price {
        match self {
            Protein::Beef => cents(1299),
            Protein::Chicken => cents(1099),
            Protein::Salmon => cents(1499),
        }
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Sandwich add-ons. Cheese is $1.00; vegetables are $0.30 each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum AddOn {
    /// Cheese
    Cheese,

    /// Lettuce
    Lettuce,

    /// Tomatoes
    Tomatoes,

    /// Onions
    Onions,
}

impl AddOn {
    /// Every add-on, in menu order.
    pub const ALL: [AddOn; 4] = [AddOn::Cheese, AddOn::Lettuce, AddOn::Tomatoes, AddOn::Onions];
}

impl Extra for AddOn {
    fn label(self) -> &'static str {
        match self {
            AddOn::Cheese => "cheese",
            AddOn::Lettuce => "lettuce",
            AddOn::Tomatoes => "tomatoes",
            AddOn::Onions => "onions",
        }
    }

    fn price(self) -> Price {
        match self {
            AddOn::Cheese => cents(100),
            AddOn::Lettuce | AddOn::Tomatoes | AddOn::Onions => cents(30),
        }
    }
}

/// A sandwich line: bread, protein, add-ons and quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sandwich {
    bread: Bread,
    protein: Protein,
    add_ons: Extras<AddOn>,
    quantity: Quantity,
}

impl Sandwich {
    /// Creates a sandwich with no add-ons.
    pub fn new(bread: Bread, protein: Protein, quantity: Quantity) -> Self {
        Self {
            bread,
            protein,
            add_ons: Extras::new(),
            quantity,
        }
    }

    /// Builder-style helper adding several add-ons at once.
    #[must_use]
    pub fn with_add_ons(mut self, add_ons: impl IntoIterator<Item = AddOn>) -> Self {
        self.add_ons.extend(add_ons);
        self
    }

    /// Bread.
    pub fn bread(&self) -> Bread {
        self.bread
    }

    /// Changes the bread.
    pub fn set_bread(&mut self, bread: Bread) {
        self.bread = bread;
    }

    /// Protein.
    pub fn protein(&self) -> Protein {
        self.protein
    }

    /// Changes the protein.
    pub fn set_protein(&mut self, protein: Protein) {
        self.protein = protein;
    }

    /// Chosen add-ons.
    pub fn add_ons(&self) -> &Extras<AddOn> {
        &self.add_ons
    }

    /// Adds an add-on; adding one that is already present does nothing.
    pub fn add_add_on(&mut self, add_on: AddOn) -> bool {
        self.add_ons.insert(add_on)
    }

    /// Removes an add-on; removing one that is not present does nothing.
    pub fn remove_add_on(&mut self, add_on: AddOn) -> bool {
        self.add_ons.remove(add_on)
    }

    /// Number of sandwiches.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Changes the quantity.
    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// `quantity × (protein price + add-ons)`
    pub fn price(&self) -> Price {
        let unit = add_prices(&self.protein.base_price(), &self.add_ons.price());

        times(&unit, self.quantity.get())
    }

    /// Ticket name without quantity or price, e.g. `Beef Sandwich on sourdough with cheese`.
    pub fn name(&self) -> String {
        if self.add_ons.is_empty() {
            format!("{} Sandwich on {}", self.protein, self.bread)
        } else {
            format!(
                "{} Sandwich on {} with {}",
                self.protein,
                self.bread,
                self.add_ons.describe()
            )
        }
    }
}
