//! Coffee

use std::fmt;

use crate::{
    items::{
        Quantity,
        extras::{Extra, Extras},
    },
    pricing::{Price, add_prices, cents, times},
};

/// Cup sizes, smallest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum CupSize {
    /// Short
    Short,

    /// Tall
    Tall,

    /// Grande
    Grande,

    /// Venti
    Venti,
}

impl CupSize {
    /// Every cup size, smallest first.
    pub const ALL: [CupSize; 4] = [
        CupSize::Short,
        CupSize::Tall,
        CupSize::Grande,
        CupSize::Venti,
    ];

    /// Price of a short coffee in cents.
    const SHORT_PRICE: i64 = 239;

    /// Extra charge per size step above short, in cents.
    const SIZE_STEP: i64 = 60;

    /// Price of one plain coffee of this size.
    ///
    /// Each step up from short adds $0.60.
    pub fn base_price(self) -> Price {
        cents(Self::SHORT_PRICE + Self::SIZE_STEP * self as i64)
    }
}

impl fmt::Display for CupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Coffee add-ins, $0.25 each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum AddIn {
    /// Whipped cream
    WhippedCream,

    /// Vanilla
    Vanilla,

    /// Milk
    Milk,

    /// Caramel
    Caramel,

    /// Mocha
    Mocha,
}

impl AddIn {
    /// Every add-in, in menu order.
    pub const ALL: [AddIn; 5] = [
        AddIn::WhippedCream,
        AddIn::Vanilla,
        AddIn::Milk,
        AddIn::Caramel,
        AddIn::Mocha,
    ];
}

impl Extra for AddIn {
    fn label(self) -> &'static str {
        match self {
            AddIn::WhippedCream => "whipped cream",
            AddIn::Vanilla => "vanilla",
            AddIn::Milk => "milk",
            AddIn::Caramel => "caramel",
            AddIn::Mocha => "mocha",
        }
    }

    fn price(self) -> Price {
        cents(25)
    }
}

/// A coffee line: cup size, add-ins and quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coffee {
    size: CupSize,
    add_ins: Extras<AddIn>,
    quantity: Quantity,
}

impl Coffee {
    /// Creates a plain coffee.
    pub fn new(size: CupSize, quantity: Quantity) -> Self {
        Self {
            size,
            add_ins: Extras::new(),
            quantity,
        }
    }

    /// Builder-style helper adding several add-ins at once.
    #[must_use]
    pub fn with_add_ins(mut self, add_ins: impl IntoIterator<Item = AddIn>) -> Self {
        self.add_ins.extend(add_ins);
        self
    }

    /// Cup size.
    pub fn size(&self) -> CupSize {
        self.size
    }

    /// Changes the cup size.
    pub fn set_size(&mut self, size: CupSize) {
        self.size = size;
    }

    /// Chosen add-ins.
    pub fn add_ins(&self) -> &Extras<AddIn> {
        &self.add_ins
    }

    /// Adds an add-in; adding one that is already present does nothing.
    pub fn add_add_in(&mut self, add_in: AddIn) -> bool {
        self.add_ins.insert(add_in)
    }

    /// Removes an add-in; removing one that is not present does nothing.
    pub fn remove_add_in(&mut self, add_in: AddIn) -> bool {
        self.add_ins.remove(add_in)
    }

    /// Number of coffees.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Changes the quantity.
    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// `quantity × (size price + add-ins)`
    pub fn price(&self) -> Price {
        let unit = add_prices(&self.size.base_price(), &self.add_ins.price());

        times(&unit, self.quantity.get())
    }

    /// Ticket name without quantity or price, e.g. `Tall Coffee with vanilla`.
    pub fn name(&self) -> String {
        if self.add_ins.is_empty() {
            format!("{} Coffee", self.size)
        } else {
            format!("{} Coffee with {}", self.size, self.add_ins.describe())
        }
    }
}
