//! Orders

use std::fmt;

use slotmap::{SlotMap, new_key_type};

use crate::{
    items::MenuItem,
    pricing::{Price, add_prices, format_money, sales_tax, sum_prices},
};

new_key_type! {
    struct LineKey;
}

/// Identity of a line on an order.
///
/// Two lines with identical options still have different keys, so removal only ever
/// affects the line that was asked for. A key also records the order that issued it and
/// is rejected by any other order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemKey {
    order: OrderNumber,
    line: LineKey,
}

impl ItemKey {
    /// Number of the order this line belongs to.
    pub fn order(self) -> OrderNumber {
        self.order
    }
}

/// Order number, unique within an [`OrderManager`](crate::manager::OrderManager).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderNumber(u64);

impl OrderNumber {
    /// Wraps a raw order number.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw order number.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer order: a numbered list of menu items.
#[derive(Clone, Debug)]
pub struct Order {
    number: OrderNumber,
    items: SlotMap<LineKey, MenuItem>,

    /// Insertion order of `items`
    lines: Vec<LineKey>,
}

impl Order {
    /// Creates an empty order. Orders are normally handed out by
    /// [`OrderManager::create_new_order`](crate::manager::OrderManager::create_new_order).
    pub fn new(number: OrderNumber) -> Self {
        Self {
            number,
            items: SlotMap::with_key(),
            lines: Vec::new(),
        }
    }

    /// The order number.
    pub fn number(&self) -> OrderNumber {
        self.number
    }

    /// Appends an item and returns its key.
    pub fn add_item(&mut self, item: MenuItem) -> ItemKey {
        let line = self.items.insert(item);
        self.lines.push(line);

        self.key(line)
    }

    /// Removes the item with the given key. Returns `None` if it is not on this order.
    pub fn remove_item(&mut self, key: ItemKey) -> Option<MenuItem> {
        let line = self.line(key)?;
        let item = self.items.remove(line)?;
        self.lines.retain(|other| *other != line);

        Some(item)
    }

    /// Removes every item.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.lines.clear();
    }

    /// Looks up an item by key.
    pub fn item(&self, key: ItemKey) -> Option<&MenuItem> {
        self.items.get(self.line(key)?)
    }

    /// Looks up an item by key, mutably. Prices follow any change made through it.
    pub fn item_mut(&mut self, key: ItemKey) -> Option<&mut MenuItem> {
        let line = self.line(key)?;

        self.items.get_mut(line)
    }

    /// Key of the item at a position in the order.
    pub fn key_at(&self, index: usize) -> Option<ItemKey> {
        self.lines.get(index).map(|line| self.key(*line))
    }

    /// Iterates items in the order they were added.
    pub fn items(&self) -> impl Iterator<Item = (ItemKey, &MenuItem)> + '_ {
        self.lines
            .iter()
            .filter_map(|line| self.items.get(*line).map(|item| (self.key(*line), item)))
    }

    /// Number of lines on the order.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the order has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of every line price, before tax.
    pub fn subtotal(&self) -> Price {
        sum_prices(self.items().map(|(_, item)| item.price()))
    }

    /// Sales tax owed on the subtotal.
    pub fn sales_tax(&self) -> Price {
        sales_tax(&self.subtotal())
    }

    /// Subtotal plus sales tax.
    pub fn total(&self) -> Price {
        let subtotal = self.subtotal();

        add_prices(&subtotal, &sales_tax(&subtotal))
    }

    fn key(&self, line: LineKey) -> ItemKey {
        ItemKey {
            order: self.number,
            line,
        }
    }

    /// The slot for `key`, if the key was issued by this order.
    fn line(&self, key: ItemKey) -> Option<LineKey> {
        (key.order == self.number).then_some(key.line)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subtotal = self.subtotal();
        let tax = sales_tax(&subtotal);

        writeln!(f, "Order #{}", self.number)?;

        for (_, item) in self.items() {
            writeln!(f, "  {item}")?;
        }

        writeln!(f, "Subtotal: {}", format_money(&subtotal))?;
        writeln!(f, "Sales Tax: {}", format_money(&tax))?;
        write!(f, "Total: {}", format_money(&add_prices(&subtotal, &tax)))
    }
}
