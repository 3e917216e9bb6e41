//! Order Manager
//!
//! Keeps the history of placed orders and hands out order numbers.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::order::{Order, OrderNumber};

/// Title line of the exported order history.
const EXPORT_TITLE: &str = "RU Donuts - All Orders";

/// Errors that can occur while exporting the order history.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export file could not be created or truncated.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path that was being written
        path: PathBuf,

        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Writing the export failed partway. The output may be incomplete.
    #[error("failed to write orders: {0}")]
    Write(#[from] io::Error),
}

/// Registry of placed orders and the order number sequence.
#[derive(Debug)]
pub struct OrderManager {
    orders: Vec<Order>,
    next_order_number: u64,
}

impl Default for OrderManager {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            next_order_number: 1,
        }
    }
}

impl OrderManager {
    /// Creates a manager with no orders; the first order will be number 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out a new, empty order with the next order number.
    ///
    /// The number is consumed even if the order is never placed.
    pub fn create_new_order(&mut self) -> Order {
        let number = OrderNumber::new(self.next_order_number);
        self.next_order_number += 1;

        debug!(order = number.get(), "created order");

        Order::new(number)
    }

    /// Places an order by adding it to the history.
    ///
    /// There is no duplicate check: adding the same order twice records it twice.
    pub fn add_order(&mut self, order: Order) {
        info!(
            order = order.number().get(),
            items = order.len(),
            "order placed"
        );

        self.orders.push(order);
    }

    /// Cancels a placed order, removing the first entry with that number.
    ///
    /// Returns `None` if no such order has been placed.
    pub fn remove_order(&mut self, number: OrderNumber) -> Option<Order> {
        let idx = self
            .orders
            .iter()
            .position(|order| order.number() == number)?;

        info!(order = number.get(), "order cancelled");

        Some(self.orders.remove(idx))
    }

    /// Every placed order, oldest first.
    pub fn all_orders(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up a placed order by number.
    pub fn order(&self, number: OrderNumber) -> Option<&Order> {
        self.orders.iter().find(|order| order.number() == number)
    }

    /// The number the next created order will get.
    pub fn next_order_number(&self) -> OrderNumber {
        OrderNumber::new(self.next_order_number)
    }

    /// Writes the order history in the plain-text export format.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Write`] if writing to `out` fails.
    pub fn write_orders(&self, mut out: impl Write) -> Result<(), ExportError> {
        writeln!(out, "{EXPORT_TITLE}")?;
        writeln!(out, "{}", "=".repeat(EXPORT_TITLE.len()))?;
        writeln!(out)?;

        for order in &self.orders {
            write!(out, "{order}\n\n")?;
        }

        writeln!(out, "Total Orders: {}", self.orders.len())?;

        Ok(())
    }

    /// Exports the order history to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// - [`ExportError::Open`]: the file could not be created.
    /// - [`ExportError::Write`]: writing failed; the file may be left incomplete.
    pub fn export_orders(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();

        let file = File::create(path).map_err(|source| ExportError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::new(file);

        self.write_orders(&mut writer)?;
        writer.flush()?;

        info!(
            path = %path.display(),
            orders = self.orders.len(),
            "exported orders"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::items::{DonutKind, MenuItem, Quantity};

    use super::*;

    fn placed_order(manager: &mut OrderManager) -> OrderNumber {
        let mut order = manager.create_new_order();
        order.add_item(MenuItem::donut(DonutKind::Yeast, "Jelly", Quantity::ONE));

        let number = order.number();
        manager.add_order(order);

        number
    }

    #[test]
    fn order_numbers_start_at_one_and_increase() {
        let mut manager = OrderManager::new();

        let numbers: Vec<u64> = (0..5)
            .map(|_| manager.create_new_order().number().get())
            .collect();

        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(manager.all_orders().is_empty());
        assert_eq!(manager.next_order_number(), OrderNumber::new(6));
    }

    #[test]
    fn add_order_does_not_deduplicate() {
        let mut manager = OrderManager::new();
        let order = manager.create_new_order();

        manager.add_order(order.clone());
        manager.add_order(order);

        assert_eq!(manager.all_orders().len(), 2);
    }

    #[test]
    fn remove_order_removes_first_match_only() {
        let mut manager = OrderManager::new();
        let order = manager.create_new_order();
        let number = order.number();

        manager.add_order(order.clone());
        manager.add_order(order);

        assert!(manager.remove_order(number).is_some());
        assert_eq!(manager.all_orders().len(), 1);
    }

    #[test]
    fn remove_unknown_order_is_noop() {
        let mut manager = OrderManager::new();
        placed_order(&mut manager);

        assert!(manager.remove_order(OrderNumber::new(99)).is_none());
        assert_eq!(manager.all_orders().len(), 1);
    }

    #[test]
    fn order_lookup_by_number() {
        let mut manager = OrderManager::new();
        manager.create_new_order();
        let number = placed_order(&mut manager);

        assert_eq!(manager.order(number).map(Order::number), Some(number));
        assert!(manager.order(OrderNumber::new(1)).is_none());
    }

    #[test]
    fn write_orders_with_no_orders() -> TestResult {
        let manager = OrderManager::new();
        let mut out = Vec::new();

        manager.write_orders(&mut out)?;

        assert_eq!(
            String::from_utf8(out)?,
            "RU Donuts - All Orders\n======================\n\nTotal Orders: 0\n"
        );

        Ok(())
    }

    #[test]
    fn write_orders_separates_orders_with_blank_lines() -> TestResult {
        let mut manager = OrderManager::new();
        placed_order(&mut manager);
        placed_order(&mut manager);

        let mut out = Vec::new();
        manager.write_orders(&mut out)?;

        let expected = "\
RU Donuts - All Orders
======================

Order #1
  Yeast Donut (Jelly) x1 $1.99
Subtotal: $1.99
Sales Tax: $0.13
Total: $2.12

Order #2
  Yeast Donut (Jelly) x1 $1.99
Subtotal: $1.99
Sales Tax: $0.13
Total: $2.12

Total Orders: 2
";

        assert_eq!(String::from_utf8(out)?, expected);

        Ok(())
    }

    /// Accepts `remaining` bytes, then fails every write.
    struct FailingWriter {
        remaining: usize,
        written: Vec<u8>,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::other("disk full"));
            }

            let n = buf.len().min(self.remaining);
            self.remaining -= n;
            self.written.extend_from_slice(buf.get(..n).unwrap_or_default());

            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_partway_is_reported() {
        let mut manager = OrderManager::new();
        placed_order(&mut manager);
        placed_order(&mut manager);

        let mut out = FailingWriter {
            remaining: 60,
            written: Vec::new(),
        };

        let result = manager.write_orders(&mut out);

        assert!(matches!(result, Err(ExportError::Write(_))));
        assert_eq!(out.written.len(), 60);

        if let Err(error) = result {
            assert_eq!(error.to_string(), "failed to write orders: disk full");
        }
    }
}
