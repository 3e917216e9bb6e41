//! Session
//!
//! The running state of the order counter: the order history, the menu catalog and the
//! order currently being taken. Every user action maps to one method returning either a
//! status message or a [`SessionError`] for the front end to show.

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    catalog::Catalog,
    manager::{ExportError, OrderManager},
    order::{Order, OrderNumber},
    pricing::format_money,
    selection::{Selection, SelectionError},
};

/// Errors from session actions. None of them change any state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The selection could not be turned into a menu item.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// No item at that position (counting from 1) on the current order.
    #[error("Please select an item to remove (no item #{0})")]
    NoSuchItem(usize),

    /// Placing an order with no items.
    #[error("Cannot place an empty order")]
    EmptyOrder,

    /// No placed order matches.
    #[error("No placed order #{0}")]
    NoSuchOrder(String),

    /// Exporting with an empty order history.
    #[error("No orders to export")]
    NoOrders,

    /// Writing the export failed.
    #[error("Error exporting orders: {0}")]
    Export(#[from] ExportError),
}

/// Order counter state.
#[derive(Debug)]
pub struct Session {
    manager: OrderManager,
    catalog: Catalog,
    current: Order,
}

impl Session {
    /// Starts a session with a fresh order history.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_manager(OrderManager::new(), catalog)
    }

    /// Starts a session on top of an existing order manager, opening a new current order.
    pub fn with_manager(mut manager: OrderManager, catalog: Catalog) -> Self {
        let current = manager.create_new_order();

        Self {
            manager,
            catalog,
            current,
        }
    }

    /// The order being taken.
    pub fn current_order(&self) -> &Order {
        &self.current
    }

    /// The order being taken, mutably.
    pub fn current_order_mut(&mut self) -> &mut Order {
        &mut self.current
    }

    /// The order history.
    pub fn manager(&self) -> &OrderManager {
        &self.manager
    }

    /// The menu catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Builds an item from a selection and adds it to the current order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Selection`] if the selection is incomplete or invalid.
    pub fn add_selection(&mut self, selection: &Selection) -> Result<String, SessionError> {
        let item = selection.build(&self.catalog).inspect_err(|error| {
            warn!(%error, "rejected selection");
        })?;

        let message = format!("Added to order: {item}");

        info!(order = self.current.number().get(), item = %item, "item added");

        self.current.add_item(item);

        Ok(message)
    }

    /// Removes the item at `index` (zero-based) from the current order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSuchItem`] if there is no item at that position.
    pub fn remove_item_at(&mut self, index: usize) -> Result<String, SessionError> {
        let item = self
            .current
            .key_at(index)
            .and_then(|key| self.current.remove_item(key))
            .ok_or(SessionError::NoSuchItem(index + 1))?;

        info!(order = self.current.number().get(), item = %item, "item removed");

        Ok("Item removed from order".to_string())
    }

    /// Removes every item from the current order.
    pub fn clear_current_order(&mut self) -> String {
        self.current.clear_items();

        info!(order = self.current.number().get(), "order cleared");

        "All items removed from order".to_string()
    }

    /// Places the current order and starts a new one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyOrder`] if the current order has no items.
    pub fn place_current_order(&mut self) -> Result<String, SessionError> {
        if self.current.is_empty() {
            return Err(SessionError::EmptyOrder);
        }

        let next = self.manager.create_new_order();
        let placed = std::mem::replace(&mut self.current, next);
        let message = format!(
            "Order #{} placed successfully! Total: {}. New current order: #{}",
            placed.number(),
            format_money(&placed.total()),
            self.current.number()
        );

        self.manager.add_order(placed);

        Ok(message)
    }

    /// Looks up a placed order by its position in the history (zero-based).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSuchOrder`] if the index is out of range.
    pub fn order_at(&self, index: usize) -> Result<&Order, SessionError> {
        self.manager
            .all_orders()
            .get(index)
            .ok_or_else(|| SessionError::NoSuchOrder(format!("at position {}", index + 1)))
    }

    /// Looks up a placed order by number.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSuchOrder`] if no placed order has that number.
    pub fn order(&self, number: OrderNumber) -> Result<&Order, SessionError> {
        self.manager
            .order(number)
            .ok_or_else(|| SessionError::NoSuchOrder(number.to_string()))
    }

    /// Cancels the placed order at `index` (zero-based) in the history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSuchOrder`] if the index is out of range.
    pub fn cancel_order_at(&mut self, index: usize) -> Result<String, SessionError> {
        let number = self.order_at(index)?.number();

        self.cancel_order(number)
    }

    /// Cancels a placed order by number.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSuchOrder`] if no placed order has that number.
    pub fn cancel_order(&mut self, number: OrderNumber) -> Result<String, SessionError> {
        self.manager
            .remove_order(number)
            .ok_or_else(|| SessionError::NoSuchOrder(number.to_string()))?;

        Ok(format!("Order #{number} cancelled"))
    }

    /// Exports the order history to a text file.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoOrders`]: nothing has been placed yet.
    /// - [`SessionError::Export`]: the file could not be written.
    pub fn export_orders(&self, path: &Path) -> Result<String, SessionError> {
        if self.manager.all_orders().is_empty() {
            return Err(SessionError::NoOrders);
        }

        self.manager.export_orders(path).inspect_err(|error| {
            warn!(%error, path = %path.display(), "export failed");
        })?;

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

        Ok(format!("Orders exported successfully to: {name}"))
    }
}
