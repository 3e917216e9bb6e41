//! RU Donuts prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError},
    items::{
        AddIn, AddOn, Bread, Coffee, CupSize, Donut, DonutKind, Extra, Extras, MenuItem,
        MenuItemError, Protein, Quantity, Sandwich,
    },
    manager::{ExportError, OrderManager},
    order::{ItemKey, Order, OrderNumber},
    pricing::{Price, SALES_TAX_RATE, format_money},
    receipt::ReceiptError,
    selection::{CoffeeSelection, DonutSelection, SandwichSelection, Selection, SelectionError},
    session::{Session, SessionError},
    shell::{Shell, ShellError},
};
