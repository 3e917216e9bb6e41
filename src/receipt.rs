//! Receipt
//!
//! Console views of orders, the order history and the menu.

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    catalog::Catalog,
    items::{AddIn, AddOn, Bread, CupSize, DonutKind, Extra, Protein},
    order::Order,
    pricing::{Price, SALES_TAX_RATE, format_money},
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Writes the order being taken: one row per item followed by the totals.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if writing to `out` fails.
pub fn write_current_order(mut out: impl io::Write, order: &Order) -> Result<(), ReceiptError> {
    writeln!(out, "Current Order #{}", order.number())?;

    if order.is_empty() {
        writeln!(out, "(no items)")?;
    } else {
        writeln!(out, "{}", item_table(order))?;
    }

    write_totals(&mut out, order)
}

/// Writes a placed order in detail.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if writing to `out` fails.
pub fn write_order_details(mut out: impl io::Write, order: &Order) -> Result<(), ReceiptError> {
    let title = format!("Order #{}", order.number());

    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "{}", item_table(order))?;

    write_totals(&mut out, order)
}

/// Writes one row per placed order with its position, number and total.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if writing to `out` fails.
pub fn write_order_history(mut out: impl io::Write, orders: &[Order]) -> Result<(), ReceiptError> {
    if orders.is_empty() {
        writeln!(out, "No orders placed yet.")?;
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["", "Order", "Items", "Total"]);

    for (idx, order) in orders.iter().enumerate() {
        builder.push_record([
            format!("{}", idx + 1),
            format!("Order #{} - {}", order.number(), format_money(&order.total())),
            order.len().to_string(),
            format_money(&order.total()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Writes the menu: every item type with its options and prices.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if writing to `out` fails.
pub fn write_menu(mut out: impl io::Write, catalog: &Catalog) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();
    builder.push_record(["Item", "Options", "Price"]);

    for kind in DonutKind::ALL {
        builder.push_record([
            kind.to_string(),
            catalog.flavors(kind).join(", "),
            format!("{} each", format_money(&kind.unit_price())),
        ]);
    }

    for size in CupSize::ALL {
        builder.push_record([
            format!("{size} Coffee"),
            String::new(),
            format_money(&size.base_price()),
        ]);
    }

    builder.push_record([
        "Coffee add-in".to_string(),
        labels(AddIn::ALL),
        format!("{} each", format_money(&AddIn::Milk.price())),
    ]);

    let breads = Bread::ALL
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    for protein in Protein::ALL {
        builder.push_record([
            format!("{protein} Sandwich"),
            breads.clone(),
            format_money(&protein.base_price()),
        ]);
    }

    for add_on in AddOn::ALL {
        builder.push_record([
            "Sandwich add-on".to_string(),
            add_on.label().to_string(),
            format_money(&add_on.price()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..3), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "Sales tax: {}%",
        (SALES_TAX_RATE * Decimal::ONE_HUNDRED).normalize()
    )?;

    Ok(())
}

fn item_table(order: &Order) -> tabled::Table {
    let mut builder = Builder::default();
    builder.push_record(["", "Item", "Qty", "Price"]);

    for (idx, (_, item)) in order.items().enumerate() {
        builder.push_record([
            format!("#{:<3}", idx + 1),
            item.name(),
            item.quantity().to_string(),
            format_money(&item.price()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());

    table
}

fn write_totals(out: &mut impl io::Write, order: &Order) -> Result<(), ReceiptError> {
    let lines = [
        ("Subtotal:", order.subtotal()),
        ("Sales Tax:", order.sales_tax()),
        ("Total:", order.total()),
    ];

    let value_width = lines
        .iter()
        .map(|(_, value)| format_money(value).len())
        .max()
        .unwrap_or_default();

    for (label, value) in &lines {
        write_summary_line(out, label, value, value_width)?;
    }

    Ok(())
}

fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &Price,
    value_width: usize,
) -> Result<(), ReceiptError> {
    writeln!(out, " {label:<10} {:>value_width$}", format_money(value))?;

    Ok(())
}

fn labels<T: Extra>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(Extra::label)
        .collect::<Vec<_>>()
        .join(", ")
}
