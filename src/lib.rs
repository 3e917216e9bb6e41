//! RU Donuts
//!
//! Pricing and order model for the RU Donuts point-of-sale: menu items with their pricing
//! formulas, orders with subtotal, sales tax and total, the placed-order history with text
//! export, and a line-oriented shell for taking orders at the counter.

pub mod catalog;
pub mod items;
pub mod manager;
pub mod order;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod selection;
pub mod session;
pub mod shell;
