//! Pricing

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};

/// A price in the shop currency (USD).
pub type Price = Money<'static, iso::Currency>;

/// Sales tax rate applied to every order, as a fraction (6.625%).
pub const SALES_TAX_RATE: Decimal = Decimal::from_parts(6625, 0, 0, false, 5);

/// Creates a price from a number of cents.
pub fn cents(minor: i64) -> Price {
    Money::from_minor(minor, iso::USD)
}

/// A zero price.
pub fn zero() -> Price {
    cents(0)
}

/// Returns the sales tax rate as a percentage.
pub fn sales_tax_rate() -> Percentage {
    Percentage::from(SALES_TAX_RATE)
}

/// Calculates the sales tax owed on a subtotal.
///
/// The result keeps full decimal precision; rounding only happens when the value is formatted.
pub fn sales_tax(subtotal: &Price) -> Price {
    Money::from_decimal(sales_tax_rate() * *subtotal.amount(), iso::USD)
}

/// Adds up a sequence of prices.
pub fn sum_prices(prices: impl IntoIterator<Item = Price>) -> Price {
    let amount = prices
        .into_iter()
        .fold(Decimal::ZERO, |acc, price| acc + *price.amount());

    Money::from_decimal(amount, iso::USD)
}

/// Adds two prices together.
pub fn add_prices(lhs: &Price, rhs: &Price) -> Price {
    Money::from_decimal(*lhs.amount() + *rhs.amount(), iso::USD)
}

/// Multiplies a unit price by a quantity.
pub fn times(unit: &Price, quantity: u32) -> Price {
    Money::from_decimal(*unit.amount() * Decimal::from(quantity), iso::USD)
}

/// Formats a price as `$<amount>` with exactly two decimal places.
///
/// Half cents round away from zero, so `6.625` is shown as `$6.63`.
pub fn format_money(price: &Price) -> String {
    let rounded = price
        .amount()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("${rounded:.2}")
}
