//! Line items and cart totals.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, PriceError};

/// A `(product name, price)` pair as held in a cart or an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name.
    pub name: String,
    /// Unit price at the time the item was added.
    pub price: Price,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Renders as `Product: {name} | Price: ${price}`, the listing format shared
/// by catalogs and carts.
impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&listing_line(&self.name, self.price))
    }
}

/// Sum the prices of `items`. Labels are ignored; an empty slice totals `0`.
///
/// # Errors
///
/// Returns [`PriceError::Overflow`] if the sum exceeds [`Decimal::MAX`].
///
/// ```
/// use shopkeep_core::{LineItem, Price, calc_price};
/// use rust_decimal::Decimal;
///
/// assert_eq!(calc_price(&[]), Ok(Decimal::ZERO));
///
/// let items = [
///     LineItem::new("A", Price::from_whole(10)),
///     LineItem::new("B", "5.5".parse().unwrap()),
/// ];
/// assert_eq!(calc_price(&items), Ok(Decimal::new(155, 1)));
/// ```
pub fn calc_price(items: &[LineItem]) -> Result<Decimal, PriceError> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        total
            .checked_add(item.price.amount())
            .ok_or(PriceError::Overflow)
    })
}

/// `Product: {name} | Price: ${price}`
pub(crate) fn listing_line(name: &str, price: Price) -> String {
    format!("Product: {name} | Price: ${price}")
}

/// Join `lines` with newlines, or return `empty` when there are none.
pub(crate) fn render_listing<I>(lines: I, empty: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    let lines: Vec<String> = lines.into_iter().collect();
    if lines.is_empty() {
        empty.to_owned()
    } else {
        lines.join("\n")
    }
}
