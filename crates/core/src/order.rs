//! Checkout: orders and the process-wide order counter.

use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::capability::Identity;
use crate::customer::Customer;
use crate::error::StoreError;
use crate::person::Person;
use crate::pricing::{LineItem, calc_price};
use crate::types::OrderNumber;

/// Orders constructed since process start.
static TOTAL_ORDERS: AtomicU64 = AtomicU64::new(0);

/// A customer's cart captured at checkout, with its total.
///
/// The items are a copy of the cart taken when the order is placed; later
/// changes to the customer's cart do not affect the order. The total is
/// computed once and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    number: OrderNumber,
    customer: Person,
    store_name: String,
    items: Vec<LineItem>,
    total: Decimal,
}

impl Order {
    /// Place an order for the customer's current cart.
    ///
    /// `store_name` is recorded as given; it is not checked against where
    /// the items came from.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Price`] if the cart total overflows. A failed
    /// order is not counted.
    pub fn place(
        customer: &Customer,
        store_name: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let items = customer.cart().to_vec();
        let total = calc_price(&items)?;
        let number = OrderNumber::new(TOTAL_ORDERS.fetch_add(1, Ordering::SeqCst) + 1);
        let store_name = store_name.into();

        debug!(
            order = %number,
            customer = customer.person().name(),
            store = %store_name,
            items = items.len(),
            %total,
            "Order placed"
        );

        Ok(Self {
            number,
            customer: customer.person().clone(),
            store_name,
            items,
            total,
        })
    }

    /// `Order total is ${total}.`
    #[must_use]
    pub fn calculate_total(&self) -> String {
        format!("Order total is ${}.", self.total.normalize())
    }

    /// Number of orders placed in this process so far.
    #[must_use]
    pub fn total_orders() -> u64 {
        TOTAL_ORDERS.load(Ordering::SeqCst)
    }

    /// `Total orders placed: {n}`
    #[must_use]
    pub fn get_total_orders() -> String {
        format!("Total orders placed: {}", Self::total_orders())
    }

    #[must_use]
    pub const fn number(&self) -> OrderNumber {
        self.number
    }

    #[must_use]
    pub const fn customer(&self) -> &Person {
        &self.customer
    }

    #[must_use]
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }
}

// The counter is shared by every test in this binary, so assertions here
// only rely on it growing.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Email, Price, PriceError};

    fn customer() -> Customer {
        let person = Person::new(
            "Arden Mendez",
            Email::parse("ardenmendez123@gmail.com").unwrap(),
        );
        let mut customer = Customer::new(person, 20);
        customer.add_to_cart("Hoodie", Price::from_whole(60));
        customer.add_to_cart("Jeans", Price::from_whole(40));
        customer
    }

    #[test]
    fn test_calculate_total() {
        let order = Order::place(&customer(), "Fashion Store").unwrap();
        assert_eq!(order.calculate_total(), "Order total is $100.");
        assert_eq!(order.total(), Decimal::from(100));
        assert_eq!(order.store_name(), "Fashion Store");
        assert_eq!(order.customer().name(), "Arden Mendez");
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let person = Person::new("Empty", Email::parse("empty@example.com").unwrap());
        let order = Order::place(&Customer::new(person, 0), "Fashion Store").unwrap();
        assert_eq!(order.calculate_total(), "Order total is $0.");
        assert!(order.items().is_empty());
    }

    #[test]
    fn test_items_are_a_snapshot() {
        let mut customer = customer();
        let order = Order::place(&customer, "Fashion Store").unwrap();
        customer.add_to_cart("Cap", Price::from_whole(15));

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.calculate_total(), "Order total is $100.");
        assert_eq!(customer.cart().len(), 3);
    }

    #[test]
    fn test_order_does_not_touch_points() {
        let customer = customer();
        let order = Order::place(&customer, "Fashion Store").unwrap();
        assert_eq!(customer.redeem_points(), "You have 20 loyalty points!");
        assert_eq!(customer.display_info(), order.customer().display_info());
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let person = Person::new("Big Spender", Email::parse("big@example.com").unwrap());
        let mut customer = Customer::new(person, 0);
        let max = Price::new(Decimal::MAX).unwrap();
        customer.add_to_cart("Yacht", max);
        customer.add_to_cart("Jet", max);

        assert_eq!(
            Order::place(&customer, "Fashion Store"),
            Err(StoreError::Price(PriceError::Overflow))
        );
    }

    #[test]
    fn test_total_drops_trailing_zeros() {
        let person = Person::new("Arden Mendez", Email::parse("arden@example.com").unwrap());
        let mut customer = Customer::new(person, 0);
        customer.add_to_cart("Hoodie", "59.99".parse().unwrap());
        customer.add_to_cart("Pin", "0.01".parse().unwrap());

        let order = Order::place(&customer, "Fashion Store").unwrap();
        assert_eq!(order.calculate_total(), "Order total is $60.");
    }

    #[test]
    fn test_counter_grows_per_order() {
        let customer = customer();
        let first = Order::place(&customer, "Fashion Store").unwrap();
        let second = Order::place(&customer, "Fashion Store").unwrap();

        assert!(second.number() > first.number());
        assert!(Order::total_orders() >= second.number().as_u64());
        assert!(Order::get_total_orders().starts_with("Total orders placed: "));
    }
}
