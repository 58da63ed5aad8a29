//! Customers, their carts, and their loyalty balance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capability::{Identity, Role};
use crate::loyalty::LoyaltyProgram;
use crate::person::Person;
use crate::pricing::{LineItem, render_listing};
use crate::types::Price;

/// A shopper with a cart and loyalty points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    person: Person,
    loyalty: LoyaltyProgram,
    cart: Vec<LineItem>,
}

impl Customer {
    /// Listing text for an empty cart.
    pub const EMPTY_CART: &'static str = "Your cart is empty.";

    /// Create a customer with an empty cart and `points` loyalty points.
    #[must_use]
    pub const fn new(person: Person, points: u32) -> Self {
        Self {
            person,
            loyalty: LoyaltyProgram::new(points),
            cart: Vec::new(),
        }
    }

    /// Append an item to the cart. Duplicates are kept.
    pub fn add_to_cart(&mut self, name: &str, price: Price) -> String {
        self.cart.push(LineItem::new(name, price));
        debug!(
            customer = self.person.name(),
            product = name,
            %price,
            cart_size = self.cart.len(),
            "Item added to cart"
        );
        format!("{name} was added to your cart!")
    }

    /// One line per cart entry in the order added, or [`Self::EMPTY_CART`].
    #[must_use]
    pub fn display_cart(&self) -> String {
        render_listing(self.cart.iter().map(ToString::to_string), Self::EMPTY_CART)
    }

    #[must_use]
    pub fn cart(&self) -> &[LineItem] {
        &self.cart
    }

    #[must_use]
    pub const fn loyalty(&self) -> &LoyaltyProgram {
        &self.loyalty
    }

    #[must_use]
    pub fn redeem_points(&self) -> String {
        self.loyalty.redeem_points()
    }
}

impl Identity for Customer {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl Role for Customer {
    fn get_role(&self) -> String {
        format!("{} is a Customer.", self.person.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Email;

    fn customer(points: u32) -> Customer {
        let person = Person::new(
            "Arden Mendez",
            Email::parse("ardenmendez123@gmail.com").unwrap(),
        );
        Customer::new(person, points)
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(customer(0).display_cart(), "Your cart is empty.");
    }

    #[test]
    fn test_add_to_cart_keeps_duplicates_in_order() {
        let mut customer = customer(0);
        assert_eq!(
            customer.add_to_cart("Hoodie", Price::from_whole(60)),
            "Hoodie was added to your cart!"
        );
        customer.add_to_cart("Jeans", Price::from_whole(40));
        customer.add_to_cart("Hoodie", Price::from_whole(60));

        assert_eq!(customer.cart().len(), 3);
        assert_eq!(
            customer.display_cart(),
            "Product: Hoodie | Price: $60\nProduct: Jeans | Price: $40\nProduct: Hoodie | Price: $60"
        );
    }

    #[test]
    fn test_role_and_points() {
        let customer = customer(20);
        assert_eq!(customer.get_role(), "Arden Mendez is a Customer.");
        assert_eq!(customer.redeem_points(), "You have 20 loyalty points!");
        assert_eq!(
            customer.display_info(),
            "Name: Arden Mendez | Email: ardenmendez123@gmail.com"
        );
    }
}
