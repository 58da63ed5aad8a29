//! Capability traits shared across store roles.
//!
//! Roles are built by composition: a [`Customer`](crate::Customer) owns a
//! [`Person`] and a loyalty balance, an [`Admin`](crate::Admin) owns a
//! [`Seller`](crate::Seller). These traits expose the behaviour they have
//! in common.

use tracing::debug;

use crate::catalog::ProductCatalog;
use crate::person::Person;
use crate::types::Price;

/// Something backed by a [`Person`].
pub trait Identity {
    fn person(&self) -> &Person;

    fn name(&self) -> &str {
        self.person().name()
    }

    /// `Name: {name} | Email: {email}`
    fn display_info(&self) -> String {
        self.person().display_info()
    }
}

/// Describes the part someone plays in the store.
pub trait Role {
    fn get_role(&self) -> String;
}

/// Owns a named store and its product catalog.
pub trait Catalog {
    fn store_name(&self) -> &str;

    fn catalog(&self) -> &ProductCatalog;

    fn catalog_mut(&mut self) -> &mut ProductCatalog;

    /// Insert or overwrite a product and return a confirmation line.
    ///
    /// Overwriting keeps the product's listing position.
    fn add_product(&mut self, name: &str, price: Price) -> String {
        let replaced = self.catalog_mut().insert(name, price);
        debug!(
            store = self.store_name(),
            product = name,
            %price,
            overwrite = replaced.is_some(),
            "Product added"
        );
        format!(
            "Product '{name}' added to {} at ${price}.",
            self.store_name()
        )
    }

    /// The catalog listing in insertion order.
    fn display_products(&self) -> String {
        self.catalog().listing()
    }
}
