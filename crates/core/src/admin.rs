//! Store admins.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capability::{Catalog, Identity, Role};
use crate::catalog::ProductCatalog;
use crate::person::Person;
use crate::seller::Seller;

/// A seller who may also remove products from the catalog.
///
/// All seller behaviour is delegated, including [`Role::get_role`], which
/// therefore reports `"{name} is a Seller."`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Admin {
    seller: Seller,
}

impl Admin {
    /// Create an admin managing `store_name`, starting with an empty catalog.
    pub fn new(person: Person, store_name: impl Into<String>) -> Self {
        Self {
            seller: Seller::new(person, store_name),
        }
    }

    #[must_use]
    pub const fn seller(&self) -> &Seller {
        &self.seller
    }

    /// Remove `name` from the catalog.
    ///
    /// A missing product is reported in the returned message, not as an
    /// error.
    pub fn remove_product(&mut self, name: &str) -> String {
        let store = self.seller.store_name().to_owned();
        match self.seller.catalog_mut().remove(name) {
            Some(price) => {
                debug!(store = %store, product = name, %price, "Product removed");
                format!("Product '{name}' removed from {store}.")
            }
            None => {
                debug!(store = %store, product = name, "Product not found for removal");
                format!("Product '{name}' not found in {store}.")
            }
        }
    }
}

impl From<Seller> for Admin {
    fn from(seller: Seller) -> Self {
        Self { seller }
    }
}

impl Identity for Admin {
    fn person(&self) -> &Person {
        self.seller.person()
    }
}

impl Role for Admin {
    fn get_role(&self) -> String {
        self.seller.get_role()
    }
}

impl Catalog for Admin {
    fn store_name(&self) -> &str {
        self.seller.store_name()
    }

    fn catalog(&self) -> &ProductCatalog {
        self.seller.catalog()
    }

    fn catalog_mut(&mut self) -> &mut ProductCatalog {
        self.seller.catalog_mut()
    }
}
