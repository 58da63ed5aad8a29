//! Sellers and their stores.

use serde::{Deserialize, Serialize};

use crate::capability::{Catalog, Identity, Role};
use crate::catalog::ProductCatalog;
use crate::person::Person;

/// A person running a named store with its own catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    #[serde(flatten)]
    person: Person,
    store_name: String,
    products: ProductCatalog,
}

impl Seller {
    /// Create a seller with an empty catalog.
    pub fn new(person: Person, store_name: impl Into<String>) -> Self {
        Self {
            person,
            store_name: store_name.into(),
            products: ProductCatalog::new(),
        }
    }
}

impl Identity for Seller {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl Role for Seller {
    fn get_role(&self) -> String {
        format!("{} is a Seller.", self.person.name())
    }
}

impl Catalog for Seller {
    fn store_name(&self) -> &str {
        &self.store_name
    }

    fn catalog(&self) -> &ProductCatalog {
        &self.products
    }

    fn catalog_mut(&mut self) -> &mut ProductCatalog {
        &mut self.products
    }
}
