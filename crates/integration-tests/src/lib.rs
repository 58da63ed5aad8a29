//! Integration tests for Shopkeep.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopkeep-integration-tests
//! ```
//!
//! # Test Files
//!
//! - `demo_output` - Exact text printed by the walkthrough
//! - `order_counter` - Process-wide order count
//! - `store_scenarios` - Seller, customer, order and admin interactions
//!
//! Tests that assert exact order counts each sit alone in their own file,
//! since every test file runs as a separate process with a fresh counter.

#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use shopkeep_core::{Admin, Customer, Email, Person, Seller};

/// The walkthrough's seller, with an empty catalog.
#[must_use]
pub fn fashion_seller() -> Seller {
    Seller::new(
        Person::new(
            "Nazir Lopez",
            Email::parse("nazirlopez123@gmail.com").unwrap(),
        ),
        "Fashion Store",
    )
}

/// The walkthrough's customer, with an empty cart.
#[must_use]
pub fn customer_with_points(points: u32) -> Customer {
    Customer::new(
        Person::new(
            "Arden Mendez",
            Email::parse("ardenmendez123@gmail.com").unwrap(),
        ),
        points,
    )
}

/// An admin for `store_name`, with an empty catalog.
#[must_use]
pub fn admin_for(store_name: &str) -> Admin {
    Admin::new(
        Person::new("Admin User", Email::parse("admin@example.com").unwrap()),
        store_name,
    )
}
