//! Shopkeep Core - in-memory store model.
//!
//! Models the people in a small store and what they do:
//! - sellers list products in a named store
//! - customers fill a cart and hold loyalty points
//! - orders capture a cart at checkout and count themselves
//! - admins remove products from a catalog
//!
//! # Architecture
//!
//! The core crate holds state in memory only - no I/O, no persistence.
//! Roles are composed from smaller parts rather than layered through
//! inheritance; shared behaviour lives in the [`capability`] traits.
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes for emails, prices and order numbers
//! - [`capability`] - `Identity`, `Role` and `Catalog` traits
//! - [`catalog`] - Insertion-ordered product catalog
//! - [`pricing`] - Line items and cart totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod capability;
pub mod catalog;
pub mod customer;
pub mod error;
pub mod loyalty;
pub mod order;
pub mod person;
pub mod pricing;
pub mod seller;
pub mod types;

pub use admin::Admin;
pub use capability::{Catalog, Identity, Role};
pub use catalog::ProductCatalog;
pub use customer::Customer;
pub use error::StoreError;
pub use loyalty::LoyaltyProgram;
pub use order::Order;
pub use person::Person;
pub use pricing::{LineItem, calc_price};
pub use seller::Seller;
pub use types::*;
