//! The store walkthrough.
//!
//! Builds one seller, one customer, one order and one admin, and reports
//! what happens either as the printed narrative or as a JSON snapshot of
//! the final state.
//!
//! # Usage
//!
//! ```bash
//! shopkeep demo
//! shopkeep demo --format json
//! ```

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use shopkeep_core::{
    Admin, Catalog, Customer, Email, Identity, Order, Person, Price, Seller, StoreError,
};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Building a store entity failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Encoding the snapshot failed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// How the demo reports its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The printed narrative.
    #[default]
    Text,
    /// A JSON snapshot of the final state.
    Json,
}

/// Final state of every entity the demo touched.
#[derive(Debug, Serialize)]
pub struct DemoSnapshot {
    pub seller: Seller,
    pub customer: Customer,
    pub order: Order,
    pub admin: Admin,
    pub total_orders: u64,
}

/// Narrative blocks in print order, plus the resulting state.
#[derive(Debug)]
pub struct DemoReport {
    /// Each entry is written followed by a newline; entries may span
    /// several lines.
    pub blocks: Vec<String>,
    pub snapshot: DemoSnapshot,
}

/// Run the scripted walkthrough.
///
/// # Errors
///
/// Returns an error if any of the hard-coded emails fail validation or
/// the order total overflows.
pub fn run_script() -> Result<DemoReport, StoreError> {
    let mut blocks = Vec::new();

    let mut seller = Seller::new(
        Person::new("Nazir Lopez", Email::parse("nazirlopez123@gmail.com")?),
        "Fashion Store",
    );
    blocks.push(seller.add_product("Hoodie", Price::from_whole(60)));
    blocks.push(seller.add_product("Jeans", Price::from_whole(40)));
    blocks.push("\n--- Seller's Products ---".to_owned());
    blocks.push(seller.display_products());

    let mut customer = Customer::new(
        Person::new("Arden Mendez", Email::parse("ardenmendez123@gmail.com")?),
        20,
    );
    blocks.push("\n--- Customer Info ---".to_owned());
    blocks.push(customer.display_info());
    blocks.push(customer.add_to_cart("Hoodie", Price::from_whole(60)));
    blocks.push(customer.add_to_cart("Jeans", Price::from_whole(40)));
    blocks.push("\n--- Customer's Cart ---".to_owned());
    blocks.push(customer.display_cart());
    blocks.push(customer.redeem_points());

    let order = Order::place(&customer, "Fashion Store")?;
    blocks.push("\n--- Order Details ---".to_owned());
    blocks.push(order.calculate_total());
    blocks.push(Order::get_total_orders());

    // The admin runs a different store, so the seller's catalog is untouched.
    let mut admin = Admin::new(
        Person::new("Admin User", Email::parse("admin@example.com")?),
        "Tech Store",
    );
    blocks.push("\n--- Admin Actions ---".to_owned());
    blocks.push(admin.remove_product("Hoodie"));
    blocks.push("\n--- Updated Products ---".to_owned());
    blocks.push(seller.display_products());

    info!(
        order = %order.number(),
        total = %order.total(),
        products = seller.catalog().len(),
        "Demo script complete"
    );

    Ok(DemoReport {
        blocks,
        snapshot: DemoSnapshot {
            seller,
            customer,
            order,
            admin,
            total_orders: Order::total_orders(),
        },
    })
}

/// Run the walkthrough and write its report to `out`.
///
/// # Errors
///
/// Returns an error if the script fails, the snapshot cannot be encoded,
/// or writing to `out` fails.
pub fn run<W: Write>(format: OutputFormat, out: &mut W) -> Result<(), DemoError> {
    let report = run_script()?;

    match format {
        OutputFormat::Text => {
            for block in &report.blocks {
                writeln!(out, "{block}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report.snapshot)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
