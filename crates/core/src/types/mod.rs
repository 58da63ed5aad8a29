//! Value types shared by the store model.
//!
//! These newtypes validate on construction so the model never holds a
//! malformed email or a negative price.

pub mod email;
pub mod id;
pub mod price;

pub use email::{Email, EmailError};
pub use id::OrderNumber;
pub use price::{Price, PriceError};
