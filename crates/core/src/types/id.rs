//! Newtype identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Sequence number of a placed order.
///
/// Numbers come from the process-wide order counter, so the first order
/// placed in a process is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(u64);

impl OrderNumber {
    /// Create an order number from a raw counter value.
    #[must_use]
    pub const fn new(n: u64) -> Self {
        Self(n)
    }

    /// Get the underlying counter value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<OrderNumber> for u64 {
    fn from(n: OrderNumber) -> Self {
        n.0
    }
}
