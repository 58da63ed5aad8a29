//! Customer loyalty points.

use serde::{Deserialize, Serialize};

/// A loyalty point balance. Nothing in the store changes it after
/// construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyProgram {
    points: u32,
}

impl LoyaltyProgram {
    #[must_use]
    pub const fn new(points: u32) -> Self {
        Self { points }
    }

    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Report the balance as `You have {points} loyalty points!`.
    ///
    /// This is a report only: the balance is not consumed.
    #[must_use]
    pub fn redeem_points(&self) -> String {
        format!("You have {} loyalty points!", self.points)
    }
}
