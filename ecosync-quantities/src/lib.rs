pub mod cost;
pub mod energy;
pub mod rate;

use std::ops::Mul;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const POWER: isize, const TIME: isize, const COST: isize>(
    pub OrderedFloat<f64>,
);

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<POWER, TIME, COST> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    /// Construct the quantity in a `const` context.
    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub const fn is_finite(self) -> bool {
        self.0.0.is_finite()
    }

    /// Round to two decimal places, ties away from zero.
    ///
    /// Values too large to scale have no fractional part and are returned as is.
    pub fn round_to_hundredths(self) -> Self {
        let scaled = self.0.0 * 100.0;
        if scaled.is_finite() { Self(OrderedFloat(scaled.round() / 100.0)) } else { self }
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Mul<f64>
    for Quantity<POWER, TIME, COST>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}
