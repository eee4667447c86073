use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

/// Money in rupees.
pub type Cost = Quantity<0, 0, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}₹", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(2312.5).to_string(), "₹2312.50");
        assert_eq!(Cost::ZERO.to_string(), "₹0.00");
    }
}
