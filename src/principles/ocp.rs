//! Open/Closed Principle.

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

pub mod legacy {
    /// Every new customer type means editing this function.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DiscountCalculator;

    impl DiscountCalculator {
        /// Returns the discount amount; unknown user types get no discount.
        pub fn calculate_discount(&self, user_type: &str, total_price: f64) -> f64 {
            if user_type == "regular" {
                total_price * 0.1
            } else if user_type == "premium" {
                total_price * 0.2
            } else {
                0.0
            }
        }
    }
}

pub mod fixed {
    pub trait Discount {
        /// Returns the discount amount, not the discounted total.
        fn apply(&self, total_price: f64) -> f64;
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct RegularDiscount;

    impl Discount for RegularDiscount {
        fn apply(&self, total_price: f64) -> f64 {
            total_price * 0.1
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct PremiumDiscount;

    impl Discount for PremiumDiscount {
        fn apply(&self, total_price: f64) -> f64 {
            total_price * 0.2
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct DiscountCalculator;

    impl DiscountCalculator {
        pub fn calculate_discount(&self, discount: &dyn Discount, total_price: f64) -> f64 {
            discount.apply(total_price)
        }
    }
}

/// Customer categories known to the demo's composition root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerTier {
    Regular,
    Premium,
}

impl CustomerTier {
    pub const ALL: [CustomerTier; 2] = [CustomerTier::Regular, CustomerTier::Premium];

    pub fn strategy(self) -> Box<dyn fixed::Discount> {
        match self {
            CustomerTier::Regular => Box::new(fixed::RegularDiscount),
            CustomerTier::Premium => Box::new(fixed::PremiumDiscount),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            CustomerTier::Regular => "regular",
            CustomerTier::Premium => "premium",
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

pub struct OcpDemo {
    total_price: f64,
}

impl OcpDemo {
    pub fn new(total_price: f64) -> Self {
        Self { total_price }
    }
}

impl Demonstration for OcpDemo {
    fn principle(&self) -> Principle {
        Principle::Ocp
    }

    fn run_legacy(&self, out: &mut dyn Write) -> Result<()> {
        let calculator = legacy::DiscountCalculator;
        for user_type in ["regular", "premium", "unknown"] {
            let amount = calculator.calculate_discount(user_type, self.total_price);
            writeln!(
                out,
                "{} discount on {:.2}: {:.2}",
                user_type, self.total_price, amount
            )?;
        }
        Ok(())
    }

    fn run_fixed(&self, out: &mut dyn Write) -> Result<()> {
        let calculator = fixed::DiscountCalculator;
        for tier in CustomerTier::ALL {
            let strategy = tier.strategy();
            let amount = calculator.calculate_discount(strategy.as_ref(), self.total_price);
            tracing::debug!(%tier, amount, "discount strategy applied");
            writeln!(
                out,
                "{} discount on {:.2}: {:.2}",
                tier, self.total_price, amount
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::fixed::Discount;
    use super::*;

    #[test]
    fn test_tier_strategies_match_legacy_tags() {
        let legacy = legacy::DiscountCalculator;
        let calculator = fixed::DiscountCalculator;
        for tier in CustomerTier::ALL {
            let expected = legacy.calculate_discount(tier.tag(), 80.0);
            let actual = calculator.calculate_discount(tier.strategy().as_ref(), 80.0);
            assert!((expected - actual).abs() < 1e-9, "{} differs", tier);
        }
    }

    #[test]
    fn test_strategies_return_discount_amount() {
        assert!((fixed::RegularDiscount.apply(100.0) - 10.0).abs() < 1e-9);
        assert!((fixed::PremiumDiscount.apply(100.0) - 20.0).abs() < 1e-9);
    }
}
