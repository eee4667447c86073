use ecosync_quantities::energy::KilowattHours;

/// Length of the billing cycle the daily usage is scaled to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::From)]
#[display("{days} days")]
pub struct BillingPeriod {
    pub days: u16,
}

impl BillingPeriod {
    pub const BI_MONTHLY: Self = Self { days: 60 };

    pub fn total_usage(self, daily: KilowattHours) -> KilowattHours {
        daily * f64::from(self.days)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_bi_monthly_usage() {
        let usage = BillingPeriod::BI_MONTHLY.total_usage(KilowattHours::from(7.5));
        assert_abs_diff_eq!(usage.0.0, 450.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(BillingPeriod::from(30).to_string(), "30 days");
    }
}
