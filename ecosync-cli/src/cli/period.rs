use clap::Parser;

use crate::period::BillingPeriod;

#[derive(Copy, Clone, Parser)]
pub struct PeriodArgs {
    /// Billing cycle length the daily usage gets multiplied by.
    #[clap(
        long = "period-days",
        env = "ECOSYNC_PERIOD_DAYS",
        default_value_t = BillingPeriod::BI_MONTHLY.days
    )]
    pub days: u16,
}

impl From<PeriodArgs> for BillingPeriod {
    fn from(args: PeriodArgs) -> Self {
        Self::from(args.days)
    }
}
