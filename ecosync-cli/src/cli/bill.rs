use clap::Parser;
use ecosync_quantities::energy::KilowattHours;

use crate::{
    cli::{output::OutputArgs, period::PeriodArgs},
    period::BillingPeriod,
    prelude::*,
    tariff::Tariff,
};

#[derive(Parser)]
pub struct BillArgs {
    #[clap(flatten)]
    pub usage: UsageArgs,

    #[clap(flatten)]
    pub period: PeriodArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Copy, Clone, clap::Args)]
#[group(required = true, multiple = false)]
pub struct UsageArgs {
    /// Total usage over the billing cycle, in units (kWh).
    #[clap(long, allow_negative_numbers = true)]
    pub units: Option<f64>,

    /// Daily usage in kWh, scaled to the billing cycle.
    #[clap(long = "daily-kwh", allow_negative_numbers = true)]
    pub daily_kwh: Option<f64>,
}

impl UsageArgs {
    /// Total usage over the billing period.
    pub fn total(self, period: BillingPeriod) -> f64 {
        match (self.units, self.daily_kwh) {
            (Some(units), _) => units,
            (None, Some(daily)) => period.total_usage(KilowattHours::from(daily)).0.0,
            (None, None) => 0.0,
        }
    }
}

#[instrument(skip_all)]
pub fn bill(tariff: &Tariff, args: &BillArgs) -> Result {
    let units = args.usage.total(args.period.into());
    info!(units, "billing…");
    let bill = tariff.try_compute_bill(units)?;
    args.output.print_bill(&bill, tariff)
}
