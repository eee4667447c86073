use clap::Parser;

use crate::{
    cache::StoredPrediction,
    cli::{cache::CacheArgs, output::OutputArgs, period::PeriodArgs},
    period::BillingPeriod,
    prelude::*,
    tables::build_prediction_table,
    tariff::{BillEstimate, Tariff},
};

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    pub cache: CacheArgs,

    #[clap(flatten)]
    pub period: PeriodArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[instrument(skip_all)]
pub fn report(tariff: &Tariff, args: &ReportArgs) -> Result {
    let Some(stored) = StoredPrediction::read_from(&args.cache.path) else {
        bail!("no prediction found in `{}`, run `predict` first", args.cache.path.display());
    };
    print_report(tariff, &stored, args.period.into(), args.output)
}

/// Print the prediction summary and the bill for the period.
pub fn print_report(
    tariff: &Tariff,
    stored: &StoredPrediction,
    period: BillingPeriod,
    output: OutputArgs,
) -> Result {
    let bill = bill_prediction(tariff, stored, period)?;
    if !output.json {
        println!("{}", build_prediction_table(stored, period));
    }
    output.print_bill(&bill, tariff)
}

fn bill_prediction(
    tariff: &Tariff,
    stored: &StoredPrediction,
    period: BillingPeriod,
) -> Result<BillEstimate> {
    let units = period.total_usage(stored.prediction.predicted_kwh);
    info!(?units, %period, "billing the predicted usage…");
    Ok(tariff.try_compute_bill(units.0.0)?)
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, fs, path::PathBuf, process};

    use approx::assert_abs_diff_eq;
    use ecosync_quantities::energy::KilowattHours;

    use super::*;
    use crate::{api::prediction::Prediction, tariff::TANGEDCO_BIMONTHLY};

    fn temporary_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ecosync-report-{}-{name}.toml", process::id()))
    }

    fn stored(predicted_kwh: f64) -> StoredPrediction {
        StoredPrediction::new(Prediction {
            predicted_kwh: KilowattHours::from(predicted_kwh),
            co2_kg: 6.15,
            highest_appliance: "AC".to_string(),
            green_percent: 6.67,
            appliance_usage: BTreeMap::from([("AC".to_string(), 2.0)]),
        })
    }

    fn args(path: PathBuf, json: bool) -> ReportArgs {
        ReportArgs {
            cache: CacheArgs { path },
            period: PeriodArgs { days: BillingPeriod::BI_MONTHLY.days },
            output: OutputArgs { json },
        }
    }

    #[test]
    fn test_bill_prediction_over_period() -> Result {
        let bill = bill_prediction(&TANGEDCO_BIMONTHLY, &stored(7.5), BillingPeriod::BI_MONTHLY)?;
        assert_abs_diff_eq!(bill.total_units.0.0, 450.0);
        assert_abs_diff_eq!(bill.final_amount.0.0, 2312.5, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_bill_prediction_rejects_infinite_usage() {
        let result = bill_prediction(&TANGEDCO_BIMONTHLY, &stored(f64::MAX), BillingPeriod::BI_MONTHLY);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_from_cache() -> Result {
        let path = temporary_path("cached");
        stored(7.5).write_to(&path)?;
        let table_result = report(&TANGEDCO_BIMONTHLY, &args(path.clone(), false));
        let json_result = report(&TANGEDCO_BIMONTHLY, &args(path.clone(), true));
        fs::remove_file(&path)?;
        table_result?;
        json_result?;
        Ok(())
    }

    #[test]
    fn test_report_without_cache_fails() {
        let result = report(&TANGEDCO_BIMONTHLY, &args(temporary_path("missing"), false));
        assert!(result.is_err());
    }
}
