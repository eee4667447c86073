use std::borrow::Cow;

use ecosync_quantities::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate};
use serde::Serialize;

use crate::{
    prelude::*,
    tariff::{Error, Tariff},
};

/// Bill for a single billing period.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillEstimate {
    pub total_units: KilowattHours,
    pub low_consumption_free_applied: bool,
    pub free_units: KilowattHours,
    pub taxable_units: KilowattHours,
    pub subtotal: Cost,
    pub final_amount: Cost,

    /// Slabs with non-zero usage, in the tariff order.
    pub breakdown: Vec<BreakdownItem>,
}

impl BillEstimate {
    fn free(total_units: KilowattHours) -> Self {
        Self {
            total_units,
            low_consumption_free_applied: true,
            free_units: total_units,
            taxable_units: KilowattHours::ZERO,
            subtotal: Cost::ZERO,
            final_amount: Cost::ZERO,
            breakdown: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    pub slab_label: Cow<'static, str>,
    pub units: KilowattHours,
    pub rate: KilowattHourRate,
    pub amount: Cost,
}

impl Tariff {
    /// Bill the total usage of a billing period.
    ///
    /// Negative and `NaN` usage is billed as zero. The free threshold is all-or-nothing:
    /// exceeding it by any amount bills the whole usage slab by slab.
    ///
    /// Item amounts are rounded to two decimals before summing up.
    pub fn compute_bill(&self, units: KilowattHours) -> BillEstimate {
        let total_units = if units.0.0 > 0.0 { units } else { KilowattHours::ZERO };

        if total_units <= self.free_threshold {
            return BillEstimate::free(total_units.round_to_hundredths());
        }

        let breakdown: Vec<BreakdownItem> = self
            .slabs
            .iter()
            .filter_map(|slab| {
                let units = slab.applicable_units(total_units);
                (units > KilowattHours::ZERO).then(|| BreakdownItem {
                    slab_label: slab.label.clone(),
                    units: units.round_to_hundredths(),
                    rate: slab.rate,
                    amount: (units * slab.rate).round_to_hundredths(),
                })
            })
            .collect();
        let subtotal = breakdown.iter().map(|item| item.amount).sum::<Cost>().round_to_hundredths();

        BillEstimate {
            total_units: total_units.round_to_hundredths(),
            low_consumption_free_applied: false,
            free_units: KilowattHours::ZERO,
            taxable_units: total_units.round_to_hundredths(),
            subtotal,
            final_amount: subtotal,
            breakdown,
        }
    }

    /// Bill raw usage coming from outside, rejecting infinite and `NaN` values.
    #[instrument(skip_all, fields(units = units))]
    pub fn try_compute_bill(&self, units: f64) -> Result<BillEstimate, Error> {
        if !units.is_finite() {
            return Err(Error::InvalidUsage(units));
        }
        let bill = self.compute_bill(KilowattHours::from(units));
        debug!(
            free = bill.low_consumption_free_applied,
            n_items = bill.breakdown.len(),
            final_amount = %bill.final_amount,
            "computed",
        );
        Ok(bill)
    }
}
