use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use ecosync_quantities::energy::KilowattHours;

use crate::{
    cache::StoredPrediction,
    period::BillingPeriod,
    tariff::{BillEstimate, Tariff},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[must_use]
pub fn build_bill_table(bill: &BillEstimate, free_threshold: KilowattHours) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Slab", "Units", "Rate", "Amount"]);
    if bill.low_consumption_free_applied {
        table.add_row(vec![
            Cell::new(format!("Free usage applied (up to {free_threshold})")).fg(Color::Green),
            Cell::new(bill.free_units).set_alignment(CellAlignment::Right),
            Cell::new(""),
            Cell::new(bill.final_amount).set_alignment(CellAlignment::Right).fg(Color::Green),
        ]);
    }
    for (index, item) in bill.breakdown.iter().enumerate() {
        let is_last = index + 1 == bill.breakdown.len();
        table.add_row(vec![
            Cell::new(&item.slab_label),
            Cell::new(item.units).set_alignment(CellAlignment::Right),
            Cell::new(item.rate).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(item.amount)
                .set_alignment(CellAlignment::Right)
                .fg(if is_last && index != 0 { Color::Red } else { Color::Reset }),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(bill.total_units).set_alignment(CellAlignment::Right),
        Cell::new(""),
        Cell::new(bill.final_amount)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_slabs_table(tariff: &Tariff) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Slab", "From", "To", "Rate"]);
    for slab in &*tariff.slabs {
        table.add_row(vec![
            Cell::new(&slab.label),
            Cell::new(slab.min).set_alignment(CellAlignment::Right),
            slab.max.map_or_else(
                || Cell::new("∞").set_alignment(CellAlignment::Right),
                |max| Cell::new(max).set_alignment(CellAlignment::Right),
            ),
            Cell::new(slab.rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Free usage").fg(Color::Green),
        Cell::new(KilowattHours::ZERO).set_alignment(CellAlignment::Right),
        Cell::new(tariff.free_threshold).set_alignment(CellAlignment::Right),
        Cell::new("all-or-nothing").add_attribute(Attribute::Dim),
    ]);
    table
}

#[must_use]
pub fn build_prediction_table(stored: &StoredPrediction, period: BillingPeriod) -> Table {
    let prediction = &stored.prediction;
    let mut table = new_table();
    table.set_header(vec!["Prediction", ""]);
    table.add_row(vec![Cell::new("Daily usage"), Cell::new(prediction.predicted_kwh)]);
    table.add_row(vec![
        Cell::new(format!("Usage over {period}")),
        Cell::new(period.total_usage(prediction.predicted_kwh)),
    ]);
    table.add_row(vec![Cell::new("CO₂"), Cell::new(format!("{:.2} kg", prediction.co2_kg))]);
    table.add_row(vec![
        Cell::new("Highest appliance"),
        Cell::new(&prediction.highest_appliance).fg(Color::DarkYellow),
    ]);
    table.add_row(vec![
        Cell::new("Green share"),
        Cell::new(format!("{:.1}%", prediction.green_percent)).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Updated").add_attribute(Attribute::Dim),
        Cell::new(stored.updated_at.format("%b %d %H:%M")).add_attribute(Attribute::Dim),
    ]);
    table
}
