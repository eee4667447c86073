use clap::Parser;

use crate::{
    prelude::*,
    tables::build_bill_table,
    tariff::{BillEstimate, Tariff},
};

#[derive(Copy, Clone, Parser)]
pub struct OutputArgs {
    /// Print the bill as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn print_bill(self, bill: &BillEstimate, tariff: &Tariff) -> Result {
        if self.json {
            println!("{}", serde_json::to_string_pretty(bill)?);
        } else {
            println!("{}", tariff.name);
            println!("{}", build_bill_table(bill, tariff.free_threshold));
        }
        Ok(())
    }
}
