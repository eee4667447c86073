mod bill;
mod cache;
mod output;
mod period;
mod predict;
mod report;
mod tariff;

use clap::{Parser, Subcommand};

pub use self::{bill::bill, predict::predict, report::report};
use crate::cli::{bill::BillArgs, predict::PredictArgs, report::ReportArgs, tariff::TariffArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub tariff: TariffArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the bill for the given usage.
    #[clap(name = "bill")]
    Bill(BillArgs),

    /// Print the slab schedule.
    #[clap(name = "slabs")]
    Slabs,

    /// Request a usage prediction, remember it, and estimate the bill.
    #[clap(name = "predict")]
    Predict(Box<PredictArgs>),

    /// Estimate the bill from the last remembered prediction.
    #[clap(name = "report")]
    Report(ReportArgs),
}
