#![allow(clippy::doc_markdown)]
#![doc = include_str!("../../README.md")]

mod api;
mod cache;
mod cli;
mod period;
mod prelude;
mod tables;
mod tariff;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, bill, predict, report},
    prelude::*,
    tables::build_slabs_table,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let tariff = args.tariff.load()?;

    match args.command {
        Command::Bill(args) => {
            bill(&tariff, &args)?;
        }
        Command::Slabs => {
            println!("{}", tariff.name);
            println!("{}", build_slabs_table(&tariff));
        }
        Command::Predict(args) => {
            predict(&tariff, *args).await?;
        }
        Command::Report(args) => {
            report(&tariff, &args)?;
        }
    }

    info!("done!");
    Ok(())
}
