use clap::Parser;
use reqwest::Url;

use crate::{
    api::prediction::{Api, PredictionRequest},
    cache::StoredPrediction,
    cli::{cache::CacheArgs, output::OutputArgs, period::PeriodArgs, report::print_report},
    prelude::*,
    tariff::Tariff,
};

#[derive(Parser)]
pub struct PredictArgs {
    /// Prediction service base URL. For example: `http://localhost:8000`.
    #[clap(long = "api-base-url", env = "ECOSYNC_API_BASE")]
    pub api_base_url: Url,

    #[clap(flatten)]
    pub readings: ReadingsArgs,

    #[clap(flatten)]
    pub cache: CacheArgs,

    #[clap(flatten)]
    pub period: PeriodArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Copy, Clone, Parser)]
pub struct ReadingsArgs {
    /// Ambient temperature, °C.
    #[clap(long, default_value = "32")]
    pub temperature: f64,

    /// Relative humidity, percent.
    #[clap(long, default_value = "70")]
    pub humidity: f64,

    /// Number of occupants.
    #[clap(long, default_value = "4")]
    pub occupancy: u8,

    #[clap(long, default_value = "2")]
    pub ac: f64,

    #[clap(long, default_value = "0.3")]
    pub fan: f64,

    #[clap(long, default_value = "0.1")]
    pub fridge: f64,

    #[clap(long, default_value = "0.5")]
    pub plug: f64,

    #[clap(long, default_value = "0.7")]
    pub kitchen: f64,

    #[clap(long, default_value = "0.2")]
    pub pump: f64,

    #[clap(long, default_value = "0.3")]
    pub lighting: f64,

    /// Solar generation.
    #[clap(long, default_value = "0.5")]
    pub solar: f64,
}

impl From<ReadingsArgs> for PredictionRequest {
    fn from(args: ReadingsArgs) -> Self {
        Self::builder()
            .temperature(args.temperature)
            .humidity(args.humidity)
            .occupancy(args.occupancy)
            .ac(args.ac)
            .fan(args.fan)
            .fridge(args.fridge)
            .plug(args.plug)
            .kitchen(args.kitchen)
            .pump(args.pump)
            .lighting(args.lighting)
            .solar(args.solar)
            .build()
    }
}

#[instrument(skip_all)]
pub async fn predict(tariff: &Tariff, args: PredictArgs) -> Result {
    let request = PredictionRequest::from(args.readings);
    let prediction = Api::new(args.api_base_url)?.predict(&request).await?;
    let stored = StoredPrediction::new(prediction);
    stored.write_to(&args.cache.path)?;
    print_report(tariff, &stored, args.period.into(), args.output)
}
