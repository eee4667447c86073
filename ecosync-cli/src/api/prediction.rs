use std::{collections::BTreeMap, time::Duration};

use bon::Builder;
use ecosync_quantities::energy::KilowattHours;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Client of the energy usage prediction model service.
pub struct Api {
    client: reqwest::Client,
    base_url: Url,
}

impl Api {
    #[instrument(skip_all, fields(base_url = %base_url))]
    pub fn new(base_url: Url) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, base_url })
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url.as_str().trim_end_matches('/'))
    }

    #[instrument(skip_all, fields(base_url = %self.base_url))]
    pub async fn predict(&self, request: &PredictionRequest) -> Result<Prediction> {
        request.validate()?;
        let url = self.predict_url();
        info!("requesting a prediction…");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("failed to request a prediction from `{url}`"))?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            bail!("prediction failed ({status}): {text}");
        }
        let prediction: Prediction = response
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{url}`"))?;
        info!(
            predicted = ?prediction.predicted_kwh,
            co2_kg = prediction.co2_kg,
            highest_appliance = %prediction.highest_appliance,
            "gotcha",
        );
        Ok(prediction)
    }
}

/// Household readings the model predicts the daily usage from.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize, Builder)]
pub struct PredictionRequest {
    /// Ambient temperature, °C.
    pub temperature: f64,

    /// Relative humidity, percent.
    pub humidity: f64,

    /// Number of occupants.
    pub occupancy: u8,

    pub ac: f64,
    pub fan: f64,
    pub fridge: f64,
    pub plug: f64,
    pub kitchen: f64,
    pub pump: f64,
    pub lighting: f64,

    /// Solar generation.
    pub solar: f64,
}

impl PredictionRequest {
    pub const MAX_TEMPERATURE: f64 = 60.0;
    pub const MAX_OCCUPANCY: u8 = 20;

    /// Check the readings against what the model service accepts.
    pub fn validate(&self) -> Result {
        ensure!(
            (0.0..=Self::MAX_TEMPERATURE).contains(&self.temperature),
            "temperature must be within 0–{} °C, got {}",
            Self::MAX_TEMPERATURE,
            self.temperature,
        );
        ensure!(
            (0.0..=100.0).contains(&self.humidity),
            "humidity must be within 0–100%, got {}",
            self.humidity,
        );
        ensure!(
            self.occupancy <= Self::MAX_OCCUPANCY,
            "occupancy must not exceed {}, got {}",
            Self::MAX_OCCUPANCY,
            self.occupancy,
        );
        for (name, value) in self.readings() {
            ensure!(
                value.is_finite() && value >= 0.0,
                "`{name}` must be a non-negative number, got {value}",
            );
        }
        Ok(())
    }

    const fn readings(&self) -> [(&'static str, f64); 8] {
        [
            ("ac", self.ac),
            ("fan", self.fan),
            ("fridge", self.fridge),
            ("plug", self.plug),
            ("kitchen", self.kitchen),
            ("pump", self.pump),
            ("lighting", self.lighting),
            ("solar", self.solar),
        ]
    }
}

/// Daily usage prediction summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_kwh: KilowattHours,
    pub co2_kg: f64,
    pub highest_appliance: String,
    pub green_percent: f64,

    /// Per-appliance readings the prediction was made from.
    #[serde(default)]
    pub appliance_usage: BTreeMap<String, f64>,
}
