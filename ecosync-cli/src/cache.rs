use std::{fs, path::Path};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{api::prediction::Prediction, prelude::*};

/// The last prediction, kept between runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredPrediction {
    pub updated_at: DateTime<Local>,
    pub prediction: Prediction,
}

impl StoredPrediction {
    pub fn new(prediction: Prediction) -> Self {
        Self { updated_at: Local::now(), prediction }
    }

    /// Read the stored prediction, if any.
    ///
    /// Unreadable cache is logged and treated as missing.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Option<Self> {
        Self::read_fallibly_from(path).unwrap_or_else(|error| {
            warn!("failed to load the last prediction: {error:#}");
            None
        })
    }

    fn read_fallibly_from(path: &Path) -> Result<Option<Self>> {
        if path.is_file() {
            Ok(Some(toml::from_str(&fs::read_to_string(path)?)?))
        } else {
            Ok(None)
        }
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path) -> Result {
        fs::write(path, toml::to_string(self)?)
            .with_context(|| format!("failed to save the last prediction to `{}`", path.display()))?;
        info!(updated_at = %self.updated_at, "saved the last prediction");
        Ok(())
    }
}
