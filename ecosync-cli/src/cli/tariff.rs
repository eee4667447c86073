use std::path::PathBuf;

use clap::Parser;

use crate::{
    prelude::*,
    tariff::{TANGEDCO_BIMONTHLY, Tariff},
};

#[derive(Parser)]
pub struct TariffArgs {
    /// TOML file with a substitute slab schedule.
    ///
    /// The built-in TANGEDCO domestic bi-monthly schedule is used by default.
    #[clap(long = "tariff", env = "ECOSYNC_TARIFF", global = true)]
    pub path: Option<PathBuf>,
}

impl TariffArgs {
    pub fn load(&self) -> Result<Tariff> {
        match &self.path {
            Some(path) => Tariff::read_from(path),
            None => Ok(TANGEDCO_BIMONTHLY.clone()),
        }
    }
}
