mod bill;
mod error;

use std::{borrow::Cow, fs, path::Path};

use ecosync_quantities::{energy::KilowattHours, rate::KilowattHourRate};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use self::{bill::BillEstimate, error::Error};
use crate::prelude::*;

/// Chennai TANGEDCO domestic schedule for a bi-monthly billing cycle.
pub static TANGEDCO_BIMONTHLY: Tariff = Tariff {
    name: Cow::Borrowed("TANGEDCO domestic (bi-monthly)"),
    free_threshold: KilowattHours::new(100.0),
    slabs: Cow::Borrowed(&TANGEDCO_BIMONTHLY_SLABS),
};

static TANGEDCO_BIMONTHLY_SLABS: [Slab; 6] = [
    Slab::bounded("0-400", 0.0, 400.0, 4.95),
    Slab::bounded("401-500", 400.0, 500.0, 6.65),
    Slab::bounded("501-600", 500.0, 600.0, 8.80),
    Slab::bounded("601-800", 600.0, 800.0, 9.95),
    Slab::bounded("801-1000", 800.0, 1000.0, 11.05),
    Slab::unbounded("1000+", 1000.0, 12.15),
];

/// Progressive slab schedule with an all-or-nothing free-usage threshold.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tariff {
    pub name: Cow<'static, str>,

    /// Usage up to and including this amount is not billed at all.
    pub free_threshold: KilowattHours,

    /// Contiguous slabs ordered by `min`, the last one is unbounded.
    pub slabs: Cow<'static, [Slab]>,
}

impl Tariff {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the tariff from `{}`", path.display()))?;
        let tariff = Self::from_toml(&contents)
            .with_context(|| format!("invalid tariff in `{}`", path.display()))?;
        info!(name = %tariff.name, n_slabs = tariff.slabs.len(), "loaded the tariff");
        Ok(tariff)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let tariff: Self = toml::from_str(contents)?;
        tariff.validate()?;
        Ok(tariff)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.free_threshold.is_finite() || self.free_threshold < KilowattHours::ZERO {
            return Err(Error::InvalidFreeThreshold);
        }
        let (Some(first), Some(last)) = (self.slabs.first(), self.slabs.last()) else {
            return Err(Error::NoSlabs);
        };
        if first.min != KilowattHours::ZERO {
            return Err(Error::FirstSlabNotAtZero(first.label.to_string()));
        }
        for slab in &*self.slabs {
            if !slab.rate.is_finite() || slab.rate < KilowattHourRate::ZERO {
                return Err(Error::InvalidRate { label: slab.label.to_string() });
            }
            if let Some(max) = slab.max
                && !(max.is_finite() && max > slab.min)
            {
                return Err(Error::EmptySlab { label: slab.label.to_string() });
            }
        }
        for (previous, next) in self.slabs.iter().tuple_windows() {
            match previous.max {
                None => return Err(Error::UnboundedNotLast(previous.label.to_string())),
                Some(max) if max != next.min => {
                    return Err(Error::Gap {
                        previous: previous.label.to_string(),
                        next: next.label.to_string(),
                    });
                }
                Some(_) => {}
            }
        }
        if last.max.is_some() {
            return Err(Error::LastSlabBounded(last.label.to_string()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slab {
    pub label: Cow<'static, str>,

    /// Inclusive lower bound.
    pub min: KilowattHours,

    /// Upper bound, `None` for the open-ended last slab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<KilowattHours>,

    pub rate: KilowattHourRate,
}

impl Slab {
    pub const fn bounded(label: &'static str, min: f64, max: f64, rate: f64) -> Self {
        Self {
            label: Cow::Borrowed(label),
            min: KilowattHours::new(min),
            max: Some(KilowattHours::new(max)),
            rate: KilowattHourRate::new(rate),
        }
    }

    pub const fn unbounded(label: &'static str, min: f64, rate: f64) -> Self {
        Self {
            label: Cow::Borrowed(label),
            min: KilowattHours::new(min),
            max: None,
            rate: KilowattHourRate::new(rate),
        }
    }

    /// Portion of the total usage that falls inside the slab.
    pub fn applicable_units(&self, total: KilowattHours) -> KilowattHours {
        let upper = self.max.unwrap_or(total);
        (total.min(upper) - self.min).max(KilowattHours::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_reference_tariff_is_valid() {
        TANGEDCO_BIMONTHLY.validate().unwrap();
        assert_eq!(TANGEDCO_BIMONTHLY.slabs.len(), 6);
        assert_eq!(TANGEDCO_BIMONTHLY.free_threshold, KilowattHours::from(100));
    }

    #[test]
    fn test_bundled_toml_matches_reference() -> Result {
        let tariff = Tariff::from_toml(include_str!("../../tariffs/tangedco-bimonthly.toml"))?;
        assert_eq!(tariff.name, TANGEDCO_BIMONTHLY.name);
        assert_eq!(tariff.free_threshold, TANGEDCO_BIMONTHLY.free_threshold);
        assert_eq!(tariff.slabs, TANGEDCO_BIMONTHLY.slabs);
        Ok(())
    }

    #[test]
    fn test_applicable_units() {
        let slab = Slab::bounded("401-500", 400.0, 500.0, 6.65);
        assert_abs_diff_eq!(slab.applicable_units(KilowattHours::from(300)).0.0, 0.0);
        assert_abs_diff_eq!(slab.applicable_units(KilowattHours::from(450)).0.0, 50.0);
        assert_abs_diff_eq!(slab.applicable_units(KilowattHours::from(500)).0.0, 100.0);
        assert_abs_diff_eq!(slab.applicable_units(KilowattHours::from(900)).0.0, 100.0);
    }

    #[test]
    fn test_unbounded_slab_absorbs_remainder() {
        let slab = Slab::unbounded("1000+", 1000.0, 12.15);
        assert_abs_diff_eq!(slab.applicable_units(KilowattHours::from(1_000_000)).0.0, 999_000.0);
    }

    #[test]
    fn test_gap_rejected() {
        let tariff = Tariff {
            name: Cow::Borrowed("gap"),
            free_threshold: KilowattHours::ZERO,
            slabs: Cow::Owned(vec![
                Slab::bounded("a", 0.0, 100.0, 1.0),
                Slab::unbounded("b", 150.0, 2.0),
            ]),
        };
        assert!(matches!(tariff.validate(), Err(Error::Gap { .. })));
    }

    #[test]
    fn test_unbounded_in_the_middle_rejected() {
        let tariff = Tariff {
            name: Cow::Borrowed("middle"),
            free_threshold: KilowattHours::ZERO,
            slabs: Cow::Owned(vec![
                Slab::unbounded("a", 0.0, 1.0),
                Slab::unbounded("b", 100.0, 2.0),
            ]),
        };
        assert!(matches!(tariff.validate(), Err(Error::UnboundedNotLast(label)) if label == "a"));
    }

    #[test]
    fn test_bounded_last_rejected() {
        let tariff = Tariff {
            name: Cow::Borrowed("bounded"),
            free_threshold: KilowattHours::ZERO,
            slabs: Cow::Owned(vec![Slab::bounded("a", 0.0, 100.0, 1.0)]),
        };
        assert!(matches!(tariff.validate(), Err(Error::LastSlabBounded(_))));
    }

    #[test]
    fn test_first_slab_must_start_at_zero() {
        let tariff = Tariff {
            name: Cow::Borrowed("offset"),
            free_threshold: KilowattHours::ZERO,
            slabs: Cow::Owned(vec![Slab::unbounded("a", 10.0, 1.0)]),
        };
        assert!(matches!(tariff.validate(), Err(Error::FirstSlabNotAtZero(_))));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let tariff = Tariff {
            name: Cow::Borrowed("negative"),
            free_threshold: KilowattHours::ZERO,
            slabs: Cow::Owned(vec![Slab::unbounded("a", 0.0, -1.0)]),
        };
        assert!(matches!(tariff.validate(), Err(Error::InvalidRate { .. })));
    }

    #[test]
    fn test_empty_tariff_rejected() {
        let tariff = Tariff {
            name: Cow::Borrowed("empty"),
            free_threshold: KilowattHours::ZERO,
            slabs: Cow::Owned(Vec::new()),
        };
        assert!(matches!(tariff.validate(), Err(Error::NoSlabs)));
    }

    #[test]
    fn test_from_toml_rejects_inverted_slab() {
        // language=toml
        let contents = r#"
            name = "inverted"
            free_threshold = 0.0

            [[slabs]]
            label = "a"
            min = 0.0
            max = 0.0
            rate = 1.0

            [[slabs]]
            label = "b"
            min = 0.0
            rate = 2.0
        "#;
        assert!(Tariff::from_toml(contents).is_err());
    }
}
