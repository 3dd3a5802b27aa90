use std::borrow::Cow;

use crate::constants::calendar::YEARS;
use crate::constants::generator::DEFAULT_REGION_CODE;

/// Controls the shape of the deterministic sample dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Region code stamped on every generated record.
    pub region_code: Cow<'static, str>,
    /// Years to generate, in output order. The first entry has year index 0.
    ///
    /// Years outside the reporting calendar are generated but later dropped by
    /// the yearly aggregation.
    pub years: Vec<u16>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            region_code: Cow::Borrowed(DEFAULT_REGION_CODE),
            years: YEARS
                .iter()
                .filter_map(|year| year.parse::<u16>().ok())
                .collect(),
        }
    }
}

impl GeneratorConfig {
    /// Number of records the configuration produces (one per month per year).
    pub fn record_count(&self) -> usize {
        self.years.len() * 12
    }
}
