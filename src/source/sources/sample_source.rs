//! Deterministic sample dataset.
//!
//! Every value is closed-form arithmetic over the (year index, month index)
//! pair, so the same configuration always yields the same records.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::constants::generator::{
    BASE_AMOUNT, BASE_STEP_PER_MONTH, BASE_STEP_PER_YEAR, SAMPLE_SOURCE_ID,
    TOTAL_VARIATION_FACTOR, VARIATION_MODULUS, VARIATION_STEP_PER_MONTH, VARIATION_STEP_PER_YEAR,
};
use crate::data::DeliveryRecord;
use crate::errors::DashboardError;
use crate::groups::BeneficiaryGroup;
use crate::source::RecordSource;

/// Generate the default sample dataset (2019–2025, region `11`).
pub fn generate() -> Vec<DeliveryRecord> {
    generate_with(&GeneratorConfig::default())
}

/// Generate one record per month for every configured year.
pub fn generate_with(config: &GeneratorConfig) -> Vec<DeliveryRecord> {
    let mut records = Vec::with_capacity(config.record_count());
    for (year_idx, year) in config.years.iter().enumerate() {
        for month_idx in 0..12u64 {
            records.push(sample_record(config, *year, year_idx as u64, month_idx));
        }
    }
    debug!(
        records = records.len(),
        years = config.years.len(),
        "generated sample dataset"
    );
    records
}

fn sample_record(
    config: &GeneratorConfig,
    year: u16,
    year_idx: u64,
    month_idx: u64,
) -> DeliveryRecord {
    let base = BASE_AMOUNT + year_idx * BASE_STEP_PER_YEAR + month_idx * BASE_STEP_PER_MONTH;
    let variation = (year_idx * VARIATION_STEP_PER_YEAR + month_idx * VARIATION_STEP_PER_MONTH)
        % VARIATION_MODULUS;

    // Float arithmetic then floor, so fractional weights truncate exactly as
    // the reference figures do.
    let group_counts: IndexMap<BeneficiaryGroup, u64> = BeneficiaryGroup::ALL
        .into_iter()
        .map(|group| {
            let raw = base as f64 * group.sample_weight()
                + variation as f64 * group.sample_variation_factor();
            (group, raw.floor() as u64)
        })
        .collect();

    DeliveryRecord {
        period: format!("{year:04}{:02}", month_idx + 1),
        region_code: config.region_code.to_string(),
        group_counts,
        total: base + variation * TOTAL_VARIATION_FACTOR,
    }
}

/// `RecordSource` backed by the sample generator.
#[derive(Clone, Debug, Default)]
pub struct SampleSource {
    config: GeneratorConfig,
}

impl SampleSource {
    /// Sample source generating records for `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl RecordSource for SampleSource {
    fn id(&self) -> &str {
        SAMPLE_SOURCE_ID
    }

    fn load(&self) -> Result<Vec<DeliveryRecord>, DashboardError> {
        Ok(generate_with(&self.config))
    }
}
