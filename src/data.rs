use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::calendar::PERIOD_LEN;
use crate::errors::DashboardError;
use crate::groups::BeneficiaryGroup;

pub use crate::types::{PeriodString, RegionCode};

/// One monthly observation of food baskets delivered in a region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Year-month identifier (`YYYYMM`).
    pub period: PeriodString,
    /// Region the deliveries were reported for.
    pub region_code: RegionCode,
    /// Baskets delivered per beneficiary group. Missing groups count as zero.
    #[serde(default)]
    pub group_counts: IndexMap<BeneficiaryGroup, u64>,
    /// Reported total for the month.
    ///
    /// Not required to equal the sum of `group_counts`.
    pub total: u64,
}

impl DeliveryRecord {
    /// Count for `group`, or zero when the record does not carry it.
    pub fn count(&self, group: BeneficiaryGroup) -> u64 {
        self.group_counts.get(&group).copied().unwrap_or(0)
    }

    /// First four characters of the period, when present.
    pub fn year_key(&self) -> Option<&str> {
        self.period.get(0..4)
    }

    /// Characters five and six of the period, when present.
    pub fn month_key(&self) -> Option<&str> {
        self.period.get(4..6)
    }
}

/// A validated `YYYYMM` period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    start: NaiveDate,
}

impl Period {
    /// Parse and validate a raw `YYYYMM` period string.
    pub fn parse(raw: &str) -> Result<Self, DashboardError> {
        let invalid = |reason: &str| DashboardError::InvalidPeriod {
            period: raw.to_string(),
            reason: reason.to_string(),
        };
        if raw.len() != PERIOD_LEN {
            return Err(invalid("expected 6 characters (YYYYMM)"));
        }
        if !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid("expected only ASCII digits"));
        }
        let year = raw[0..4]
            .parse::<i32>()
            .map_err(|_| invalid("year is not numeric"))?;
        let month = raw[4..6]
            .parse::<u32>()
            .map_err(|_| invalid("month is not numeric"))?;
        let start =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| invalid("month out of range"))?;
        Ok(Self { start })
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// Calendar month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// Canonical `YYYYMM` encoding.
    pub fn encode(&self) -> PeriodString {
        self.start.format("%Y%m").to_string()
    }
}

/// Check that every record carries a well-formed period.
pub fn validate_records(records: &[DeliveryRecord]) -> Result<(), DashboardError> {
    for record in records {
        Period::parse(&record.period)?;
    }
    Ok(())
}
