//! Aggregation engine.
//!
//! Every operation is a pure function over borrowed records plus the active
//! filter selection. Records are never mutated; malformed periods simply fail
//! to match any year or month and contribute nothing. Sums saturate at
//! `u64::MAX` instead of overflowing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::calendar::{MONTH_LABELS, MONTHS, YEARS};
use crate::data::DeliveryRecord;
use crate::filters::{GroupSelection, YearSelection};
use crate::groups::{BeneficiaryGroup, GroupTotals};
use crate::types::{ColorSpec, EntryLabel, MonthLabel, YearKey};

/// Running totals over the filtered record set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    /// Sum of every record's `total`.
    pub total: u64,
    /// Per-group sums.
    #[serde(flatten)]
    pub groups: GroupTotals,
}

impl SummaryStats {
    fn absorb(&mut self, record: &DeliveryRecord) {
        self.total = self.total.saturating_add(record.total);
        for group in BeneficiaryGroup::ALL {
            self.groups.add(group, record.count(group));
        }
    }
}

/// Totals for one calendar year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct YearlyAggregate {
    /// Four-digit year key.
    pub year: YearKey,
    /// Per-group sums for the year.
    #[serde(flatten)]
    pub groups: GroupTotals,
    /// Sum of record totals for the year.
    pub total: u64,
}

impl YearlyAggregate {
    fn empty(year: &str) -> Self {
        Self {
            year: year.to_string(),
            groups: GroupTotals::default(),
            total: 0,
        }
    }
}

/// One bar of the distribution chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    /// Group label, or year when a group filter is active.
    pub label: EntryLabel,
    /// Group sum, or the selected group's sum for the year.
    pub value: u64,
    /// Chart color of the group.
    pub color: ColorSpec,
}

/// Total for one month of the selected year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyStats {
    /// Short pt-BR month label.
    pub month: MonthLabel,
    /// Record totals, or the selected group's counts, for the month.
    pub total: u64,
}

/// Keep records whose period starts with the selected year.
pub fn filter_by_year(records: &[DeliveryRecord], year: YearSelection) -> Vec<&DeliveryRecord> {
    records
        .iter()
        .filter(|record| year.matches(record.year_key()))
        .collect()
}

/// Sum totals and per-group counts. Missing group counts contribute zero.
pub fn summarize<'a, I>(records: I) -> SummaryStats
where
    I: IntoIterator<Item = &'a DeliveryRecord>,
{
    let mut stats = SummaryStats::default();
    for record in records {
        stats.absorb(record);
    }
    stats
}

/// Per-year totals over the reporting calendar.
///
/// Every known year is present (zero-filled) in ascending order; records from
/// other years are dropped. When a year is selected the result is narrowed to
/// that single entry.
pub fn aggregate_by_year<'a, I>(records: I, selected_year: YearSelection) -> Vec<YearlyAggregate>
where
    I: IntoIterator<Item = &'a DeliveryRecord>,
{
    let mut by_year: BTreeMap<&str, YearlyAggregate> = YEARS
        .iter()
        .map(|year| (*year, YearlyAggregate::empty(year)))
        .collect();

    for record in records {
        let Some(year) = record.year_key() else {
            continue;
        };
        let Some(entry) = by_year.get_mut(year) else {
            continue;
        };
        for group in BeneficiaryGroup::ALL {
            entry.groups.add(group, record.count(group));
        }
        entry.total = entry.total.saturating_add(record.total);
    }

    let mut yearly: Vec<YearlyAggregate> = by_year.into_values().collect();
    if let Some(year) = selected_year.as_year() {
        yearly.retain(|entry| entry.year == year);
    }
    yearly
}

/// Distribution chart data.
///
/// With a group selected: one entry per yearly aggregate, in year order, using
/// that group's sum and color. Otherwise: one entry per group with a non-zero
/// sum, sorted by value descending (ties keep catalog order).
pub fn distribution(
    yearly: &[YearlyAggregate],
    summary: &SummaryStats,
    selected_group: GroupSelection,
) -> Vec<DistributionEntry> {
    if let Some(group) = selected_group.as_group() {
        return yearly
            .iter()
            .map(|entry| DistributionEntry {
                label: entry.year.clone(),
                value: entry.groups.get(group),
                color: group.color(),
            })
            .collect();
    }

    let mut entries: Vec<DistributionEntry> = summary
        .groups
        .iter()
        .filter(|(_, value)| *value > 0)
        .map(|(group, value)| DistributionEntry {
            label: group.label().to_string(),
            value,
            color: group.color(),
        })
        .collect();
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries
}

/// Per-month totals for the selected year.
///
/// Empty when no year is selected. Otherwise exactly twelve entries in calendar
/// order, zero-filled, summing either record totals or the selected group.
pub fn monthly_breakdown<'a, I>(
    records: I,
    selected_year: YearSelection,
    selected_group: GroupSelection,
) -> Vec<MonthlyStats>
where
    I: IntoIterator<Item = &'a DeliveryRecord>,
{
    if selected_year.is_all() {
        return Vec::new();
    }

    let mut sums = [0u64; 12];
    for record in records {
        if !selected_year.matches(record.year_key()) {
            continue;
        }
        let Some(month_idx) = record
            .month_key()
            .and_then(|key| MONTHS.iter().position(|month| *month == key))
        else {
            continue;
        };
        let value = match selected_group.as_group() {
            None => record.total,
            Some(group) => record.count(group),
        };
        sums[month_idx] = sums[month_idx].saturating_add(value);
    }

    MONTH_LABELS
        .into_iter()
        .zip(sums)
        .map(|(month, total)| MonthlyStats { month, total })
        .collect()
}
