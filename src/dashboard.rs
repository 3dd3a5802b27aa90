//! Dashboard state: the immutable base records plus the views derived for the
//! current filter selection.

use serde::Serialize;
use tracing::{debug, error, info};

use crate::aggregate::{
    DistributionEntry, MonthlyStats, SummaryStats, YearlyAggregate, aggregate_by_year,
    distribution, filter_by_year, monthly_breakdown, summarize,
};
use crate::data::{DeliveryRecord, validate_records};
use crate::errors::DashboardError;
use crate::filters::FilterSelection;
use crate::groups::BeneficiaryGroup;
use crate::metrics::{other_groups_total, share_percent};
use crate::source::RecordSource;
use crate::types::SourceId;

/// Every view derived for one filter selection.
///
/// Built in a single pass so the summary, yearly, distribution, and monthly
/// views always describe the same selection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardViews {
    /// Selection the views were derived for.
    pub filter: FilterSelection,
    /// Records that passed the year filter.
    pub record_count: usize,
    /// Totals over the filtered records.
    pub summary: SummaryStats,
    /// One entry per calendar year, or only the selected year.
    pub yearly: Vec<YearlyAggregate>,
    /// Ranked groups, or the selected group per year.
    pub distribution: Vec<DistributionEntry>,
    /// Empty unless a year is selected.
    pub monthly: Vec<MonthlyStats>,
}

impl DashboardViews {
    /// Derive all views from `records` for `filter`.
    pub fn compute(records: &[DeliveryRecord], filter: FilterSelection) -> Self {
        let filtered = filter_by_year(records, filter.year);
        let summary = summarize(filtered.iter().copied());
        let yearly = aggregate_by_year(filtered.iter().copied(), filter.year);
        let distribution = distribution(&yearly, &summary, filter.group);
        let monthly = monthly_breakdown(filtered.iter().copied(), filter.year, filter.group);
        Self {
            filter,
            record_count: filtered.len(),
            summary,
            yearly,
            distribution,
            monthly,
        }
    }

    /// Whether there is anything to chart for this selection.
    pub fn has_data(&self) -> bool {
        self.record_count > 0 && self.summary.total > 0
    }

    /// Percentage of the summary total delivered to `group`, `None` without a total.
    pub fn share(&self, group: BeneficiaryGroup) -> Option<f64> {
        share_percent(self.summary.groups.get(group), self.summary.total)
    }

    /// Combined total of the groups without a dedicated summary card.
    pub fn other_groups_total(&self) -> u64 {
        other_groups_total(&self.summary)
    }
}

/// Loaded records plus the views for the most recent selection.
pub struct Dashboard {
    source_id: SourceId,
    records: Vec<DeliveryRecord>,
    cached: Option<DashboardViews>,
    recomputes: usize,
}

impl Dashboard {
    /// Build a dashboard over prebuilt records.
    pub fn new(source_id: impl Into<SourceId>, records: Vec<DeliveryRecord>) -> Self {
        Self {
            source_id: source_id.into(),
            records,
            cached: None,
            recomputes: 0,
        }
    }

    /// Load and validate records from `source`.
    ///
    /// Source failures and malformed periods are returned as distinct errors.
    pub fn load(source: &dyn RecordSource) -> Result<Self, DashboardError> {
        let records = source.load()?;
        validate_records(&records)?;
        info!(
            source = source.id(),
            records = records.len(),
            "loaded dashboard records"
        );
        Ok(Self::new(source.id(), records))
    }

    /// Load from `source`, falling back to an empty dataset on any error.
    ///
    /// The error is logged; the resulting dashboard reports no data for every
    /// selection.
    pub fn load_or_empty(source: &dyn RecordSource) -> Self {
        match Self::load(source) {
            Ok(dashboard) => dashboard,
            Err(err) => {
                error!(source = source.id(), error = %err, "error loading data; using empty dataset");
                Self::new(source.id(), Vec::new())
            }
        }
    }

    /// Id of the source the records came from.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Base records, in load order.
    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    /// Views for `filter`, recomputed only when the selection changed.
    pub fn select(&mut self, filter: FilterSelection) -> &DashboardViews {
        if self
            .cached
            .as_ref()
            .is_some_and(|views| views.filter != filter)
        {
            self.cached = None;
        } else if self.cached.is_some() {
            debug!(year = %filter.year, group = %filter.group, "reusing dashboard views");
        }
        let records = &self.records;
        let recomputes = &mut self.recomputes;
        self.cached.get_or_insert_with(|| {
            *recomputes += 1;
            debug!(year = %filter.year, group = %filter.group, "recomputing dashboard views");
            DashboardViews::compute(records, filter)
        })
    }

    /// Views for the most recent selection, if any.
    pub fn current(&self) -> Option<&DashboardViews> {
        self.cached.as_ref()
    }

    /// Number of times views were derived from scratch.
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{GroupSelection, YearSelection};
    use crate::source::{InMemorySource, SampleSource};

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn id(&self) -> &str {
            "failing"
        }

        fn load(&self) -> Result<Vec<DeliveryRecord>, DashboardError> {
            Err(DashboardError::Load {
                source_id: self.id().to_string(),
                reason: "generator exploded".into(),
            })
        }
    }

    #[test]
    fn select_memoizes_last_selection() {
        let mut dashboard = Dashboard::load(&SampleSource::default()).unwrap();
        let all = FilterSelection::default();
        let first = dashboard.select(all).clone();
        let again = dashboard.select(all).clone();
        assert_eq!(first, again);
        assert_eq!(dashboard.recompute_count(), 1);

        let narrowed = FilterSelection::new(YearSelection::Year("2021"), GroupSelection::All);
        assert_eq!(dashboard.select(narrowed).yearly.len(), 1);
        assert_eq!(dashboard.recompute_count(), 2);
        assert_eq!(dashboard.current().unwrap().filter, narrowed);
    }

    #[test]
    fn load_surfaces_source_failure() {
        let err = Dashboard::load(&FailingSource).err().unwrap();
        assert!(matches!(err, DashboardError::Load { ref source_id, .. } if source_id == "failing"));
    }

    #[test]
    fn load_or_empty_falls_back_to_no_data() {
        let mut dashboard = Dashboard::load_or_empty(&FailingSource);
        assert!(dashboard.records().is_empty());
        assert_eq!(dashboard.source_id(), "failing");
        let views = dashboard.select(FilterSelection::default());
        assert!(!views.has_data());
        assert_eq!(views.yearly.len(), 7);
        assert!(views.distribution.is_empty());
    }

    #[test]
    fn load_rejects_malformed_periods() {
        let mut records = crate::source::generate();
        records[3].period = "2019-4".into();
        let source = InMemorySource::new("broken", records);
        assert!(matches!(
            Dashboard::load(&source),
            Err(DashboardError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn views_expose_card_values() {
        let views = DashboardViews::compute(&crate::source::generate(), FilterSelection::default());
        assert!(views.has_data());
        assert_eq!(views.record_count, 84);
        let indigenas = views.share(BeneficiaryGroup::Indigenas).unwrap();
        assert!((indigenas - 99_540.0 / 242_550.0 * 100.0).abs() < 1e-9);
        assert_eq!(
            views.other_groups_total(),
            26_460 + 25_797 + 13_212 + 5_259 + 5_259 + 2_609 + 2_609
        );
        let empty = DashboardViews::compute(&[], FilterSelection::default());
        assert_eq!(empty.share(BeneficiaryGroup::Indigenas), None);
    }
}
