#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Aggregation engine and derived view types.
pub mod aggregate;
/// Generator configuration types.
pub mod config;
/// Centralized constants for the calendar, generator, and display.
pub mod constants;
/// Dashboard state and transactional view recomputation.
pub mod dashboard;
/// Delivery record and period types.
pub mod data;
/// Year and group filter selections.
pub mod filters;
/// pt-BR number formatting helpers.
pub mod format;
/// Beneficiary group catalog.
pub mod groups;
/// Share and card metrics derived from summary totals.
pub mod metrics;
/// Runner for the `dashboard_report` binary.
pub mod report_app;
/// Record source trait and built-in sources.
pub mod source;
/// Shared type aliases.
pub mod types;

mod errors;

pub use aggregate::{
    DistributionEntry, MonthlyStats, SummaryStats, YearlyAggregate, aggregate_by_year,
    distribution, filter_by_year, monthly_breakdown, summarize,
};
pub use config::GeneratorConfig;
pub use dashboard::{Dashboard, DashboardViews};
pub use data::{DeliveryRecord, Period};
pub use errors::DashboardError;
pub use filters::{FilterSelection, GroupSelection, YearSelection};
pub use groups::{BeneficiaryGroup, GroupTotals};
pub use source::{InMemorySource, RecordSource, SampleSource, generate};
pub use types::{PeriodString, RegionCode, SourceId, YearKey};
