//! Record source interfaces.
//!
//! Ownership model:
//! - `RecordSource` is the dashboard-facing interface that produces the base
//!   record array once at start-up.
//! - `InMemorySource` wraps prebuilt records (tests, embedding callers).
//! - `SampleSource` generates the deterministic sample dataset.

use crate::data::DeliveryRecord;
use crate::errors::DashboardError;
use crate::types::SourceId;

/// Source implementation modules.
pub mod sources;

pub use sources::sample_source::{SampleSource, generate, generate_with};

/// Dashboard-facing record source.
///
/// A source is loaded once; the returned records are treated as immutable for
/// the lifetime of the dashboard. For a fixed source state, `load` output
/// should be deterministic.
pub trait RecordSource: Send + Sync {
    /// Stable source identifier used in logs and load errors.
    fn id(&self) -> &str;

    /// Produce the full record array.
    fn load(&self) -> Result<Vec<DeliveryRecord>, DashboardError>;
}

/// In-memory record source for tests and small datasets.
pub struct InMemorySource {
    id: SourceId,
    records: Vec<DeliveryRecord>,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt records.
    pub fn new(id: impl Into<SourceId>, records: Vec<DeliveryRecord>) -> Self {
        Self {
            id: id.into(),
            records,
        }
    }
}

impl RecordSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<DeliveryRecord>, DashboardError> {
        Ok(self.records.clone())
    }
}
