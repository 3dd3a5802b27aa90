use std::io;

use thiserror::Error;

use crate::types::{PeriodString, SourceId};

/// Error type for record validation, loading, filter parsing, and report output.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid period '{period}': {reason}")]
    InvalidPeriod { period: PeriodString, reason: String },
    #[error("record source '{source_id}' failed to load: {reason}")]
    Load { source_id: SourceId, reason: String },
    #[error("unknown year selection '{0}' (expected 'all' or 2019..=2025)")]
    UnknownYear(String),
    #[error("unknown beneficiary group '{0}'")]
    UnknownGroup(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
