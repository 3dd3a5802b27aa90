/// Deterministic sample data generator.
pub mod sample_source;
