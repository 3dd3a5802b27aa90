/// Four-digit calendar year key as it appears in a period prefix.
/// Examples: `2019`, `2025`
pub type YearKey = String;
/// Raw year-month identifier of a record.
/// Examples: `201901`, `202512`
pub type PeriodString = String;
/// Region code attached to each record.
/// Example: `11`
pub type RegionCode = String;
/// Short month label used by the monthly view.
/// Examples: `Jan`, `Fev`, `Dez`
pub type MonthLabel = &'static str;
/// Presentation color attached to catalog entries and distribution bars.
/// Example: `hsl(220, 70%, 50%)`
pub type ColorSpec = &'static str;
/// Identifier for a record source.
/// Examples: `sample`, `in_memory`
pub type SourceId = String;
/// Display text for a distribution bar (group label or year).
/// Examples: `Indígenas`, `2021`
pub type EntryLabel = String;
