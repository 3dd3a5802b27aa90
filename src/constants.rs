/// Constants describing the fixed reporting calendar.
pub mod calendar {
    /// Years covered by the dashboard, in ascending order.
    pub const YEARS: [&str; 7] = ["2019", "2020", "2021", "2022", "2023", "2024", "2025"];
    /// Zero-padded month numbers as they appear in a period suffix.
    pub const MONTHS: [&str; 12] = [
        "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
    ];
    /// Short pt-BR month labels, aligned with `MONTHS`.
    pub const MONTH_LABELS: [&str; 12] = [
        "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
    ];
    /// Label shown for the full reporting span when no year is selected.
    pub const FULL_SPAN_LABEL: &str = "2019-2025";
    /// Length of a `YYYYMM` period string.
    pub const PERIOD_LEN: usize = 6;
}

/// Constants used by the sample data generator.
pub mod generator {
    /// Region code stamped on every generated record.
    pub const DEFAULT_REGION_CODE: &str = "11";
    /// Base amount of the first month of the first year.
    pub const BASE_AMOUNT: u64 = 1000;
    /// Base amount increment per year index.
    pub const BASE_STEP_PER_YEAR: u64 = 500;
    /// Base amount increment per month index.
    pub const BASE_STEP_PER_MONTH: u64 = 50;
    /// Variation increment per year index.
    pub const VARIATION_STEP_PER_YEAR: u64 = 7;
    /// Variation increment per month index.
    pub const VARIATION_STEP_PER_MONTH: u64 = 3;
    /// Modulus keeping the variation in `0..100`.
    pub const VARIATION_MODULUS: u64 = 100;
    /// Multiplier applied to the variation in the record total.
    pub const TOTAL_VARIATION_FACTOR: u64 = 3;
    /// Source id reported by the sample source.
    pub const SAMPLE_SOURCE_ID: &str = "sample";
}

/// Constants used when rendering views for display.
pub mod display {
    /// pt-BR thousands separator.
    pub const THOUSANDS_SEPARATOR: char = '.';
    /// Keyword accepted for "no filter" in year and group selections.
    pub const ALL_KEYWORD: &str = "all";
}
