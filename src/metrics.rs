use crate::aggregate::SummaryStats;
use crate::groups::BeneficiaryGroup;

/// Groups shown with their own summary card; the rest fold into "others".
pub const HEADLINE_GROUPS: [BeneficiaryGroup; 2] =
    [BeneficiaryGroup::Indigenas, BeneficiaryGroup::Quilombolas];

/// Percentage `part / total * 100`, or `None` when the total is zero.
///
/// May exceed 100 when group counts outgrow the record totals.
pub fn share_percent(part: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(part as f64 / total as f64 * 100.0)
}

/// Sum of every group outside `HEADLINE_GROUPS`.
pub fn other_groups_total(summary: &SummaryStats) -> u64 {
    summary
        .groups
        .iter()
        .filter(|(group, _)| !HEADLINE_GROUPS.contains(group))
        .fold(0u64, |acc, (_, count)| acc.saturating_add(count))
}
