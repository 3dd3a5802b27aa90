use std::collections::HashSet;

use ada_cestas::constants::calendar::YEARS;
use ada_cestas::{
    BeneficiaryGroup, DeliveryRecord, GroupSelection, YearSelection, aggregate_by_year,
    distribution, filter_by_year, generate, monthly_breakdown, summarize,
};

fn records() -> Vec<DeliveryRecord> {
    generate()
}

#[test]
fn generated_periods_cover_the_calendar_once() {
    let records = records();
    assert_eq!(records.len(), 84);

    let periods: HashSet<&str> = records.iter().map(|r| r.period.as_str()).collect();
    assert_eq!(periods.len(), 84);
    for year in YEARS {
        for month in 1..=12 {
            let period = format!("{year}{month:02}");
            assert!(periods.contains(period.as_str()), "missing {period}");
        }
    }
}

#[test]
fn summary_total_equals_sum_of_record_totals() {
    let records = records();
    let expected: u64 = records.iter().map(|r| r.total).sum();
    let summary = summarize(&records);
    assert_eq!(summary.total, expected);
    assert_eq!(summary.total, 242_550);
    assert_eq!(summary.groups.get(BeneficiaryGroup::Indigenas), 99_540);
    assert_eq!(summary.groups.get(BeneficiaryGroup::Quilombolas), 74_634);
    assert_eq!(summary.groups.get(BeneficiaryGroup::Rural), 2_609);
}

#[test]
fn yearly_aggregate_has_seven_sorted_entries_matching_record_sums() {
    let records = records();
    let yearly = aggregate_by_year(&records, YearSelection::All);
    assert_eq!(yearly.len(), 7);
    for pair in yearly.windows(2) {
        assert!(pair[0].year < pair[1].year);
    }
    for entry in &yearly {
        let expected: u64 = records
            .iter()
            .filter(|r| r.period.starts_with(entry.year.as_str()))
            .map(|r| r.total)
            .sum();
        assert_eq!(entry.total, expected, "year {}", entry.year);
    }
    assert_eq!(yearly[0].total, 15_894);
    assert_eq!(yearly[6].total, 53_406);
}

#[test]
fn monthly_breakdown_for_2019_matches_each_record_total() {
    let records = records();
    let months = monthly_breakdown(&records, YearSelection::Year("2019"), GroupSelection::All);
    let labels: Vec<&str> = months.iter().map(|m| m.month).collect();
    assert_eq!(
        labels,
        vec![
            "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez"
        ]
    );
    let totals: Vec<u64> = months.iter().map(|m| m.total).collect();
    let expected: Vec<u64> = records[..12].iter().map(|r| r.total).collect();
    assert_eq!(totals, expected);
    assert_eq!(
        totals,
        vec![1000, 1059, 1118, 1177, 1236, 1295, 1354, 1413, 1472, 1531, 1590, 1649]
    );
}

#[test]
fn group_distribution_has_no_zeroes_and_never_increases() {
    let records = records();
    for year in YearSelection::options() {
        let filtered = filter_by_year(&records, year);
        let summary = summarize(filtered.iter().copied());
        let yearly = aggregate_by_year(filtered.iter().copied(), year);
        let entries = distribution(&yearly, &summary, GroupSelection::All);
        assert_eq!(entries.len(), 9, "year {year}");
        assert!(entries.iter().all(|e| e.value > 0));
        for pair in entries.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
    }
}

#[test]
fn equal_weight_groups_tie_in_catalog_order() {
    let records = records();
    let summary = summarize(&records);
    let entries = distribution(&[], &summary, GroupSelection::All);
    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Indígenas",
            "Quilombolas",
            "Extrativistas",
            "Pescadores",
            "Emergencial",
            "Ciganos",
            "Catadores",
            "Assentados",
            "Rural",
        ]
    );
    assert_eq!(entries[5].value, entries[6].value);
    assert_eq!(entries[7].value, entries[8].value);
}

#[test]
fn aggregation_is_idempotent_and_leaves_input_untouched() {
    let records = records();
    let snapshot = records.clone();
    let year = YearSelection::Year("2023");
    let group = GroupSelection::Group(BeneficiaryGroup::Pescadores);

    let first = (
        summarize(filter_by_year(&records, year)),
        aggregate_by_year(&records, year),
        monthly_breakdown(&records, year, group),
    );
    let second = (
        summarize(filter_by_year(&records, year)),
        aggregate_by_year(&records, year),
        monthly_breakdown(&records, year, group),
    );
    assert_eq!(first, second);
    assert_eq!(records, snapshot);
}

#[test]
fn records_outside_the_calendar_are_dropped_from_yearly_view() {
    let mut records = records();
    let mut stray = records[0].clone();
    stray.period = "203001".into();
    stray.total = 1_000_000;
    records.push(stray);

    let yearly = aggregate_by_year(&records, YearSelection::All);
    let grand: u64 = yearly.iter().map(|e| e.total).sum();
    assert_eq!(grand, 242_550);
    // The summary still counts every record it is given.
    assert_eq!(summarize(&records).total, 1_242_550);
}
