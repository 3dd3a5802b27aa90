use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::constants::calendar::YEARS;
use crate::constants::display::ALL_KEYWORD;
use crate::errors::DashboardError;
use crate::groups::BeneficiaryGroup;

/// Year filter: every year, or one of the known reporting years.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum YearSelection {
    #[default]
    All,
    Year(&'static str),
}

impl YearSelection {
    /// Select a single year. Fails for years outside the reporting calendar.
    pub fn year(raw: &str) -> Result<Self, DashboardError> {
        YEARS
            .into_iter()
            .find(|year| *year == raw)
            .map(YearSelection::Year)
            .ok_or_else(|| DashboardError::UnknownYear(raw.to_string()))
    }

    /// Selected year key, or `None` for `All`.
    pub fn as_year(&self) -> Option<&'static str> {
        match self {
            YearSelection::All => None,
            YearSelection::Year(year) => Some(*year),
        }
    }

    /// Whether every year is selected.
    pub fn is_all(&self) -> bool {
        matches!(self, YearSelection::All)
    }

    /// Whether a year key passes this filter.
    pub fn matches(&self, year_key: Option<&str>) -> bool {
        match self {
            YearSelection::All => true,
            YearSelection::Year(year) => year_key == Some(*year),
        }
    }

    /// Every selectable value, `All` first.
    pub fn options() -> Vec<YearSelection> {
        std::iter::once(YearSelection::All)
            .chain(YEARS.into_iter().map(YearSelection::Year))
            .collect()
    }
}

impl fmt::Display for YearSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_year().unwrap_or(ALL_KEYWORD))
    }
}

impl FromStr for YearSelection {
    type Err = DashboardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(ALL_KEYWORD) {
            return Ok(YearSelection::All);
        }
        YearSelection::year(raw)
    }
}

impl Serialize for YearSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Beneficiary-group filter: every group, or a single catalog entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GroupSelection {
    #[default]
    All,
    Group(BeneficiaryGroup),
}

impl GroupSelection {
    /// Selected group, or `None` for `All`.
    pub fn as_group(&self) -> Option<BeneficiaryGroup> {
        match self {
            GroupSelection::All => None,
            GroupSelection::Group(group) => Some(*group),
        }
    }

    /// Whether every group is selected.
    pub fn is_all(&self) -> bool {
        matches!(self, GroupSelection::All)
    }

    /// Every selectable value, `All` first.
    pub fn options() -> Vec<GroupSelection> {
        std::iter::once(GroupSelection::All)
            .chain(BeneficiaryGroup::ALL.into_iter().map(GroupSelection::Group))
            .collect()
    }
}

impl fmt::Display for GroupSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupSelection::All => f.write_str(ALL_KEYWORD),
            GroupSelection::Group(group) => f.write_str(group.key()),
        }
    }
}

impl FromStr for GroupSelection {
    type Err = DashboardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(ALL_KEYWORD) {
            return Ok(GroupSelection::All);
        }
        raw.parse().map(GroupSelection::Group)
    }
}

impl Serialize for GroupSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The (year, group) pair that parameterizes every derived view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FilterSelection {
    /// Year filter.
    pub year: YearSelection,
    /// Beneficiary-group filter.
    pub group: GroupSelection,
}

impl FilterSelection {
    /// Combine a year and a group selection.
    pub fn new(year: YearSelection, group: GroupSelection) -> Self {
        Self { year, group }
    }

    /// Parse both selections from their string forms (`"all"`, `"2021"`, `"rural"`, ...).
    pub fn parse(year: &str, group: &str) -> Result<Self, DashboardError> {
        Ok(Self {
            year: year.parse()?,
            group: group.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_selection_parses_known_years_and_all() {
        assert_eq!("all".parse::<YearSelection>().unwrap(), YearSelection::All);
        assert_eq!("ALL".parse::<YearSelection>().unwrap(), YearSelection::All);
        assert_eq!(
            " 2022 ".parse::<YearSelection>().unwrap(),
            YearSelection::Year("2022")
        );
        assert!(matches!(
            "2018".parse::<YearSelection>(),
            Err(DashboardError::UnknownYear(raw)) if raw == "2018"
        ));
    }

    #[test]
    fn group_selection_parses_keys_and_all() {
        assert_eq!(
            "rural".parse::<GroupSelection>().unwrap(),
            GroupSelection::Group(BeneficiaryGroup::Rural)
        );
        assert_eq!("all".parse::<GroupSelection>().unwrap(), GroupSelection::All);
        assert!("Rural".parse::<GroupSelection>().is_err());
    }

    #[test]
    fn selection_option_lists_have_expected_sizes() {
        assert_eq!(YearSelection::options().len(), 8);
        assert_eq!(GroupSelection::options().len(), 10);
        assert_eq!(YearSelection::options()[0], YearSelection::All);
        assert_eq!(GroupSelection::options()[0], GroupSelection::All);
    }

    #[test]
    fn year_selection_matches_by_prefix_key() {
        let year = YearSelection::Year("2020");
        assert!(year.matches(Some("2020")));
        assert!(!year.matches(Some("2021")));
        assert!(!year.matches(None));
        assert!(YearSelection::All.matches(None));
    }

    #[test]
    fn filter_selection_displays_and_serializes_wire_values() {
        let filter = FilterSelection::parse("2024", "atend_emergencial").unwrap();
        assert_eq!(filter.year.to_string(), "2024");
        assert_eq!(filter.group.to_string(), "atend_emergencial");
        let json = serde_json::to_value(filter).unwrap();
        assert_eq!(json["year"], "2024");
        assert_eq!(json["group"], "atend_emergencial");
        assert_eq!(FilterSelection::default().year.to_string(), "all");
    }
}
