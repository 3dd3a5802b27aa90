//! Beneficiary group catalog.
//!
//! The catalog is fixed process-wide configuration: nine demographic groups,
//! each with a wire key, a display label, a presentation color, and the
//! weight/variation pair the sample generator uses for that group.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::DashboardError;
use crate::types::ColorSpec;

/// Number of entries in the beneficiary catalog.
pub const GROUP_COUNT: usize = 9;

/// One of the nine demographic categories eligible for food-basket assistance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeneficiaryGroup {
    Indigenas,
    Quilombolas,
    Extrativistas,
    Pescadores,
    AtendEmergencial,
    Ciganas,
    Catadores,
    Assentados,
    Rural,
}

impl BeneficiaryGroup {
    /// Catalog order. Views that list groups follow this order.
    pub const ALL: [BeneficiaryGroup; GROUP_COUNT] = [
        BeneficiaryGroup::Indigenas,
        BeneficiaryGroup::Quilombolas,
        BeneficiaryGroup::Extrativistas,
        BeneficiaryGroup::Pescadores,
        BeneficiaryGroup::AtendEmergencial,
        BeneficiaryGroup::Ciganas,
        BeneficiaryGroup::Catadores,
        BeneficiaryGroup::Assentados,
        BeneficiaryGroup::Rural,
    ];

    /// Position of the group in `ALL`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire key used in filter selections and JSON output.
    pub const fn key(self) -> &'static str {
        match self {
            BeneficiaryGroup::Indigenas => "indigenas",
            BeneficiaryGroup::Quilombolas => "quilombolas",
            BeneficiaryGroup::Extrativistas => "extrativistas",
            BeneficiaryGroup::Pescadores => "pescadores",
            BeneficiaryGroup::AtendEmergencial => "atend_emergencial",
            BeneficiaryGroup::Ciganas => "ciganas",
            BeneficiaryGroup::Catadores => "catadores",
            BeneficiaryGroup::Assentados => "assentados",
            BeneficiaryGroup::Rural => "rural",
        }
    }

    /// Display label (pt-BR).
    pub const fn label(self) -> &'static str {
        match self {
            BeneficiaryGroup::Indigenas => "Indígenas",
            BeneficiaryGroup::Quilombolas => "Quilombolas",
            BeneficiaryGroup::Extrativistas => "Extrativistas",
            BeneficiaryGroup::Pescadores => "Pescadores",
            BeneficiaryGroup::AtendEmergencial => "Emergencial",
            BeneficiaryGroup::Ciganas => "Ciganos",
            BeneficiaryGroup::Catadores => "Catadores",
            BeneficiaryGroup::Assentados => "Assentados",
            BeneficiaryGroup::Rural => "Rural",
        }
    }

    /// Presentation color for charts.
    pub const fn color(self) -> ColorSpec {
        match self {
            BeneficiaryGroup::Indigenas => "hsl(220, 70%, 50%)",
            BeneficiaryGroup::Quilombolas => "hsl(160, 70%, 50%)",
            BeneficiaryGroup::Extrativistas => "hsl(30, 70%, 50%)",
            BeneficiaryGroup::Pescadores => "hsl(200, 70%, 50%)",
            BeneficiaryGroup::AtendEmergencial => "hsl(0, 70%, 50%)",
            BeneficiaryGroup::Ciganas => "hsl(280, 70%, 50%)",
            BeneficiaryGroup::Catadores => "hsl(340, 70%, 50%)",
            BeneficiaryGroup::Assentados => "hsl(40, 70%, 50%)",
            BeneficiaryGroup::Rural => "hsl(120, 70%, 50%)",
        }
    }

    /// Share of the base amount the sample generator assigns to this group.
    ///
    /// The weights sum to 1.01, so generated group counts slightly exceed
    /// the generated record total.
    pub const fn sample_weight(self) -> f64 {
        match self {
            BeneficiaryGroup::Indigenas => 0.4,
            BeneficiaryGroup::Quilombolas => 0.3,
            BeneficiaryGroup::Extrativistas => 0.1,
            BeneficiaryGroup::Pescadores => 0.1,
            BeneficiaryGroup::AtendEmergencial => 0.05,
            BeneficiaryGroup::Ciganas => 0.02,
            BeneficiaryGroup::Catadores => 0.02,
            BeneficiaryGroup::Assentados => 0.01,
            BeneficiaryGroup::Rural => 0.01,
        }
    }

    /// Multiplier applied to the month's variation term for this group.
    pub const fn sample_variation_factor(self) -> f64 {
        match self {
            BeneficiaryGroup::Indigenas => 2.0,
            BeneficiaryGroup::Quilombolas => 1.5,
            BeneficiaryGroup::Extrativistas => 1.0,
            BeneficiaryGroup::Pescadores => 0.8,
            BeneficiaryGroup::AtendEmergencial => 0.5,
            BeneficiaryGroup::Ciganas => 0.2,
            BeneficiaryGroup::Catadores => 0.2,
            BeneficiaryGroup::Assentados => 0.1,
            BeneficiaryGroup::Rural => 0.1,
        }
    }

    /// Look up a group by its wire key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.key() == key)
    }
}

impl fmt::Display for BeneficiaryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BeneficiaryGroup {
    type Err = DashboardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::from_key(raw.trim()).ok_or_else(|| DashboardError::UnknownGroup(raw.to_string()))
    }
}

/// Per-group running sums, indexed in catalog order.
///
/// Serializes as a JSON object keyed by group key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupTotals {
    sums: [u64; GROUP_COUNT],
}

impl GroupTotals {
    /// Sum recorded for `group`.
    pub fn get(&self, group: BeneficiaryGroup) -> u64 {
        self.sums[group.index()]
    }

    /// Add `value` to the running sum of `group`, saturating at `u64::MAX`.
    pub fn add(&mut self, group: BeneficiaryGroup, value: u64) {
        let slot = &mut self.sums[group.index()];
        *slot = slot.saturating_add(value);
    }

    /// Iterate `(group, sum)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (BeneficiaryGroup, u64)> + '_ {
        BeneficiaryGroup::ALL
            .into_iter()
            .map(move |group| (group, self.get(group)))
    }

    /// Sum across all groups, saturating at `u64::MAX`.
    pub fn sum(&self) -> u64 {
        self.sums.iter().fold(0u64, |acc, sum| acc.saturating_add(*sum))
    }
}

impl Serialize for GroupTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(GROUP_COUNT))?;
        for (group, sum) in self.iter() {
            map.serialize_entry(group.key(), &sum)?;
        }
        map.end()
    }
}
