use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three dependent selection levels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Region,
    Year,
    Month,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Region => "region",
            Field::Year => "year",
            Field::Month => "month",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Empty,
    RegionSet,
    YearSet,
    MonthSet,
    Committed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Per-session choice of region, year and month.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub region: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
}

impl Selection {
    /// Stage implied by the filled fields, ignoring whether a commit happened.
    pub fn stage(&self) -> Stage {
        match (&self.region, &self.year, &self.month) {
            (Some(_), Some(_), Some(_)) => Stage::MonthSet,
            (Some(_), Some(_), None) => Stage::YearSet,
            (Some(_), None, _) => Stage::RegionSet,
            _ => Stage::Empty,
        }
    }

    pub fn set_region(&mut self, region: String) {
        self.region = Some(region);
        self.year = None;
        self.month = None;
    }

    pub fn set_year(&mut self, year: String) {
        self.year = Some(year);
        self.month = None;
    }

    pub fn set_month(&mut self, month: String) {
        self.month = Some(month);
    }

    pub fn clear(&mut self) {
        *self = Selection::default();
    }

    /// All three keys, once the selection is complete.
    pub fn keys(&self) -> Option<(&str, &str, &str)> {
        match (&self.region, &self.year, &self.month) {
            (Some(r), Some(y), Some(m)) => Some((r.as_str(), y.as_str(), m.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_follows_fields() {
        let mut selection = Selection::default();
        assert_eq!(selection.stage(), Stage::Empty);

        selection.set_region("Bretagne".to_string());
        assert_eq!(selection.stage(), Stage::RegionSet);

        selection.set_year("2019".to_string());
        assert_eq!(selection.stage(), Stage::YearSet);

        selection.set_month("3".to_string());
        assert_eq!(selection.stage(), Stage::MonthSet);
        assert_eq!(selection.keys(), Some(("Bretagne", "2019", "3")));
    }

    #[test]
    fn test_upstream_change_clears_downstream() {
        let mut selection = Selection::default();
        selection.set_region("Bretagne".to_string());
        selection.set_year("2019".to_string());
        selection.set_month("3".to_string());

        selection.set_year("2020".to_string());
        assert_eq!(selection.month, None);

        selection.set_month("4".to_string());
        selection.set_region("Normandie".to_string());
        assert_eq!(selection.year, None);
        assert_eq!(selection.month, None);
        assert_eq!(selection.stage(), Stage::RegionSet);
    }
}
