use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// Last month backed by real measurements.
pub const CUTOFF_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2022, 5, 1) {
    Some(date) => date,
    None => panic!("invalid cutoff date"),
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Historical,
    Projected,
}

impl Classification {
    pub fn for_date(date: NaiveDate) -> Self {
        if date > CUTOFF_DATE {
            Classification::Projected
        } else {
            Classification::Historical
        }
    }

    /// Classifies the first day of the given (year, month) key pair.
    pub fn for_period(year: &str, month: &str) -> Result<Self, SelectionError> {
        let invalid = || SelectionError::InvalidPeriod {
            year: year.to_string(),
            month: month.to_string(),
        };

        let y: i32 = year.parse().map_err(|_| invalid())?;
        let m: u32 = month.parse().map_err(|_| invalid())?;
        let date = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;

        Ok(Self::for_date(date))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Historical => "Historical",
            Classification::Projected => "Projected",
        }
    }

    pub fn caption(&self, year: &str, month: &str) -> String {
        match self {
            Classification::Historical => format!(
                "Based on actual data points from {} in the Month {}.",
                year, month
            ),
            Classification::Projected => format!(
                "Forecast for {} in the Month {}: grounded in historical patterns, \
                 not a definitive figure for the period covered by the dataset.",
                year, month
            ),
        }
    }
}
