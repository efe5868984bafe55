use serde::{Deserialize, Serialize};

use crate::model::classification::Classification;

pub const NOT_FOUND_MESSAGE: &str =
    "No prediction data available for the selected combination of region, year, and month.";

/// A found prediction together with its historical/projected label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub region: String,
    pub year: String,
    pub month: String,
    pub average_prediction: f64,
    pub classification: Classification,
}

impl PredictionResult {
    pub fn headline(&self) -> String {
        format!(
            "Average Predicted Energy Consumption for {} in {} for the Month {} (MW):",
            self.region, self.year, self.month
        )
    }

    pub fn formatted_value(&self) -> String {
        format!("{:.2}", self.average_prediction)
    }

    pub fn caption(&self) -> String {
        self.classification.caption(&self.year, &self.month)
    }
}

/// Result of looking up a complete selection. `NotFound` is an expected,
/// user-facing outcome and carries the keys that were asked for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommitOutcome {
    Found(PredictionResult),
    NotFound {
        region: String,
        year: String,
        month: String,
    },
}

impl CommitOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, CommitOutcome::Found(_))
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            CommitOutcome::Found(result) => Some(result),
            CommitOutcome::NotFound { .. } => None,
        }
    }
}
