use serde::{Deserialize, Serialize};

/// One row of the prediction table. Year and month hold canonical key strings
/// (see [`normalize_year`] and [`normalize_month`]), never raw source text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub region: String,
    pub year: String,
    pub month: String,
    /// Average predicted consumption in MW
    pub average_prediction: f64,
}

impl PredictionRecord {
    pub fn new(region: &str, year: &str, month: &str, average_prediction: f64) -> Self {
        Self {
            region: region.to_string(),
            year: year.to_string(),
            month: month.to_string(),
            average_prediction,
        }
    }

    pub fn matches(&self, region: &str, year: &str, month: &str) -> bool {
        self.region == region && self.year == year && self.month == month
    }
}

/// Reduces a numeric key to its minimal decimal string: "05" -> "5", "5.0" -> "5".
fn minimal_decimal(input: &str) -> Result<u32, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("value is empty".to_string());
    }

    if let Ok(n) = input.parse::<u32>() {
        return Ok(n);
    }

    // Spreadsheet exports often write integer columns as floats.
    match input.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
            Ok(f as u32)
        }
        _ => Err("not a whole number".to_string()),
    }
}

pub fn normalize_year(input: &str) -> Result<String, String> {
    let year = minimal_decimal(input)?;
    if !(1000..=9999).contains(&year) {
        return Err("year must have four digits".to_string());
    }
    Ok(year.to_string())
}

pub fn normalize_month(input: &str) -> Result<String, String> {
    let month = minimal_decimal(input)?;
    if !(1..=12).contains(&month) {
        return Err("month must be between 1 and 12".to_string());
    }
    Ok(month.to_string())
}
