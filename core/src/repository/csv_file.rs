use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::DataLoadError;
use crate::model::record::{normalize_month, normalize_year, PredictionRecord};
use crate::repository::traits::PredictionSource;

pub const COLUMN_REGION: &str = "Region";
pub const COLUMN_YEAR: &str = "Year";
pub const COLUMN_MONTH: &str = "Month";
pub const COLUMN_AVERAGE_PREDICTION: &str = "AveragePrediction";

const REQUIRED_COLUMNS: [&str; 4] = [
    COLUMN_REGION,
    COLUMN_YEAR,
    COLUMN_MONTH,
    COLUMN_AVERAGE_PREDICTION,
];

// Cells stay text here so a bad value is reported with its line and column
// instead of as a generic deserialize failure.
#[derive(Deserialize)]
struct RawRow {
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "AveragePrediction")]
    average_prediction: String,
}

/// Delimited-text prediction file with a `Region,Year,Month,AveragePrediction` header.
#[derive(Clone, Debug)]
pub struct CsvPredictionSource {
    file_path: PathBuf,
}

impl CsvPredictionSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl PredictionSource for CsvPredictionSource {
    fn load(&self) -> Result<Vec<PredictionRecord>, DataLoadError> {
        let file = File::open(&self.file_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DataLoadError::SourceMissing {
                path: self.file_path.clone(),
            },
            _ => DataLoadError::Io(e),
        })?;
        debug!(path = %self.file_path.display(), "reading prediction data");
        read_records(BufReader::new(file))
    }
}

/// Parses prediction rows from any reader, normalizing keys on the way in.
pub fn read_records<R: Read>(input: R) -> Result<Vec<PredictionRecord>, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRow = row.deserialize(Some(&headers))?;
        records.push(convert_row(raw, line)?);
    }

    Ok(records)
}

fn convert_row(raw: RawRow, line: u64) -> Result<PredictionRecord, DataLoadError> {
    let invalid = |column: &'static str, value: &str, reason: String| DataLoadError::InvalidValue {
        line,
        column,
        value: value.to_string(),
        reason,
    };

    if raw.region.is_empty() {
        return Err(invalid(COLUMN_REGION, &raw.region, "region is empty".to_string()));
    }

    let year = normalize_year(&raw.year).map_err(|r| invalid(COLUMN_YEAR, &raw.year, r))?;
    let month = normalize_month(&raw.month).map_err(|r| invalid(COLUMN_MONTH, &raw.month, r))?;

    let average_prediction = match raw.average_prediction.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            return Err(invalid(
                COLUMN_AVERAGE_PREDICTION,
                &raw.average_prediction,
                "not a finite number".to_string(),
            ))
        }
    };

    Ok(PredictionRecord {
        region: raw.region,
        year,
        month,
        average_prediction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_normalizes_keys() {
        let data = "Region,Year,Month,AveragePrediction\n\
                    Bretagne,2019,03,2450.5\n\
                    Normandie, 2022 ,5.0,3100\n";
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PredictionRecord::new("Bretagne", "2019", "3", 2450.5));
        assert_eq!(records[1], PredictionRecord::new("Normandie", "2022", "5", 3100.0));
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let data = "Month,Index,AveragePrediction,Region,Year\n\
                    12,0,1000.25,Occitanie,2021\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records, vec![PredictionRecord::new("Occitanie", "2021", "12", 1000.25)]);
    }

    #[test]
    fn test_missing_column() {
        let data = "Region,Year,Month\nBretagne,2019,3\n";
        let err = read_records(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(COLUMN_AVERAGE_PREDICTION)));
    }

    #[test]
    fn test_empty_input_is_missing_columns() {
        let err = read_records("".as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(_)));
    }

    #[test]
    fn test_invalid_values_report_line() {
        let data = "Region,Year,Month,AveragePrediction\n\
                    Bretagne,2019,3,2450.5\n\
                    Bretagne,2019,14,2450.5\n";
        match read_records(data.as_bytes()).unwrap_err() {
            DataLoadError::InvalidValue { line, column, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, COLUMN_MONTH);
                assert_eq!(value, "14");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let data = "Region,Year,Month,AveragePrediction\nBretagne,2019,3,n/a\n";
        assert!(matches!(
            read_records(data.as_bytes()).unwrap_err(),
            DataLoadError::InvalidValue { column: COLUMN_AVERAGE_PREDICTION, .. }
        ));

        let data = "Region,Year,Month,AveragePrediction\n,2019,3,1.0\n";
        assert!(matches!(
            read_records(data.as_bytes()).unwrap_err(),
            DataLoadError::InvalidValue { column: COLUMN_REGION, .. }
        ));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let data = "Region,Year,Month,AveragePrediction\nBretagne,2019\n";
        assert!(matches!(read_records(data.as_bytes()).unwrap_err(), DataLoadError::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let source = CsvPredictionSource::new("/nonexistent/energy/all_predictions.csv");
        assert!(matches!(source.load().unwrap_err(), DataLoadError::SourceMissing { .. }));
    }
}
