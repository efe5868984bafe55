use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::{DataLoadError, SelectionError};
use crate::model::classification::Classification;
use crate::model::record::{normalize_month, normalize_year, PredictionRecord};
use crate::repository::csv_file::{COLUMN_MONTH, COLUMN_REGION, COLUMN_YEAR};
use crate::repository::{CsvPredictionSource, PredictionSource};
use crate::service::dto::{CommitOutcome, PredictionResult};

/// Read-only prediction rows in load order. Share it across sessions behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PredictionTable {
    records: Vec<PredictionRecord>,
}

impl PredictionTable {
    pub fn load<S: PredictionSource>(source: &S) -> Result<Self, DataLoadError> {
        let table = Self::from_records(source.load()?)?;
        info!(
            rows = table.len(),
            regions = table.regions().len(),
            "prediction table loaded"
        );
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        Self::load(&CsvPredictionSource::new(path.as_ref()))
    }

    /// Builds a table from records of any origin, bringing year and month to
    /// their canonical keys so option lists and setters agree.
    pub fn from_records(records: Vec<PredictionRecord>) -> Result<Self, DataLoadError> {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| canonical(index, record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn regions(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.region.as_str()))
    }

    pub fn years_for(&self, region: &str) -> Vec<&str> {
        distinct(
            self.records
                .iter()
                .filter(|r| r.region == region)
                .map(|r| r.year.as_str()),
        )
    }

    pub fn months_for(&self, region: &str, year: &str) -> Vec<&str> {
        distinct(
            self.records
                .iter()
                .filter(|r| r.region == region && r.year == year)
                .map(|r| r.month.as_str()),
        )
    }

    /// First record in load order matching all three keys exactly.
    pub fn find(&self, region: &str, year: &str, month: &str) -> Option<&PredictionRecord> {
        self.records.iter().find(|r| r.matches(region, year, month))
    }

    /// Looks up raw user keys and classifies the hit. Year and month are
    /// normalized first; keys that cannot be normalized simply match nothing.
    pub fn lookup(&self, region: &str, year: &str, month: &str) -> Result<CommitOutcome, SelectionError> {
        let region = region.trim();
        let year = normalize_year(year).unwrap_or_else(|_| year.trim().to_string());
        let month = normalize_month(month).unwrap_or_else(|_| month.trim().to_string());

        let Some(record) = self.find(region, &year, &month) else {
            return Ok(CommitOutcome::NotFound {
                region: region.to_string(),
                year,
                month,
            });
        };

        let classification = Classification::for_period(&record.year, &record.month)?;
        Ok(CommitOutcome::Found(PredictionResult {
            region: record.region.clone(),
            year: record.year.clone(),
            month: record.month.clone(),
            average_prediction: record.average_prediction,
            classification,
        }))
    }
}

fn canonical(index: usize, record: PredictionRecord) -> Result<PredictionRecord, DataLoadError> {
    let invalid = |column: &'static str, value: &str, reason: String| DataLoadError::InvalidRecord {
        index,
        column,
        value: value.to_string(),
        reason,
    };

    let region = record.region.trim();
    if region.is_empty() {
        return Err(invalid(COLUMN_REGION, &record.region, "region is empty".to_string()));
    }
    let year = normalize_year(&record.year).map_err(|r| invalid(COLUMN_YEAR, &record.year, r))?;
    let month = normalize_month(&record.month).map_err(|r| invalid(COLUMN_MONTH, &record.month, r))?;

    Ok(PredictionRecord::new(region, &year, &month, record.average_prediction))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
