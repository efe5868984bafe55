//! End-to-end tests over real files: load a prediction CSV from disk, walk the
//! selection stages and commit.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use energy_dash_core::{
    Classification, CommitOutcome, CsvPredictionSource, DataLoadError, PredictionTable,
    SelectionNavigator, Stage,
};
use tempfile::TempDir;

const SAMPLE: &str = "\
Region,Year,Month,AveragePrediction
Bretagne,2021,12,2911.42
Bretagne,2022,05,2604.10
Bretagne,2022,6,2388.95
Bretagne,2022,5,1.0
Normandie,2019,3,3402.00
Normandie,2019,1,3688.75
Auvergne-Rhône-Alpes,2023,1,8120.30
";

fn write_csv(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all_predictions_modified.csv");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn load_sample() -> (TempDir, Arc<PredictionTable>) {
    let (dir, path) = write_csv(SAMPLE);
    let table = PredictionTable::load(&CsvPredictionSource::new(&path)).unwrap();
    (dir, Arc::new(table))
}

#[test]
fn test_load_from_file() {
    let (_dir, table) = load_sample();
    assert_eq!(table.len(), 7);
    assert_eq!(table.regions(), vec!["Bretagne", "Normandie", "Auvergne-Rhône-Alpes"]);
    // "05" and "5" collapse to one key at load time.
    assert_eq!(table.months_for("Bretagne", "2022"), vec!["5", "6"]);
    assert_eq!(table.find("Bretagne", "2022", "5").unwrap().average_prediction, 2604.10);
}

#[test]
fn test_every_listed_month_matches_records_exactly() {
    let (_dir, table) = load_sample();
    for region in table.regions() {
        for year in table.years_for(region) {
            let mut expected: Vec<&str> = table
                .records()
                .iter()
                .filter(|r| r.region == region && r.year == year)
                .map(|r| r.month.as_str())
                .collect();
            let mut months = table.months_for(region, year);
            months.sort();
            expected.sort();
            expected.dedup();
            assert_eq!(months, expected);
        }
    }
}

#[test]
fn test_navigate_and_commit() {
    let (_dir, table) = load_sample();
    let mut nav = SelectionNavigator::new(Arc::clone(&table));

    nav.set_region("Auvergne-Rhône-Alpes").unwrap();
    nav.set_year("2023").unwrap();
    nav.set_month("1").unwrap();

    match nav.commit().unwrap() {
        CommitOutcome::Found(result) => {
            assert_eq!(result.average_prediction, 8120.30);
            assert_eq!(result.classification, Classification::Projected);
            assert_eq!(result.formatted_value(), "8120.30");
        }
        other => panic!("expected a prediction, got {other:?}"),
    }
    assert_eq!(nav.stage(), Stage::Committed);
}

#[test]
fn test_sessions_share_one_table() {
    let (_dir, table) = load_sample();
    let mut first = SelectionNavigator::new(Arc::clone(&table));
    let mut second = SelectionNavigator::new(Arc::clone(&table));

    first.set_region("Bretagne").unwrap();
    second.set_region("Normandie").unwrap();

    assert_eq!(first.year_options(), vec!["2021", "2022"]);
    assert_eq!(second.year_options(), vec!["2019"]);
    assert_eq!(Arc::strong_count(&table), 3);
}

#[test]
fn test_missing_combination_is_not_found() {
    let (_dir, table) = load_sample();
    let outcome = table.lookup("Bretagne", "2019", "3").unwrap();
    assert!(matches!(outcome, CommitOutcome::NotFound { .. }));
}

#[test]
fn test_missing_average_prediction_column() {
    let (_dir, path) = write_csv("Region,Year,Month\nBretagne,2019,3\n");
    let result = PredictionTable::from_path(&path);
    assert!(matches!(result, Err(DataLoadError::MissingColumn("AveragePrediction"))));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = PredictionTable::from_path(dir.path().join("absent.csv"));
    assert!(matches!(result, Err(DataLoadError::SourceMissing { .. })));
}

#[test]
fn test_header_only_file_loads_empty_table() {
    let (_dir, path) = write_csv("Region,Year,Month,AveragePrediction\n");
    let table = PredictionTable::from_path(&path).unwrap();
    assert!(table.is_empty());
    assert!(table.regions().is_empty());
}
