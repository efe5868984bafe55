pub mod csv_file;
pub mod traits;

// Re-export
pub use csv_file::CsvPredictionSource;
pub use traits::PredictionSource;
