pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;

pub use assets::{image_key, RegionImages};
pub use config::{AppConfig, ConfigOverrides};
pub use error::{DataLoadError, KeyError, SelectionError};
pub use input::expand_key;
pub use model::classification::{Classification, CUTOFF_DATE};
pub use model::page::{Page, PageState};
pub use model::record::{normalize_month, normalize_year, PredictionRecord};
pub use model::selection::{Field, Selection, Stage};
pub use repository::{CsvPredictionSource, PredictionSource};
pub use service::dto::{CommitOutcome, PredictionResult, NOT_FOUND_MESSAGE};
pub use service::navigator::SelectionNavigator;
pub use service::table::PredictionTable;
