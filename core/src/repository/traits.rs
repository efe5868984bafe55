use crate::error::DataLoadError;
use crate::model::record::PredictionRecord;

/// Anything that can yield the full set of prediction rows in load order.
pub trait PredictionSource {
    fn load(&self) -> Result<Vec<PredictionRecord>, DataLoadError>;
}
