use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::SelectionError;
use crate::model::record::{normalize_month, normalize_year};
use crate::model::selection::{Field, Selection, Stage};
use crate::service::dto::CommitOutcome;
use crate::service::table::PredictionTable;

/// Walks one session through region -> year -> month -> commit against a
/// shared table. Every setter only accepts values from the current options.
pub struct SelectionNavigator {
    table: Arc<PredictionTable>,
    selection: Selection,
    committed: bool,
}

impl SelectionNavigator {
    pub fn new(table: Arc<PredictionTable>) -> Self {
        Self {
            table,
            selection: Selection::default(),
            committed: false,
        }
    }

    pub fn table(&self) -> &PredictionTable {
        &self.table
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn stage(&self) -> Stage {
        if self.committed {
            Stage::Committed
        } else {
            self.selection.stage()
        }
    }

    pub fn region_options(&self) -> Vec<&str> {
        self.table.regions()
    }

    pub fn year_options(&self) -> Vec<&str> {
        match &self.selection.region {
            Some(region) => self.table.years_for(region),
            None => Vec::new(),
        }
    }

    pub fn month_options(&self) -> Vec<&str> {
        match (&self.selection.region, &self.selection.year) {
            (Some(region), Some(year)) => self.table.months_for(region, year),
            _ => Vec::new(),
        }
    }

    pub fn set_region(&mut self, region: &str) -> Result<(), SelectionError> {
        let region = region.trim();
        if !self.region_options().contains(&region) {
            return Err(rejected(Field::Region, region));
        }

        self.selection.set_region(region.to_string());
        self.committed = false;
        debug!(region, "region selected");
        Ok(())
    }

    pub fn set_year(&mut self, year: &str) -> Result<(), SelectionError> {
        if self.selection.region.is_none() {
            warn!(year, "year chosen before region");
            return Err(SelectionError::MissingUpstream { field: Field::Year });
        }

        let year = normalize_year(year).map_err(|_| rejected(Field::Year, year))?;
        if !self.year_options().contains(&year.as_str()) {
            return Err(rejected(Field::Year, &year));
        }

        debug!(year = %year, "year selected");
        self.selection.set_year(year);
        self.committed = false;
        Ok(())
    }

    pub fn set_month(&mut self, month: &str) -> Result<(), SelectionError> {
        if self.selection.region.is_none() || self.selection.year.is_none() {
            warn!(month, "month chosen before region and year");
            return Err(SelectionError::MissingUpstream { field: Field::Month });
        }

        let month = normalize_month(month).map_err(|_| rejected(Field::Month, month))?;
        if !self.month_options().contains(&month.as_str()) {
            return Err(rejected(Field::Month, &month));
        }

        debug!(month = %month, "month selected");
        self.selection.set_month(month);
        self.committed = false;
        Ok(())
    }

    /// Looks up the complete selection. Valid from `MonthSet`, and again from
    /// `Committed` where it repeats the same lookup.
    pub fn commit(&mut self) -> Result<CommitOutcome, SelectionError> {
        let Some((region, year, month)) = self.selection.keys() else {
            let stage = self.stage();
            warn!(%stage, "commit before selection is complete");
            return Err(SelectionError::PrematureCommit { stage });
        };

        let outcome = self.table.lookup(region, year, month)?;
        debug!(found = outcome.is_found(), "selection committed");
        self.committed = true;
        Ok(outcome)
    }

    /// Starts a new session against the same table.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.committed = false;
    }
}

fn rejected(field: Field, value: &str) -> SelectionError {
    warn!(%field, value, "selection rejected");
    SelectionError::InvalidSelection {
        field,
        value: value.to_string(),
    }
}
