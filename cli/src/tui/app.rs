use std::path::PathBuf;
use std::sync::Arc;

use energy_dash_core::{
    CommitOutcome, Field, Page, PageState, PredictionTable, RegionImages, SelectionNavigator,
    Stage,
};
use ratatui::widgets::ListState;
use tracing::warn;

const FIELDS: [Field; 3] = [Field::Region, Field::Year, Field::Month];

pub struct App {
    pub navigator: SelectionNavigator,
    pub images: RegionImages,
    pub presentation_url: Option<String>,
    pub page: PageState,
    pub focus: Field,
    /// Highlight position in each selection column, indexed like `FIELDS`.
    pub list_states: [ListState; 3],
    pub outcome: Option<CommitOutcome>,
    pub status: Option<String>,
}

fn field_index(field: Field) -> usize {
    match field {
        Field::Region => 0,
        Field::Year => 1,
        Field::Month => 2,
    }
}

impl App {
    pub fn new(table: Arc<PredictionTable>, images: RegionImages, presentation_url: Option<String>) -> App {
        let navigator = SelectionNavigator::new(table);
        let mut list_states: [ListState; 3] = Default::default();
        if !navigator.region_options().is_empty() {
            list_states[0].select(Some(0));
        }

        App {
            navigator,
            images,
            presentation_url,
            page: PageState::default(),
            focus: Field::Region,
            list_states,
            outcome: None,
            status: None,
        }
    }

    pub fn current_page(&self) -> Page {
        self.page.current
    }

    pub fn set_page(&mut self, name: &str) {
        self.page = self.page.set_page(name);
    }

    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.previous();
    }

    pub fn options(&self, field: Field) -> Vec<String> {
        let options = match field {
            Field::Region => self.navigator.region_options(),
            Field::Year => self.navigator.year_options(),
            Field::Month => self.navigator.month_options(),
        };
        options.into_iter().map(str::to_string).collect()
    }

    /// Value currently chosen for `field`, if any.
    pub fn chosen(&self, field: Field) -> Option<&str> {
        let selection = self.navigator.selection();
        match field {
            Field::Region => selection.region.as_deref(),
            Field::Year => selection.year.as_deref(),
            Field::Month => selection.month.as_deref(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.navigator.stage()
    }

    pub fn focus_next(&mut self) {
        let i = field_index(self.focus);
        if i < FIELDS.len() - 1 {
            self.focus = FIELDS[i + 1];
        }
    }

    pub fn focus_previous(&mut self) {
        let i = field_index(self.focus);
        if i > 0 {
            self.focus = FIELDS[i - 1];
        }
    }

    pub fn next(&mut self) {
        let len = self.options(self.focus).len();
        if len == 0 { return; }

        let state = &mut self.list_states[field_index(self.focus)];
        let i = match state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.options(self.focus).len();
        if len == 0 { return; }

        let state = &mut self.list_states[field_index(self.focus)];
        let i = match state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    /// Applies the highlighted value of the focused column and moves on to
    /// the next column.
    pub fn choose(&mut self) {
        let options = self.options(self.focus);
        let Some(value) = self.list_states[field_index(self.focus)]
            .selected()
            .and_then(|i| options.get(i))
        else {
            return;
        };

        let result = match self.focus {
            Field::Region => self.navigator.set_region(value),
            Field::Year => self.navigator.set_year(value),
            Field::Month => self.navigator.set_month(value),
        };

        match result {
            Ok(()) => {
                self.outcome = None;
                self.status = None;
                // Downstream columns now list different values.
                for field in FIELDS.iter().skip(field_index(self.focus) + 1) {
                    let has_options = !self.options(*field).is_empty();
                    self.list_states[field_index(*field)].select(has_options.then_some(0));
                }
                self.focus_next();
            }
            Err(e) => {
                warn!(error = %e, "selection refused");
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn predict(&mut self) {
        match self.navigator.commit() {
            Ok(outcome) => {
                self.outcome = Some(outcome);
                self.status = None;
            }
            Err(e) => {
                warn!(error = %e, "predict requested too early");
                self.status = Some("Select a region, a year and a month first.".to_string());
            }
        }
    }

    pub fn reset(&mut self) {
        self.navigator.reset();
        self.outcome = None;
        self.status = None;
        self.focus = Field::Region;
        let has_regions = !self.navigator.region_options().is_empty();
        self.list_states[0].select(has_regions.then_some(0));
        self.list_states[1].select(None);
        self.list_states[2].select(None);
    }

    /// Illustration for the chosen region, falling back to the default map.
    pub fn illustration(&self) -> Option<PathBuf> {
        self.chosen(Field::Region).map(|region| self.images.image_for(region))
    }
}
