// src/app/mod.rs
//! Application state for one dashboard session.
//!
//! [`AppState`] is the only mutable state in the program. The front ends
//! change it through the named operations below and re-render afterwards;
//! the visible list and the summary counters are recomputed on demand.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DashboardConfig;
use crate::entity::{DraftField, TrainDraft, TrainRecord};
use crate::error::{RailboardError, Result};
use crate::registry::{AddOutcome, TrainRegistry};
use crate::search::{SearchFilter, StatusFilter};
use crate::stats::{aggregates, Aggregates};

/// Navigation tabs. Selecting one does not change which trains are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Schedule,
    Live,
    Manage,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Schedule, Tab::Live, Tab::Manage];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Schedule => "Schedule",
            Tab::Live => "Live",
            Tab::Manage => "Manage",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tab::Schedule => write!(f, "schedule"),
            Tab::Live => write!(f, "live"),
            Tab::Manage => write!(f, "manage"),
        }
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "schedule" => Ok(Tab::Schedule),
            "live" => Ok(Tab::Live),
            "manage" => Ok(Tab::Manage),
            _ => Err(s.to_string()),
        }
    }
}

/// The add-train form: visibility plus the draft being edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub open: bool,
    pub draft: TrainDraft,
}

/// What happened when the form was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The train was appended and the form closed.
    Added(TrainRecord),
    /// A required field was empty. The form stays open with its contents.
    Ignored { missing: Vec<DraftField> },
    /// There was no open form to submit.
    FormClosed,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    registry: TrainRegistry,
    filter: SearchFilter,
    tab: Tab,
    form: FormState,
}

impl AppState {
    /// Fresh session over the seed trains.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session using the configured initial filter and tab.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let mut state = Self::new();
        state.filter.status = config.filter;
        state.tab = config.tab;
        state
    }

    pub fn registry(&self) -> &TrainRegistry {
        &self.registry
    }

    pub fn search_text(&self) -> &str {
        &self.filter.text
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.filter.status
    }

    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form.open
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.text = text.into();
        debug!(search = %self.filter.text, "Search text changed");
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter.status = filter;
        debug!(filter = %filter, "Status filter changed");
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        debug!(tab = %tab, "Tab selected");
    }

    pub fn open_add_form(&mut self) {
        self.form.open = true;
        debug!("Add train form opened");
    }

    /// Close the form. The draft is kept for the next time it opens.
    pub fn cancel_add_form(&mut self) {
        self.form.open = false;
        debug!("Add train form cancelled");
    }

    /// Update one draft field from raw input text.
    pub fn edit_draft(&mut self, field: DraftField, value: &str) -> Result<()> {
        self.form
            .draft
            .set_field(field, value)
            .map_err(RailboardError::InvalidStatus)?;
        debug!(field = %field, value, "Draft field updated");
        Ok(())
    }

    /// Try to add the drafted train.
    pub fn submit_add_form(&mut self) -> SubmitOutcome {
        if !self.form.open {
            return SubmitOutcome::FormClosed;
        }

        match self.registry.add(&self.form.draft) {
            AddOutcome::Added(record) => {
                self.form = FormState::default();
                SubmitOutcome::Added(record)
            }
            AddOutcome::Rejected { missing } => SubmitOutcome::Ignored { missing },
        }
    }

    /// Trains passing the current search text and status filter.
    pub fn visible_trains(&self) -> Vec<&TrainRecord> {
        self.filter.apply(self.registry.trains())
    }

    /// Counters over the whole registry, ignoring search and filter.
    pub fn aggregates(&self) -> Aggregates {
        aggregates(self.registry.trains())
    }
}
