// src/registry/mod.rs
//! In-memory train registry.
//!
//! The registry owns every [`TrainRecord`] for the session. Records are only
//! ever appended; nothing is updated or removed once added.

mod seed;

pub use seed::seed;

use chrono::Utc;
use tracing::{debug, info};

use crate::entity::{DraftField, TrainDraft, TrainRecord, ValidDraft};

/// Result of trying to add a draft to the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The train was appended.
    Added(TrainRecord),
    /// Required fields were missing; the registry is unchanged.
    Rejected { missing: Vec<DraftField> },
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}

#[derive(Debug, Clone)]
pub struct TrainRegistry {
    trains: Vec<TrainRecord>,
    last_id: Option<i64>,
}

impl Default for TrainRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TrainRegistry {
    /// Registry holding the seed trains
    pub fn seeded() -> Self {
        Self::from_trains(seed())
    }

    pub fn from_trains(trains: Vec<TrainRecord>) -> Self {
        Self {
            trains,
            last_id: None,
        }
    }

    pub fn trains(&self) -> &[TrainRecord] {
        &self.trains
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainRecord> {
        self.trains.iter()
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TrainRecord> {
        self.trains.iter().find(|t| t.id == id)
    }

    /// Validate `draft` and append it.
    ///
    /// A draft missing any required field is ignored.
    pub fn add(&mut self, draft: &TrainDraft) -> AddOutcome {
        match draft.validate() {
            Ok(valid) => AddOutcome::Added(self.commit(valid).clone()),
            Err(missing) => {
                let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
                debug!(missing = ?names, "Ignoring train draft with missing required fields");
                AddOutcome::Rejected { missing }
            }
        }
    }

    /// Append an already validated draft and return the stored record.
    pub fn commit(&mut self, valid: ValidDraft) -> &TrainRecord {
        let id = self.next_id();
        let record = TrainRecord {
            id,
            number: valid.number,
            name: valid.name,
            status: valid.status,
            departure: valid.departure,
            arrival: valid.arrival,
            from: valid.from,
            to: valid.to,
            platform: valid.platform,
            capacity: valid.capacity,
            occupied: valid.occupied,
            delay: None,
        };
        info!(id = %record.id, number = %record.number, "Added train");
        self.trains.push(record);
        &self.trains[self.trains.len() - 1]
    }

    /// Millisecond timestamp id, bumped past the previous one when two adds
    /// land in the same millisecond.
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let id = match self.last_id {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_id = Some(id);
        id.to_string()
    }
}
