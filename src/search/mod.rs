//! Search and status filtering over the registry.

use serde::{Deserialize, Serialize};

use crate::entity::{TrainRecord, TrainStatus};

/// Status filter buttons shown next to the search box.
///
/// Boarding and cancelled trains only show up under [`StatusFilter::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Delayed,
    #[serde(alias = "on_time")]
    OnTime,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Delayed,
        StatusFilter::OnTime,
    ];

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Delayed => "Delayed",
            StatusFilter::OnTime => "On Time",
        }
    }

    pub fn matches(&self, status: TrainStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Delayed => status == TrainStatus::Delayed,
            StatusFilter::OnTime => status == TrainStatus::OnTime,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Delayed => write!(f, "delayed"),
            StatusFilter::OnTime => write!(f, "ontime"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "all" => Ok(StatusFilter::All),
            "delayed" => Ok(StatusFilter::Delayed),
            "ontime" => Ok(StatusFilter::OnTime),
            _ => Err(s.to_string()),
        }
    }
}

/// Search text plus status filter, as entered in the toolbar.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    /// Free text matched against name, number, origin and destination
    pub text: String,
    /// Status button selection
    pub status: StatusFilter,
}

impl SearchFilter {
    /// Trains passing both predicates, in registry order.
    pub fn apply<'a>(&self, trains: &'a [TrainRecord]) -> Vec<&'a TrainRecord> {
        filter_trains(trains, &self.text, self.status)
    }
}

/// Case-insensitive substring match on name, number, from and to.
///
/// Empty search text matches every train.
pub fn matches_search(train: &TrainRecord, text: &str) -> bool {
    let needle = text.to_lowercase();
    [&train.name, &train.number, &train.from, &train.to]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Stable filter: visible trains keep their registry order.
pub fn filter_trains<'a>(
    trains: &'a [TrainRecord],
    text: &str,
    status: StatusFilter,
) -> Vec<&'a TrainRecord> {
    trains
        .iter()
        .filter(|train| matches_search(train, text) && status.matches(train.status))
        .collect()
}
